//! CV editor: root module wiring the Yew `Component` implementation with
//! its state, update, view and helper submodules.

use yew::prelude::*;

mod dialogs;
mod forms;
mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::CvEditorProps;
pub use state::CvEditor;

impl Component for CvEditor {
    type Message = Msg;
    type Properties = CvEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        CvEditor::new(ctx.props().initial_template)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
