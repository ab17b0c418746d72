use crate::components::editor::CvEditor;
use common::preview::TemplateKind;
use web_sys::UrlSearchParams;
use yew::{html, Component, Context, Html};

pub struct App {
    initial_template: TemplateKind,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            initial_template: template_from_query(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <CvEditor initial_template={self.initial_template} />
            </div>
        }
    }
}

/// Reads `?template=<name>` from the page URL.
fn template_from_query() -> TemplateKind {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("template"))
        .map(|name| TemplateKind::from_selector(&name))
        .unwrap_or_default()
}
