//! Live preview of the CV in the selected template.
//!
//! The markup comes from `common::preview`, which escapes every user value,
//! so it can be injected as is.

use common::model::CvData;
use common::preview::{project, TemplateKind, STYLESHEET};
use yew::prelude::*;

use crate::page_frame::PageFrame;

#[derive(Properties, PartialEq, Clone)]
pub struct CvPreviewProps {
    pub cv: CvData,
    pub template: TemplateKind,
}

pub struct CvPreview;

impl Component for CvPreview {
    type Message = ();
    type Properties = CvPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CvPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let markup = AttrValue::from(project(&props.cv, props.template).to_html());
        html! {
            <div class="cv-preview">
                <style>{STYLESHEET}</style>
                <PageFrame>
                    { Html::from_html_unchecked(markup) }
                </PageFrame>
            </div>
        }
    }
}
