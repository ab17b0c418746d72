use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PageFrameProps {
    /// Screen scale of the page; printing always uses full size.
    #[prop_or(1.0)]
    pub scale: f64,
    pub children: Children,
}

/// A4 sheet on which the preview is laid out.
pub struct PageFrame;

impl Component for PageFrame {
    type Message = ();
    type Properties = PageFrameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageFrame
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "width: 210mm;
             min-height: 297mm;
             margin: auto;
             background: white;
             box-shadow: 0 0 8px #ccc;
             transform: scale({});
             transform-origin: top center;",
            props.scale
        );

        html! {
            <div class="page-frame" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
