use uuid::Uuid;
use yew::{html, AttrValue, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SectionCardProps {
    pub title: AttrValue,
    /// Material icon name shown before the title.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or(true)]
    pub open: bool,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Toggle,
}

/// Collapsible card grouping one part of the form.
pub struct SectionCard {
    pub id: String,
    pub open: bool,
}

impl Component for SectionCard {
    type Message = Msg;
    type Properties = SectionCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            id: format!("section-{}", Uuid::new_v4()),
            open: ctx.props().open,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.open = !self.open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let chevron = if self.open { "expand_less" } else { "expand_more" };
        html! {
            <div class="section-card">
                <button
                    class="section-card-header"
                    aria-expanded={self.open.to_string()}
                    aria-controls={self.id.clone()}
                    onclick={ctx.link().callback(|_| Msg::Toggle)}
                >
                    {
                        if let Some(icon) = &props.icon {
                            html! { <i class="material-icons">{icon.clone()}</i> }
                        } else {
                            html! {}
                        }
                    }
                    <span class="section-card-title">{props.title.clone()}</span>
                    <i class="material-icons">{chevron}</i>
                </button>
                if self.open {
                    <div class="section-card-body" id={self.id.clone()}>
                        { for props.children.iter() }
                    </div>
                }
            </div>
        }
    }
}
