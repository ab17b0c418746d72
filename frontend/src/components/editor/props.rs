//! Properties of the `CvEditor` component.

use common::preview::TemplateKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CvEditorProps {
    /// Template selected when the editor mounts, usually taken from the
    /// `?template=` query parameter. Only read once, in `create`.
    #[prop_or_default]
    pub initial_template: TemplateKind,
}
