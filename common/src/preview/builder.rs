use crate::model::CvData;

use super::TemplateKind;
use super::document::{Document, Element};
use super::fields;
use super::policy::{Block, CREATIVE, MODERN, PROFESSIONAL, Policy, TURQUOISE};

/// Lays a CV out according to a presentation policy.
///
/// Implementors only choose their policy; `build` is shared so that field
/// rules cannot drift between templates.
pub trait DocumentBuilder {
    fn policy(&self) -> &'static Policy;

    fn build(&self, cv: &CvData) -> Document {
        let policy = self.policy();
        let kind = policy.kind;

        let mut root = Element::new("article")
            .class(format!("cv cv-{}", kind.as_str()))
            .attr("data-template", kind.as_str())
            .style(policy.css_variables());

        if let Some(header) = region("header", "cv-header", policy.header, cv, policy) {
            root = root.child(header);
        }

        let sidebar = region("aside", "cv-sidebar", policy.sidebar, cv, policy);
        let main = region("main", "cv-main", policy.main, cv, policy);
        let body_class = if sidebar.is_some() {
            "cv-body with-sidebar"
        } else {
            "cv-body"
        };
        root = root.child(
            Element::new("div")
                .class(body_class)
                .children(sidebar.into_iter().chain(main)),
        );

        Document {
            template: kind,
            root: root.into(),
        }
    }
}

fn region(
    tag: &'static str,
    class: &'static str,
    blocks: &[Block],
    cv: &CvData,
    policy: &Policy,
) -> Option<Element> {
    if blocks.is_empty() {
        return None;
    }
    let rendered: Vec<Element> = blocks
        .iter()
        .filter_map(|block| fields::block(*block, cv, policy))
        .collect();
    Some(Element::new(tag).class(class).children(rendered))
}

pub struct ProfessionalBuilder;
pub struct ModernBuilder;
pub struct CreativeBuilder;
pub struct TurquoiseBuilder;

impl DocumentBuilder for ProfessionalBuilder {
    fn policy(&self) -> &'static Policy {
        &PROFESSIONAL
    }
}

impl DocumentBuilder for ModernBuilder {
    fn policy(&self) -> &'static Policy {
        &MODERN
    }
}

impl DocumentBuilder for CreativeBuilder {
    fn policy(&self) -> &'static Policy {
        &CREATIVE
    }
}

impl DocumentBuilder for TurquoiseBuilder {
    fn policy(&self) -> &'static Policy {
        &TURQUOISE
    }
}

pub fn builder_for(kind: TemplateKind) -> &'static dyn DocumentBuilder {
    match kind {
        TemplateKind::Professional => &ProfessionalBuilder,
        TemplateKind::Modern => &ModernBuilder,
        TemplateKind::Creative => &CreativeBuilder,
        TemplateKind::Turquoise => &TurquoiseBuilder,
    }
}
