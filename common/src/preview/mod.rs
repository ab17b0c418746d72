//! Projection of a CV onto a visual template.
//!
//! `project` is pure: the same CV and template always give the same
//! `Document`, and the CV is never touched.

pub mod builder;
pub mod document;
pub mod fields;
pub mod policy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::CvData;

pub use builder::{DocumentBuilder, builder_for};
pub use document::{Document, Element, Node, escape_html};
pub use policy::Policy;

/// Stylesheet for every template, print rules included.
pub const STYLESHEET: &str = include_str!("templates.css");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Professional,
    Modern,
    Creative,
    Turquoise,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Professional,
        TemplateKind::Modern,
        TemplateKind::Creative,
        TemplateKind::Turquoise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Professional => "professional",
            TemplateKind::Modern => "modern",
            TemplateKind::Creative => "creative",
            TemplateKind::Turquoise => "turquoise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Professional => "Professionnel",
            TemplateKind::Modern => "Moderne",
            TemplateKind::Creative => "Créatif",
            TemplateKind::Turquoise => "Turquoise",
        }
    }

    /// Lenient lookup used for selector values coming from the page: an
    /// unknown name selects the professional layout.
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_else(|_| {
            log::warn!("unknown template {:?}, using professional", selector);
            TemplateKind::Professional
        })
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown template: {}", value))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn project(cv: &CvData, template: TemplateKind) -> Document {
    builder_for(template).build(cv)
}

/// A complete HTML page holding the rendered CV, for export and printing.
pub fn render_standalone(cv: &CvData, template: TemplateKind) -> String {
    let document = project(cv, template);
    let title = match cv.personal_info.full_name() {
        name if name.is_empty() => "CV".to_string(),
        name => format!("CV - {}", name),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/icon?family=Material+Icons\">\n\
         <style>\n{}\n</style>\n</head>\n<body class=\"cv-standalone\">\n{}\n</body>\n</html>\n",
        escape_html(&title),
        STYLESHEET,
        document.to_html()
    )
}
