//! Runtime state of the CV editor.
//!
//! The CV itself, the template and the crop session live in
//! `common::editor::EditorState`; this struct adds what only the view needs:
//! the active tab, DOM refs and the pointer position of a running drag.

use common::editor::EditorState;
use common::preview::TemplateKind;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Personal,
    Experience,
    Education,
    Languages,
    Skills,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Personal,
        Tab::Experience,
        Tab::Education,
        Tab::Languages,
        Tab::Skills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Personal => "Personnel",
            Tab::Experience => "Expérience",
            Tab::Education => "Formation",
            Tab::Languages => "Langues",
            Tab::Skills => "Compétences",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Personal => "person",
            Tab::Experience => "work",
            Tab::Education => "school",
            Tab::Languages => "translate",
            Tab::Skills => "military_tech",
        }
    }
}

pub struct CvEditor {
    pub editor: EditorState,

    pub active_tab: Tab,

    /// Whether the optional personal fields (birth date, gender...) are shown.
    pub show_optional_fields: bool,

    /// Hidden `<input type="file">` opened by the photo button.
    pub file_input_ref: NodeRef,

    /// The `<img>` inside the crop dialog, measured once it has loaded.
    pub crop_image_ref: NodeRef,

    /// Last pointer position while the selection is being dragged.
    pub drag_origin: Option<(f64, f64)>,
}

impl CvEditor {
    pub fn new(template: TemplateKind) -> Self {
        Self {
            editor: EditorState::new(template),
            active_tab: Tab::Personal,
            show_optional_fields: false,
            file_input_ref: Default::default(),
            crop_image_ref: Default::default(),
            drag_origin: None,
        }
    }

    /// Clears the file input so that picking the same file again fires
    /// `change`.
    pub fn reset_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
