pub mod editor;
pub mod preview;
pub mod section_card;
