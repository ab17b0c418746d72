//! Domain core of the CV builder.
//!
//! Everything here is free of DOM access so it can be unit-tested on the host
//! and shared with the Yew frontend:
//! - `model`: the CV aggregate, its list entries and update operations.
//! - `photo`: upload validation, crop selection, the crop dialog session and
//!   the crop/encode pipeline.
//! - `preview`: projection of a CV onto one of the visual templates.
//! - `editor`: the state container owned by the top-level editor view.

pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod photo;
pub mod preview;
