//! In-memory CV data model.
//!
//! `CvData` is the aggregate root. It is only ever changed through
//! `CvUpdate` values, each of which replaces one whole field.

pub mod cv;
pub mod dates;
pub mod education;
pub mod experience;
pub mod id;
pub mod level;
pub mod list;
pub mod personal_info;
pub mod skill;

pub use cv::{CvData, CvUpdate};
pub use education::Education;
pub use experience::Experience;
pub use id::ItemId;
pub use level::Level;
pub use personal_info::{Gender, MaritalStatus, PersonalField, PersonalInfo};
pub use skill::{Language, Skill};
