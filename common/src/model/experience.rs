use serde::{Deserialize, Serialize};

use super::id::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ItemId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    /// Ongoing position: the end date is ignored for display.
    pub current: bool,
}

impl Experience {
    /// Blank entry with a freshly assigned identifier.
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            current: false,
        }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}
