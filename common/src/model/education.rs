use serde::{Deserialize, Serialize};

use super::id::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: ItemId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: ItemId::new(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Self::new()
    }
}
