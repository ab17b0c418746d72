use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::level::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: ItemId,
    pub name: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: ItemId,
    pub name: String,
    pub level: Level,
}

impl Skill {
    pub fn new() -> Self {
        Self::named("", Level::default())
    }

    pub fn named(name: impl Into<String>, level: Level) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            level,
        }
    }
}

impl Language {
    pub fn new() -> Self {
        Self::named("", Level::default())
    }

    pub fn named(name: impl Into<String>, level: Level) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            level,
        }
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new()
    }
}
