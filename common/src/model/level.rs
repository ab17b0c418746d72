use serde::{Deserialize, Serialize};

/// Proficiency on a 1..=5 scale, shared by skills and languages.
///
/// Construction clamps, so an out-of-range value coming from a form or from
/// deserialized data can never reach the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Level(u8);

pub const SKILL_LEVEL_LABELS: [&str; 5] =
    ["Beginner", "Elementary", "Intermediate", "Advanced", "Expert"];

pub const LANGUAGE_LEVEL_LABELS: [&str; 5] =
    ["Basic", "Conversational", "Intermediate", "Fluent", "Native"];

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN as i64, Self::MAX as i64) as u8;
        if clamped as i64 != value {
            log::warn!("level {} out of range, clamped to {}", value, clamped);
        }
        Self(clamped)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every possible level, lowest first. Used to fill level pickers.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }

    pub fn skill_label(self) -> &'static str {
        SKILL_LEVEL_LABELS[(self.0 - 1) as usize]
    }

    pub fn language_label(self) -> &'static str {
        LANGUAGE_LEVEL_LABELS[(self.0 - 1) as usize]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(3)
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Level::new(0).value(), 1);
        assert_eq!(Level::new(-4).value(), 1);
        assert_eq!(Level::new(9).value(), 5);
        assert_eq!(Level::new(4).value(), 4);
    }

    #[test]
    fn labels_follow_the_scale() {
        assert_eq!(Level::new(1).skill_label(), "Beginner");
        assert_eq!(Level::new(5).skill_label(), "Expert");
        assert_eq!(Level::new(2).language_label(), "Conversational");
        assert_eq!(Level::new(5).language_label(), "Native");
    }

    #[test]
    fn default_is_intermediate() {
        assert_eq!(Level::default().value(), 3);
        assert_eq!(Level::all().count(), 5);
    }
}
