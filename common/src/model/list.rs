//! Helpers building replacement sequences for whole-list updates.
//!
//! The editor never mutates a list in place: it builds the next sequence
//! with one of these functions and sends it as a `CvUpdate`.

use super::education::Education;
use super::experience::Experience;
use super::id::ItemId;
use super::skill::{Language, Skill};

pub trait HasId {
    fn id(&self) -> &ItemId;
}

macro_rules! impl_has_id {
    ($($ty:ty),*) => {
        $(impl HasId for $ty {
            fn id(&self) -> &ItemId {
                &self.id
            }
        })*
    };
}

impl_has_id!(Experience, Education, Skill, Language);

/// Copy of `items` with `item` added at the end.
pub fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Copy of `items` where the entry at `index` went through `edit`.
/// An out-of-range index yields an unchanged copy.
pub fn replaced_at<T: Clone>(items: &[T], index: usize, edit: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(item) = next.get_mut(index) {
        edit(item);
    }
    next
}

/// Copy of `items` without the entry carrying `id`.
pub fn removed<T: Clone + HasId>(items: &[T], id: &ItemId) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;

    #[test]
    fn remove_keeps_order_of_the_others() {
        let skills = vec![
            Skill::named("Rust", Level::new(5)),
            Skill::named("SQL", Level::new(3)),
            Skill::named("Go", Level::new(2)),
        ];
        let next = removed(&skills, &skills[1].id);
        let names: Vec<_> = next.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rust", "Go"]);
    }

    #[test]
    fn replace_edits_one_entry() {
        let experiences = vec![Experience::new(), Experience::new()];
        let next = replaced_at(&experiences, 1, |e| e.current = true);
        assert!(!next[0].current);
        assert!(next[1].current);
        assert_eq!(next[1].id, experiences[1].id);

        let unchanged = replaced_at(&experiences, 7, |e| e.current = true);
        assert_eq!(unchanged, experiences);
    }
}
