use serde::{Deserialize, Serialize};

use super::education::Education;
use super::experience::Experience;
use super::level::Level;
use super::personal_info::{Gender, MaritalStatus, PersonalField, PersonalInfo};
use super::skill::{Language, Skill};

/// Aggregate root of a CV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
}

/// A partial update of `CvData`.
///
/// Personal fields are replaced one named field at a time; list fields are
/// replaced as a whole ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum CvUpdate {
    Personal(PersonalField),
    Experiences(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Languages(Vec<Language>),
}

impl CvData {
    pub fn apply(&mut self, update: CvUpdate) {
        match update {
            CvUpdate::Personal(field) => self.personal_info.set(field),
            CvUpdate::Experiences(items) => self.experiences = items,
            CvUpdate::Education(items) => self.education = items,
            CvUpdate::Skills(items) => self.skills = items,
            CvUpdate::Languages(items) => self.languages = items,
        }
    }

    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = CvUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    /// Filled-in CV used by the "load example" action.
    pub fn sample() -> Self {
        let personal_info = PersonalInfo {
            first_name: "Camille".into(),
            last_name: "Durand".into(),
            title: "Développeuse logiciel".into(),
            email: "camille.durand@example.com".into(),
            phone: "+33 6 12 34 56 78".into(),
            location: "Lyon, France".into(),
            summary: "Ingénieure logicielle avec six ans d'expérience dans les services web \
                      et les outils internes. Aime les systèmes simples et bien testés."
                .into(),
            photo: None,
            birth_date: "14/03/1992".into(),
            gender: Some(Gender::Female),
            marital_status: Some(MaritalStatus::Single),
            driving_license: "Permis B".into(),
            linkedin: "https://www.linkedin.com/in/camille-durand".into(),
            custom_field: String::new(),
        };

        let experiences = vec![
            Experience {
                company: "Atelier Numérique".into(),
                position: "Développeuse senior".into(),
                start_date: "09/2021".into(),
                description: "Conception de l'API de facturation\nMigration vers une architecture événementielle\nEncadrement de deux développeurs".into(),
                current: true,
                ..Experience::new()
            },
            Experience {
                company: "Studio Horizon".into(),
                position: "Développeuse".into(),
                start_date: "06/2018".into(),
                end_date: "08/2021".into(),
                description: "Développement d'applications web pour des clients du secteur culturel".into(),
                ..Experience::new()
            },
        ];

        let education = vec![Education {
            institution: "INSA Lyon".into(),
            degree: "Diplôme d'ingénieur".into(),
            field: "Informatique".into(),
            start_date: "09/2013".into(),
            end_date: "06/2018".into(),
            ..Education::new()
        }];

        let skills = vec![
            Skill::named("Rust", Level::new(4)),
            Skill::named("TypeScript", Level::new(5)),
            Skill::named("PostgreSQL", Level::new(3)),
        ];

        let languages = vec![
            Language::named("Français", Level::new(5)),
            Language::named("Anglais", Level::new(4)),
        ];

        Self {
            personal_info,
            experiences,
            education,
            skills,
            languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::appended;

    #[test]
    fn appending_a_skill_adds_one_entry_with_a_fresh_id() {
        let mut cv = CvData::sample();
        let existing = cv.skills.clone();
        let new_skill = Skill::new();

        cv.apply(CvUpdate::Skills(appended(&existing, new_skill.clone())));

        assert_eq!(cv.skills.len(), existing.len() + 1);
        assert_eq!(cv.skills.last(), Some(&new_skill));
        assert!(existing.iter().all(|s| s.id != new_skill.id));
    }

    #[test]
    fn personal_update_keeps_lists() {
        let mut cv = CvData::sample();
        let before = cv.clone();
        cv.apply(CvUpdate::Personal(PersonalField::Title("CTO".into())));

        assert_eq!(cv.personal_info.title, "CTO");
        assert_eq!(cv.personal_info.first_name, before.personal_info.first_name);
        assert_eq!(cv.experiences, before.experiences);
        assert_eq!(cv.skills, before.skills);
    }

    #[test]
    fn list_update_replaces_whole_sequence() {
        let mut cv = CvData::sample();
        cv.apply_all([
            CvUpdate::Education(Vec::new()),
            CvUpdate::Languages(vec![Language::named("Italien", Level::new(2))]),
        ]);
        assert!(cv.education.is_empty());
        assert_eq!(cv.languages.len(), 1);
        assert_eq!(cv.languages[0].name, "Italien");
    }

    #[test]
    fn new_entries_get_distinct_ids() {
        let a = Experience::new();
        let b = Experience::new();
        assert_ne!(a.id, b.id);
    }
}
