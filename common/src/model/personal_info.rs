use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Value used by form controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Homme",
            Gender::Female => "Femme",
        }
    }

    /// Parses a form value. Empty and unrecognized values both mean "not set".
    pub fn parse_optional(value: &str) -> Option<Self> {
        parse_optional(value)
    }
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 4] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Célibataire",
            MaritalStatus::Married => "Marié(e)",
            MaritalStatus::Divorced => "Divorcé(e)",
            MaritalStatus::Widowed => "Veuf/Veuve",
        }
    }

    pub fn parse_optional(value: &str) -> Option<Self> {
        parse_optional(value)
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown gender '{}'", s))
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaritalStatus::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown marital status '{}'", s))
    }
}

fn parse_optional<T: FromStr<Err = String>>(value: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("{}, field left unset", e);
            None
        }
    }
}

/// Identity and contact block of the CV. Exactly one per CV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    /// Fully encoded photo as a data URI, never a half-applied crop.
    pub photo: Option<String>,
    pub birth_date: String,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub driving_license: String,
    pub linkedin: String,
    pub custom_field: String,
}

/// One named field of `PersonalInfo` together with its replacement value.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonalField {
    FirstName(String),
    LastName(String),
    Title(String),
    Email(String),
    Phone(String),
    Location(String),
    Summary(String),
    Photo(Option<String>),
    BirthDate(String),
    Gender(Option<Gender>),
    MaritalStatus(Option<MaritalStatus>),
    DrivingLicense(String),
    Linkedin(String),
    CustomField(String),
}

impl PersonalInfo {
    pub fn set(&mut self, field: PersonalField) {
        match field {
            PersonalField::FirstName(v) => self.first_name = v,
            PersonalField::LastName(v) => self.last_name = v,
            PersonalField::Title(v) => self.title = v,
            PersonalField::Email(v) => self.email = v,
            PersonalField::Phone(v) => self.phone = v,
            PersonalField::Location(v) => self.location = v,
            PersonalField::Summary(v) => self.summary = v,
            PersonalField::Photo(v) => self.photo = v,
            PersonalField::BirthDate(v) => self.birth_date = v,
            PersonalField::Gender(v) => self.gender = v,
            PersonalField::MaritalStatus(v) => self.marital_status = v,
            PersonalField::DrivingLicense(v) => self.driving_license = v,
            PersonalField::Linkedin(v) => self.linkedin = v,
            PersonalField::CustomField(v) => self.custom_field = v,
        }
    }

    /// First character of the first and last name, used when no photo is set.
    pub fn initials(&self) -> String {
        self.first_name
            .trim()
            .chars()
            .take(1)
            .chain(self.last_name.trim().chars().take(1))
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_values() {
        assert_eq!(Gender::parse_optional("female"), Some(Gender::Female));
        assert_eq!(
            MaritalStatus::parse_optional("widowed"),
            Some(MaritalStatus::Widowed)
        );
    }

    #[test]
    fn unknown_enum_values_are_left_unset() {
        assert_eq!(Gender::parse_optional("other"), None);
        assert_eq!(MaritalStatus::parse_optional("pacsé"), None);
        assert_eq!(Gender::parse_optional(""), None);
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut info = PersonalInfo {
            first_name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        info.set(PersonalField::Email("ada@lovelace.dev".into()));
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.email, "ada@lovelace.dev");
    }

    #[test]
    fn initials_use_first_characters() {
        let info = PersonalInfo {
            first_name: "élodie".into(),
            last_name: " Martin".into(),
            ..Default::default()
        };
        assert_eq!(info.initials(), "éM");
        assert_eq!(PersonalInfo::default().initials(), "");
    }
}
