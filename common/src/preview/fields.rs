//! Field rules shared by every template: which optional fields show, how a
//! photo falls back to initials, how periods and levels are drawn.

use crate::model::dates::format_period;
use crate::model::{CvData, Education, Experience, Language, Level, PersonalInfo, Skill};

use super::document::{Element, Node};
use super::policy::{Block, DescriptionStyle, LevelStyle, PeriodStyle, Policy};

/// Renders one block, or `None` when it has nothing to show.
pub fn block(block: Block, cv: &CvData, policy: &Policy) -> Option<Element> {
    let info = &cv.personal_info;
    let content = match block {
        Block::Photo => Some(vec![Node::from(photo(info))]),
        Block::Name => name(info, policy),
        Block::Title => non_empty(&info.title)
            .map(|t| vec![Node::from(Element::new("p").class("cv-title").text(t))]),
        Block::Contact => contact(info),
        Block::Details => details(info),
        Block::Summary => non_empty(&info.summary)
            .map(|s| vec![Node::from(Element::new("p").class("cv-summary").text(s))]),
        Block::Experience => entries(&cv.experiences, |e| experience(e, policy)),
        Block::Education => entries(&cv.education, |e| education(e, policy)),
        Block::Skills => entries(&cv.skills, |s| skill(s, policy)),
        Block::Languages => entries(&cv.languages, |l| language(l, policy)),
    }?;

    let mut section = Element::new("section")
        .class(format!("cv-block cv-{}", block.id()))
        .attr("data-section", block.id());
    if let Some(title) = policy.heading(block) {
        let mut heading = Element::new("h2").class("cv-heading");
        if let Some(icon) = policy.icon(block) {
            heading = heading.child(material_icon(icon));
        }
        section = section.child(heading.text(title));
    }
    Some(section.children(content))
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn entries<T>(items: &[T], render: impl Fn(&T) -> Element) -> Option<Vec<Node>> {
    if items.is_empty() {
        return None;
    }
    let list = Element::new("ul")
        .class("cv-entries")
        .children(items.iter().map(render));
    Some(vec![list.into()])
}

fn material_icon(name: &'static str) -> Element {
    Element::new("i").class("material-icons cv-icon").text(name)
}

/// The encoded photo, or an initials placeholder; a person glyph when there
/// are no initials either.
pub fn photo(info: &PersonalInfo) -> Element {
    if let Some(src) = info.photo.as_deref().filter(|p| !p.is_empty()) {
        return Element::new("img")
            .class("cv-photo")
            .attr("src", src)
            .attr("alt", info.full_name());
    }
    let initials = info.initials().to_uppercase();
    let placeholder = Element::new("div").class("cv-photo cv-initials");
    if initials.is_empty() {
        placeholder.child(material_icon("person"))
    } else {
        placeholder.text(initials)
    }
}

fn name(info: &PersonalInfo, policy: &Policy) -> Option<Vec<Node>> {
    if info.full_name().is_empty() {
        return None;
    }
    let heading = if policy.emphasize_last_name {
        Element::new("h1")
            .class("cv-name")
            .text(info.first_name.trim())
            .text(" ")
            .child(Element::new("span").class("cv-name-emphasis").text(info.last_name.trim()))
    } else {
        Element::new("h1").class("cv-name").text(info.full_name())
    };
    Some(vec![heading.into()])
}

fn contact(info: &PersonalInfo) -> Option<Vec<Node>> {
    let lines: Vec<Node> = [
        ("mail", &info.email),
        ("phone", &info.phone),
        ("place", &info.location),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        non_empty(value).map(|v| {
            Element::new("li")
                .class("cv-contact-line")
                .child(material_icon(icon))
                .child(Element::new("span").text(v))
                .into()
        })
    })
    .collect();
    if lines.is_empty() {
        return None;
    }
    Some(vec![Element::new("ul").class("cv-contact").children(lines).into()])
}

/// `http://` and `https://` URLs only; anything else is shown as text.
pub fn is_web_link(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn detail_row(label: &str, value: Node) -> Node {
    Element::new("p")
        .class("cv-detail")
        .child(Element::new("strong").text(label))
        .text(" ")
        .child(value)
        .into()
}

fn details(info: &PersonalInfo) -> Option<Vec<Node>> {
    let mut rows = Vec::new();
    if let Some(birth_date) = non_empty(&info.birth_date) {
        rows.push(detail_row("Date de naissance:", Node::text(birth_date)));
    }
    if let Some(gender) = info.gender {
        rows.push(detail_row("Sexe:", Node::text(gender.label())));
    }
    if let Some(status) = info.marital_status {
        rows.push(detail_row("État civil:", Node::text(status.label())));
    }
    if let Some(license) = non_empty(&info.driving_license) {
        rows.push(detail_row("Permis de conduire:", Node::text(license)));
    }
    if let Some(linkedin) = non_empty(&info.linkedin) {
        let value = if is_web_link(linkedin) {
            Element::new("a")
                .attr("href", linkedin)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(linkedin)
                .into()
        } else {
            Node::text(linkedin)
        };
        rows.push(detail_row("LinkedIn:", value));
    }
    if let Some(custom) = non_empty(&info.custom_field) {
        rows.push(detail_row("Autre:", Node::text(custom)));
    }
    (!rows.is_empty()).then_some(rows)
}

/// Period of an experience; a current position always ends with the
/// template's present label.
pub fn experience_period(experience: &Experience, present_label: &str) -> Option<String> {
    let end = if experience.current {
        present_label
    } else {
        experience.end_date.as_str()
    };
    format_period(&experience.start_date, end)
}

fn description(text: &str, style: DescriptionStyle) -> Option<Element> {
    let text = non_empty(text)?;
    Some(match style {
        DescriptionStyle::Paragraph => Element::new("p").class("cv-description").text(text),
        DescriptionStyle::Bullets => Element::new("ul").class("cv-description").children(
            text.lines()
                .filter_map(non_empty)
                .map(|line| Element::new("li").text(line)),
        ),
    })
}

fn period_tag(period: Option<String>) -> Option<Element> {
    period.map(|p| Element::new("span").class("cv-period").text(p))
}

fn experience(experience: &Experience, policy: &Policy) -> Element {
    let mut entry = Element::new("li").class("cv-entry");
    if let Some(position) = non_empty(&experience.position) {
        entry = entry.child(Element::new("h3").text(position));
    }
    if let Some(company) = non_empty(&experience.company) {
        entry = entry.child(Element::new("p").class("cv-org").text(company));
    }
    if let Some(period) = period_tag(experience_period(experience, policy.present_label)) {
        entry = entry.child(period);
    }
    if let Some(text) = description(&experience.description, policy.description_style) {
        entry = entry.child(text);
    }
    entry
}

fn education(education: &Education, policy: &Policy) -> Element {
    let mut entry = Element::new("li").class("cv-entry");
    let degree = match (non_empty(&education.degree), non_empty(&education.field)) {
        (Some(degree), Some(field)) => Some(format!("{} - {}", degree, field)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    };
    if let Some(degree) = degree {
        entry = entry.child(Element::new("h3").text(degree));
    }
    if let Some(institution) = non_empty(&education.institution) {
        entry = entry.child(Element::new("p").class("cv-org").text(institution));
    }
    let period = match policy.education_period {
        PeriodStyle::Range => format_period(&education.start_date, &education.end_date),
        PeriodStyle::StartOnly => non_empty(&education.start_date).map(str::to_string),
    };
    if let Some(period) = period_tag(period) {
        entry = entry.child(period);
    }
    if let Some(text) = description(&education.description, policy.description_style) {
        entry = entry.child(text);
    }
    entry
}

/// Five segments, the first `level` of them filled.
pub fn level_indicator(level: Level, style: LevelStyle) -> Element {
    let style_class = match style {
        LevelStyle::Dots => "cv-level cv-level-dots",
        LevelStyle::Bar => "cv-level cv-level-bar",
    };
    let filled = level.value();
    Element::new("span")
        .class(style_class)
        .attr("role", "img")
        .attr("aria-label", format!("{}/{}", filled, Level::MAX))
        .children((1..=Level::MAX).map(|i| {
            let class = if i <= filled {
                "cv-segment filled"
            } else {
                "cv-segment"
            };
            Element::new("span").class(class)
        }))
}

fn rated_entry(name: &str, level: Level, label: &str, policy: &Policy) -> Element {
    Element::new("li")
        .class("cv-rated")
        .attr("title", label)
        .child(Element::new("span").class("cv-rated-name").text(name.trim()))
        .child(level_indicator(level, policy.level_style))
}

fn skill(skill: &Skill, policy: &Policy) -> Element {
    rated_entry(&skill.name, skill.level, skill.level.skill_label(), policy)
}

fn language(language: &Language, policy: &Policy) -> Element {
    rated_entry(&language.name, language.level, language.level.language_label(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::policy::{PROFESSIONAL, TURQUOISE};

    fn filled_segments(element: &Element) -> usize {
        element
            .children
            .iter()
            .filter(|c| matches!(c, Node::Element(e) if e.has_class("filled")))
            .count()
    }

    #[test]
    fn level_indicator_fills_leading_segments() {
        let indicator = level_indicator(Level::new(3), LevelStyle::Bar);
        assert_eq!(indicator.children.len(), 5);
        assert_eq!(filled_segments(&indicator), 3);
        assert_eq!(indicator.get_attr("aria-label"), Some("3/5"));
    }

    #[test]
    fn current_experience_ignores_stored_end_date() {
        let mut exp = Experience::new();
        exp.start_date = "01/2020".into();
        exp.end_date = "12/2021".into();
        exp.current = true;
        assert_eq!(
            experience_period(&exp, TURQUOISE.present_label).as_deref(),
            Some("01/2020 - ce jour")
        );
        exp.current = false;
        assert_eq!(
            experience_period(&exp, PROFESSIONAL.present_label).as_deref(),
            Some("01/2020 - 12/2021")
        );
    }

    #[test]
    fn photo_falls_back_to_initials_then_glyph() {
        let mut info = PersonalInfo {
            first_name: "ada".into(),
            last_name: "lovelace".into(),
            ..PersonalInfo::default()
        };
        assert_eq!(Node::from(photo(&info)).text_content(), "AL");

        info.first_name.clear();
        info.last_name.clear();
        let glyph = photo(&info);
        assert!(glyph.has_class("cv-initials"));
        assert_eq!(Node::from(glyph).text_content(), "person");

        info.photo = Some("data:image/jpeg;base64,AAAA".into());
        let img = photo(&info);
        assert_eq!(img.tag, "img");
        assert_eq!(img.get_attr("src"), Some("data:image/jpeg;base64,AAAA"));
    }

    #[test]
    fn only_web_urls_become_links() {
        assert!(is_web_link("https://linkedin.com/in/ada"));
        assert!(is_web_link("HTTP://example.org"));
        assert!(!is_web_link("javascript:alert(1)"));
        assert!(!is_web_link("linkedin.com/in/ada"));
    }

    #[test]
    fn bullet_descriptions_skip_blank_lines() {
        let list = description("First\n\n  Second  \n", DescriptionStyle::Bullets).unwrap();
        assert_eq!(list.children.len(), 2);
        assert_eq!(Node::from(list).text_content(), "First Second");
    }
}
