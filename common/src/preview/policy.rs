//! Presentation policy of each template.
//!
//! Everything that differs between templates lives in these four tables.
//! The shared builder walks them; no template has rendering code of its own.

use super::TemplateKind;

/// A unit of content that a template places in one of its regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Photo,
    Name,
    Title,
    Contact,
    Details,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
}

impl Block {
    /// Identifier written to `data-section`.
    pub fn id(self) -> &'static str {
        match self {
            Block::Photo => "photo",
            Block::Name => "name",
            Block::Title => "title",
            Block::Contact => "contact",
            Block::Details => "details",
            Block::Summary => "summary",
            Block::Experience => "experience",
            Block::Education => "education",
            Block::Skills => "skills",
            Block::Languages => "languages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStyle {
    /// Five round markers.
    Dots,
    /// Five adjoining bar segments.
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStyle {
    Paragraph,
    /// One bullet per non-blank line.
    Bullets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodStyle {
    Range,
    StartOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headings {
    pub contact: &'static str,
    pub details: &'static str,
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: &'static str,
    /// Second gradient stop; equal to `accent` for flat templates.
    pub accent_end: &'static str,
    pub sidebar_background: &'static str,
    pub sidebar_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub kind: TemplateKind,
    pub header: &'static [Block],
    pub sidebar: &'static [Block],
    pub main: &'static [Block],
    pub headings: Headings,
    pub present_label: &'static str,
    pub level_style: LevelStyle,
    pub description_style: DescriptionStyle,
    pub education_period: PeriodStyle,
    /// Wraps the last name in its own highlighted span.
    pub emphasize_last_name: bool,
    /// Material icon names shown next to section headings.
    pub section_icons: bool,
    pub palette: Palette,
}

impl Policy {
    pub fn for_kind(kind: TemplateKind) -> &'static Policy {
        match kind {
            TemplateKind::Professional => &PROFESSIONAL,
            TemplateKind::Modern => &MODERN,
            TemplateKind::Creative => &CREATIVE,
            TemplateKind::Turquoise => &TURQUOISE,
        }
    }

    pub fn heading(&self, block: Block) -> Option<&'static str> {
        let h = &self.headings;
        match block {
            Block::Contact => Some(h.contact),
            Block::Details => Some(h.details),
            Block::Summary => Some(h.summary),
            Block::Experience => Some(h.experience),
            Block::Education => Some(h.education),
            Block::Skills => Some(h.skills),
            Block::Languages => Some(h.languages),
            Block::Photo | Block::Name | Block::Title => None,
        }
    }

    pub fn icon(&self, block: Block) -> Option<&'static str> {
        if !self.section_icons {
            return None;
        }
        match block {
            Block::Summary => Some("person"),
            Block::Experience => Some("work"),
            Block::Education => Some("menu_book"),
            Block::Skills => Some("military_tech"),
            Block::Languages => Some("translate"),
            Block::Details => Some("badge"),
            _ => None,
        }
    }

    /// Inline custom properties consumed by the stylesheet.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        format!(
            "--cv-accent: {}; --cv-accent-end: {}; --cv-sidebar-bg: {}; --cv-sidebar-fg: {};",
            p.accent, p.accent_end, p.sidebar_background, p.sidebar_text
        )
    }
}

const ENGLISH_HEADINGS: Headings = Headings {
    contact: "Contact",
    details: "Details",
    summary: "Summary",
    experience: "Experience",
    education: "Education",
    skills: "Skills",
    languages: "Languages",
};

pub static PROFESSIONAL: Policy = Policy {
    kind: TemplateKind::Professional,
    header: &[Block::Photo, Block::Name, Block::Title, Block::Contact, Block::Details],
    sidebar: &[],
    main: &[
        Block::Summary,
        Block::Experience,
        Block::Education,
        Block::Skills,
        Block::Languages,
    ],
    headings: ENGLISH_HEADINGS,
    present_label: "Present",
    level_style: LevelStyle::Dots,
    description_style: DescriptionStyle::Paragraph,
    education_period: PeriodStyle::Range,
    emphasize_last_name: false,
    section_icons: true,
    palette: Palette {
        accent: "#3b82f6",
        accent_end: "#3b82f6",
        sidebar_background: "#ffffff",
        sidebar_text: "#1f2937",
    },
};

pub static MODERN: Policy = Policy {
    kind: TemplateKind::Modern,
    header: &[],
    sidebar: &[
        Block::Photo,
        Block::Contact,
        Block::Skills,
        Block::Languages,
        Block::Details,
    ],
    main: &[
        Block::Name,
        Block::Title,
        Block::Summary,
        Block::Experience,
        Block::Education,
    ],
    headings: Headings {
        summary: "About",
        experience: "Work Experience",
        ..ENGLISH_HEADINGS
    },
    present_label: "Present",
    level_style: LevelStyle::Dots,
    description_style: DescriptionStyle::Paragraph,
    education_period: PeriodStyle::Range,
    emphasize_last_name: true,
    section_icons: false,
    palette: Palette {
        accent: "#facc15",
        accent_end: "#facc15",
        sidebar_background: "#1f2937",
        sidebar_text: "#f9fafb",
    },
};

pub static CREATIVE: Policy = Policy {
    kind: TemplateKind::Creative,
    header: &[Block::Photo, Block::Name, Block::Title, Block::Contact],
    sidebar: &[Block::Skills, Block::Languages, Block::Education],
    main: &[Block::Summary, Block::Experience, Block::Details],
    headings: Headings {
        summary: "Profile",
        ..ENGLISH_HEADINGS
    },
    present_label: "Present",
    level_style: LevelStyle::Bar,
    description_style: DescriptionStyle::Paragraph,
    education_period: PeriodStyle::Range,
    emphasize_last_name: false,
    section_icons: false,
    palette: Palette {
        accent: "#3b82f6",
        accent_end: "#9333ea",
        sidebar_background: "#f3e8ff",
        sidebar_text: "#1f2937",
    },
};

pub static TURQUOISE: Policy = Policy {
    kind: TemplateKind::Turquoise,
    header: &[],
    sidebar: &[
        Block::Photo,
        Block::Name,
        Block::Title,
        Block::Contact,
        Block::Details,
        Block::Skills,
        Block::Languages,
    ],
    main: &[Block::Summary, Block::Experience, Block::Education],
    headings: Headings {
        contact: "Informations personnelles",
        details: "Détails",
        summary: "Profil",
        experience: "Expérience professionnelle",
        education: "Formation",
        skills: "Compétences",
        languages: "Langues",
    },
    present_label: "ce jour",
    level_style: LevelStyle::Bar,
    description_style: DescriptionStyle::Bullets,
    education_period: PeriodStyle::StartOnly,
    emphasize_last_name: false,
    section_icons: false,
    palette: Palette {
        accent: "#20B2AA",
        accent_end: "#20B2AA",
        sidebar_background: "#20B2AA",
        sidebar_text: "#ffffff",
    },
};
