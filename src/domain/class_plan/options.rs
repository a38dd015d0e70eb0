//! Fixed option sets offered by the class options menus.

use std::fmt;

use crate::domain::AppError;

/// Grade band of the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassLevel {
    #[default]
    Elementary,
    MiddleSchool,
    HighSchool,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 3] =
        [ClassLevel::Elementary, ClassLevel::MiddleSchool, ClassLevel::HighSchool];

    pub fn label(self) -> &'static str {
        match self {
            ClassLevel::Elementary => "Elementary",
            ClassLevel::MiddleSchool => "Middle School",
            ClassLevel::HighSchool => "High School",
        }
    }

    pub fn from_label(value: &str) -> Result<Self, AppError> {
        find_by_label(&Self::ALL, value, Self::label).ok_or_else(|| AppError::InvalidOption {
            kind: "class level",
            value: value.to_string(),
            expected: expected_labels(&Self::ALL, Self::label),
        })
    }
}

/// Whether the class meets online or in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modality {
    #[default]
    Online,
    InPerson,
}

impl Modality {
    pub const ALL: [Modality; 2] = [Modality::Online, Modality::InPerson];

    pub fn label(self) -> &'static str {
        match self {
            Modality::Online => "Online",
            Modality::InPerson => "In-Person",
        }
    }

    pub fn from_label(value: &str) -> Result<Self, AppError> {
        find_by_label(&Self::ALL, value, Self::label).ok_or_else(|| AppError::InvalidOption {
            kind: "modality",
            value: value.to_string(),
            expected: expected_labels(&Self::ALL, Self::label),
        })
    }
}

/// What the class session is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Purpose {
    #[default]
    Intro,
    Review,
    Evaluation,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::Intro, Purpose::Review, Purpose::Evaluation];

    pub fn label(self) -> &'static str {
        match self {
            Purpose::Intro => "Intro",
            Purpose::Review => "Review",
            Purpose::Evaluation => "Evaluation",
        }
    }

    pub fn from_label(value: &str) -> Result<Self, AppError> {
        find_by_label(&Self::ALL, value, Self::label).ok_or_else(|| AppError::InvalidOption {
            kind: "purpose",
            value: value.to_string(),
            expected: expected_labels(&Self::ALL, Self::label),
        })
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Matches either the display label or its kebab-case form, ignoring case.
fn find_by_label<T: Copy>(all: &[T], value: &str, label: fn(T) -> &'static str) -> Option<T> {
    let wanted = value.trim();
    all.iter().copied().find(|option| {
        let label = label(*option);
        label.eq_ignore_ascii_case(wanted) || kebab(label).eq_ignore_ascii_case(wanted)
    })
}

fn kebab(label: &str) -> String {
    label.replace(' ', "-").to_ascii_lowercase()
}

fn expected_labels<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> String {
    all.iter().map(|option| label(*option)).collect::<Vec<_>>().join(", ")
}
