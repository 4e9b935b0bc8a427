use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::shared::language::Language;

/// Closed set of thread categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Help,
    Discussion,
    Announcement,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Help,
        Category::Discussion,
        Category::Announcement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Help => "help",
            Category::Discussion => "discussion",
            Category::Announcement => "announcement",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Category::General, Language::En) => "General",
            (Category::Help, Language::En) => "Help",
            (Category::Discussion, Language::En) => "Discussion",
            (Category::Announcement, Language::En) => "Announcement",
            (Category::General, Language::Ru) => "Общее",
            (Category::Help, Language::Ru) => "Помощь",
            (Category::Discussion, Language::Ru) => "Обсуждение",
            (Category::Announcement, Language::Ru) => "Объявление",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Allowed: {}",
                    s,
                    Category::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}
