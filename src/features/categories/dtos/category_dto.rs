use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::shared::language::Language;

/// One entry of the category picker, labelled in the request language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryOptionDto {
    pub value: Category,
    pub label: String,
}

impl CategoryOptionDto {
    pub fn localized(category: Category, lang: Language) -> Self {
        Self {
            value: category,
            label: category.label(lang).to_string(),
        }
    }

    /// All categories in display order
    pub fn all(lang: Language) -> Vec<Self> {
        Category::ALL
            .into_iter()
            .map(|c| Self::localized(c, lang))
            .collect()
    }
}
