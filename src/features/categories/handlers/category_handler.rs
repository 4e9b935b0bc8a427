use axum::Json;

use crate::core::extractor::RequestLanguage;
use crate::features::categories::dtos::CategoryOptionDto;
use crate::shared::types::{ApiResponse, Meta};

/// List thread categories
///
/// Labels follow the request language (`lang` query, then `Accept-Language`).
#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("lang" = Option<String>, Query, description = "Response language: en or ru")
    ),
    responses(
        (status = 200, description = "Localized category list", body = ApiResponse<Vec<CategoryOptionDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    RequestLanguage(lang): RequestLanguage,
) -> Json<ApiResponse<Vec<CategoryOptionDto>>> {
    let categories = CategoryOptionDto::all(lang);
    let total = categories.len() as i64;
    Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    ))
}
