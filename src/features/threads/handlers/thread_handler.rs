use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RequestLanguage};
use crate::features::categories::Category;
use crate::features::comments::dtos::LocalizedCommentDto;
use crate::features::threads::dtos::{
    CreateThreadDto, ListThreadsQuery, LocalizedThreadDto, ThreadResponseDto,
};
use crate::features::threads::models::CreateThread;
use crate::features::threads::services::ThreadService;
use crate::shared::types::{ApiResponse, Meta};

/// List threads
#[utoipa::path(
    get,
    path = "/api/threads",
    params(ListThreadsQuery),
    responses(
        (status = 200, description = "Threads in insertion order", body = ApiResponse<Vec<LocalizedThreadDto>>),
        (status = 400, description = "Unknown category")
    ),
    tag = "threads"
)]
pub async fn list_threads(
    State(service): State<Arc<ThreadService>>,
    RequestLanguage(lang): RequestLanguage,
    Query(query): Query<ListThreadsQuery>,
) -> Result<Json<ApiResponse<Vec<LocalizedThreadDto>>>> {
    let category = query.category_filter().map_err(AppError::BadRequest)?;

    let threads = service.list(category).await?;
    let dtos: Vec<LocalizedThreadDto> = threads
        .into_iter()
        .map(|t| LocalizedThreadDto::new(t, Vec::new(), lang))
        .collect();
    let total = dtos.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get a thread with its comments in the requested language
#[utoipa::path(
    get,
    path = "/api/threads/{id}",
    params(
        ("id" = String, Path, description = "Thread id"),
        ("lang" = Option<String>, Query, description = "Response language: en or ru")
    ),
    responses(
        (status = 200, description = "Thread with localized comments", body = ApiResponse<LocalizedThreadDto>),
        (status = 404, description = "Thread not found")
    ),
    tag = "threads"
)]
pub async fn get_thread(
    State(service): State<Arc<ThreadService>>,
    RequestLanguage(lang): RequestLanguage,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<LocalizedThreadDto>>> {
    let (thread, comments) = service.get_with_comments(&id).await?;

    let comments = comments
        .iter()
        .map(|c| LocalizedCommentDto::localized(c, lang))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(LocalizedThreadDto::new(thread, comments, lang)),
        None,
        None,
    )))
}

/// Create a thread
#[utoipa::path(
    post,
    path = "/api/threads",
    request_body = CreateThreadDto,
    responses(
        (status = 201, description = "Thread created", body = ApiResponse<ThreadResponseDto>),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "threads"
)]
pub async fn create_thread(
    State(service): State<Arc<ThreadService>>,
    AppJson(dto): AppJson<CreateThreadDto>,
) -> Result<(StatusCode, Json<ApiResponse<ThreadResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = match dto.category.as_deref().map(str::trim) {
        None | Some("") => Category::default(),
        Some(value) => value.parse().map_err(AppError::BadRequest)?,
    };

    let thread = service
        .create(CreateThread {
            title: dto.title,
            content: dto.content,
            category,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(thread.into()), None, None)),
    ))
}
