use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::comments::dtos::{CommentResponseDto, UploadCommentDto};
use crate::features::comments::services::{CommentService, NewImage};
use crate::shared::constants::MAX_IMAGE_SIZE;
use crate::shared::types::ApiResponse;

/// Post a comment to a thread
///
/// Accepts multipart/form-data with:
/// - `content`: comment text in English or Russian (required)
/// - `image`: an image attachment (optional)
///
/// The response carries only the original language; the other one is added
/// in the background.
#[utoipa::path(
    post,
    path = "/api/threads/{id}/comments",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Thread id")
    ),
    request_body(
        content = UploadCommentDto,
        content_type = "multipart/form-data",
        description = "Comment text with an optional image",
    ),
    responses(
        (status = 201, description = "Comment created", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Missing content, or an image that is not an image, too large or badly named"),
        (status = 404, description = "Thread not found")
    )
)]
pub async fn create_comment(
    State(service): State<Arc<CommentService>>,
    Path(thread_id): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponseDto>>), AppError> {
    let mut content: Option<String> = None;
    let mut image: Option<NewImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "content" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read content field: {}", e))
                })?;
                content = Some(text);
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(|s| s.to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                // Empty file inputs are sent as a nameless part
                if file_name.is_empty() {
                    if !data.is_empty() {
                        debug!("Ignoring image part without a filename");
                    }
                    continue;
                }

                if let Some(ct) = content_type.as_deref() {
                    if !ct.starts_with("image/") {
                        return Err(AppError::BadRequest(format!(
                            "File type '{}' is not allowed, expected an image",
                            ct
                        )));
                    }
                }

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(AppError::BadRequest(format!(
                        "Image too large. Maximum size is {} MB",
                        MAX_IMAGE_SIZE / 1024 / 1024
                    )));
                }

                image = Some(NewImage {
                    filename: file_name,
                    data: data.to_vec(),
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let content = content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Comment content is required".to_string()))?;

    // The handle is dropped: the job outlives this request
    let created = service.create(&thread_id, content, image).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created.comment.into()),
            None,
            None,
        )),
    ))
}
