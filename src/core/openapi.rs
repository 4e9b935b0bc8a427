use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::threads::{dtos as threads_dtos, handlers as threads_handlers};
use crate::features::categories::Category;
use crate::shared::language::Language;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Threads
        threads_handlers::list_threads,
        threads_handlers::get_thread,
        threads_handlers::create_thread,
        // Comments
        comments_handlers::create_comment,
        // Categories
        categories_handlers::list_categories,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Language,
            Category,
            // Threads
            threads_dtos::CreateThreadDto,
            threads_dtos::ThreadResponseDto,
            threads_dtos::LocalizedThreadDto,
            ApiResponse<threads_dtos::ThreadResponseDto>,
            ApiResponse<threads_dtos::LocalizedThreadDto>,
            ApiResponse<Vec<threads_dtos::LocalizedThreadDto>>,
            // Comments
            comments_dtos::UploadCommentDto,
            comments_dtos::CommentResponseDto,
            comments_dtos::LocalizedCommentDto,
            ApiResponse<comments_dtos::CommentResponseDto>,
            // Categories
            categories_dtos::CategoryOptionDto,
            ApiResponse<Vec<categories_dtos::CategoryOptionDto>>,
        )
    ),
    tags(
        (name = "threads", description = "Discussion threads"),
        (name = "comments", description = "Comments with background EN/RU translation"),
        (name = "categories", description = "Thread categories"),
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_forum_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/threads",
            "/api/threads/{id}",
            "/api/threads/{id}/comments",
            "/api/categories",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_comment_upload_documents_rejections_as_bad_request() {
        let doc = ApiDoc::openapi();
        let post = doc.paths.paths["/api/threads/{id}/comments"]
            .post
            .as_ref()
            .unwrap();

        let codes: Vec<&str> = post.responses.responses.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["201", "400", "404"]);
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Forum".to_string(),
            version: "9.9.9".to_string(),
            description: "docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Forum");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("docs"));
    }
}
