mod comment_dto;

pub use comment_dto::{CommentResponseDto, LocalizedCommentDto, UploadCommentDto};
