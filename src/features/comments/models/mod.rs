mod comment;

pub use comment::{Comment, CommentAggregate, CommentImage, CommentRow, CommentTranslation};
