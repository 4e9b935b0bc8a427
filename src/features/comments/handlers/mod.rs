pub mod comment_handler;

pub use comment_handler::{__path_create_comment, create_comment};
