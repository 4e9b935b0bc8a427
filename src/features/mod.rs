pub mod categories;
pub mod comments;
pub mod threads;
pub mod translations;
