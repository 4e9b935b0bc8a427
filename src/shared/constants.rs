/// Maximum accepted size of a comment image (10 MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Slack on top of `MAX_IMAGE_SIZE` for the rest of the multipart body
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Maximum thread title length in characters
pub const MAX_TITLE_LENGTH: u64 = 200;
