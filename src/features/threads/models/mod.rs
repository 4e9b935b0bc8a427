mod thread;

pub use thread::{CreateThread, Thread};
