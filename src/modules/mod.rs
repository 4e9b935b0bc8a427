//! Infrastructure adapters used by the features.

pub mod storage;
