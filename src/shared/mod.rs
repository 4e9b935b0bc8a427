pub mod constants;
pub mod ids;
pub mod language;
pub mod prompts;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
