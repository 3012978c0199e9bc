/// Semantic checks run after a config is parsed and before one is saved.
/// The error string is surfaced to the user as is.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
