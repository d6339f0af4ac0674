use thiserror::Error;

/// Failures a generation attempt can surface. Neither case leaves a partial
/// recipe behind.
#[derive(Error, Debug)]
pub enum ChefError {
    #[error("Failed to generate recipe: {0}")] Generation(String),
    #[error("Recipe response was not valid JSON: {0}")] Malformed(String),
}
