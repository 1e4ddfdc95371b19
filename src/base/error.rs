/// Violations of the input contract. Data that is merely suspicious is logged
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("expense has no category: {0}")]
    MissingCategory(String),
    #[error("expense has no parent category: {0}")]
    MissingParentCategory(String),
}
