mod articles;
mod categories;

pub use articles::*;
pub use categories::*;

/// Rejections raised by request-body checks before anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} title is required")]
    BlankTitle(&'static str),

    #[error("A category cannot be its own parent")]
    SelfParent,

    #[error("Parent category {0} not found")]
    MissingParent(i32),

    #[error("Category {0} is a descendant and cannot become the parent")]
    DescendantParent(i32),

    #[error("Category {0} not found")]
    MissingCategory(i32),
}
