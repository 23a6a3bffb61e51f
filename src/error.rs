use thiserror::Error;

/// Result type alias using `CanvasError`
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors raised by the canvas when a command asks for an impossible membership change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// The very same shape is already on the canvas.
    #[error("{0} is already on the canvas")]
    AlreadyPresent(String),

    /// The shape to remove is not on the canvas.
    #[error("{0} is not on the canvas")]
    NotFound(String),
}
