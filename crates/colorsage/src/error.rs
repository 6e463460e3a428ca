use thiserror::Error;

/// Errors raised at the color parsing boundary.
///
/// Everything downstream of [`crate::Color::parse`] works on validated colors
/// and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected #rrggbb or #rgb)")]
    InvalidColorFormat(String),
}
