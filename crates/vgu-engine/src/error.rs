use crate::backend::BackendError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the canvas.
///
/// Precondition violations (`NoFontSelected`, `UnknownTexture`, `Destroyed`,
/// `EmptyPolygon`, `StalePaint`, `ForeignPaint`) are raised before anything
/// is sent to the backend. `Backend` errors abort the current draw call and are not
/// recoverable for the frame.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("no font selected")]
    NoFontSelected,

    #[error("unknown texture identifier `{0}`")]
    UnknownTexture(String),

    #[error("drawing context has been destroyed")]
    Destroyed,

    #[error("polygon needs at least one point")]
    EmptyPolygon,

    #[error("paint was built in an earlier frame and has already been released")]
    StalePaint,

    #[error("paint was built by a different canvas")]
    ForeignPaint,

    #[error("failed to release {failed} of {total} native resources")]
    Release { failed: usize, total: usize },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(Error::NoFontSelected.to_string(), "no font selected");
        assert!(
            Error::UnknownTexture("logo".into())
                .to_string()
                .contains("`logo`")
        );
        assert_eq!(
            Error::Release {
                failed: 1,
                total: 3,
            }
            .to_string(),
            "failed to release 1 of 3 native resources"
        );
    }

    #[test]
    fn backend_errors_are_transparent() {
        let err: Error = BackendError::OutOfMemory.into();
        assert_eq!(err.to_string(), BackendError::OutOfMemory.to_string());
    }
}
