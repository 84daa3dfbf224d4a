//! Application-level error type.
//!
//! Library crates define their own `thiserror` enums; anything that crosses
//! into a binary or a feature screen is wrapped in [`AppError`], which pairs an
//! [`anyhow::Error`] with the [`ErrorKind`] a presenter needs to pick an exit
//! code or a message style.

use anyhow::Error;
use std::fmt;

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Process exit code used by the binaries when an error of this kind aborts a command.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::BadRequest => 2,
            Self::Unauthorized => 3,
            Self::NotFound => 4,
            Self::Internal => 1,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not found",
            Self::Internal => "internal error",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unauthorized, err)
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(AppError::not_found(anyhow::anyhow!("x")).kind, ErrorKind::NotFound);
        assert_eq!(AppError::bad_request(anyhow::anyhow!("x")).kind, ErrorKind::BadRequest);
        assert_eq!(AppError::unauthorized(anyhow::anyhow!("x")).kind, ErrorKind::Unauthorized);
        assert_eq!(AppError::internal(anyhow::anyhow!("x")).kind, ErrorKind::Internal);
    }

    #[test]
    fn test_from_io_error_is_internal() {
        let io = std::io::Error::other("disk gone");
        let err: AppError = io.into();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::not_found(anyhow::anyhow!("Form abc123 not found"));
        assert_eq!(err.to_string(), "not found: Form abc123 not found");
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            ErrorKind::BadRequest.exit_code(),
            ErrorKind::Unauthorized.exit_code(),
            ErrorKind::NotFound.exit_code(),
            ErrorKind::Internal.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
