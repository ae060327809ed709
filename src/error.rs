use thiserror::Error;

/// Errors raised before a scan begins.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The caller had no sequence to hand over.
    #[error("sequence must be provided, got none")]
    InvalidArgument,
}

pub type Result<T> = core::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn invalid_argument_message() {
        assert_eq!(SearchError::InvalidArgument.to_string(), "sequence must be provided, got none");
    }
}
