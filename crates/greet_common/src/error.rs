use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

/// Any failure that happened while calling the greet service.
///
/// Transport errors, non-success statuses and decode errors all end up here.
/// Only the display text of the underlying error is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFailure {
    message: String,
}

impl CallFailure {
    /// Create a call failure from anything that can be displayed.
    pub fn new(err: impl Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }

    /// The text of the underlying error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for CallFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for CallFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_underlying_text_verbatim() {
        let failure = CallFailure::new("network unreachable");
        assert_eq!(failure.to_string(), "network unreachable");
        assert_eq!(failure.message(), "network unreachable");
    }
}
