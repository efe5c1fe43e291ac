use thiserror::Error;

/// Returned by the checked accessors when there is no value to return.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("value is null")]
pub struct NullError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(NullError.to_string(), "value is null");

        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(NullError);
        assert_eq!(err.to_string(), "value is null");
    }
}
