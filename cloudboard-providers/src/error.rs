//! Dispatcher error type.

use cloudboard_core::{CoreError, ErrorKind};
use cloudboard_fetch::ProviderError;
use thiserror::Error;

/// Failure resolving one account descriptor.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The descriptor was rejected before any upstream call.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The provider adapter failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ResolveError {
    /// Returns the taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::Provider(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudboard_core::ProviderKind;
    use cloudboard_fetch::FetchError;
    use std::time::Duration;

    #[test]
    fn test_kinds() {
        assert_eq!(ResolveError::from(CoreError::MissingToken).kind(), ErrorKind::Validation);
        assert_eq!(
            ResolveError::from(CoreError::UnsupportedProvider("heroku".into())).kind(),
            ErrorKind::UnsupportedProvider
        );
        let err = ResolveError::from(ProviderError::new(
            ProviderKind::Railway,
            "failed to fetch viewer",
            FetchError::Timeout(Duration::from_secs(10)),
        ));
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_eq!(
            err.to_string(),
            "Railway: failed to fetch viewer: Request timed out after 10 seconds"
        );
    }
}
