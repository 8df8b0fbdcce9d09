//! Conversions from external infrastructure errors into domain errors.

use authing_domain::AuthingError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AuthingError);

impl From<InfraError> for AuthingError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AuthingError> for InfraError {
    fn from(value: AuthingError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAuthingError {
    fn into_authing(self) -> AuthingError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AuthingError */
/* -------------------------------------------------------------------------- */

impl IntoAuthingError for HttpError {
    fn into_authing(self) -> AuthingError {
        if self.is_builder() {
            return AuthingError::Internal(format!("failed to build HTTP request: {self}"));
        }

        if self.is_decode() {
            return AuthingError::Decode(format!("failed to read response body: {self}"));
        }

        if self.is_timeout() {
            return AuthingError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return AuthingError::Network(format!("HTTP connection failure: {self}"));
        }

        // Statuses are never turned into errors here; the envelope decides.
        AuthingError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_authing())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
