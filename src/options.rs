use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::AllowedOrigins;
use crate::util::is_http_token;
use thiserror::Error;

pub const DEFAULT_MAX_AGE_SECONDS: u64 = 1800;
pub const DEFAULT_PREFLIGHT_SUCCESS_STATUS: u16 = 200;

/// Immutable CORS policy configuration.
///
/// Validated once by [`crate::Cors::new`]; shared read-only across
/// arbitrarily many concurrent evaluations afterwards.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub credentials: bool,
    pub max_age: u64,
    pub preflight_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            credentials: false,
            max_age: DEFAULT_MAX_AGE_SECONDS,
            preflight_success_status: DEFAULT_PREFLIGHT_SUCCESS_STATUS,
        }
    }
}

/// Misconfiguration detected at policy construction, before any request
/// is evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Credentialed responses cannot use the wildcard origin; configure explicit allowed origins when allow-credentials is enabled."
    )]
    CredentialsRequireSpecificOrigin,
    #[error(
        "The allowed-origins list cannot mix '*' with explicit origins; use a single '*' to allow any origin."
    )]
    OriginListCannotContainWildcard,
    #[error("The allowed-headers list cannot contain '*'; use the wildcard variant instead.")]
    AllowedHeadersListCannotContainWildcard,
    #[error("The allowed method '{0}' is not a valid HTTP token.")]
    InvalidMethodToken(String),
    #[error("The allowed header '{0}' is not a valid HTTP token.")]
    InvalidHeaderToken(String),
    #[error("The preflight success status {0} must be within 200-399.")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.origins.is_wildcard() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let AllowedOrigins::List(origins) = &self.origins
            && origins.iter().any(|origin| origin == "*")
        {
            return Err(ValidationError::OriginListCannotContainWildcard);
        }

        for method in self.methods.values() {
            if !is_http_token(method) {
                return Err(ValidationError::InvalidMethodToken(method.clone()));
            }
        }

        if let AllowedHeaders::List(headers) = &self.allowed_headers {
            for header in headers {
                if header == "*" {
                    return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
                }
                if !is_http_token(header) {
                    return Err(ValidationError::InvalidHeaderToken(header.clone()));
                }
            }
        }

        if !(200..=399).contains(&self.preflight_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.preflight_success_status,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
