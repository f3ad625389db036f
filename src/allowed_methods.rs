use crate::constants::method;
use crate::util::equals_ignore_case;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Matching is case-insensitive; the header value preserves the configured
/// spelling and order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(Into::into)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .collect(),
        }
    }

    pub fn allows(&self, requested: &str) -> bool {
        self.values
            .iter()
            .any(|allowed| equals_ignore_case(allowed, requested))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Comma-joined header value in configured order.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::HEAD])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
