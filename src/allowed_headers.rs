use crate::util::equals_ignore_case;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
///
/// The default is an empty list: a preflight requesting any header is
/// rejected until headers are explicitly allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every requested header is allowed.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    /// Builds an allow-list, trimming whitespace and removing
    /// case-insensitive duplicates while keeping first-seen spelling.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows(&self, requested: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => allowed
                .iter()
                .any(|header| equals_ignore_case(header, requested)),
        }
    }

    /// Whether every name in the requested sequence is allowed. An empty
    /// request is always satisfied.
    pub fn allows_all(&self, requested: &[String]) -> bool {
        requested.iter().all(|header| self.allows(header))
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
