/// Configured origin allow-list.
///
/// The default is [`AllowedOrigins::Disabled`]: with no configured origins
/// the engine takes no part in the exchange at all, mirroring a deployment
/// where CORS support is off until explicitly enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    #[default]
    Disabled,
    /// The single global wildcard: any origin, answered with a literal `*`.
    Any,
    /// Explicit origins, matched exactly and case-sensitively
    /// (scheme+host+port as the browser sent them).
    List(Vec<String>),
}

/// Outcome of resolving a request origin against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the literal `*`.
    Any,
    /// Echo the matched origin verbatim.
    Exact(String),
    Disallow,
    /// The engine is not involved in this exchange.
    Skip,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();

        if origins.is_empty() {
            Self::Disabled
        } else if origins.len() == 1 && origins[0] == "*" {
            Self::Any
        } else {
            Self::List(origins)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };
        if origin.is_empty() {
            return OriginDecision::Skip;
        }

        match self {
            Self::Disabled => OriginDecision::Skip,
            Self::Any => OriginDecision::Any,
            Self::List(origins) => {
                if origins.iter().any(|allowed| allowed == origin) {
                    OriginDecision::Exact(origin.to_string())
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
