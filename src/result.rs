use crate::headers::Headers;

/// Status a rejection maps to at the HTTP layer.
pub const FORBIDDEN: u16 = 403;

/// Overall decision returned by the policy engine.
///
/// Evaluating the same policy and request always yields the identical
/// decision; there is no hidden state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Accepted preflight: answer immediately with `status` and `headers`,
    /// without invoking the underlying handler.
    PreflightAccepted { headers: Headers, status: u16 },
    /// Rejected preflight: 403 with no CORS headers attached.
    PreflightRejected(Rejection),
    /// Accepted non-preflight CORS request: merge `headers` into the
    /// handler's own response.
    SimpleAccepted { headers: Headers },
    /// Rejected non-preflight CORS request: 403 with no CORS headers.
    SimpleRejected(Rejection),
    /// No `Origin` header, or CORS disabled: the exchange proceeds
    /// untouched.
    NotApplicable,
}

/// A policy-driven refusal. Expected outcome, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: Vec<String> },
}

impl Rejection {
    pub(crate) fn new(reason: RejectionReason) -> Self {
        Self { reason }
    }

    pub fn status(&self) -> u16 {
        FORBIDDEN
    }
}
