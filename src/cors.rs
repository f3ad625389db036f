use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginDecision;
use crate::result::{CorsDecision, Rejection, RejectionReason};
use crate::util::split_list;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Construction validates the configuration; evaluation is a pure function
/// of policy and request and is safe to share across threads.
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let origin = self.options.origins.resolve(request.origin);
        if matches!(origin, OriginDecision::Skip) {
            return CorsDecision::NotApplicable;
        }

        if Self::is_preflight(request) {
            self.evaluate_preflight(request, origin)
        } else {
            self.evaluate_simple(request, origin)
        }
    }

    /// A preflight is an OPTIONS request announcing the method of the
    /// actual request. OPTIONS without that header is an ordinary request.
    fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    fn evaluate_preflight(
        &self,
        request: &RequestContext<'_>,
        origin: OriginDecision,
    ) -> CorsDecision {
        if matches!(origin, OriginDecision::Disallow) {
            return CorsDecision::PreflightRejected(Rejection::new(
                RejectionReason::OriginNotAllowed,
            ));
        }

        let requested_method = request
            .access_control_request_method
            .map(str::trim)
            .unwrap_or_default();
        if !self.options.methods.allows(requested_method) {
            return CorsDecision::PreflightRejected(Rejection::new(
                RejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            ));
        }

        let requested_headers = split_list(request.access_control_request_headers.unwrap_or(""));
        if !self.options.allowed_headers.allows_all(&requested_headers) {
            return CorsDecision::PreflightRejected(Rejection::new(
                RejectionReason::HeadersNotAllowed { requested_headers },
            ));
        }

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(&origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers(&requested_headers));
        headers.extend(builder.build_max_age_header());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status: self.options.preflight_success_status,
        }
    }

    fn evaluate_simple(&self, request: &RequestContext<'_>, origin: OriginDecision) -> CorsDecision {
        if matches!(origin, OriginDecision::Disallow) {
            return CorsDecision::SimpleRejected(Rejection::new(RejectionReason::OriginNotAllowed));
        }

        if !request.method.eq_ignore_ascii_case(method::OPTIONS)
            && !self.options.methods.allows(request.method)
        {
            return CorsDecision::SimpleRejected(Rejection::new(
                RejectionReason::MethodNotAllowed {
                    requested_method: request.method.to_string(),
                },
            ));
        }

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(&origin));
        headers.extend(builder.build_credentials_header());

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
