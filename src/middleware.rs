use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::CorsDecision;
use std::sync::Arc;

/// Minimal request view for composing the engine with a routing layer.
/// Real deployments adapt their framework's request type instead.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: String,
    headers: Headers,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Headers::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.header(header::ORIGIN),
            access_control_request_method: self.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: self.header(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Explicit interceptor: takes a request and the next handler, returns a
/// response. Accepted preflights and rejections short-circuit; everything
/// else reaches `next`.
#[derive(Clone)]
pub struct CorsMiddleware {
    cors: Arc<Cors>,
}

impl CorsMiddleware {
    pub fn new(cors: Arc<Cors>) -> Self {
        Self { cors }
    }

    pub fn handle<F>(&self, request: &HttpRequest, next: F) -> HttpResponse
    where
        F: FnOnce(&HttpRequest) -> HttpResponse,
    {
        match self.cors.check(&request.as_context()) {
            CorsDecision::PreflightAccepted { headers, status } => {
                let mut response = HttpResponse::new(status);
                response.headers = headers;
                response
            }
            CorsDecision::PreflightRejected(rejection) => HttpResponse::new(rejection.status()),
            CorsDecision::SimpleAccepted { headers } => {
                let mut response = next(request);
                for (name, value) in headers {
                    response.headers.insert(name, value);
                }
                response
            }
            CorsDecision::SimpleRejected(rejection) => HttpResponse::new(rejection.status()),
            CorsDecision::NotApplicable => next(request),
        }
    }
}

impl From<Cors> for CorsMiddleware {
    fn from(cors: Cors) -> Self {
        Self::new(Arc::new(cors))
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
