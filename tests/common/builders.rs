use corsgate::constants::method;
use corsgate::{AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsOptions, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.origins = Some(AllowedOrigins::any());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> Cors {
        let defaults = CorsOptions::default();

        Cors::new(CorsOptions {
            origins: self.origins.unwrap_or(defaults.origins),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            preflight_success_status: defaults.preflight_success_status,
        })
        .expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> corsgate::CorsDecision {
        let SimpleRequestBuilder { method, origin } = self;
        let ctx = RequestContext {
            method: &method,
            origin: origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> corsgate::CorsDecision {
        let PreflightRequestBuilder {
            origin,
            request_method,
            request_headers,
        } = self;

        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
