pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod config;
mod context;
mod cors;
mod header_builder;
mod headers;
mod middleware;
mod options;
mod origin;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use middleware::{CorsMiddleware, HttpRequest, HttpResponse};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginDecision};
pub use result::{CorsDecision, Rejection, RejectionReason, FORBIDDEN};
pub use util::{equals_ignore_case, split_list};
