/// Borrowed view of the CORS-relevant parts of one HTTP exchange.
///
/// Constructed per request by the surrounding HTTP layer, evaluated once
/// and discarded; the engine never stores it.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
