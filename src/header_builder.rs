use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Headers for an accepted origin. Wildcard answers carry the literal
    /// `*`; origin-specific answers echo the origin and vary on it.
    pub(crate) fn build_origin_headers(&self, decision: &OriginDecision) -> HeaderCollection {
        match decision {
            OriginDecision::Any => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                headers
            }
            OriginDecision::Exact(value) => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.clone());
                headers
            }
            OriginDecision::Disallow | OriginDecision::Skip => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    /// Echoes the requested header names back in request order. Nothing is
    /// emitted when the preflight requested no headers.
    pub(crate) fn build_allowed_headers(&self, requested: &[String]) -> HeaderCollection {
        if requested.is_empty() {
            return HeaderCollection::new();
        }
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.join(","));
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.to_string(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
