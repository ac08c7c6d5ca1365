use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
        HeaderName, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::model::{ExtraFields, ProblemResponse};

/// Content type for problem details as per RFC 7807.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Writable side of an HTTP response.
pub trait ResponseSink {
    fn set_status(&mut self, status: StatusCode);

    /// Replace any existing value for `name`.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn write_body(&mut self, body: Vec<u8>);
}

impl ResponseSink for Response {
    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_body(&mut self, body: Vec<u8>) {
        *self.body_mut() = Body::from(body);
    }
}

impl<X: Serialize + ExtraFields> ProblemResponse<X> {
    /// Write this problem into `sink` as `application/problem+json`.
    ///
    /// The response status is left alone on success: the caller owns it, and the
    /// `status` member is informational. If the body cannot be serialized, the sink
    /// gets a plain-text 500 carrying the serializer's message instead.
    pub fn write_to_http<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        match self.to_json() {
            Ok(body) => {
                sink.set_header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON));
                sink.write_body(body);
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    status = self.status(),
                    title = %self.title(),
                    "Failed to serialize problem response"
                );
                write_plain_error(sink, &err.to_string(), StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

/// Emit into a fresh response. Its status stays 200 unless serialization fails.
impl<X: Serialize + ExtraFields> IntoResponse for ProblemResponse<X> {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::empty());
        self.write_to_http(&mut response);
        response
    }
}

fn write_plain_error<S: ResponseSink + ?Sized>(sink: &mut S, message: &str, status: StatusCode) {
    sink.set_header(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8));
    sink.set_header(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    sink.set_status(status);
    sink.write_body(format!("{message}\n").into_bytes());
}
