//! HTTP adapter.
//!
//! `/v1/visits` treats the raw request body as the event body (an empty body
//! is an absent body) and unpacks the invocation response into the HTTP
//! response. `/v1/invoke` speaks the invocation contract directly and returns
//! the response object as JSON.

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use visitcount_core::protocol::response::APPLICATION_JSON;
use visitcount_core::protocol::{InvocationEvent, InvocationResponse};

use crate::app_state::AppState;

pub async fn visit(State(app): State<AppState>, body: String) -> Response {
    let event = if body.trim().is_empty() {
        InvocationEvent::empty()
    } else {
        InvocationEvent::raw(body)
    };
    into_http(app.handler().handle(&event).await)
}

pub async fn invoke(
    State(app): State<AppState>,
    Json(event): Json<InvocationEvent>,
) -> Json<InvocationResponse> {
    Json(app.handler().handle(&event).await)
}

/// Unpack an invocation response. The body is always JSON, so the content
/// type defaults to `application/json` when the response carries no headers.
pub fn into_http(res: InvocationResponse) -> Response {
    let status = StatusCode::from_u16(res.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = (status, res.body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

    for (name, value) in res.headers.into_iter().flatten() {
        match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "dropping invalid response header"),
        }
    }
    response
}
