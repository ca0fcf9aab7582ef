//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route matching, dispatch to the
//! endpoint handlers, response stamping and access logging.

use std::convert::Infallible;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, HeaderValue, CONTENT_LENGTH, REFERER, SERVER, USER_AGENT};
use hyper::http::request::Parts;
use hyper::{Request, Response, Version};
use num_bigint::BigUint;

use super::body::{read_full_body, BodyError};
use super::{factorial, fibonacci, mean};
use crate::compute;
use crate::config::{AppState, HttpConfig};
use crate::http::{self, Computed};
use crate::logger::{self, AccessLogEntry};
use crate::routing::{match_route, Route};
use crate::validation::ValidationError;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    let started = Instant::now();
    let (parts, body) = req.into_parts();

    let route = match_route(&parts.method, parts.uri.path());
    let route_name = route.name();

    let mut response = match route {
        Route::Factorial => match factorial::parse_index(parts.uri.query()) {
            Ok(n) => compute_blocking(route_name, move || compute::factorial(n)).await,
            Err(e) => reject(route_name, e),
        },
        Route::Fibonacci { suffix } => match fibonacci::parse_index(&suffix) {
            Ok(n) => compute_blocking(route_name, move || compute::fibonacci(n)).await,
            Err(e) => reject(route_name, e),
        },
        Route::Mean => serve_mean(&parts, body, &state.config.http).await,
        Route::NotFound => http::build_404_response(),
    };

    stamp_server_header(&mut response, &state.config.http.server_name);

    if state.config.logging.access_log {
        let entry = build_access_entry(&parts, &response, remote_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Turn a validation outcome into its response
fn respond(route_name: &str, outcome: Result<Computed, ValidationError>) -> Response<Full<Bytes>> {
    match outcome {
        Ok(value) => http::build_result_response(&value),
        Err(e) => reject(route_name, e),
    }
}

fn reject(route_name: &str, error: ValidationError) -> Response<Full<Bytes>> {
    logger::log_rejected(route_name, error.status().as_u16(), &error.to_string());
    http::build_detail_response(error)
}

/// Run a big-integer computation on the blocking pool.
///
/// The loops never yield; inline they would pin a runtime worker past the
/// connection timeout.
async fn compute_blocking<F>(route_name: &str, work: F) -> Response<Full<Bytes>>
where
    F: FnOnce() -> BigUint + Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(value) => http::build_result_response(&Computed::from(value)),
        Err(e) => {
            logger::log_error(&format!("{route_name} computation failed: {e}"));
            http::build_500_response()
        }
    }
}

/// Drain the body under the configured limit, then validate it
async fn serve_mean<B>(parts: &Parts, body: B, http_config: &HttpConfig) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    if exceeds_declared_length(parts, http_config.max_body_size) {
        return http::build_413_response();
    }

    match read_full_body(body, http_config.max_body_size).await {
        Ok(bytes) => respond("mean", mean::handle(&bytes)),
        Err(BodyError::TooLarge) => {
            logger::log_warning(&format!(
                "Request body exceeded {} bytes while reading",
                http_config.max_body_size
            ));
            http::build_413_response()
        }
        Err(BodyError::Read(e)) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            respond("mean", Err(ValidationError::UnreadableBody))
        }
    }
}

/// Check a declared Content-Length against the body limit
fn exceeds_declared_length(parts: &Parts, max_body_size: u64) -> bool {
    let Some(content_length) = parts.headers.get(CONTENT_LENGTH) else {
        return false;
    };
    match content_length.to_str().ok().map(str::parse::<u64>) {
        Some(Ok(size)) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            true
        }
        Some(Ok(_)) => false,
        _ => {
            logger::log_warning("Invalid Content-Length value, skipping size check");
            false
        }
    }
}

fn stamp_server_header(response: &mut Response<Full<Bytes>>, server_name: &str) {
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            response.headers_mut().insert(SERVER, value);
        }
        Err(e) => logger::log_warning(&format!("Invalid server name '{server_name}': {e}")),
    }
}

fn build_access_entry(
    parts: &Parts,
    response: &Response<Full<Bytes>>,
    remote_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = version_label(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
