//! Synchronous API client core for the clients service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `ClientsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Wire types are defined independently from the server crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ClientsClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Client, Direction, ErrorBody, Page, PageQuery, Pageable};
