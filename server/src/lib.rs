//! HTTP service exposing CRUD and filtered listings over clients.
//!
//! # Overview
//! Requests flow handler → `ClientService` → `ClientRepository`. Handlers in
//! [`resource`] hold no state; the service is shared as
//! `Arc<dyn ClientService>` so tests can replace it with a mock.
//!
//! # Design
//! - [`router`] builds the app around any service; [`app`] wires the real
//!   service over an in-memory repository seeded with the fixture.
//! - Listings are paginated with `page`, `linesPerPage`, `direction` and
//!   `orderBy` query parameters (see [`page`]).
//! - The only domain failure is a missing client, rendered as 404 with a
//!   JSON body that includes the request path (see [`error`]).

pub mod config;
pub mod error;
pub mod fixture;
pub mod model;
pub mod page;
pub mod repository;
pub mod resource;
pub mod service;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{ResourceError, ServiceError, StandardError};
pub use model::{Client, ClientDto};
pub use page::{Direction, Page, PageParams, PageRequest, SortField};
pub use repository::{ClientFilter, ClientRepository, InMemoryClientRepository};
pub use service::{ClientService, ClientServiceImpl, SharedService};

/// Router for the client resource, backed by `service`.
pub fn router(service: SharedService) -> Router {
    resource::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Router over a real service and a fresh repository seeded with the fixture.
pub fn app() -> Router {
    app_with(InMemoryClientRepository::seeded())
}

pub fn app_with(repository: InMemoryClientRepository) -> Router {
    router(Arc::new(ClientServiceImpl::new(repository)))
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

/// Serve the seeded app on `listener`.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}
