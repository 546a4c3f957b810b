//! Builders for the HTTP state and its repository-backed services.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use trailers::domain::ports::TrailerRepository;
use trailers::domain::trailer::RandomIdentitySource;
use trailers::domain::{TrailerCommandService, TrailerQueryService};
use trailers::inbound::http::state::HttpState;
use trailers::outbound::memory::InMemoryTrailerRepository;
use trailers::outbound::persistence::DieselTrailerRepository;
use trailers::outbound::yards::StaticYardDirectory;

use super::ServerConfig;

/// Wire command and query services over one shared repository.
fn services_over<R>(repo: Arc<R>) -> HttpState
where
    R: TrailerRepository + 'static,
{
    let command = TrailerCommandService::new(
        repo.clone(),
        Arc::new(RandomIdentitySource),
        Arc::new(StaticYardDirectory::known_yards()),
        Arc::new(DefaultClock),
    );
    let query = TrailerQueryService::new(repo);
    HttpState::new(Arc::new(command), Arc::new(query))
}

/// Select the Diesel repository when `config.db_pool` is present, otherwise
/// the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => services_over(Arc::new(DieselTrailerRepository::new(pool.clone()))),
        None => {
            info!("no database configured; trailers are kept in memory");
            services_over(Arc::new(InMemoryTrailerRepository::new()))
        }
    };
    web::Data::new(state)
}
