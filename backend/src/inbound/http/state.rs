//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the domain
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{TrailerCommand, TrailerQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub trailers: Arc<dyn TrailerCommand>,
    pub trailers_query: Arc<dyn TrailerQuery>,
    /// Source of "today" for request validation such as the model-year bound.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Build state over the trailer ports using the system clock.
    pub fn new(trailers: Arc<dyn TrailerCommand>, trailers_query: Arc<dyn TrailerQuery>) -> Self {
        Self {
            trailers,
            trailers_query,
            clock: Arc::new(DefaultClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
