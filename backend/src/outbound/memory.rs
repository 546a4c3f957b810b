//! In-process trailer store used when no database is configured.
//!
//! Uniqueness is enforced under the write lock, so concurrent saves of the
//! same unit number or VIN cannot both succeed.

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tokio::sync::RwLock;

use crate::domain::ports::{
    TrailerListFilter, TrailerRepository, TrailerRepositoryError, TrailerUniqueField,
};
use crate::domain::trailer::{Trailer, TrailerId};

/// Volatile `TrailerRepository` backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryTrailerRepository {
    trailers: RwLock<Vec<Trailer>>,
}

impl InMemoryTrailerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn clashing_field(stored: &Trailer, candidate: &Trailer) -> Option<TrailerUniqueField> {
    if stored.unit_number() == candidate.unit_number() {
        return Some(TrailerUniqueField::UnitNumber);
    }
    match (stored.vin(), candidate.vin()) {
        (Some(left), Some(right)) if left == right => Some(TrailerUniqueField::Vin),
        _ => None,
    }
}

#[async_trait]
impl TrailerRepository for InMemoryTrailerRepository {
    async fn save(&self, trailer: &Trailer) -> Result<(), TrailerRepositoryError> {
        let mut trailers = self.trailers.write().await;
        if let Some(field) = trailers
            .iter()
            .find_map(|stored| clashing_field(stored, trailer))
        {
            let value = match field {
                TrailerUniqueField::UnitNumber => trailer.unit_number().to_owned(),
                TrailerUniqueField::Vin => trailer
                    .vin()
                    .map(|vin| vin.as_str().to_owned())
                    .unwrap_or_default(),
            };
            return Err(TrailerRepositoryError::duplicate(field, value));
        }
        trailers.push(trailer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TrailerId) -> Result<Option<Trailer>, TrailerRepositoryError> {
        let trailers = self.trailers.read().await;
        Ok(trailers.iter().find(|trailer| trailer.id() == *id).cloned())
    }

    async fn find_by_unit_number(
        &self,
        unit_number: &str,
    ) -> Result<Option<Trailer>, TrailerRepositoryError> {
        let trailers = self.trailers.read().await;
        Ok(trailers
            .iter()
            .find(|trailer| trailer.unit_number() == unit_number)
            .cloned())
    }

    async fn list(
        &self,
        filter: &TrailerListFilter,
        page: PageRequest,
    ) -> Result<Page<Trailer>, TrailerRepositoryError> {
        let trailers = self.trailers.read().await;
        let mut matching: Vec<&Trailer> = trailers
            .iter()
            .filter(|trailer| filter.matches(trailer))
            .collect();
        // Newest first; later inserts win ties.
        matching.reverse();
        matching.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let total = matching.len() as u64;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(skip)
            .take(page.limit() as usize)
            .cloned()
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn exists_by_unit_number(
        &self,
        unit_number: &str,
    ) -> Result<bool, TrailerRepositoryError> {
        let trailers = self.trailers.read().await;
        Ok(trailers
            .iter()
            .any(|trailer| trailer.unit_number() == unit_number))
    }

    async fn exists_by_vin(&self, vin: &str) -> Result<bool, TrailerRepositoryError> {
        let trailers = self.trailers.read().await;
        Ok(trailers
            .iter()
            .any(|trailer| trailer.vin().is_some_and(|stored| stored.as_str() == vin)))
    }
}
