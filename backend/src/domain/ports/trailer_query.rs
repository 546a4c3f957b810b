//! Driving port for trailer reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

use super::{TrailerProfile, TrailerSummary};

/// Raw paging and filter values as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTrailersRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub trailer_type: Option<String>,
}

/// One page of trailer summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTrailersResponse {
    pub trailers: Vec<TrailerSummary>,
    /// Matching trailers across all pages.
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Lookup by storage id or unit number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTrailerRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTrailerResponse {
    pub profile: TrailerProfile,
}

/// Domain use-case port for reading trailers.
#[async_trait]
pub trait TrailerQuery: Send + Sync {
    /// List trailers newest first.
    async fn list_trailers(&self, request: ListTrailersRequest)
    -> Result<ListTrailersResponse, Error>;

    /// Fetch one trailer profile; falls back to a unit-number match.
    async fn get_trailer(&self, request: GetTrailerRequest) -> Result<GetTrailerResponse, Error>;
}
