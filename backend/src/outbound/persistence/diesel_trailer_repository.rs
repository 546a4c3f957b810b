//! PostgreSQL-backed `TrailerRepository` implementation using Diesel ORM.
//!
//! Rows are rebuilt through [`Trailer::from_record`]; categorical columns are
//! parsed strictly, so a row holding an unknown category surfaces as a query
//! error rather than a silently defaulted trailer.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{
    TrailerListFilter, TrailerRepository, TrailerRepositoryError, TrailerUniqueField,
};
use crate::domain::trailer::{
    OwnershipType, Trailer, TrailerId, TrailerRecord, TrailerStatus, TrailerType,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, violated_unique_field};
use super::models::{NewTrailerRow, TrailerRow};
use super::pool::DbPool;
use super::schema::trailers;

/// Diesel-backed implementation of the trailer repository port.
#[derive(Clone)]
pub struct DieselTrailerRepository {
    pool: DbPool,
}

impl DieselTrailerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn parse_column<T>(
    column: &str,
    raw: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, TrailerRepositoryError> {
    parse(raw)
        .ok_or_else(|| TrailerRepositoryError::query(format!("unknown {column} value '{raw}'")))
}

fn narrow<S, T>(column: &str, value: Option<S>) -> Result<Option<T>, TrailerRepositoryError>
where
    S: Copy + std::fmt::Display,
    T: TryFrom<S>,
{
    value
        .map(|raw| {
            T::try_from(raw).map_err(|_| {
                TrailerRepositoryError::query(format!("{column} value {raw} out of range"))
            })
        })
        .transpose()
}

fn row_to_trailer(row: TrailerRow) -> Result<Trailer, TrailerRepositoryError> {
    let record = TrailerRecord {
        id: TrailerId::new(row.id),
        trailer_type: parse_column("trailer_type", &row.trailer_type, TrailerType::try_parse)?,
        status: parse_column("status", &row.status, TrailerStatus::try_parse)?,
        ownership_type: parse_column(
            "ownership_type",
            &row.ownership_type,
            OwnershipType::try_parse,
        )?,
        capacity: narrow("capacity", row.capacity)?,
        axle_count: narrow("axle_count", row.axle_count)?,
        gvwr: narrow("gvwr", row.gvwr)?,
        unit_number: row.unit_number,
        vin: row.vin,
        year: row.year,
        color: row.color,
        length: row.length,
        width: row.width,
        height: row.height,
        purchase_date: row.purchase_date,
        lease_end_date: row.lease_end_date,
        purchase_price: row.purchase_price,
        license_plate: row.license_plate,
        issuing_state: row.issuing_state,
        registration_expiry: row.registration_expiry,
        insurance_policy: row.insurance_policy,
        insurance_expiry: row.insurance_expiry,
        jurisdiction: row.jurisdiction,
        assigned_yard: row.assigned_yard,
        current_location: row.current_location,
        attached_truck_id: row.attached_truck_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Trailer::from_record(record)
        .map_err(|err| TrailerRepositoryError::query(format!("stored trailer is invalid: {err}")))
}

fn record_to_row(record: &TrailerRecord) -> Result<NewTrailerRow<'_>, TrailerRepositoryError> {
    Ok(NewTrailerRow {
        id: *record.id.as_uuid(),
        unit_number: &record.unit_number,
        trailer_type: record.trailer_type.as_str(),
        status: record.status.as_str(),
        ownership_type: record.ownership_type.as_str(),
        vin: record.vin.as_deref(),
        year: record.year,
        color: record.color.as_deref(),
        length: record.length,
        width: record.width,
        height: record.height,
        capacity: narrow("capacity", record.capacity)?,
        axle_count: record.axle_count.map(i16::from),
        purchase_date: record.purchase_date,
        lease_end_date: record.lease_end_date,
        purchase_price: record.purchase_price,
        license_plate: record.license_plate.as_deref(),
        issuing_state: record.issuing_state.as_deref(),
        registration_expiry: record.registration_expiry,
        insurance_policy: record.insurance_policy.as_deref(),
        insurance_expiry: record.insurance_expiry,
        jurisdiction: record.jurisdiction.as_deref(),
        gvwr: narrow("gvwr", record.gvwr)?,
        assigned_yard: record.assigned_yard.as_deref(),
        current_location: record.current_location.as_deref(),
        attached_truck_id: record.attached_truck_id.as_deref(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

fn filtered(filter: &TrailerListFilter) -> trailers::BoxedQuery<'static, Pg> {
    let mut query = trailers::table.into_boxed();
    if let Some(status) = filter.status {
        query = query.filter(trailers::status.eq(status.as_str()));
    }
    if let Some(trailer_type) = filter.trailer_type {
        query = query.filter(trailers::trailer_type.eq(trailer_type.as_str()));
    }
    query
}

#[async_trait]
impl TrailerRepository for DieselTrailerRepository {
    async fn save(&self, trailer: &Trailer) -> Result<(), TrailerRepositoryError> {
        let record = trailer.to_record();
        let row = record_to_row(&record)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(trailers::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| match violated_unique_field(&err) {
                Some(TrailerUniqueField::UnitNumber) => TrailerRepositoryError::duplicate(
                    TrailerUniqueField::UnitNumber,
                    record.unit_number.as_str(),
                ),
                Some(TrailerUniqueField::Vin) => TrailerRepositoryError::duplicate(
                    TrailerUniqueField::Vin,
                    record.vin.as_deref().unwrap_or_default(),
                ),
                None => map_diesel_error(err),
            })
    }

    async fn find_by_id(&self, id: &TrailerId) -> Result<Option<Trailer>, TrailerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TrailerRow> = trailers::table
            .filter(trailers::id.eq(id.as_uuid()))
            .select(TrailerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_trailer).transpose()
    }

    async fn find_by_unit_number(
        &self,
        unit_number: &str,
    ) -> Result<Option<Trailer>, TrailerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TrailerRow> = trailers::table
            .filter(trailers::unit_number.eq(unit_number))
            .select(TrailerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_trailer).transpose()
    }

    async fn list(
        &self,
        filter: &TrailerListFilter,
        page: PageRequest,
    ) -> Result<Page<Trailer>, TrailerRepositoryError> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| TrailerRepositoryError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<TrailerRow> = filtered(filter)
            .order((trailers::created_at.desc(), trailers::id.desc()))
            .limit(i64::from(page.limit()))
            .offset(offset)
            .select(TrailerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(row_to_trailer)
            .collect::<Result<Vec<_>, _>>()?;
        let total = u64::try_from(total)
            .map_err(|_| TrailerRepositoryError::query("negative trailer count"))?;
        Ok(Page::new(items, total, page))
    }

    async fn exists_by_unit_number(
        &self,
        unit_number: &str,
    ) -> Result<bool, TrailerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(
            trailers::table.filter(trailers::unit_number.eq(unit_number)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn exists_by_vin(&self, vin: &str) -> Result<bool, TrailerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(trailers::table.filter(trailers::vin.eq(vin))))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
