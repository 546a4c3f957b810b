//! Regression coverage for the trailer creation pipeline.

use super::*;
use crate::domain::ports::{UnknownYardDirectory, YardDirectory};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use rstest::{fixture, rstest};
use uuid::Uuid;

const ENTITY_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

struct PinnedIdentities;

impl TrailerIdentitySource for PinnedIdentities {
    fn entity_id(&self) -> TrailerId {
        TrailerId::new(Uuid::parse_str(ENTITY_ID).expect("fixture uuid"))
    }

    fn unit_number_suffix(&self) -> u16 {
        4821
    }
}

struct DetroitOnly;

impl YardDirectory for DetroitOnly {
    fn resolve_name(&self, yard_id: &str) -> String {
        match yard_id {
            "loc1" => "Detroit Yard".to_owned(),
            _ => "Unknown Yard".to_owned(),
        }
    }
}

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 23, 30, 0)
        .single()
        .expect("valid fixture instant")
}

fn today(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

fn create(input: NewTrailer, now: DateTime<Utc>) -> Result<Trailer, TrailerValidationError> {
    let context = CreationContext {
        identities: &PinnedIdentities,
        yards: &UnknownYardDirectory,
        now,
    };
    Trailer::create(input, &context)
}

// VIN

#[rstest]
#[case("1HGCM82633A123456")]
#[case("  1hgcm82633a123456\t")]
#[case("11111111111111111")]
fn vin_accepts_and_normalizes(#[case] raw: &str) {
    let vin = Vin::new(raw).expect("valid VIN");
    assert_eq!(vin.as_str(), raw.trim().to_uppercase());
    assert_eq!(Vin::new(vin.as_str()).expect("round trip"), vin);
}

#[rstest]
#[case("", VinValidationError::Empty)]
#[case("   ", VinValidationError::Empty)]
#[case("1HGCM82633A12345", VinValidationError::InvalidFormat)]
#[case("1HGCM82633A1234567", VinValidationError::InvalidFormat)]
#[case("1HGCM82633A12345-", VinValidationError::InvalidFormat)]
#[case("1HGCM82633A12345É", VinValidationError::InvalidFormat)]
#[case("1HGCM82633A12345I", VinValidationError::ForbiddenCharacters)]
#[case("OHGCM82633A123456", VinValidationError::ForbiddenCharacters)]
#[case("1HGCM82633A1q3456", VinValidationError::ForbiddenCharacters)]
fn vin_rejects_malformed_input(#[case] raw: &str, #[case] expected: VinValidationError) {
    assert_eq!(Vin::new(raw), Err(expected));
}

#[rstest]
fn vin_error_messages_are_client_facing() {
    assert_eq!(VinValidationError::Empty.to_string(), "VIN cannot be empty");
    assert_eq!(
        VinValidationError::InvalidFormat.to_string(),
        "VIN must be 17 characters long and contain only letters and numbers"
    );
    assert_eq!(
        VinValidationError::ForbiddenCharacters.to_string(),
        "VIN cannot contain I, O, or Q characters"
    );
}

#[rstest]
#[case("1HGCM82633A123456", "1HG CM82 633A 1234 56")]
#[case("SHORT", "SHORT")]
fn vin_formats_in_groups(#[case] raw: &str, #[case] expected: &str) {
    let vin = Vin::from_trusted(raw);
    assert_eq!(vin.formatted(), expected);
    assert_eq!(vin.formatted(), vin.formatted());
}

#[rstest]
fn trusted_vin_skips_validation() {
    let vin = Vin::from_trusted("legacy-vin");
    assert_eq!(vin.as_str(), "legacy-vin");
}

// Specifications

#[rstest]
fn specifications_defaults_fill_every_field() {
    let specs = Specifications::with_defaults(None, None, None, None, None);
    assert_eq!(specs.length(), Some(53.0));
    assert_eq!(specs.width(), Some(102.0));
    assert_eq!(specs.height(), Some(162.0));
    assert_eq!(specs.capacity(), Some(45_000));
    assert_eq!(specs.axle_count(), Some(2));
    assert!(specs.is_complete());
}

#[rstest]
fn specifications_defaults_keep_supplied_values_unchecked() {
    let specs = Specifications::with_defaults(Some(250.0), None, None, Some(1), Some(12));
    assert_eq!(specs.length(), Some(250.0));
    assert_eq!(specs.capacity(), Some(1));
    assert_eq!(specs.axle_count(), Some(12));
}

#[rstest]
#[case(SpecificationsInput { length: Some(0.0), ..Default::default() }, SpecificationField::Length, 0, 100)]
#[case(SpecificationsInput { length: Some(100.5), ..Default::default() }, SpecificationField::Length, 0, 100)]
#[case(SpecificationsInput { width: Some(-1.0), ..Default::default() }, SpecificationField::Width, 0, 200)]
#[case(SpecificationsInput { height: Some(301.0), ..Default::default() }, SpecificationField::Height, 0, 300)]
#[case(SpecificationsInput { capacity: Some(200_001), ..Default::default() }, SpecificationField::Capacity, 1, 200_000)]
#[case(SpecificationsInput { capacity: Some(0), ..Default::default() }, SpecificationField::Capacity, 1, 200_000)]
#[case(SpecificationsInput { axle_count: Some(0), ..Default::default() }, SpecificationField::AxleCount, 1, 10)]
#[case(SpecificationsInput { axle_count: Some(11), ..Default::default() }, SpecificationField::AxleCount, 1, 10)]
fn specifications_reject_out_of_range_fields(
    #[case] input: SpecificationsInput,
    #[case] field: SpecificationField,
    #[case] min: u32,
    #[case] max: u32,
) {
    let err = Specifications::new(input).expect_err("out of range");
    assert_eq!(err, SpecificationError::OutOfRange { field, min, max });
}

#[rstest]
fn specifications_report_first_violation_only() {
    let err = Specifications::new(SpecificationsInput {
        length: Some(500.0),
        width: Some(500.0),
        axle_count: Some(40),
        ..Default::default()
    })
    .expect_err("out of range");
    assert_eq!(err.field(), SpecificationField::Length);
}

#[rstest]
fn specifications_accept_bounds_and_keep_values() {
    let specs = Specifications::new(SpecificationsInput {
        length: Some(100.0),
        width: Some(0.5),
        height: Some(300.0),
        capacity: Some(200_000),
        axle_count: Some(1),
    })
    .expect("within bounds");
    assert_eq!(specs.length(), Some(100.0));
    assert_eq!(specs.width(), Some(0.5));
    assert_eq!(specs.height(), Some(300.0));
    assert_eq!(specs.capacity(), Some(200_000));
    assert_eq!(specs.axle_count(), Some(1));
}

#[rstest]
fn specifications_partial_input_is_incomplete() {
    let specs = Specifications::new(SpecificationsInput {
        length: Some(48.0),
        ..Default::default()
    })
    .expect("valid partial input");
    assert!(!specs.is_complete());
    assert_eq!(specs.length_capacity_display(), "48 ft / N/A");
    assert_eq!(specs.dimensions_display(), "48' L");
}

#[rstest]
fn specifications_displays() {
    let specs = Specifications::with_defaults(Some(53.5), None, None, None, None);
    assert_eq!(specs.length_capacity_display(), "53.5 ft / 45,000 lbs");
    assert_eq!(specs.dimensions_display(), "53.5' L x 102\" W x 162\" H");

    let empty = Specifications::new(SpecificationsInput::default()).expect("empty is valid");
    assert_eq!(empty.length_capacity_display(), "N/A / N/A");
    assert_eq!(empty.dimensions_display(), "N/A");
}

#[rstest]
fn specification_messages_name_units() {
    let err = Specifications::new(SpecificationsInput {
        capacity: Some(-5),
        ..Default::default()
    })
    .expect_err("negative capacity");
    assert_eq!(
        err.to_string(),
        "Trailer capacity must be between 1 and 200,000 pounds"
    );
}

#[rstest]
fn measure_messages_state_exclusive_lower_bound() {
    let err = Specifications::new(SpecificationsInput {
        length: Some(0.0),
        ..Default::default()
    })
    .expect_err("zero length");
    assert_eq!(
        err.to_string(),
        "Trailer length must be greater than 0 and at most 100 feet"
    );

    let specs = Specifications::new(SpecificationsInput {
        length: Some(0.5),
        ..Default::default()
    })
    .expect("fractional length below one foot");
    assert_eq!(specs.length(), Some(0.5));
}

// Enums

#[rstest]
#[case("dry_van", TrailerType::DryVan)]
#[case("Dry Van", TrailerType::DryVan)]
#[case("  STEP   deck ", TrailerType::StepDeck)]
#[case("reefer", TrailerType::Reefer)]
#[case("garbage", TrailerType::DryVan)]
#[case("", TrailerType::DryVan)]
fn trailer_type_parses_leniently(#[case] raw: &str, #[case] expected: TrailerType) {
    assert_eq!(TrailerType::parse(raw), expected);
}

#[rstest]
#[case("LEASED", OwnershipType::Leased)]
#[case(" rented ", OwnershipType::Rented)]
#[case("borrowed", OwnershipType::Owned)]
fn ownership_type_parses_leniently(#[case] raw: &str, #[case] expected: OwnershipType) {
    assert_eq!(OwnershipType::parse(raw), expected);
}

#[rstest]
#[case("out of service", TrailerStatus::OutOfService)]
#[case("Out-Of-Service", TrailerStatus::OutOfService)]
#[case("MAINTENANCE", TrailerStatus::Maintenance)]
#[case("parked", TrailerStatus::Available)]
fn trailer_status_parses_leniently(#[case] raw: &str, #[case] expected: TrailerStatus) {
    assert_eq!(TrailerStatus::parse(raw), expected);
}

#[rstest]
fn strict_parsers_reject_unknown_values() {
    assert_eq!(TrailerType::try_parse("garbage"), None);
    assert_eq!(TrailerStatus::try_parse("parked"), None);
    assert_eq!(OwnershipType::try_parse("borrowed"), None);
    assert_eq!(TrailerStatus::try_parse("out of service"), Some(TrailerStatus::OutOfService));
}

#[rstest]
fn wire_forms_round_trip_through_parse() {
    for variant in TrailerType::ALL {
        assert_eq!(TrailerType::parse(variant.as_str()), variant);
    }
    for variant in TrailerStatus::ALL {
        assert_eq!(TrailerStatus::parse(variant.as_str()), variant);
    }
}

#[rstest]
fn labels_and_predicates() {
    assert_eq!(TrailerType::StepDeck.label(), "Step Deck");
    assert_eq!(TrailerStatus::OutOfService.label(), "Out of Service");
    assert_eq!(OwnershipType::Leased.label(), "Leased");
    assert!(OwnershipType::Leased.requires_lease_end_date());
    assert!(OwnershipType::Leased.requires_lease_document());
    assert!(!OwnershipType::Rented.requires_lease_end_date());
    assert!(TrailerStatus::Available.can_be_assigned());
    assert!(!TrailerStatus::Assigned.can_be_assigned());
    assert!(TrailerStatus::OutOfService.requires_maintenance_attention());
    assert!(!TrailerStatus::Available.requires_maintenance_attention());
}

#[rstest]
fn enums_serialise_to_wire_forms() {
    let value = serde_json::to_value((
        TrailerType::StepDeck,
        TrailerStatus::OutOfService,
        OwnershipType::Rented,
    ))
    .expect("serialise enums");
    assert_eq!(value, serde_json::json!(["step_deck", "out-of-service", "rented"]));
}

// Aggregate

#[rstest]
fn create_applies_defaults(now: DateTime<Utc>) {
    let trailer = create(NewTrailer::default(), now).expect("valid trailer");

    assert_eq!(trailer.unit_number(), "TR4821");
    assert_eq!(trailer.id().to_string(), ENTITY_ID);
    assert_eq!(trailer.trailer_type(), TrailerType::DryVan);
    assert_eq!(trailer.status(), TrailerStatus::Available);
    assert_eq!(trailer.ownership_type(), OwnershipType::Owned);
    assert!(trailer.specifications().is_complete());
    assert_eq!(trailer.jurisdiction(), Some("IFTA"));
    assert_eq!(trailer.current_location(), Some("Yard"));
    assert!(trailer.vin().is_none());
    assert_eq!(trailer.created_at(), now);
    assert_eq!(trailer.updated_at(), now);
}

#[rstest]
#[case(Some("TR9999"), "TR9999")]
#[case(Some(""), "TR4821")]
#[case(None, "TR4821")]
fn create_resolves_unit_number(
    now: DateTime<Utc>,
    #[case] supplied: Option<&str>,
    #[case] expected: &str,
) {
    let trailer = create(
        NewTrailer {
            unit_number: supplied.map(str::to_owned),
            ..NewTrailer::default()
        },
        now,
    )
    .expect("valid trailer");
    assert_eq!(trailer.unit_number(), expected);
}

#[rstest]
fn create_normalizes_vin(now: DateTime<Utc>) {
    let trailer = create(
        NewTrailer {
            vin: Some(" 1hgcm82633a123456 ".to_owned()),
            ..NewTrailer::default()
        },
        now,
    )
    .expect("valid trailer");
    assert_eq!(trailer.vin().map(Vin::as_str), Some("1HGCM82633A123456"));
}

#[rstest]
fn create_requires_lease_end_date_for_leased(now: DateTime<Utc>) {
    let err = create(
        NewTrailer {
            ownership_type: OwnershipType::Leased,
            ..NewTrailer::default()
        },
        now,
    )
    .expect_err("lease end date required");
    assert_eq!(err, TrailerValidationError::LeaseEndDateRequired);
    assert!(err.is_business_rule_violation());
    assert_eq!(err.code(), "business_rule_violation");
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
fn lease_end_date_must_follow_today(
    now: DateTime<Utc>,
    #[case] days_ahead: u64,
    #[case] accepted: bool,
) {
    let lease_end_date = today(now)
        .checked_add_days(Days::new(days_ahead))
        .expect("date in range");
    let result = create(
        NewTrailer {
            ownership_type: OwnershipType::Leased,
            lease_end_date: Some(lease_end_date),
            ..NewTrailer::default()
        },
        now,
    );
    assert_eq!(result.is_ok(), accepted);
}

#[rstest]
fn past_lease_end_date_fails_even_when_owned(now: DateTime<Utc>) {
    let yesterday = today(now).pred_opt().expect("date in range");
    let err = create(
        NewTrailer {
            lease_end_date: Some(yesterday),
            ..NewTrailer::default()
        },
        now,
    )
    .expect_err("past lease date");
    assert_eq!(err, TrailerValidationError::LeaseEndDateNotInFuture);
    assert_eq!(err.field(), "leaseEndDate");
}

#[rstest]
fn malformed_vin_is_reported_before_missing_lease(now: DateTime<Utc>) {
    let err = create(
        NewTrailer {
            vin: Some("BAD".to_owned()),
            ownership_type: OwnershipType::Leased,
            ..NewTrailer::default()
        },
        now,
    )
    .expect_err("invalid VIN");
    assert_eq!(err, TrailerValidationError::Vin(VinValidationError::InvalidFormat));
    assert!(!err.is_business_rule_violation());
    assert_eq!(err.code(), "invalid_vin");
}

#[rstest]
#[case(Some("loc1"), "Detroit Yard", Some("loc1"))]
#[case(Some("loc9"), "Unknown Yard", Some("loc9"))]
#[case(None, "Yard", None)]
#[case(Some(""), "Yard", None)]
fn create_resolves_location_through_directory(
    now: DateTime<Utc>,
    #[case] yard: Option<&str>,
    #[case] expected: &str,
    #[case] stored_yard: Option<&str>,
) {
    let context = CreationContext {
        identities: &PinnedIdentities,
        yards: &DetroitOnly,
        now,
    };
    let trailer = Trailer::create(
        NewTrailer {
            assigned_yard: yard.map(str::to_owned),
            ..NewTrailer::default()
        },
        &context,
    )
    .expect("valid trailer");
    assert_eq!(trailer.current_location(), Some(expected));
    assert_eq!(trailer.assigned_yard(), stored_yard);
}

#[rstest]
fn create_keeps_supplied_attributes(now: DateTime<Utc>) {
    let lease_end_date = NaiveDate::from_ymd_opt(2027, 1, 31).expect("valid date");
    let trailer = create(
        NewTrailer {
            trailer_type: TrailerType::Reefer,
            initial_status: Some(TrailerStatus::Maintenance),
            ownership_type: OwnershipType::Leased,
            lease_end_date: Some(lease_end_date),
            jurisdiction: Some("CA".to_owned()),
            length: Some(48.0),
            axle_count: Some(3),
            attached_truck_id: Some("TRK-7".to_owned()),
            year: Some(2021),
            ..NewTrailer::default()
        },
        now,
    )
    .expect("valid trailer");

    assert_eq!(trailer.trailer_type(), TrailerType::Reefer);
    assert_eq!(trailer.status(), TrailerStatus::Maintenance);
    assert_eq!(trailer.lease_end_date(), Some(lease_end_date));
    assert_eq!(trailer.jurisdiction(), Some("CA"));
    assert_eq!(trailer.specifications().length(), Some(48.0));
    assert_eq!(trailer.specifications().width(), Some(102.0));
    assert_eq!(trailer.specifications().axle_count(), Some(3));
    assert_eq!(trailer.attached_truck_id(), Some("TRK-7"));
    assert_eq!(trailer.year(), Some(2021));
}

#[rstest]
fn record_round_trip_preserves_trailer(now: DateTime<Utc>) {
    let trailer = create(
        NewTrailer {
            vin: Some("1HGCM82633A123456".to_owned()),
            color: Some("White".to_owned()),
            purchase_price: Some(32_500.0),
            gvwr: Some(80_000),
            ..NewTrailer::default()
        },
        now,
    )
    .expect("valid trailer");

    let rebuilt = Trailer::from_record(trailer.to_record()).expect("valid record");
    assert_eq!(rebuilt, trailer);
}

#[rstest]
fn from_record_rejects_out_of_range_specifications(now: DateTime<Utc>) {
    let mut record = create(NewTrailer::default(), now)
        .expect("valid trailer")
        .to_record();
    record.axle_count = Some(42);

    let err = Trailer::from_record(record).expect_err("invalid stored axle count");
    assert_eq!(err.code(), "out_of_range");
    assert_eq!(err.field(), "axleCount");
}
