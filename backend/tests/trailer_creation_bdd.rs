//! Behaviour tests for the trailer creation use case over the in-memory store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};

use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;
use trailers::domain::ports::{
    CreateTrailerRequest, CreateTrailerResponse, GetTrailerRequest, ListTrailersRequest,
    TrailerCommand, TrailerQuery,
};
use trailers::domain::trailer::{TrailerId, TrailerIdentitySource};
use trailers::domain::{Error, ErrorCode, TrailerCommandService, TrailerQueryService};
use trailers::outbound::memory::InMemoryTrailerRepository;
use trailers::outbound::yards::StaticYardDirectory;
use uuid::Uuid;

/// Sequential unit numbers so scenarios never collide by chance.
#[derive(Debug)]
struct SequentialIdentities(AtomicU16);

impl TrailerIdentitySource for SequentialIdentities {
    fn entity_id(&self) -> TrailerId {
        TrailerId::new(Uuid::new_v4())
    }

    fn unit_number_suffix(&self) -> u16 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

type Command = TrailerCommandService<InMemoryTrailerRepository>;
type Query = TrailerQueryService<InMemoryTrailerRepository>;

#[derive(Default, ScenarioState)]
struct TrailerCreationWorld {
    runtime: Slot<RuntimeHandle>,
    command: Slot<Arc<Command>>,
    query: Slot<Arc<Query>>,
    last_result: Slot<Result<CreateTrailerResponse, Error>>,
}

impl TrailerCreationWorld {
    fn setup(&self) {
        let repo = Arc::new(InMemoryTrailerRepository::new());
        let command = TrailerCommandService::new(
            repo.clone(),
            Arc::new(SequentialIdentities(AtomicU16::new(6000))),
            Arc::new(StaticYardDirectory::known_yards()),
            Arc::new(DefaultClock),
        );
        self.runtime.set(RuntimeHandle(Arc::new(
            Runtime::new().expect("create runtime"),
        )));
        self.command.set(Arc::new(command));
        self.query.set(Arc::new(TrailerQueryService::new(repo)));
    }

    fn create(&self, request: CreateTrailerRequest) -> Result<CreateTrailerResponse, Error> {
        let runtime = self.runtime.get().expect("runtime");
        let command = self.command.get().expect("command");
        runtime.0.block_on(command.create_trailer(request))
    }

    fn stored_count(&self) -> u64 {
        let runtime = self.runtime.get().expect("runtime");
        let query = self.query.get().expect("query");
        runtime
            .0
            .block_on(query.list_trailers(ListTrailersRequest::default()))
            .expect("list succeeds")
            .total
    }

    fn created(&self) -> CreateTrailerResponse {
        self.last_result
            .get()
            .expect("result should be set")
            .expect("create should succeed")
    }
}

fn bare(value: &str) -> String {
    value.trim_matches('"').to_owned()
}

#[fixture]
fn world() -> TrailerCreationWorld {
    TrailerCreationWorld::default()
}

#[given("a trailer service backed by an in-memory store")]
fn a_trailer_service_backed_by_an_in_memory_store(world: &TrailerCreationWorld) {
    world.setup();
}

#[given("a trailer with VIN {vin} already exists")]
fn a_trailer_with_vin_already_exists(world: &TrailerCreationWorld, vin: String) {
    world
        .create(CreateTrailerRequest {
            vin: Some(bare(&vin)),
            ..CreateTrailerRequest::default()
        })
        .expect("seed trailer is valid");
}

#[when("a reefer trailer is created in yard {yard} with VIN {vin}")]
fn a_reefer_trailer_is_created(world: &TrailerCreationWorld, yard: String, vin: String) {
    let result = world.create(CreateTrailerRequest {
        trailer_type: Some("reefer".to_owned()),
        vin: Some(bare(&vin)),
        assigned_yard: Some(bare(&yard)),
        ..CreateTrailerRequest::default()
    });
    world.last_result.set(result);
}

#[when("a leased trailer is created without a lease end date")]
fn a_leased_trailer_is_created_without_a_lease_end_date(world: &TrailerCreationWorld) {
    let result = world.create(CreateTrailerRequest {
        ownership_type: Some("leased".to_owned()),
        ..CreateTrailerRequest::default()
    });
    world.last_result.set(result);
}

#[then("the created trailer is located at {location}")]
fn the_created_trailer_is_located_at(world: &TrailerCreationWorld, location: String) {
    let response = world.created();
    assert_eq!(response.trailer.trailer_type, "Reefer");
    assert_eq!(response.trailer.current_location, bare(&location));
}

#[then("the created trailer VIN is {vin}")]
fn the_created_trailer_vin_is(world: &TrailerCreationWorld, vin: String) {
    let response = world.created();
    assert_eq!(response.trailer.vin, Some(bare(&vin)));
}

#[then("the created trailer can be fetched by its unit number")]
fn the_created_trailer_can_be_fetched(world: &TrailerCreationWorld) {
    let unit_number = world.created().trailer.id;
    let runtime = world.runtime.get().expect("runtime");
    let query = world.query.get().expect("query");
    let fetched = runtime
        .0
        .block_on(query.get_trailer(GetTrailerRequest {
            id: unit_number.clone(),
        }))
        .expect("trailer found");
    assert_eq!(fetched.profile.unit_number, unit_number);
    assert_eq!(fetched.profile.trailer_type, "reefer");
}

#[then("the request fails with detail code {code}")]
fn the_request_fails_with_detail_code(world: &TrailerCreationWorld, code: String) {
    let result = world.last_result.get().expect("result should be set");
    let error = result.expect_err("create should fail");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let reported = error
        .details()
        .and_then(|details| details.get("code"))
        .and_then(|value| value.as_str())
        .map(ToOwned::to_owned);
    assert_eq!(reported, Some(bare(&code)));
}

#[then("{count} trailer is stored")]
fn one_trailer_is_stored(world: &TrailerCreationWorld, count: u64) {
    assert_eq!(world.stored_count(), count);
}

#[then("{count} trailers are stored")]
fn trailers_are_stored(world: &TrailerCreationWorld, count: u64) {
    assert_eq!(world.stored_count(), count);
}

#[scenario(
    path = "tests/features/trailer_creation.feature",
    name = "A valid trailer is created and can be looked up"
)]
fn a_valid_trailer_is_created(world: TrailerCreationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/trailer_creation.feature",
    name = "A second trailer with the same VIN is rejected"
)]
fn a_second_trailer_with_the_same_vin_is_rejected(world: TrailerCreationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/trailer_creation.feature",
    name = "A leased trailer without a lease end date is rejected"
)]
fn a_leased_trailer_without_a_lease_end_date_is_rejected(world: TrailerCreationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/trailer_creation.feature",
    name = "A malformed VIN is rejected"
)]
fn a_malformed_vin_is_rejected(world: TrailerCreationWorld) {
    let _ = world;
}
