//! Shared world state for garden lifecycle BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use rstest::fixture;
use verdant::garden::{
    adapters::memory::{InMemoryGardenRepository, InMemoryTaskRecordRepository},
    domain::{GardenState, UserId},
    ports::GardenRepository,
    services::{GardenLifecycleService, GardenReport, GardenServiceError},
};

/// Midday UTC on 2026-03-14, the day every scenario runs on.
const SCENARIO_NOON_UNIX: i64 = 1_773_489_600;

/// Clock frozen at one instant so "today" never changes mid-scenario.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock frozen at the scenario instant.
    #[must_use]
    pub fn scenario_noon() -> Self {
        Self(DateTime::<Utc>::from_timestamp(SCENARIO_NOON_UNIX, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the BDD world.
pub type TestGardenService =
    GardenLifecycleService<InMemoryGardenRepository, InMemoryTaskRecordRepository, FixedClock>;

/// Scenario world for garden lifecycle behaviour tests.
pub struct GardenWorld {
    pub service: TestGardenService,
    pub gardens: Arc<InMemoryGardenRepository>,
    pub user_id: UserId,
    pub today: NaiveDate,
    pub last_report: Option<Result<GardenReport, GardenServiceError>>,
}

impl GardenWorld {
    /// Creates a world for a fresh user with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let gardens = Arc::new(InMemoryGardenRepository::new());
        let clock = FixedClock::scenario_noon();
        let service = GardenLifecycleService::new(
            Arc::clone(&gardens),
            Arc::new(InMemoryTaskRecordRepository::new()),
            Arc::new(clock),
        );
        Self {
            service,
            gardens,
            user_id: UserId::new(),
            today: clock.utc().date_naive(),
            last_report: None,
        }
    }

    /// Returns the report of the latest step, failing when none succeeded.
    pub fn report(&self) -> Result<&GardenReport, eyre::Report> {
        let result = self
            .last_report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing garden report in scenario world"))?;
        result
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected garden failure: {err}"))
    }

    /// Reads the user's stored garden.
    pub fn stored_garden(&self) -> Result<GardenState, eyre::Report> {
        run_async(self.gardens.find_by_user(self.user_id))
            .map_err(|err| eyre::eyre!("garden lookup failed: {err}"))?
            .ok_or_else(|| eyre::eyre!("expected a stored garden"))
    }
}

impl Default for GardenWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GardenWorld {
    GardenWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
