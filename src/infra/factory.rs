use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::models::catalog::Catalog;
use crate::domain::ports::{Clock, FixtureProvider, IdGenerator};
use crate::domain::services::selection::SelectionTracker;
use crate::error::AppError;
use crate::infra::clock::{SystemClock, UuidGenerator};
use crate::infra::fixtures::{seed_appointments, StaticFixtures};
use crate::infra::repositories::memory_appointment_repo::MemoryAppointmentRepo;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    build_state(config, &StaticFixtures, Arc::new(SystemClock), Arc::new(UuidGenerator))
}

/// Wires the state from explicit collaborators so tests can pin time and ids.
pub fn build_state(
    config: &Config,
    fixtures: &dyn FixtureProvider,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
) -> Result<AppState, AppError> {
    let catalog = Catalog::load(fixtures)?;
    info!(
        professionals = catalog.professionals().len(),
        services = catalog.services().len(),
        slots = catalog.time_slots().len(),
        "Catalog loaded"
    );

    for time in &config.blocked_times {
        if !catalog.has_slot(time) {
            warn!("Blocked time {} is not part of the slot catalog", time);
        }
    }

    let seeded = seed_appointments(
        &catalog,
        clock.as_ref(),
        ids.as_ref(),
        &mut rand::thread_rng(),
        config.seed_appointments,
    );
    info!("Seeded {} appointments", seeded.len());

    let tracker = SelectionTracker::new(clock.clone(), ids);

    Ok(AppState {
        catalog: Arc::new(catalog),
        blocked_times: Arc::new(config.blocked_times.iter().cloned().collect::<HashSet<_>>()),
        appointment_repo: Arc::new(MemoryAppointmentRepo::with_appointments(seeded)),
        clock,
        tracker: Arc::new(Mutex::new(tracker)),
    })
}
