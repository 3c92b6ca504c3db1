use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::models::catalog::Catalog;
use crate::domain::ports::{AppointmentRepository, Clock};
use crate::domain::services::selection::SelectionTracker;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub blocked_times: Arc<HashSet<String>>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub clock: Arc<dyn Clock>,
    pub tracker: Arc<Mutex<SelectionTracker>>,
}
