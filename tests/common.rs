use barbershop_booking::{
    api::router::create_router,
    config::Config,
    domain::models::appointment::{Appointment, NewAppointmentParams},
    infra::{
        clock::{FixedClock, SequentialIdGenerator},
        factory::build_state,
        fixtures::StaticFixtures,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let config = Config {
            seed_appointments: 0,
            ..Config::default()
        };

        // Wednesday
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap()));
        let ids = Arc::new(SequentialIdGenerator::new("apt"));

        let state = Arc::new(build_state(&config, &StaticFixtures, clock, ids).expect("Failed to build state"));
        let router = create_router(state.clone());

        Self { router, state }
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn send_json(&self, method: &str, uri: &str, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_empty(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn insert_appointment(&self, id: &str, professional_id: &str, date: NaiveDate, time: &str) -> Appointment {
        let appointment = Appointment::new(NewAppointmentParams {
            id: id.to_string(),
            professional_id: professional_id.to_string(),
            service_id: "1".to_string(),
            date,
            time: time.to_string(),
            customer_name: "Seeded Customer".to_string(),
            customer_phone: "(11) 90000-0000".to_string(),
            created_at: Utc::now(),
        });
        self.state.appointment_repo.create(&appointment).await.unwrap()
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
