#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use time::{Date, Time};

use cidco_mitra_client::error::{ApiError, ApiResult};
use cidco_mitra_client::models::{
    AppointmentRequest, AvailableSlot, ContactMessage, PublicStats, ScheduleDay, ScheduleEntry,
    Service, SiteSettings,
};
use cidco_mitra_client::PublicApi;

/// Failure shapes a test can script without a live transport.
#[derive(Debug, Clone)]
pub enum FakeFailure {
    Server(u16, String),
    Conflict(String),
}

impl FakeFailure {
    pub fn server(message: &str) -> Self {
        FakeFailure::Server(500, message.to_string())
    }

    pub fn conflict(message: &str) -> Self {
        FakeFailure::Conflict(message.to_string())
    }

    fn to_error(&self) -> ApiError {
        match self {
            FakeFailure::Server(status, message) => ApiError::Server {
                status: *status,
                message: message.clone(),
            },
            FakeFailure::Conflict(message) => ApiError::Conflict(message.clone()),
        }
    }
}

/// In-memory `PublicApi` with scriptable responses.
#[derive(Default)]
pub struct FakePublicApi {
    pub services: Vec<Service>,
    pub schedules: Vec<ScheduleEntry>,
    pub slots: Mutex<HashMap<Date, Result<Vec<AvailableSlot>, FakeFailure>>>,
    /// Consumed front to back by `create_appointment`; empty means
    /// unconditional success.
    pub booking_results: Mutex<VecDeque<Result<Option<String>, FakeFailure>>>,
    pub booked: Mutex<Vec<AppointmentRequest>>,
    pub contacts: Mutex<Vec<ContactMessage>>,
    pub slot_queries: Mutex<Vec<(i64, Date)>>,
}

impl FakePublicApi {
    pub fn with_slots(self, date: Date, slots: Vec<AvailableSlot>) -> Self {
        self.slots.lock().unwrap().insert(date, Ok(slots));
        self
    }

    pub fn with_slot_failure(self, date: Date, failure: FakeFailure) -> Self {
        self.slots.lock().unwrap().insert(date, Err(failure));
        self
    }

    pub fn with_booking_result(self, result: Result<Option<String>, FakeFailure>) -> Self {
        self.booking_results.lock().unwrap().push_back(result);
        self
    }
}

#[async_trait]
impl PublicApi for FakePublicApi {
    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        Ok(self.services.clone())
    }

    async fn service_schedules(&self, _service_id: i64) -> ApiResult<Vec<ScheduleEntry>> {
        Ok(self.schedules.clone())
    }

    async fn available_slots(&self, service_id: i64, date: Date) -> ApiResult<Vec<AvailableSlot>> {
        self.slot_queries.lock().unwrap().push((service_id, date));
        match self.slots.lock().unwrap().get(&date) {
            Some(Ok(slots)) => Ok(slots.clone()),
            Some(Err(failure)) => Err(failure.to_error()),
            None => Ok(Vec::new()),
        }
    }

    async fn create_appointment(&self, request: &AppointmentRequest) -> ApiResult<Option<String>> {
        let scripted = self.booking_results.lock().unwrap().pop_front();
        match scripted.unwrap_or(Ok(Some("Appointment booked".to_string()))) {
            Ok(ack) => {
                self.booked.lock().unwrap().push(request.clone());
                Ok(ack)
            }
            Err(failure) => Err(failure.to_error()),
        }
    }

    async fn submit_contact(&self, message: &ContactMessage) -> ApiResult<Option<String>> {
        self.contacts.lock().unwrap().push(message.clone());
        Ok(Some("Message received".to_string()))
    }

    async fn site_settings(&self) -> ApiResult<SiteSettings> {
        Ok(SiteSettings::default())
    }

    async fn site_stats(&self) -> ApiResult<PublicStats> {
        Ok(PublicStats::default())
    }
}

pub fn service(id: i64, title: &str, is_active: bool) -> Service {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "is_active": is_active,
    }))
    .unwrap()
}

pub fn schedule_entry(id: i64, day: ScheduleDay, start: Time, end: Time, active: bool) -> ScheduleEntry {
    ScheduleEntry {
        id,
        day_of_week: day,
        start_time: start,
        end_time: end,
        is_active: active,
    }
}

pub fn slot(time: Time) -> AvailableSlot {
    AvailableSlot { time }
}

/// Install a subscriber once so traced test runs show workflow logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cidco_mitra_client=debug")),
        )
        .with_test_writer()
        .try_init();
}
