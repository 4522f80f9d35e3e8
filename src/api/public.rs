use async_trait::async_trait;
use time::Date;

use crate::api::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    wire, AppointmentRequest, AvailableSlot, ContactMessage, PublicStats, ScheduleEntry, Service,
    SiteSettings,
};

/// The boundary the public site consumes: catalog, scheduling, booking,
/// contact and site chrome.
///
/// Kept behind a trait so workflows can be exercised against an
/// in-memory implementation.
#[async_trait]
pub trait PublicApi: Send + Sync {
    /// `GET /services`, in backend-defined order. May include inactive
    /// entries; public listings must filter on the active flag.
    async fn list_services(&self) -> ApiResult<Vec<Service>>;

    /// `GET /services/{id}/schedules`, unfiltered.
    async fn service_schedules(&self, service_id: i64) -> ApiResult<Vec<ScheduleEntry>>;

    /// `GET /services/{id}/available-slots?date=YYYY-MM-DD`. A snapshot
    /// against bookings at query time; no hold is established.
    async fn available_slots(&self, service_id: i64, date: Date) -> ApiResult<Vec<AvailableSlot>>;

    /// `POST /appointments`. The backend is the sole authority on
    /// double-booking; a lost race surfaces as a conflict.
    async fn create_appointment(&self, request: &AppointmentRequest) -> ApiResult<Option<String>>;

    /// `POST /contact`.
    async fn submit_contact(&self, message: &ContactMessage) -> ApiResult<Option<String>>;

    /// `GET /settings`.
    async fn site_settings(&self) -> ApiResult<SiteSettings>;

    /// `GET /stats`.
    async fn site_stats(&self) -> ApiResult<PublicStats>;
}

#[async_trait]
impl PublicApi for ApiClient {
    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        self.get("/services").await
    }

    async fn service_schedules(&self, service_id: i64) -> ApiResult<Vec<ScheduleEntry>> {
        self.get(&format!("/services/{}/schedules", service_id)).await
    }

    async fn available_slots(&self, service_id: i64, date: Date) -> ApiResult<Vec<AvailableSlot>> {
        let endpoint = format!(
            "/services/{}/available-slots?date={}",
            service_id,
            wire::encode_date(date)
        );
        self.get(&endpoint).await
    }

    async fn create_appointment(&self, request: &AppointmentRequest) -> ApiResult<Option<String>> {
        self.post_ack("/appointments", request).await
    }

    async fn submit_contact(&self, message: &ContactMessage) -> ApiResult<Option<String>> {
        self.post_ack("/contact", message).await
    }

    async fn site_settings(&self) -> ApiResult<SiteSettings> {
        self.get("/settings").await
    }

    async fn site_stats(&self) -> ApiResult<PublicStats> {
        self.get("/stats").await
    }
}
