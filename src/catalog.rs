use crate::api::PublicApi;
use crate::error::ApiResult;
use crate::models::{log_schedule_warnings, ScheduleEntry, Service};

/// Read-only view over the public service catalog.
pub struct CatalogReader<A> {
    api: A,
}

impl<A: PublicApi> CatalogReader<A> {
    pub fn new(api: A) -> Self {
        CatalogReader { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Services for public display. The backend may or may not
    /// pre-filter inactive entries, so the active flag is enforced here
    /// as well.
    pub async fn public_services(&self) -> ApiResult<Vec<Service>> {
        let services = self.api.list_services().await?;
        Ok(services.into_iter().filter(|s| s.is_active).collect())
    }

    /// Look up a single service by identifier. Inactive services remain
    /// reachable here; only listings exclude them.
    pub async fn service_by_id(&self, service_id: i64) -> ApiResult<Option<Service>> {
        let services = self.api.list_services().await?;
        Ok(services.into_iter().find(|s| s.id == service_id))
    }

    /// Active weekly availability windows for a service.
    ///
    /// An empty result means the schedule is not configured yet and is
    /// not an error; callers should offer a direct-contact fallback
    /// instead of an empty grid.
    pub async fn weekly_schedule(&self, service_id: i64) -> ApiResult<Vec<ScheduleEntry>> {
        let entries = self.api.service_schedules(service_id).await?;
        let active: Vec<ScheduleEntry> = entries.into_iter().filter(|e| e.is_active).collect();
        log_schedule_warnings(service_id, &active);
        Ok(active)
    }
}
