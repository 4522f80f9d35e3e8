//! The appointment-booking state machine.
//!
//! One instance backs one booking dialog: it owns the form values, the
//! slot list for the selected date, and the submission lifecycle.
//! Nothing is shared between instances and nothing is persisted after
//! confirmation.

use time::{Date, Duration, OffsetDateTime, Time};
use tracing::{error, info, warn};

use crate::api::PublicApi;
use crate::error::{ApiResult, BookingError};
use crate::models::{dedup_slot_times, AppointmentRequest, AvailableSlot};
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    CollectingDetails,
    SubmittingBooking,
    BookingConfirmed,
}

/// Slot list for the currently selected date.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotAvailability {
    /// No date chosen yet.
    NotRequested,
    /// A query is in flight.
    Loading,
    /// Snapshot of open slots; empty means a fully booked day or no
    /// configured windows, which is a valid state of its own.
    Ready(Vec<AvailableSlot>),
    /// The lookup failed; the list must be refetched, not trusted.
    Unavailable(String),
}

/// Ties a slot response to the date selection that caused it. Responses
/// carrying an outdated token are discarded on arrival so a late list
/// cannot overwrite a more recent selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    pub service_id: i64,
    pub date: Date,
    seq: u64,
}

pub struct BookingWorkflow {
    service_id: i64,
    state: BookingState,
    /// Anchors the strictly-future date rule for this instance.
    today: Date,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,

    appointment_date: Option<Date>,
    appointment_time: Option<Time>,

    slots: SlotAvailability,
    slot_seq: u64,
    submit_error: Option<String>,
}

impl BookingWorkflow {
    pub fn new(service_id: i64) -> Self {
        Self::with_reference_date(service_id, local_today())
    }

    /// Like [`new`](Self::new) with an explicit "today", for callers
    /// that need a fixed reference date.
    pub fn with_reference_date(service_id: i64, today: Date) -> Self {
        BookingWorkflow {
            service_id,
            state: BookingState::CollectingDetails,
            today,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            appointment_date: None,
            appointment_time: None,
            slots: SlotAvailability::NotRequested,
            slot_seq: 0,
            submit_error: None,
        }
    }

    pub fn state(&self) -> BookingState {
        self.state
    }

    pub fn service_id(&self) -> i64 {
        self.service_id
    }

    pub fn appointment_date(&self) -> Option<Date> {
        self.appointment_date
    }

    pub fn appointment_time(&self) -> Option<Time> {
        self.appointment_time
    }

    pub fn slots(&self) -> &SlotAvailability {
        &self.slots
    }

    /// Submit-level error from the last failed submission, preserved
    /// alongside the entered field values.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Earliest date the picker should offer (tomorrow).
    pub fn min_selectable_date(&self) -> Date {
        self.today + Duration::days(1)
    }

    /// Choose the appointment date. A previously selected time belongs
    /// to the old date and is cleared; the returned query must be run
    /// against the slot endpoint and its outcome fed back through
    /// [`apply_slot_outcome`](Self::apply_slot_outcome).
    pub fn select_date(&mut self, date: Date) -> SlotQuery {
        self.appointment_date = Some(date);
        self.appointment_time = None;
        self.slots = SlotAvailability::Loading;
        self.slot_seq += 1;
        SlotQuery {
            service_id: self.service_id,
            date,
            seq: self.slot_seq,
        }
    }

    /// Query handle for the currently selected date, used to retry a
    /// failed lookup. None while no date is chosen.
    pub fn current_slot_query(&self) -> Option<SlotQuery> {
        self.appointment_date.map(|date| SlotQuery {
            service_id: self.service_id,
            date,
            seq: self.slot_seq,
        })
    }

    /// Accept or discard a slot-query outcome. Returns false when the
    /// token is stale and the outcome was dropped.
    pub fn apply_slot_outcome(
        &mut self,
        query: &SlotQuery,
        outcome: ApiResult<Vec<AvailableSlot>>,
    ) -> bool {
        if query.seq != self.slot_seq || Some(query.date) != self.appointment_date {
            warn!(
                service_id = self.service_id,
                stale_seq = query.seq,
                current_seq = self.slot_seq,
                "Discarding superseded slot response"
            );
            return false;
        }
        match outcome {
            Ok(slots) => {
                self.slots = SlotAvailability::Ready(dedup_slot_times(slots));
            }
            Err(err) => {
                // A stale list must not back a time selection.
                self.appointment_time = None;
                self.slots = SlotAvailability::Unavailable(err.user_message());
            }
        }
        true
    }

    /// Run a slot query to completion: fetch, then feed the outcome
    /// back in. Returns false when the outcome arrived stale.
    pub async fn run_slot_query<A: PublicApi>(&mut self, api: &A, query: SlotQuery) -> bool {
        let outcome = api.available_slots(query.service_id, query.date).await;
        self.apply_slot_outcome(&query, outcome)
    }

    /// Select a date and load its slots in one step.
    pub async fn choose_date<A: PublicApi>(&mut self, api: &A, date: Date) -> bool {
        let query = self.select_date(date);
        self.run_slot_query(api, query).await
    }

    /// Re-run the slot lookup for the already selected date after a
    /// failure. None when no date is selected.
    pub async fn retry_slot_query<A: PublicApi>(&mut self, api: &A) -> Option<bool> {
        let query = self.current_slot_query()?;
        self.slots = SlotAvailability::Loading;
        Some(self.run_slot_query(api, query).await)
    }

    /// Pick one of the offered time slots.
    pub fn select_time(&mut self, time: Time) {
        self.appointment_time = Some(time);
    }

    fn offered_slots(&self) -> Option<&[AvailableSlot]> {
        match &self.slots {
            SlotAvailability::Ready(slots) => Some(slots),
            _ => None,
        }
    }

    /// Synchronous validation pass over all fields at once. Submission
    /// is blocked while the returned map is non-empty.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name".into(), "Full name is required".into());
        } else if !validation::is_valid_name(&self.name) {
            errors.insert("name".into(), "Name must be at least 2 characters".into());
        }

        if self.email.trim().is_empty() {
            errors.insert("email".into(), "Email is required".into());
        } else if !validation::is_valid_email(&self.email) {
            errors.insert("email".into(), "Please enter a valid email address".into());
        }

        if self.phone.trim().is_empty() {
            errors.insert("phone".into(), "Phone number is required".into());
        } else if !validation::is_valid_phone(&self.phone) {
            errors.insert(
                "phone".into(),
                "Please enter a valid phone number (10-15 digits)".into(),
            );
        }

        match self.appointment_date {
            None => {
                errors.insert("appointment_date".into(), "Please select a date".into());
            }
            Some(date) if date <= self.today => {
                errors.insert(
                    "appointment_date".into(),
                    "Please select a date after today".into(),
                );
            }
            Some(_) => {}
        }

        match self.appointment_time {
            None => {
                errors.insert("appointment_time".into(), "Please select a time slot".into());
            }
            Some(time) => {
                let offered = self
                    .offered_slots()
                    .map(|slots| slots.iter().any(|s| s.time == time))
                    .unwrap_or(false);
                if !offered {
                    errors.insert(
                        "appointment_time".into(),
                        "Please select an available time slot".into(),
                    );
                }
            }
        }

        errors
    }

    /// Validate and submit. On success the workflow is complete; every
    /// failure path returns to `CollectingDetails` with the entered
    /// values intact.
    pub async fn submit<A: PublicApi>(&mut self, api: &A) -> Result<(), BookingError> {
        if self.state == BookingState::BookingConfirmed {
            return Err(BookingError::Completed);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            return Err(BookingError::Invalid(errors));
        }

        let (date, time) = match (self.appointment_date, self.appointment_time) {
            (Some(date), Some(time)) => (date, time),
            // unreachable after a clean validate() pass
            _ => return Err(BookingError::Invalid(self.validate())),
        };

        let request = AppointmentRequest {
            service_id: self.service_id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            appointment_date: date,
            appointment_time: time,
            message: self.message.clone(),
        };

        self.submit_error = None;
        self.state = BookingState::SubmittingBooking;
        info!(service_id = self.service_id, "Submitting appointment request");

        match api.create_appointment(&request).await {
            Ok(_ack) => {
                self.state = BookingState::BookingConfirmed;
                info!(service_id = self.service_id, "Appointment confirmed");
                Ok(())
            }
            Err(err) => {
                self.state = BookingState::CollectingDetails;
                if err.is_conflict() {
                    // The slot was taken while the form was open; force
                    // a fresh pick instead of retrying silently.
                    self.appointment_time = None;
                }
                self.submit_error = Some(err.user_message());
                error!(service_id = self.service_id, error = %err, "Appointment submission failed");
                Err(BookingError::Api(err))
            }
        }
    }
}

fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
