//! Reconciliation of the local shift store with the remote shift service.
//!
//! [`ShiftController`] owns the [`ShiftStore`] for the selected month and is
//! the only code that mutates it. Each operation follows one of three
//! patterns:
//!
//! - **Server-confirmed** (add, update): the request goes out first and the
//!   record the service returns is upserted. A failure leaves the store as it
//!   was.
//! - **Optimistic** (delete): the shift disappears from the store at once,
//!   then the request goes out. A failure reloads the whole month, so the
//!   store never drifts from the service.
//! - **Refresh on success** (completion toggle, per-shift rate, monthly
//!   rate): these change pay figures across the month, so the month is
//!   reloaded rather than patched.
//!
//! ## Concurrency
//!
//! The controller is driven from a single task. Methods take `&self` and
//! keep state in `Cell`/`RefCell`; no borrow is held across an `.await`, so
//! several operations can be in flight at once (for example under
//! `tokio::join!`). Two rules keep the store consistent:
//!
//! - Each month fetch carries a [`FetchTicket`]. Only the most recently
//!   issued fetch for the selected month may replace the store; anything
//!   older is dropped as [`FetchOutcome::Stale`]. A confirmed add, update or
//!   delete also retires every fetch already in flight, since those
//!   responses predate the change.
//! - Only one mutation per shift id may be pending. A second one is
//!   rejected with [`ShiftError::MutationInFlight`].
//!
//! ## Mutation lifecycle
//!
//! ```text
//! Idle ──▶ Submitting ──▶ Applied ──▶ (refresh) ──▶ Idle
//!                    └──▶ Failed ──▶ (rollback) ──▶ Idle
//! ```
//!
//! [`ShiftController::mutation_state`] reports `Applied` while the
//! follow-up refresh of a toggle or rate change runs, and `Failed` while a
//! failed delete reloads the month.

use crate::api::{ShiftService, ShiftsResponse};
use crate::libs::error::ShiftError;
use crate::libs::month::YearMonth;
use crate::libs::rate::HourlyRate;
use crate::libs::shift::{Shift, ShiftDraft};
use crate::libs::store::ShiftStore;
use crate::libs::summary::{ShiftTotals, Totals};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Tolerance when comparing the service's month totals with local ones.
const TOTALS_EPSILON: f64 = 0.005;

/// Result of applying a month fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the store contents.
    Applied,
    /// The response belonged to an older request and was dropped.
    Stale,
}

/// Where a shift's pending mutation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    Submitting,
    Applied,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Update,
    Delete,
    Completion,
    RateOverride,
}

/// Identifies one month fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    month: YearMonth,
    generation: u64,
}

impl FetchTicket {
    pub fn month(&self) -> YearMonth {
        self.month
    }
}

/// Read-only copy of the store handed to views.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSnapshot {
    pub month: YearMonth,
    pub shifts: Vec<Shift>,
    pub totals: Totals,
    pub monthly_default_rate: f64,
    /// False until the first successful fetch for `month`.
    pub loaded: bool,
}

pub struct ShiftController<S: ShiftService> {
    service: S,
    month: Cell<YearMonth>,
    generation: Cell<u64>,
    fetches_in_flight: Cell<usize>,
    loaded: Cell<bool>,
    /// `0.0` until the selected month has loaded.
    monthly_default_rate: Cell<f64>,
    store: RefCell<ShiftStore>,
    in_flight: RefCell<HashMap<i64, (MutationKind, MutationState)>>,
}

impl<S: ShiftService> ShiftController<S> {
    /// Creates a controller for `month`. Nothing is loaded until
    /// [`refresh`](Self::refresh) or [`select_month`](Self::select_month).
    pub fn new(service: S, month: YearMonth) -> Self {
        Self {
            service,
            month: Cell::new(month),
            generation: Cell::new(0),
            fetches_in_flight: Cell::new(0),
            loaded: Cell::new(false),
            monthly_default_rate: Cell::new(0.0),
            store: RefCell::new(ShiftStore::new()),
            in_flight: RefCell::new(HashMap::new()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn month(&self) -> YearMonth {
        self.month.get()
    }

    /// True while any month fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.fetches_in_flight.get() > 0
    }

    pub fn mutation_state(&self, id: i64) -> MutationState {
        self.in_flight
            .borrow()
            .get(&id)
            .map_or(MutationState::Idle, |(_, state)| *state)
    }

    pub fn shift(&self, id: i64) -> Option<Shift> {
        self.store.borrow().get(id).cloned()
    }

    pub fn snapshot(&self) -> Result<MonthSnapshot, ShiftError> {
        let store = self.store.borrow();
        let monthly_default_rate = self.monthly_default_rate.get();
        Ok(MonthSnapshot {
            month: self.month.get(),
            shifts: store.shifts().to_vec(),
            totals: store.shifts().totals(monthly_default_rate)?,
            monthly_default_rate,
            loaded: self.loaded.get(),
        })
    }

    /// Switches to `month` and loads it.
    ///
    /// The previous month's shifts are dropped immediately. A fetch still
    /// running for another month can no longer touch the store.
    pub async fn select_month(&self, month: YearMonth) -> Result<FetchOutcome, ShiftError> {
        let ticket = self.begin_fetch(month);
        let result = self.service.fetch_month(month).await;
        self.finish_fetch(ticket, result)
    }

    /// Reloads the selected month.
    pub async fn refresh(&self) -> Result<FetchOutcome, ShiftError> {
        self.select_month(self.month.get()).await
    }

    /// Registers a fetch for `month`, selecting it, and returns its ticket.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&self, month: YearMonth) -> FetchTicket {
        if month != self.month.get() {
            self.month.set(month);
            self.loaded.set(false);
            self.monthly_default_rate.set(0.0);
            self.store.borrow_mut().replace_all(Vec::new());
        }
        let generation = self.next_generation();
        self.fetches_in_flight.set(self.fetches_in_flight.get() + 1);
        tracing::debug!(%month, generation, "fetch started");
        FetchTicket { month, generation }
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Responses for a superseded ticket are discarded whether they
    /// succeeded or failed; they are not reported as errors.
    pub fn finish_fetch(
        &self,
        ticket: FetchTicket,
        result: Result<ShiftsResponse, ShiftError>,
    ) -> Result<FetchOutcome, ShiftError> {
        self.fetches_in_flight.set(self.fetches_in_flight.get().saturating_sub(1));

        if ticket.generation != self.generation.get() || ticket.month != self.month.get() {
            tracing::debug!(month = %ticket.month, generation = ticket.generation, "discarding stale fetch");
            return Ok(FetchOutcome::Stale);
        }

        let response = result?;
        self.check_server_totals(&response);
        self.monthly_default_rate.set(response.monthly_default_rate);

        // A shift whose delete has not failed stays hidden.
        let shifts = {
            let in_flight = self.in_flight.borrow();
            response
                .shifts
                .into_iter()
                .filter(|s| {
                    !matches!(
                        in_flight.get(&s.id),
                        Some((MutationKind::Delete, state)) if *state != MutationState::Failed
                    )
                })
                .collect()
        };
        self.store.borrow_mut().replace_all(shifts);
        self.loaded.set(true);
        tracing::debug!(month = %ticket.month, shifts = self.store.borrow().len(), "month loaded");
        Ok(FetchOutcome::Applied)
    }

    /// Creates a shift. The store only changes once the service has
    /// confirmed the record and assigned its id.
    pub async fn add(&self, draft: &ShiftDraft) -> Result<Shift, ShiftError> {
        let created = self.service.create_shift(&draft.to_create_input()).await?;
        tracing::debug!(id = created.id, "shift created");
        self.apply_saved(created)
    }

    /// Replaces shift `id` with `draft`, upserting the confirmed record.
    pub async fn update(&self, id: i64, draft: &ShiftDraft) -> Result<Shift, ShiftError> {
        let pending = self.begin_mutation(id, MutationKind::Update)?;
        match self.service.update_shift(id, &draft.to_update_input(id)).await {
            Ok(saved) => {
                pending.applied();
                self.apply_saved(saved)
            }
            Err(e) => {
                pending.failed(&e);
                Err(e)
            }
        }
    }

    /// Deletes shift `id`, removing it locally before the service answers.
    ///
    /// On failure the month is reloaded from the service, bringing the shift
    /// back, and the original error is returned.
    pub async fn delete(&self, id: i64) -> Result<Option<Shift>, ShiftError> {
        let pending = self.begin_mutation(id, MutationKind::Delete)?;
        let removed = self.store.borrow_mut().remove(id);
        if removed.is_none() {
            tracing::debug!(id, "shift to delete was not in the store");
        }

        match self.service.delete_shift(id).await {
            Ok(()) => {
                pending.applied();
                self.retire_fetches("delete");
                Ok(removed)
            }
            Err(e) => {
                pending.failed(&e);
                if let Err(reload) = self.refresh().await {
                    tracing::warn!(id, error = %reload, "reload after failed delete also failed");
                }
                Err(e)
            }
        }
    }

    /// Marks shift `id` completed or not, then reloads the month.
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<(), ShiftError> {
        let pending = self.begin_mutation(id, MutationKind::Completion)?;
        if let Err(e) = self.service.set_completed(id, completed).await {
            pending.failed(&e);
            return Err(e);
        }
        pending.applied();
        self.refresh().await?;
        Ok(())
    }

    /// Overrides the hourly rate of shift `id`; `None` makes it follow the
    /// monthly default again. Reloads the month on success.
    pub async fn set_shift_rate(&self, id: i64, rate: Option<HourlyRate>) -> Result<(), ShiftError> {
        let pending = self.begin_mutation(id, MutationKind::RateOverride)?;
        let shift = self.shift(id).ok_or(ShiftError::UnknownShift(id))?;
        let draft = ShiftDraft::new(shift.date, shift.start_time, shift.end_time, rate)?.completed(shift.is_completed);

        if let Err(e) = self.service.update_shift(id, &draft.to_update_input(id)).await {
            pending.failed(&e);
            return Err(e);
        }
        pending.applied();
        self.refresh().await?;
        Ok(())
    }

    /// Sets the default rate of the selected month and reloads it, since
    /// every shift without an override changes pay.
    pub async fn set_monthly_rate(&self, rate: HourlyRate) -> Result<(), ShiftError> {
        let month = self.month.get();
        self.service.set_monthly_rate(month, rate).await?;
        tracing::debug!(%month, %rate, "monthly rate saved");
        self.refresh().await?;
        Ok(())
    }

    fn begin_mutation(&self, id: i64, kind: MutationKind) -> Result<PendingMutation<'_>, ShiftError> {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.contains_key(&id) {
            return Err(ShiftError::MutationInFlight(id));
        }
        in_flight.insert(id, (kind, MutationState::Submitting));
        tracing::debug!(id, ?kind, state = ?MutationState::Submitting, "mutation submitted");
        Ok(PendingMutation {
            in_flight: &self.in_flight,
            id,
            kind,
        })
    }

    /// Puts a service-confirmed record into the store when it belongs to
    /// the selected month, and drops it otherwise (it may have moved).
    fn apply_saved(&self, saved: Shift) -> Result<Shift, ShiftError> {
        self.retire_fetches("save");
        if YearMonth::of(saved.date) != self.month.get() {
            self.store.borrow_mut().remove(saved.id);
            return Ok(saved);
        }
        let saved = saved.resolved(self.monthly_default_rate.get())?;
        self.store.borrow_mut().upsert(saved.clone());
        Ok(saved)
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    /// Makes every fetch already in flight stale. Their responses were
    /// produced before a change the store now reflects.
    fn retire_fetches(&self, cause: &str) {
        let generation = self.next_generation();
        if self.is_loading() {
            tracing::debug!(cause, generation, "retiring in-flight fetches");
        }
    }

    fn check_server_totals(&self, response: &ShiftsResponse) {
        match response.shifts.totals(response.monthly_default_rate) {
            Ok(local) => {
                let hours_drift = (local.total_hours - response.total_hours).abs();
                let pay_drift = (local.total_pay - response.total_pay).abs();
                if hours_drift > TOTALS_EPSILON || pay_drift > TOTALS_EPSILON {
                    tracing::debug!(
                        server_hours = response.total_hours,
                        local_hours = local.total_hours,
                        server_pay = response.total_pay,
                        local_pay = local.total_pay,
                        "month totals differ from the sum of shifts"
                    );
                }
            }
            Err(e) => tracing::warn!(error = %e, "month contains a shift with an invalid time range"),
        }
    }
}

/// Marks a shift id as having a mutation in flight until dropped.
struct PendingMutation<'a> {
    in_flight: &'a RefCell<HashMap<i64, (MutationKind, MutationState)>>,
    id: i64,
    kind: MutationKind,
}

impl PendingMutation<'_> {
    fn applied(&self) {
        self.set_state(MutationState::Applied);
        tracing::debug!(id = self.id, kind = ?self.kind, state = ?MutationState::Applied, "mutation applied");
    }

    fn failed(&self, error: &ShiftError) {
        self.set_state(MutationState::Failed);
        tracing::warn!(id = self.id, kind = ?self.kind, state = ?MutationState::Failed, %error, "mutation failed");
    }

    fn set_state(&self, state: MutationState) {
        if let Some(entry) = self.in_flight.borrow_mut().get_mut(&self.id) {
            entry.1 = state;
        }
    }
}

impl Drop for PendingMutation<'_> {
    fn drop(&mut self) {
        self.in_flight.borrow_mut().remove(&self.id);
    }
}
