use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use futures_timer::Delay;

use super::field::{Field, FieldErrors, FormFields};
use super::transport::{
    Ack, DEFAULT_SUBMIT_LATENCY, SimulatedTransport, Transport, TransportError,
};
use super::validation::{validate_field, validate_form};

pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(5);

pub const SUCCESS_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_BODY: &str = "Thank you for your message! I'll get back to you soon.";
pub const ERROR_TITLE: &str = "Failed to Send Message";
pub const ERROR_BODY: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Editing,
    Submitting,
    Success,
    Error,
}

/// What the status banner shows. `Submitting` is reported as `Idle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Success,
    Error,
}

impl From<SubmitState> for SubmissionStatus {
    fn from(state: SubmitState) -> Self {
        match state {
            SubmitState::Success => SubmissionStatus::Success,
            SubmitState::Error => SubmissionStatus::Error,
            SubmitState::Editing | SubmitState::Submitting => SubmissionStatus::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StatusTicket(pub u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the transport was not called.
    Rejected(FieldErrors),
    Sent(Ack),
    Failed(TransportError),
    /// A submission was already in flight.
    Ignored,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusBanner {
    pub status: SubmissionStatus,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContactFormOptions {
    pub submit_latency: Duration,
    pub status_timeout: Duration,
}

impl Default for ContactFormOptions {
    fn default() -> Self {
        Self {
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }
}

impl ContactFormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_latency(mut self, submit_latency: Duration) -> Self {
        self.submit_latency = submit_latency;
        self
    }

    pub fn status_timeout(mut self, status_timeout: Duration) -> Self {
        self.status_timeout = status_timeout;
        self
    }
}

#[derive(Clone, Debug)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub submit_state: SubmitState,
    pub status: SubmissionStatus,
    pub submit_count: u32,
    pub last_transport_error: Option<TransportError>,
}

impl FormSnapshot {
    /// The submit trigger is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.submit_state != SubmitState::Submitting
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("form state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("invalid submit state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: SubmitState, to: SubmitState },
}

pub type FormResult<T> = Result<T, FormError>;

struct FormState {
    fields: FormFields,
    errors: FieldErrors,
    submit_state: SubmitState,
    submit_count: u32,
    status_ticket: StatusTicket,
    last_transport_error: Option<TransportError>,
}

impl FormState {
    fn bump_status_ticket(&mut self) -> StatusTicket {
        self.status_ticket = StatusTicket(self.status_ticket.0.wrapping_add(1));
        self.status_ticket
    }

    fn status_showing(&self) -> bool {
        matches!(self.submit_state, SubmitState::Success | SubmitState::Error)
    }
}

pub struct ContactFormController<T = SimulatedTransport>
where
    T: Transport + 'static,
{
    options: ContactFormOptions,
    transport: Arc<T>,
    state: Arc<RwLock<FormState>>,
}

impl<T> Clone for ContactFormController<T>
where
    T: Transport + 'static,
{
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            transport: self.transport.clone(),
            state: self.state.clone(),
        }
    }
}

impl ContactFormController<SimulatedTransport> {
    pub fn simulated(options: ContactFormOptions) -> Self {
        Self::new(SimulatedTransport::new(options.submit_latency), options)
    }
}

impl<T> ContactFormController<T>
where
    T: Transport + 'static,
{
    pub fn new(transport: T, options: ContactFormOptions) -> Self {
        Self {
            options,
            transport: Arc::new(transport),
            state: Arc::new(RwLock::new(FormState {
                fields: FormFields::default(),
                errors: FieldErrors::default(),
                submit_state: SubmitState::Editing,
                submit_count: 0,
                status_ticket: StatusTicket(0),
                last_transport_error: None,
            })),
        }
    }

    pub fn options(&self) -> ContactFormOptions {
        self.options
    }

    /// Stores a keystroke. Clears the field's error and any showing status banner.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> FormResult<()> {
        let mut state = write_lock(&self.state, "writing field value")?;
        state.fields.set(field, value);
        state.errors.clear_field(field);
        if state.status_showing() {
            tracing::debug!(%field, "field edit cleared status banner");
            transition_submit_state(&mut state, SubmitState::Editing)?;
            state.last_transport_error = None;
        }
        state.bump_status_ticket();
        Ok(())
    }

    /// Validates one field and stores the message. Returns the message (empty if valid).
    pub fn blur(&self, field: Field) -> FormResult<String> {
        let mut state = write_lock(&self.state, "validating blurred field")?;
        let message = validate_field(field, state.fields.get(field));
        state.errors.set(field, message.clone());
        Ok(message)
    }

    pub async fn submit(&self) -> FormResult<SubmitOutcome> {
        let fields = {
            let mut state = write_lock(&self.state, "preparing submit")?;
            if state.submit_state == SubmitState::Submitting {
                tracing::debug!("submit ignored while a submission is in flight");
                return Ok(SubmitOutcome::Ignored);
            }

            let errors = validate_form(&state.fields);
            state.errors = errors.clone();
            if !errors.is_valid() {
                if state.status_showing() {
                    transition_submit_state(&mut state, SubmitState::Editing)?;
                    state.last_transport_error = None;
                }
                state.bump_status_ticket();
                tracing::debug!(
                    failing = errors.iter_errors().count(),
                    "submit rejected by validation"
                );
                return Ok(SubmitOutcome::Rejected(errors));
            }

            transition_submit_state(&mut state, SubmitState::Submitting)?;
            state.submit_count = state.submit_count.saturating_add(1);
            state.last_transport_error = None;
            state.bump_status_ticket();
            state.fields.clone()
        };

        let in_flight = InFlightSubmit {
            state: &self.state,
            armed: true,
        };
        let result = self.transport.send(fields).await;
        in_flight.disarm();

        let mut state = write_lock(&self.state, "completing submit")?;
        let outcome = match result {
            Ok(ack) => {
                transition_submit_state(&mut state, SubmitState::Success)?;
                state.fields.clear();
                state.errors.clear();
                tracing::info!(submit_count = state.submit_count, "contact message sent");
                SubmitOutcome::Sent(ack)
            }
            Err(error) => {
                transition_submit_state(&mut state, SubmitState::Error)?;
                state.last_transport_error = Some(error.clone());
                tracing::warn!(%error, "contact message failed to send");
                SubmitOutcome::Failed(error)
            }
        };
        state.bump_status_ticket();
        Ok(outcome)
    }

    /// Waits for the status timeout, then hides the banner unless an edit or another
    /// submit happened in the meantime. Returns whether the banner was hidden.
    pub async fn expire_status(&self) -> FormResult<bool> {
        let ticket = {
            let state = read_lock(&self.state, "capturing status ticket")?;
            if !state.status_showing() {
                return Ok(false);
            }
            state.status_ticket
        };

        Delay::new(self.options.status_timeout).await;

        let mut state = write_lock(&self.state, "expiring status banner")?;
        if state.status_ticket != ticket || !state.status_showing() {
            return Ok(false);
        }
        transition_submit_state(&mut state, SubmitState::Editing)?;
        state.last_transport_error = None;
        state.bump_status_ticket();
        tracing::debug!("status banner expired");
        Ok(true)
    }

    /// Submits, then keeps the banner up for the status timeout. The flag reports
    /// whether the banner was hidden by the timeout rather than by a newer edit.
    pub async fn submit_and_expire(&self) -> FormResult<(SubmitOutcome, bool)> {
        let outcome = self.submit().await?;
        let expired = match outcome {
            SubmitOutcome::Sent(_) | SubmitOutcome::Failed(_) => self.expire_status().await?,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => false,
        };
        Ok((outcome, expired))
    }

    pub fn dismiss_status(&self) -> FormResult<bool> {
        let mut state = write_lock(&self.state, "dismissing status banner")?;
        if !state.status_showing() {
            return Ok(false);
        }
        transition_submit_state(&mut state, SubmitState::Editing)?;
        state.last_transport_error = None;
        state.bump_status_ticket();
        Ok(true)
    }

    pub fn reset(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "resetting form")?;
        if state.submit_state != SubmitState::Submitting {
            state.submit_state = SubmitState::Editing;
        }
        state.fields.clear();
        state.errors.clear();
        state.last_transport_error = None;
        state.bump_status_ticket();
        Ok(())
    }

    pub fn snapshot(&self) -> FormResult<FormSnapshot> {
        let state = read_lock(&self.state, "creating form snapshot")?;
        Ok(FormSnapshot {
            fields: state.fields.clone(),
            errors: state.errors.clone(),
            submit_state: state.submit_state,
            status: state.submit_state.into(),
            submit_count: state.submit_count,
            last_transport_error: state.last_transport_error.clone(),
        })
    }

    pub fn field_error(&self, field: Field) -> FormResult<String> {
        Ok(read_lock(&self.state, "reading field error")?
            .errors
            .get(field)
            .to_owned())
    }

    pub fn status_ticket(&self) -> FormResult<StatusTicket> {
        Ok(read_lock(&self.state, "reading status ticket")?.status_ticket)
    }

    pub fn status_banner(&self) -> FormResult<Option<StatusBanner>> {
        let state = read_lock(&self.state, "reading status banner")?;
        Ok(match state.submit_state {
            SubmitState::Success => Some(StatusBanner {
                status: SubmissionStatus::Success,
                title: SUCCESS_TITLE,
                body: SUCCESS_BODY,
            }),
            SubmitState::Error => Some(StatusBanner {
                status: SubmissionStatus::Error,
                title: ERROR_TITLE,
                body: ERROR_BODY,
            }),
            SubmitState::Editing | SubmitState::Submitting => None,
        })
    }
}

/// Returns the form to `Editing` if a submit future is dropped before the transport
/// resolves. Fields are kept so the user can send again.
struct InFlightSubmit<'a> {
    state: &'a RwLock<FormState>,
    armed: bool,
}

impl InFlightSubmit<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightSubmit<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if state.submit_state == SubmitState::Submitting {
            state.submit_state = SubmitState::Editing;
            state.bump_status_ticket();
            tracing::debug!("submit dropped before the transport resolved");
        }
    }
}

fn transition_submit_state(state: &mut FormState, next: SubmitState) -> FormResult<()> {
    let current = state.submit_state;
    if current == next {
        return Ok(());
    }

    let allowed = matches!(
        (current, next),
        (SubmitState::Editing, SubmitState::Submitting)
            | (SubmitState::Submitting, SubmitState::Success)
            | (SubmitState::Submitting, SubmitState::Error)
            | (SubmitState::Success, SubmitState::Submitting)
            | (SubmitState::Error, SubmitState::Submitting)
            | (SubmitState::Success, SubmitState::Editing)
            | (SubmitState::Error, SubmitState::Editing)
    );
    if !allowed {
        return Err(FormError::InvalidStateTransition {
            from: current,
            to: next,
        });
    }
    tracing::debug!(from = ?current, to = ?next, "submit state transition");
    state.submit_state = next;
    Ok(())
}

fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
