use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_timer::Delay;

use super::field::FormFields;

pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// Receipt for a delivered message.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ack {
    pub reference: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("transport unavailable: {0}")]
    Unavailable(String),
    #[error("message rejected: {0}")]
    Rejected(String),
}

pub type BoxedTransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Ack, TransportError>> + Send + 'a>>;

/// Delivers a validated contact form. Called at most once per submit action.
pub trait Transport: Send + Sync {
    type Fut<'a>: Future<Output = Result<Ack, TransportError>> + Send + 'a
    where
        Self: 'a;

    fn send(&self, fields: FormFields) -> Self::Fut<'_>;
}

impl<F> Transport for F
where
    F: Fn(FormFields) -> BoxedTransportFuture<'static> + Send + Sync,
{
    type Fut<'a>
        = BoxedTransportFuture<'static>
    where
        Self: 'a;

    fn send(&self, fields: FormFields) -> Self::Fut<'_> {
        (self)(fields)
    }
}

/// Stand-in for a real endpoint: waits a fixed latency and always acknowledges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Transport for SimulatedTransport {
    type Fut<'a>
        = BoxedTransportFuture<'a>
    where
        Self: 'a;

    fn send(&self, fields: FormFields) -> Self::Fut<'_> {
        let latency = self.latency;
        Box::pin(async move {
            if !latency.is_zero() {
                Delay::new(latency).await;
            }
            tracing::debug!(
                name_chars = fields.name.chars().count(),
                message_chars = fields.message.chars().count(),
                "simulated contact delivery"
            );
            Ok(Ack::default())
        })
    }
}
