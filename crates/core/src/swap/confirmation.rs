//! Swap confirmation.
//!
//! There is no real settlement. A [`SwapBackend`] receives the confirmed
//! order; the bundled [`SimulatedSwapBackend`] only waits and answers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{
    CONFIRMATION_FAILURE_MESSAGE, DEFAULT_CONFIRM_DELAY_MS, DEFAULT_PROCESSING_DELAY_MS,
};
use crate::errors::{Error, Result};

use super::session::SwapSession;

/// A swap the user agreed to, frozen at confirmation time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOrder {
    pub amount: String,
    pub from_currency: String,
    pub output_amount: String,
    pub to_currency: String,
}

impl SwapOrder {
    /// Freezes the session's current inputs and output.
    ///
    /// Fails with `NotConfirmable` when the session would keep the confirm
    /// control disabled.
    pub fn from_session(session: &SwapSession) -> Result<Self> {
        if session.is_loading() {
            return Err(Error::PricesUnavailable);
        }
        if session.amount().is_empty() {
            return Err(Error::NotConfirmable("amount is empty".to_string()));
        }

        let output = session.result().output_amount.ok_or_else(|| {
            Error::NotConfirmable(format!(
                "no conversion available for {} -> {}",
                session.from_currency(),
                session.to_currency()
            ))
        })?;

        Ok(Self {
            amount: session.amount().to_string(),
            from_currency: session.from_currency().to_string(),
            output_amount: output,
            to_currency: session.to_currency().to_string(),
        })
    }

    /// Message shown once the swap went through.
    pub fn success_message(&self) -> String {
        format!(
            "{} {} has been converted to {} {}",
            self.amount, self.from_currency, self.output_amount, self.to_currency
        )
    }
}

/// Outcome of a successful confirmation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapReceipt {
    pub order: SwapOrder,
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

/// Receives confirmed orders.
#[async_trait]
pub trait SwapBackend: Send + Sync {
    async fn submit(&self, order: &SwapOrder) -> Result<()>;
}

/// Backend that waits a fixed delay, then a short processing step, and
/// succeeds unless configured to fail.
pub struct SimulatedSwapBackend {
    delay: Duration,
    processing: Duration,
    fail: bool,
}

impl SimulatedSwapBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            processing: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            fail: false,
        }
    }

    pub fn with_processing(mut self, processing: Duration) -> Self {
        self.processing = processing;
        self
    }

    /// Makes every submission fail after the delays.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for SimulatedSwapBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_CONFIRM_DELAY_MS))
    }
}

#[async_trait]
impl SwapBackend for SimulatedSwapBackend {
    async fn submit(&self, order: &SwapOrder) -> Result<()> {
        log::debug!(
            "Simulating swap {} {} -> {}",
            order.amount,
            order.from_currency,
            order.to_currency
        );
        tokio::time::sleep(self.delay).await;
        tokio::time::sleep(self.processing).await;

        if self.fail {
            return Err(Error::ConfirmationFailed(
                CONFIRMATION_FAILURE_MESSAGE.to_string(),
            ));
        }
        Ok(())
    }
}

/// Runs confirmations one at a time.
///
/// A call made while another is in flight is rejected immediately with
/// [`Error::ConfirmationInProgress`]. Nothing is queued.
pub struct SwapConfirmer {
    backend: Arc<dyn SwapBackend>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the confirmation ends, however it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SwapConfirmer {
    pub fn new(backend: Arc<dyn SwapBackend>) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn confirm(&self, order: SwapOrder) -> Result<SwapReceipt> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::ConfirmationInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        match self.backend.submit(&order).await {
            Ok(()) => {
                let message = order.success_message();
                log::info!("{}", message);
                Ok(SwapReceipt {
                    order,
                    message,
                    completed_at: Utc::now(),
                })
            }
            Err(e) => {
                log::warn!("Swap confirmation failed: {}", e);
                Err(e)
            }
        }
    }
}
