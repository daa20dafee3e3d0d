//! ConnectWaiter - Bounded wait for the partner SDK to finish connecting.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::config::{PartnerConfig, MAX_CONNECT_TIMEOUT_SECS};
use crate::domain::setup::SetupError;
use crate::ports::{ConnectionState, PartnerSdk};

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Polls `PartnerSdk::connection_state` until it settles or the timeout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectWaiter {
    timeout: Duration,
    poll_interval: Duration,
}

impl ConnectWaiter {
    /// Timeouts above `MAX_CONNECT_TIMEOUT_SECS` are clamped to it and the
    /// poll interval is at least one millisecond.
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout: timeout.min(Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS)),
            poll_interval: poll_interval.max(MIN_POLL_INTERVAL),
        }
    }

    pub fn from_config(config: &PartnerConfig) -> Self {
        Self::new(config.connect_timeout(), config.poll_interval())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Waits for the SDK to report a final connection state.
    ///
    /// The state is checked once more at the deadline, so a connection that
    /// lands during the last interval still counts.
    ///
    /// # Errors
    ///
    /// - `SetupError::Unknown` if the SDK reports a failed connection
    /// - `SetupError::ConnectTimeout` if it is still pending at the deadline
    pub async fn wait(&self, sdk: &dyn PartnerSdk) -> Result<(), SetupError> {
        let deadline = Instant::now() + self.timeout;
        let mut polls = 0u32;

        loop {
            polls += 1;
            match sdk.connection_state() {
                ConnectionState::Connected => {
                    debug!(polls, "partner SDK connected");
                    return Ok(());
                }
                ConnectionState::Failed => {
                    debug!(polls, "partner SDK reported connect failure");
                    return Err(SetupError::Unknown);
                }
                ConnectionState::Pending => {}
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(SetupError::ConnectTimeout {
                    timeout: self.timeout,
                });
            }
            sleep(self.poll_interval.min(deadline - now)).await;
        }
    }
}

impl Default for ConnectWaiter {
    fn default() -> Self {
        Self::from_config(&PartnerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ConnectBehavior, InMemoryPartnerSdk};

    fn quick() -> ConnectWaiter {
        ConnectWaiter::new(Duration::from_millis(100), Duration::from_millis(5))
    }

    #[test]
    fn default_uses_partner_config() {
        let waiter = ConnectWaiter::default();
        assert_eq!(waiter.timeout(), Duration::from_secs(5));
        assert_eq!(waiter.poll_interval, Duration::from_secs(1));
    }

    #[test]
    fn oversized_timeout_is_clamped() {
        let waiter = ConnectWaiter::new(Duration::MAX, Duration::ZERO);
        assert_eq!(waiter.timeout(), Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS));
        assert_eq!(waiter.poll_interval, MIN_POLL_INTERVAL);
    }

    #[tokio::test]
    async fn unvalidated_config_does_not_overflow_deadline() {
        let config = PartnerConfig {
            connect_timeout_secs: u64::MAX,
            ..Default::default()
        };
        let sdk = InMemoryPartnerSdk::with_behavior(ConnectBehavior::Fail);
        sdk.connect("key");

        let result = ConnectWaiter::from_config(&config).wait(&sdk).await;

        assert_eq!(result, Err(SetupError::Unknown));
    }

    #[tokio::test]
    async fn returns_once_connected() {
        let sdk = InMemoryPartnerSdk::with_behavior(ConnectBehavior::AfterPolls(3));
        sdk.connect("key");

        assert_eq!(quick().wait(&sdk).await, Ok(()));
        assert_eq!(sdk.connection_polls(), 3);
    }

    #[tokio::test]
    async fn failed_connection_is_unknown_error() {
        let sdk = InMemoryPartnerSdk::with_behavior(ConnectBehavior::Fail);
        sdk.connect("key");

        assert_eq!(quick().wait(&sdk).await, Err(SetupError::Unknown));
    }

    #[tokio::test]
    async fn pending_connection_times_out() {
        let sdk = InMemoryPartnerSdk::with_behavior(ConnectBehavior::Never);
        sdk.connect("key");
        let waiter = ConnectWaiter::new(Duration::from_millis(30), Duration::from_millis(10));

        let result = waiter.wait(&sdk).await;

        assert_eq!(
            result,
            Err(SetupError::ConnectTimeout {
                timeout: Duration::from_millis(30)
            })
        );
        assert!(sdk.connection_polls() >= 2);
    }
}
