use std::time::Duration;

use studio_models::contact::ContactInquiry;
use studio_transport_contracts::{ContactDeliverError, ContactTransport};
use tracing::{info, warn};

/// Stands in for a delivery backend: waits, logs the inquiry and reports the
/// configured outcome.
#[derive(Debug, Clone)]
pub struct SimulatedContactTransport {
    config: SimulatedContactTransportConfig,
}

#[derive(Debug, Clone)]
pub struct SimulatedContactTransportConfig {
    pub delay: Duration,
    pub fail: bool,
}

impl SimulatedContactTransport {
    pub fn new(config: SimulatedContactTransportConfig) -> Self {
        Self { config }
    }
}

impl ContactTransport for SimulatedContactTransport {
    async fn deliver(&self, inquiry: ContactInquiry) -> Result<(), ContactDeliverError> {
        tokio::time::sleep(self.config.delay).await;

        if self.config.fail {
            warn!(email = %inquiry.email, "simulated delivery failure");
            return Err(ContactDeliverError::Rejected);
        }

        info!(
            name = %inquiry.name,
            email = %inquiry.email,
            company = inquiry.company.as_ref().map(|c| c.as_str()),
            message_length = inquiry.message.chars().count(),
            "contact inquiry delivered"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use studio_models::contact::{FormField, FormFields};
    use studio_utils::assert_matches;
    use tokio::time::Instant;

    use super::*;

    fn inquiry() -> ContactInquiry {
        FormFields::default()
            .with(FormField::Name, "Jane Doe")
            .with(FormField::Email, "jane@co.com")
            .with(FormField::Message, "We need a redesign of our onboarding flow.")
            .validate()
            .unwrap()
    }

    fn sut(fail: bool) -> SimulatedContactTransport {
        SimulatedContactTransport::new(SimulatedContactTransportConfig {
            delay: Duration::from_millis(1500),
            fail,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn ok_after_delay() {
        // Arrange
        let start = Instant::now();

        // Act
        let result = sut(false).deliver(inquiry()).await;

        // Assert
        result.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn configured_failure() {
        let result = sut(true).deliver(inquiry()).await;
        assert_matches!(result, Err(ContactDeliverError::Rejected));
    }
}
