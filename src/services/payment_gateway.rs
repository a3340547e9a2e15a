use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::models::Payment;

/// Outbound side of payment acceptance. The storefront never charges a real
/// card; implementations only decide how long "processing" takes.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, payment: &Payment);
}

/// Stand-in for a real processor: waits for a fixed latency and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, payment: &Payment) {
        debug!(
            "Simulating gateway latency of {:?} for {}",
            self.latency, payment.customer_name
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_gateway_waits_for_latency() {
        let gateway = SimulatedGateway::new(Duration::from_secs(1));
        let started = Instant::now();

        gateway.charge(&Payment::default()).await;

        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_latency_returns_immediately() {
        let gateway = SimulatedGateway::new(Duration::ZERO);
        let started = Instant::now();

        gateway.charge(&Payment::default()).await;

        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
