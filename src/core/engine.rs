use crate::domain::ports::BookingFlow;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct BookingEngine<F: BookingFlow> {
    flow: F,
    monitor_enabled: bool,
}

impl<F: BookingFlow> BookingEngine<F> {
    pub fn new(flow: F) -> Self {
        Self {
            flow,
            monitor_enabled: false,
        }
    }

    pub fn new_with_monitoring(flow: F, monitor_enabled: bool) -> Self {
        Self {
            flow,
            monitor_enabled,
        }
    }

    /// Runs one booking session. `Ok(None)` means the passenger declined
    /// payment; `Ok(Some(path))` carries the receipt path.
    pub async fn run(&self) -> Result<Option<String>> {
        #[cfg(feature = "cli")]
        let monitor = SystemMonitor::new(self.monitor_enabled);

        // Collect
        println!("Collecting booking details...");
        let request = self.flow.collect().await?;
        println!(
            "Passenger: {} | Route: {} -> {}",
            request.passenger.name, request.route.origin_city, request.route.destination_city
        );

        // Quote
        let quote = self.flow.quote(&request).await?;
        println!("Calculated Distance: {:.2} km", quote.distance_km);
        println!("Total Fare: ₹{:.2}", quote.fare);

        // Settle
        let method = match self.flow.settle(&quote).await? {
            Some(method) => method,
            None => {
                println!("Payment canceled. Ticket not generated.");
                return Ok(None);
            }
        };

        // Issue
        let output_path = self.flow.issue(&request, &quote, method).await?;
        println!("Ticket saved to: {}", output_path);

        #[cfg(feature = "cli")]
        if let Some(stats) = monitor.get_stats() {
            tracing::info!(
                "📊 Peak memory: {} MB, CPU: {:.1}%, elapsed: {:.1}s",
                stats.peak_memory_mb,
                stats.cpu_usage,
                stats.elapsed_time.as_secs_f64()
            );
        }

        Ok(Some(output_path))
    }
}
