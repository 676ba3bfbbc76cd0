use crate::config::cities::CityDirectory;
use crate::core::{distance, fare, ticket};
use crate::domain::model::{
    BookingRequest, GeoPoint, Passenger, PaymentMethod, Quote, Route, Ticket,
};
use crate::domain::ports::{BookingFlow, ConfigProvider, Console, Storage};
use crate::utils::error::Result;
use crate::utils::validation;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

/// Interactive booking session over the injected ports. Each field is asked
/// for until the validator accepts it; only a closed input stream ends the
/// session early.
pub struct ConsoleBooking<S: Storage, C: ConfigProvider, T: Console> {
    storage: S,
    config: C,
    console: T,
    directory: CityDirectory,
    id_rng: Mutex<StdRng>,
}

impl<S: Storage, C: ConfigProvider, T: Console> ConsoleBooking<S, C, T> {
    pub fn new(storage: S, config: C, console: T, directory: CityDirectory, id_rng: StdRng) -> Self {
        Self {
            storage,
            config,
            console,
            directory,
            id_rng: Mutex::new(id_rng),
        }
    }

    async fn ask_city(&self, message: &str) -> Result<(String, GeoPoint)> {
        loop {
            let raw = self.console.prompt(message).await?;
            match self.directory.lookup(&raw) {
                Ok(point) => return Ok((CityDirectory::normalize(&raw), point)),
                Err(e) => self.console.say(&e.user_friendly_message()).await?,
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, T: Console> BookingFlow for ConsoleBooking<S, C, T> {
    async fn collect(&self) -> Result<BookingRequest> {
        let name = loop {
            let raw = self.console.prompt("Enter full name: ").await?;
            match validation::validate_passenger_name("name", &raw) {
                Ok(name) => break name,
                Err(e) => self.console.say(&e.user_friendly_message()).await?,
            }
        };

        let age = loop {
            let raw = self.console.prompt("Enter age (5-120): ").await?;
            match validation::validate_age("age", &raw) {
                Ok(age) => break age,
                Err(e) => self.console.say(&e.user_friendly_message()).await?,
            }
        };

        let contact = loop {
            let raw = self
                .console
                .prompt("Enter contact number (10-15 digits): ")
                .await?;
            match validation::validate_contact("contact", &raw) {
                Ok(contact) => break contact,
                Err(e) => self.console.say(&e.user_friendly_message()).await?,
            }
        };

        let (origin_city, origin) = self.ask_city("Enter starting city: ").await?;
        let (destination_city, destination) = self.ask_city("Enter destination city: ").await?;

        tracing::debug!(
            "Booking request for {}: {} -> {}",
            name,
            origin_city,
            destination_city
        );

        Ok(BookingRequest {
            passenger: Passenger { name, age, contact },
            route: Route {
                origin_city,
                destination_city,
                origin,
                destination,
            },
        })
    }

    async fn quote(&self, request: &BookingRequest) -> Result<Quote> {
        let distance_km = distance::distance_km(request.route.origin, request.route.destination);
        let fare = fare::fare_for_distance(distance_km);

        tracing::info!(
            "📏 {} -> {}: {:.2} km, fare ₹{:.2}",
            request.route.origin_city,
            request.route.destination_city,
            distance_km,
            fare
        );

        Ok(Quote { distance_km, fare })
    }

    async fn settle(&self, _quote: &Quote) -> Result<Option<PaymentMethod>> {
        let proceed = self.console.prompt("Proceed to payment? (yes/no): ").await?;
        if !proceed.trim().eq_ignore_ascii_case("yes") {
            tracing::info!("Payment declined by passenger");
            return Ok(None);
        }

        let method = loop {
            self.console
                .say("Select payment method:\n1) UPI\n2) Card\n3) NetBanking")
                .await?;
            let choice = self.console.prompt("Choice: ").await?;
            match choice.trim() {
                "1" => break PaymentMethod::Upi,
                "2" => break PaymentMethod::Card,
                "3" => break PaymentMethod::NetBanking,
                _ => {
                    self.console
                        .say("Invalid choice. Pick 1, 2 or 3.")
                        .await?
                }
            }
        };

        self.console.say("Processing payment...").await?;
        self.console.say("Payment successful!").await?;
        tracing::info!("💳 Payment settled via {}", method);

        Ok(Some(method))
    }

    async fn issue(
        &self,
        request: &BookingRequest,
        quote: &Quote,
        method: PaymentMethod,
    ) -> Result<String> {
        let id = {
            let mut rng = self.id_rng.lock().await;
            ticket::generate_ticket_id(&mut *rng)
        };

        let issued = Ticket {
            id,
            passenger: request.passenger.clone(),
            origin_city: request.route.origin_city.clone(),
            destination_city: request.route.destination_city.clone(),
            distance_km: quote.distance_km,
            fare: quote.fare,
            payment_method: method,
            issued_at: chrono::Local::now(),
        };

        let receipt_name = format!("ticket_{}.txt", issued.id);
        self.storage
            .write_file(&receipt_name, ticket::render_receipt(&issued).as_bytes())
            .await?;

        // 機器可讀的 JSON 副本
        let json_name = format!("ticket_{}.json", issued.id);
        let json_data = serde_json::to_string_pretty(&issued)?;
        self.storage
            .write_file(&json_name, json_data.as_bytes())
            .await?;

        self.console
            .say(&format!("\n{}", ticket::render_console(&issued)))
            .await?;
        self.console
            .say("(Ticket saved in the tickets folder)")
            .await?;

        tracing::info!("🎫 Ticket {} issued", issued.id);

        Ok(format!("{}/{}", self.config.output_path(), receipt_name))
    }
}
