use anyhow::Result;
use bus_eticket::domain::ports::Console;
use bus_eticket::{
    BookingEngine, BookingError, CityDirectory, CliConfig, ConsoleBooking, LocalStorage,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

/// Console fed from a canned list of answers; records everything shown.
#[derive(Clone)]
struct ScriptedConsole {
    inputs: Arc<Mutex<VecDeque<String>>>,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConsole {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(inputs.iter().map(|s| s.to_string()).collect())),
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn lines(&self) -> Vec<String> {
        self.transcript.lock().await.clone()
    }
}

impl Console for ScriptedConsole {
    async fn prompt(&self, message: &str) -> bus_eticket::Result<String> {
        self.transcript.lock().await.push(message.to_string());
        self.inputs
            .lock()
            .await
            .pop_front()
            .ok_or(BookingError::InputClosedError)
    }

    async fn say(&self, message: &str) -> bus_eticket::Result<()> {
        self.transcript.lock().await.push(message.to_string());
        Ok(())
    }
}

fn test_config(output_path: &str, seed: u64) -> CliConfig {
    CliConfig {
        output_path: output_path.to_string(),
        cities_file: None,
        seed: Some(seed),
        verbose: false,
        monitor: false,
    }
}

async fn run_session(
    inputs: &[&str],
    seed: u64,
    temp_dir: &TempDir,
) -> (bus_eticket::Result<Option<String>>, ScriptedConsole) {
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = test_config(&output_path, seed);
    let storage = LocalStorage::new(output_path);
    let console = ScriptedConsole::new(inputs);

    let flow = ConsoleBooking::new(
        storage,
        config,
        console.clone(),
        CityDirectory::builtin(),
        StdRng::seed_from_u64(seed),
    );
    let engine = BookingEngine::new(flow);

    (engine.run().await, console)
}

fn ticket_files(temp_dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(temp_dir.path())
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[tokio::test]
async fn test_happy_path_issues_ticket() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let inputs = [
        "Asha Verma",
        "34",
        "9876543210",
        "Mumbai",
        " pune ",
        "yes",
        "2",
    ];

    let (outcome, console) = run_session(&inputs, 42, &temp_dir).await;
    let receipt_path = outcome?.expect("a paid booking should produce a ticket");
    assert!(receipt_path.contains("ticket_"));
    assert!(receipt_path.ends_with(".txt"));

    let files = ticket_files(&temp_dir);
    assert_eq!(files.len(), 2, "expected text and JSON receipts: {:?}", files);
    assert!(files.iter().any(|name| name.ends_with(".txt")));
    assert!(files.iter().any(|name| name.ends_with(".json")));

    let receipt = std::fs::read_to_string(
        temp_dir
            .path()
            .join(files.iter().find(|name| name.ends_with(".txt")).unwrap()),
    )?;
    assert!(receipt.contains("Passenger: Asha Verma"));
    assert!(receipt.contains("Age: 34"));
    assert!(receipt.contains("Contact: 9876543210"));
    assert!(receipt.contains("From: mumbai"));
    assert!(receipt.contains("To: pune"));
    assert!(receipt.contains("Distance: 120.15 km"));
    assert!(receipt.contains("Fare: ₹770.75"));
    assert!(receipt.contains("Payment: Card"));
    assert!(receipt.contains("Status: PAID"));

    let shown = console.lines().await.join("\n");
    assert!(shown.contains("Payment successful!"));
    assert!(shown.contains("BUS E-TICKET"));

    Ok(())
}

#[tokio::test]
async fn test_declined_payment_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let inputs = ["Asha Verma", "34", "9876543210", "mumbai", "pune", "no"];

    let (outcome, _console) = run_session(&inputs, 42, &temp_dir).await;
    assert!(outcome?.is_none());
    assert!(ticket_files(&temp_dir).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_invalid_inputs_are_reprompted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let inputs = [
        "",           // empty name
        "Asha Verma", // retry
        "150",        // age out of range
        "abc",        // age not a number
        "34",         // retry
        "123",        // contact too short
        "9876543210", // retry
        "atlantis",   // unknown city
        "mumbai",     // retry
        "PUNE",
        "yes",
        "9", // invalid payment choice
        "1",
    ];

    let (outcome, console) = run_session(&inputs, 7, &temp_dir).await;
    assert!(outcome?.is_some());

    let shown = console.lines().await.join("\n");
    assert!(shown.contains("Name cannot be empty"));
    assert!(shown.contains("Age must be between 5 and 120"));
    assert!(shown.contains("Age must be a whole number"));
    assert!(shown.contains("Contact number must be 10 to 15 digits"));
    assert!(shown.contains("Unknown city 'atlantis'"));
    assert!(shown.contains("Invalid choice. Pick 1, 2 or 3."));

    let files = ticket_files(&temp_dir);
    assert_eq!(files.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_closed_input_aborts_the_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let inputs = ["Asha Verma", "34"];

    let (outcome, _console) = run_session(&inputs, 7, &temp_dir).await;
    assert!(matches!(outcome, Err(BookingError::InputClosedError)));
    assert!(ticket_files(&temp_dir).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_same_city_round_trip_is_free() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let inputs = ["Asha Verma", "34", "9876543210", "nagpur", "nagpur", "yes", "3"];

    let (outcome, console) = run_session(&inputs, 11, &temp_dir).await;
    assert!(outcome?.is_some());

    let shown = console.lines().await.join("\n");
    assert!(shown.contains("Distance: 0.00 km"));
    assert!(shown.contains("Fare: ₹0.00"));

    Ok(())
}
