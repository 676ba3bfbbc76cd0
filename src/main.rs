use bus_eticket::domain::ports::ConfigProvider;
use bus_eticket::utils::{logger, validation::Validate};
use bus_eticket::{
    BookingEngine, CityDirectory, CliConfig, ConsoleBooking, LocalStorage, StdioConsole,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bus-eticket CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入城市目錄
    let mut directory = CityDirectory::builtin();
    if let Some(path) = config.cities_file() {
        if let Err(e) = directory.extend_from_file(path) {
            tracing::error!("❌ Failed to load cities file '{}': {}", path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
    tracing::info!("🗺️ City directory ready with {} cities", directory.len());

    let id_rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲、終端與預訂流程
    let storage = LocalStorage::new(config.output_path.clone());
    let console = StdioConsole::new();
    let flow = ConsoleBooking::new(storage, config, console, directory, id_rng);

    println!("==== Online Bus E-Ticket System ====\n");

    let engine = BookingEngine::new_with_monitoring(flow, monitor_enabled);

    match engine.run().await {
        Ok(Some(path)) => {
            tracing::info!("✅ Booking completed successfully!");
            tracing::info!("📁 Ticket saved to: {}", path);
        }
        Ok(None) => {
            tracing::info!("Booking ended without a ticket");
        }
        Err(e) => {
            tracing::error!(
                "❌ Booking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                bus_eticket::utils::error::ErrorSeverity::Low => 0,
                bus_eticket::utils::error::ErrorSeverity::Medium => 2,
                bus_eticket::utils::error::ErrorSeverity::High => 1,
                bus_eticket::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    println!("\nThank you for using the E-Ticket system!");

    Ok(())
}
