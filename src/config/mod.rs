pub mod cities;
pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bus-eticket")]
#[command(about = "An interactive bus e-ticket booking simulator")]
pub struct CliConfig {
    #[arg(long, default_value = "./tickets")]
    pub output_path: String,

    #[arg(long, help = "TOML file that extends the built-in city directory")]
    pub cities_file: Option<String>,

    #[arg(long, help = "Seed for the ticket id generator")]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report system usage after the session")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn cities_file(&self) -> Option<&str> {
        self.cities_file.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(file) = &self.cities_file {
            validation::validate_file_extension("cities_file", file, &["toml"])?;
        }
        Ok(())
    }
}
