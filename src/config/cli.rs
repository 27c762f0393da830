use crate::core::batch::OutputFormat;
use crate::domain::model::Domain;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology readings for mobile numbers, names and vehicle numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with a [validation] section (same format as the server config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print readings as JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Reading for a 10-digit mobile number
    Mobile { number: String },
    /// Reading for a personal name
    Name { name: String },
    /// Reading for a vehicle registration number
    Vehicle { plate: String },
    /// Process a CSV file with `domain,input` columns
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

impl Command {
    /// 單筆計算的領域與輸入；batch 回傳 None
    pub fn single_reading(&self) -> Option<(Domain, &str)> {
        match self {
            Command::Mobile { number } => Some((Domain::Mobile, number.as_str())),
            Command::Name { name } => Some((Domain::Name, name.as_str())),
            Command::Vehicle { plate } => Some((Domain::Vehicle, plate.as_str())),
            Command::Batch { .. } => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if !path.is_file() {
                return Err(NumerologyError::InvalidConfigValueError {
                    field: "config".to_string(),
                    value: path.display().to_string(),
                    reason: "File not found".to_string(),
                });
            }
        }

        if let Command::Batch { input, .. } = &self.command {
            if !input.is_file() {
                return Err(NumerologyError::InvalidConfigValueError {
                    field: "input".to_string(),
                    value: input.display().to_string(),
                    reason: "File not found".to_string(),
                });
            }
        }

        Ok(())
    }
}
