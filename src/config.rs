use crate::error::{AdmitError, AdmitResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// Applicant's intended major. Engineering applicants are also judged on
/// elective maths and physics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Major {
    #[default]
    Engineering,
    ArtsAndScience,
}

impl Major {
    pub fn shows_science_scores(self) -> bool {
        matches!(self, Self::Engineering)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Review options shared by every subcommand. Can be loaded from a JSON
/// profile and then overridden flag by flag.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewParams {
    #[arg(long, default_value_t = Major::Engineering)]
    pub major: Major,
    #[arg(long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    // Per-subject listing under the score tables
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub show_details: bool,
}

impl Default for ReviewParams {
    fn default() -> Self {
        Self {
            major: Major::Engineering,
            format: OutputFormat::Table,
            show_details: true,
        }
    }
}

impl ReviewParams {
    /// Loads a JSON review profile. Fields left out keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AdmitResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AdmitError::Config(format!("Failed to read profile '{}': {}", path.display(), e))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli_params: &ReviewParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(major, "major");
        update_if_present!(format, "format");
        update_if_present!(show_details, "show_details");
    }
}
