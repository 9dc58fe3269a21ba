use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::Display;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text, one block per question
    #[default]
    Text,
    /// HTML fragment for embedding in a page
    Html,
    /// ASCII tables for the terminal
    Table,
    /// Machine-readable dump of the tally
    Json,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputParams {
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
