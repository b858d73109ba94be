use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::provider::Provider;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert Vodacom and MTN SIM spreadsheets into provisioning CSV files",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import a provider spreadsheet and export the provisioning CSV
    Convert(ConvertArgs),
    /// Show the first rows of the export a spreadsheet would produce
    Preview(PreviewArgs),
    /// List the accepted header aliases for each canonical column
    Aliases(AliasesArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Provider whose column rules apply (vodacom, mtn)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub provider: Option<Provider>,
    /// Input spreadsheet (.xlsx, .xls, .ods) or delimited file (.csv, .tsv)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Destination CSV file ('-' for stdout)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
    /// Character encoding of delimited inputs (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Provider whose column rules apply (vodacom, mtn)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub provider: Option<Provider>,
    /// Input spreadsheet (.xlsx, .xls, .ods) or delimited file (.csv, .tsv)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Number of rows to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
    /// Character encoding of delimited inputs (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct AliasesArgs {
    /// Restrict the listing to one provider
    #[arg(short, long, value_enum, ignore_case = true)]
    pub provider: Option<Provider>,
}
