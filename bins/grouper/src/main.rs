//! Folio account grouper.
//!
//! Reads an account list saved from the account API, groups it and prints
//! the group descriptors as JSON.
//!
//! Usage:
//!   folio --accounts <file.json> [--group-by none|institution|accountType] [--labels <file.json>]

mod source;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::accounts::{AccountGroupingService, GroupMode, LabelResolver};
use folio_shared::AppConfig;
use folio_shared::config::LoggingConfig;

use crate::source::{JsonFileSource, load_label_map};

#[derive(Debug, Parser)]
#[command(
    author,
    about,
    long_about = None)] // Read from `Cargo.toml`
struct Args {
    /// JSON array of accounts, as returned by the account API
    #[arg(short, long)]
    accounts: PathBuf,

    /// Attribute to group by: none, institution or accountType.
    /// Falls back to `grouping.default_mode` from the configuration.
    #[arg(short, long)]
    group_by: Option<GroupMode>,

    /// JSON object mapping group keys to labels
    #[arg(short, long)]
    labels: Option<PathBuf>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let args = Args::parse();
    let mode = match args.group_by {
        Some(mode) => mode,
        None => GroupMode::from_str(&config.grouping.default_mode)?,
    };

    let mut resolver = LabelResolver::new().with_unknown_label(&config.grouping.unknown_label);
    if let Some(path) = &args.labels {
        resolver = resolver.with_label_map(load_label_map(path).await?);
    }

    let service = AccountGroupingService::new(resolver);
    let source = JsonFileSource::new(&args.accounts);
    let descriptors = service.group_from_source(&source, mode).await?;

    info!(
        mode = %mode,
        file = %args.accounts.display(),
        groups = descriptors.len(),
        "Accounts grouped"
    );
    println!("{}", serde_json::to_string_pretty(&descriptors)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("folio").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "--accounts",
            "accounts.json",
            "--group-by",
            "accountType",
            "--labels",
            "labels.json",
        ])
        .unwrap();

        assert_eq!(args.accounts, PathBuf::from("accounts.json"));
        assert_eq!(args.group_by, Some(GroupMode::AccountType));
        assert_eq!(args.labels, Some(PathBuf::from("labels.json")));
    }

    #[test]
    fn test_parse_short_flags_and_defaults() {
        let args = parse(&["-a", "a.json"]).unwrap();
        assert_eq!(args.accounts, PathBuf::from("a.json"));
        assert_eq!(args.group_by, None);
        assert_eq!(args.labels, None);
    }

    #[test]
    fn test_parse_requires_accounts() {
        let err = parse(&["--group-by", "institution"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_rejects_unknown_mode_and_flags() {
        let err = parse(&["-a", "a.json", "-g", "currency"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let err = parse(&["-a", "a.json", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);

        assert!(parse(&["-a"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_package_metadata_comes_from_workspace() {
        use clap::CommandFactory;
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "Folio Team");
        assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT OR Apache-2.0");
        assert_eq!(Args::command().get_author(), Some("Folio Team"));
    }
}
