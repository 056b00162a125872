mod find;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use storefinder_core::{OutputFormat, Unit};
use storefinder_geocode::NominatimClient;

#[derive(Debug, Parser)]
#[command(name = "storefinder")]
#[command(
    about = "Locate the nearest store (as the crow flies) and print its address and the distance to it"
)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("query").required(true).args(["address", "zip"])))]
struct Cli {
    /// Find the nearest store to this address. If several places match, the first is used.
    #[arg(long)]
    address: Option<String>,

    /// Find the nearest store to this zip code. If several places match, the first is used.
    #[arg(long)]
    zip: Option<String>,

    /// Display distance in miles or kilometers
    #[arg(long, value_enum, default_value_t = UnitsArg::Mi)]
    units: UnitsArg,

    /// Human-readable text or machine-readable JSON
    #[arg(long, value_enum, default_value_t = OutputArg::Text)]
    output: OutputArg,

    /// Store catalog CSV (overrides STOREFINDER_CATALOG_PATH)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

impl Cli {
    /// The free-text location to geocode. Clap guarantees exactly one is set.
    fn query(&self) -> &str {
        self.address
            .as_deref()
            .or(self.zip.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitsArg {
    Mi,
    Km,
}

impl From<UnitsArg> for Unit {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Mi => Unit::Miles,
            UnitsArg::Km => Unit::Kilometers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = storefinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path.clone());
    let catalog = storefinder_core::load_catalog(&catalog_path)
        .with_context(|| format!("loading store catalog from {}", catalog_path.display()))?;

    let geocoder = NominatimClient::with_base_url(
        config.geocoder_timeout_secs,
        config.geocoder_connect_timeout_secs,
        &config.geocoder_user_agent,
        &config.geocoder_base_url,
    )?;

    let request = find::FindRequest {
        query: cli.query(),
        unit: cli.units.into(),
        format: cli.output.into(),
    };
    let rendered = find::run_find(&geocoder, &catalog, &request).await?;
    println!("{rendered}");

    Ok(())
}
