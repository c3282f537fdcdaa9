//! CLI interface for the HPD 311 client
//!
//! Files complaints and looks them up from the command line.

pub mod runner;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{GATEWAY_URL_ENV, SUBSCRIPTION_KEY_ENV};
use crate::fixtures::Sample;

/// HPD 311 client - file and track NYC housing complaints
#[derive(Parser, Debug, Default)]
#[command(name = "hpd-311")]
#[command(version)]
#[command(about = "File and track HPD complaints through the NYC 311 API", long_about = None)]
pub struct Cli {
    /// Gateway subscription key
    #[arg(long, global = true, env = SUBSCRIPTION_KEY_ENV, hide_env_values = true)]
    pub subscription_key: Option<String>,

    /// Gateway origin (defaults to https://api.nyc.gov)
    #[arg(long, global = true, env = GATEWAY_URL_ENV)]
    pub gateway: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new service request
    Create(CreateArgs),

    /// Look up a service request by SR number
    Get(GetArgs),

    /// Submit a sample request, then look it up
    Demo(DemoArgs),
}

/// Where the payload for `create` comes from
#[derive(Args, Debug, Default)]
#[group(required = true, multiple = false)]
pub struct PayloadSource {
    /// JSON file holding a CreateServiceRequest body
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// One of the bundled sample payloads
    #[arg(short, long, value_enum)]
    pub sample: Option<Sample>,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub source: PayloadSource,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Tracking number, e.g. 311-10865100
    pub sr_number: String,
}

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Sample payload to submit
    #[arg(short, long, value_enum, default_value = "heat-hot-water")]
    pub sample: Sample,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_requires_one_source() {
        assert!(Cli::try_parse_from(["hpd-311", "create"]).is_err());
        assert!(Cli::try_parse_from([
            "hpd-311", "create", "--sample", "cooking-gas", "--file", "x.json"
        ])
        .is_err());

        let cli = Cli::try_parse_from(["hpd-311", "create", "--sample", "cooking-gas"]).unwrap();
        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.source.sample, Some(Sample::CookingGas));
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_get_takes_sr_number() {
        let cli = Cli::try_parse_from(["hpd-311", "get", "311-10865100"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Get(GetArgs { ref sr_number })) if sr_number == "311-10865100"
        ));
    }
}
