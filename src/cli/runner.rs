//! CLI command runner

use std::path::Path;

use crate::api::Nyc311Client;
use crate::config::{ClientConfig, GATEWAY_URL_ENV, SUBSCRIPTION_KEY_ENV};
use crate::error::{AppError, Result};
use crate::fixtures::Sample;
use crate::models::{ServiceRequestPayload, ServiceRequestRecord};

use super::{Cli, Commands, CreateArgs, DemoArgs, GetArgs, PayloadSource};

/// Run the CLI application
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Create(args)) => {
            run_create(cli.subscription_key, cli.gateway, args).await
        }
        Some(Commands::Get(args)) => run_get(cli.subscription_key, cli.gateway, args).await,
        Some(Commands::Demo(args)) => run_demo(cli.subscription_key, cli.gateway, args).await,
        None => {
            println!("HPD 311 client");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Run the create command
async fn run_create(
    key: Option<String>,
    gateway: Option<String>,
    args: CreateArgs,
) -> anyhow::Result<()> {
    let payload = load_payload(&args.source)?;

    for warning in payload.warnings() {
        println!("! {}", warning);
    }

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let client = Nyc311Client::new(&resolve_config(key, gateway)?)?;
    let created = client.create_service_request(&payload).await?;

    println!("✓ Created {}", created.sr_number);
    println!("  {}", created.sla_language);
    Ok(())
}

/// Run the get command
async fn run_get(key: Option<String>, gateway: Option<String>, args: GetArgs) -> anyhow::Result<()> {
    let client = Nyc311Client::new(&resolve_config(key, gateway)?)?;
    let record = client.get_service_request(&args.sr_number).await?;
    print_record(&record);
    Ok(())
}

/// Create a sample request, then read it back
async fn run_demo(key: Option<String>, gateway: Option<String>, args: DemoArgs) -> anyhow::Result<()> {
    let client = Nyc311Client::new(&resolve_config(key, gateway)?)?;
    let payload = args.sample.payload()?;

    println!("Submitting {:?} sample to {}...", args.sample, client.base_url());
    let created = client.create_service_request(&payload).await?;
    println!("✓ Created {}: {}", created.sr_number, created.sla_language);

    println!("Looking up {}...", created.sr_number);
    let record = client.get_service_request(&created.sr_number).await?;
    print_record(&record);
    Ok(())
}

fn print_record(record: &ServiceRequestRecord) {
    println!("{} [{}]", record.sr_number, record.status);
    println!("  Agency:    {}", record.agency);
    println!(
        "  Problem:   {} / {} / {}",
        record.problem, record.problem_details, record.additional_details
    );
    println!(
        "  Address:   {}, {}",
        record.address.full_address, record.address.borough
    );
    println!("  Submitted: {}", record.date_time_submitted);
}

/// Build a client config from CLI/env values; fails before any network call
/// when the key is missing.
pub fn resolve_config(key: Option<String>, gateway: Option<String>) -> Result<ClientConfig> {
    ClientConfig::from_lookup(|name| match name {
        SUBSCRIPTION_KEY_ENV => key.clone(),
        GATEWAY_URL_ENV => gateway.clone(),
        _ => None,
    })
}

/// Read the payload named by `--file` or `--sample`
pub fn load_payload(source: &PayloadSource) -> Result<ServiceRequestPayload> {
    match (&source.file, source.sample) {
        (Some(path), _) => load_payload_file(path),
        (None, Some(sample)) => Ok(sample.payload()?),
        (None, None) => Ok(Sample::HeatHotWater.payload()?),
    }
}

fn load_payload_file(path: &Path) -> Result<ServiceRequestPayload> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::Config(format!("Invalid payload in {}: {}", path.display(), e))
    })
}
