//! # Revo Node Runtime
//!
//! Selects the network, verifies its genesis block and reports the
//! consensus parameters in force.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, ParamsReport};
use rv_01_network_params::NetworkId;
use rv_02_genesis::ChainParams;
use rv_03_governance_params::{DgpResolver, InMemoryStorage};

/// Revo consensus parameter node.
#[derive(Parser, Debug)]
#[command(name = "node-runtime")]
#[command(about = "Selects a Revo network and reports its consensus parameters")]
struct Args {
    /// Network: main, test, signet, regtest or unittest
    #[arg(long, default_value = "main")]
    chain: NetworkId,

    /// Deployment override `name:start:timeout[:min_activation_height]` (regtest only)
    #[arg(long = "vbparams")]
    vbparams: Vec<String>,

    /// Segwit activation height, -1 disables (regtest only)
    #[arg(long = "segwitheight", allow_negative_numbers = true)]
    segwit_height: Option<i64>,

    /// Signet challenge script as hex
    #[arg(long = "signetchallenge")]
    signet_challenge: Vec<String>,

    /// Signet seed node, replaces the DNS seeds
    #[arg(long = "signetseednode")]
    signet_seed_node: Vec<String>,

    /// Prune after 100 blocks instead of 1000 (regtest only)
    #[arg(long = "fastprune")]
    fast_prune: bool,

    /// Ignore governed parameters and use the defaults
    #[arg(long)]
    legacy_vm: bool,

    /// JSON contract storage snapshot to resolve governed parameters from
    #[arg(long)]
    dgp_snapshot: Option<PathBuf>,

    /// Height at which governed parameters are resolved
    #[arg(long, default_value = "0")]
    height: u32,

    /// Print the full parameter report as JSON
    #[arg(long)]
    print_params: bool,
}

impl From<Args> for NodeConfig {
    fn from(args: Args) -> Self {
        Self {
            network: args.chain,
            vbparams: args.vbparams,
            segwit_height: args.segwit_height,
            signet_challenges: args.signet_challenge,
            signet_seed_nodes: args.signet_seed_node,
            fast_prune: args.fast_prune,
            legacy_vm: args.legacy_vm,
            dgp_snapshot: args.dgp_snapshot,
            height: args.height,
        }
    }
}

/// Load configuration from the command line and environment.
fn load_config() -> Result<(NodeConfig, bool)> {
    let args = Args::parse();
    let print_params = args.print_params;
    let mut config = NodeConfig::from(args);
    config
        .apply_env()
        .context("Invalid RV_* environment override")?;
    Ok((config, print_params))
}

fn load_snapshot(config: &NodeConfig) -> Result<Option<InMemoryStorage>> {
    let Some(path) = &config.dgp_snapshot else {
        return Ok(None);
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read storage snapshot {}", path.display()))?;
    let storage = InMemoryStorage::from_json(&json)
        .with_context(|| format!("Malformed storage snapshot {}", path.display()))?;
    info!(contracts = storage.contract_count(), "Loaded storage snapshot");
    Ok(Some(storage))
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (config, print_params) = load_config()?;

    let params = ChainParams::select(config.network, &config.override_args())
        .inspect_err(|e| error!("Refusing to start: {e}"))
        .with_context(|| format!("Failed to initialise {} parameters", config.network))?;
    info!(
        network = %params.network(),
        genesis = %params.genesis_hash(),
        "Chain parameters ready"
    );

    let snapshot = if config.legacy_vm {
        None
    } else {
        load_snapshot(&config)?
    };
    let rules = params.profile().consensus();
    let resolver = match &snapshot {
        Some(storage) => DgpResolver::new(rules, storage),
        None => DgpResolver::legacy(rules),
    };

    let report = ParamsReport::new(&params, &resolver, config.height);
    info!(
        height = config.height,
        block_size = report.governance.block_size,
        min_gas_price = report.governance.min_gas_price,
        block_gas_limit = report.governance.block_gas_limit,
        legacy_vm = report.legacy_vm,
        "Governed parameters resolved"
    );

    if print_params {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
    }

    Ok(())
}
