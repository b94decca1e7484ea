//! Swap Bridge Attestor Node
//!
//! Reads transaction events from stdin, one JSON array per line (the `events`
//! field of an LCD `tx_response`), and writes one JSON attestation per
//! `swap_initialized` record to stdout. Recipients submit the attestation to
//! the destination instance's `Redeem`.
//!
//! Malformed lines and unattestable swaps are logged and skipped.

use attestor::config::Config;
use attestor::Attestor;
use eyre::WrapErr;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> eyre::Result<()> {
    init_logging();

    info!("Starting Swap Bridge Attestor");

    let config = Config::load()?;
    let attestor = Attestor::from_hex(&config.validator_private_key)
        .wrap_err("Failed to load validator key")?;
    info!(
        validator = %attestor.address_hex(),
        address_prefix = %config.address_prefix,
        bridge = %config.bridge_contract,
        "Configuration loaded"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, initiating shutdown");
                break;
            }
        };
        let Some(line) = line else {
            debug!("Input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let results =
            match attestor.attest_line(&line, &config.address_prefix, &config.bridge_contract) {
                Ok(results) => results,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed event line");
                    continue;
                }
            };

        for (swap, result) in results {
            match result {
                Ok(attestation) => {
                    let mut out = serde_json::to_string(&attestation)?;
                    out.push('\n');
                    stdout.write_all(out.as_bytes()).await?;
                    stdout.flush().await?;
                    info!(
                        chain_id = swap.chain_id,
                        nonce = swap.nonce,
                        recipient = %swap.recipient,
                        amount = swap.amount,
                        "Swap attested"
                    );
                }
                Err(e) => {
                    error!(
                        chain_id = swap.chain_id,
                        nonce = swap.nonce,
                        error = %e,
                        "Cannot attest swap"
                    );
                }
            }
        }
    }

    info!("Swap Bridge Attestor stopped");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bridge_attestor=debug,attestor=debug"));

    // stdout carries attestations, logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
