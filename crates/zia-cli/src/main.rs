//! ziactl - append a domain to the Zscaler ZIA denylist and activate it.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing_subscriber::EnvFilter;
use zia::{Credentials, UpdateOutcome, ZiaClient};

#[derive(Parser)]
#[command(name = "ziactl", version, about = "Append a domain to the ZIA denylist and activate the change")]
struct Args {
    /// Domain or URL to block
    domain: String,

    /// Tenant vanity domain (auth endpoint prefix)
    #[arg(long, env = "ZIA_VANITY_DOMAIN")]
    vanity_domain: String,

    /// OAuth2 client id
    #[arg(long, env = "ZIA_CLIENT_ID")]
    client_id: String,

    /// OAuth2 client secret
    #[arg(long, env = "ZIA_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// OAuth2 audience
    #[arg(long, env = "ZIA_AUDIENCE", default_value = zia::DEFAULT_AUDIENCE)]
    audience: String,

    /// API base URL
    #[arg(long, env = "ZIA_BASE_URL", default_value = zia::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Abort the whole operation, retries included, after this many seconds
    #[arg(long)]
    deadline: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut credentials = Credentials::new(args.vanity_domain, args.client_id, args.client_secret);
    credentials.audience = args.audience;
    credentials.base_url = args.base_url;

    let cancel = CancellationToken::new();
    if let Some(deadline) = args.deadline {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(deadline)).await;
            cancel.cancel();
        });
    }

    let client = ZiaClient::builder(credentials)
        .timeout(Duration::from_secs(args.timeout))
        .cancellation(cancel)
        .build();

    let outcome = client
        .denylist()
        .add_domain(&args.domain)
        .await
        .context("denylist update failed")?;

    match outcome {
        UpdateOutcome::Added { domain } => {
            println!("'{domain}' added to the denylist and activated");
        }
        UpdateOutcome::AlreadyPresent { domain } => {
            println!("'{domain}' is already in the denylist");
        }
        UpdateOutcome::Rejected { input } => {
            println!("rejected invalid domain: '{input}'");
        }
    }

    Ok(())
}
