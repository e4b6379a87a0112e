//! CLI entry point for the leet-network invite graph resolver.
//!
//! Prints JSON on stdout and logs on stderr, so the output can be piped
//! straight into a graph renderer.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use leet_api::{ApiClient, ApiConfig, LoginOutcome};
use leet_core::UserId;
use leet_network::resolve::parse_depth;
use leet_network::types::NetworkRequest;
use leet_network::{build_network, fetch, NetworkConfig, NetworkEngine};

#[derive(Parser)]
#[command(name = "leet-network")]
#[command(about = "Invite network resolver for the Leet admin console")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Admin access token (overrides config).
    #[arg(long, global = true)]
    token: Option<String>,

    /// Config file prefix (default: leet).
    #[arg(short, long, default_value = "leet", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the invite network around a user.
    Resolve {
        /// Focus user ID (default: first user in the collection).
        #[arg(long)]
        root: Option<i64>,
        /// Maximum hops from the focus user; unparsable values fall back to 2.
        #[arg(long)]
        depth: Option<String>,
        /// Read users as JSON from stdin instead of calling the API.
        #[arg(long)]
        stdin: bool,
    },
    /// Search users by name, email, phone, or ID.
    Search {
        query: String,
    },
    /// Log in and print the access token.
    Login {
        #[arg(long)]
        identifier: String,
        #[arg(long)]
        password: String,
        /// Six-digit code, if the account requires a second factor.
        #[arg(long)]
        otp: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let cfg = leet_core::config::load_layered(&cli.config, "LEET")?;
    let mut api_config: ApiConfig = leet_core::config::section(&cfg, "api")?;
    let network_config: NetworkConfig = leet_core::config::section(&cfg, "network")?;
    if cli.token.is_some() {
        api_config.token = cli.token.clone();
    }

    match cli.command {
        Command::Resolve { root, depth, stdin } => {
            let max_depth = depth.as_deref().map(parse_depth);
            let root_user_id = root.map(UserId);

            let result = if stdin {
                let input = std::io::read_to_string(std::io::stdin())?;
                let users = fetch::parse_users(&input)?;
                build_network(
                    users,
                    root_user_id,
                    max_depth.unwrap_or(network_config.default_depth),
                )
            } else {
                let client = ApiClient::new(&api_config)?;
                let engine = NetworkEngine::new(client).with_config(network_config);
                engine
                    .resolve_network(NetworkRequest {
                        root_user_id,
                        max_depth,
                    })
                    .await?
            };
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Search { ref query } => {
            let client = ApiClient::new(&api_config)?;
            let engine = NetworkEngine::new(client);
            let found = engine.search(query).await?;
            tracing::info!(query = %query, matches = found.len(), "User search complete");
            let rows: Vec<_> = found
                .iter()
                .map(|u| {
                    serde_json::json!({
                        "id": u.id,
                        "name": u.display_name(),
                        "phone_number": u.phone_number,
                        "email": u.email,
                        "role": u.role(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&rows)?);
        }
        Command::Login {
            ref identifier,
            ref password,
            ref otp,
        } => {
            let client = ApiClient::new(&api_config)?;
            let access = match client.login(identifier, password).await? {
                LoginOutcome::Authenticated { access } => access,
                LoginOutcome::ChallengeRequired {
                    challenge_token,
                    email,
                } => {
                    let code = otp.as_deref().ok_or_else(|| {
                        anyhow::anyhow!(
                            "One-time code sent to {}; rerun with --otp",
                            email.as_deref().unwrap_or("your email")
                        )
                    })?;
                    client.verify_otp(&challenge_token, code).await?
                }
            };
            println!("{}", serde_json::json!({ "access": access }));
        }
    }

    Ok(())
}
