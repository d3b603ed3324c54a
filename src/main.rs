use chrono::Utc;
use clap::{Parser, Subcommand};
use disaster_monitor::app::dashboard_use_case::DashboardUseCase;
use disaster_monitor::config::Config;
use disaster_monitor::infra::http_client::ReqwestHttp;
use disaster_monitor::logging;
use disaster_monitor::metrics::init_metrics;
use disaster_monitor::server::{start_server, AppState};
use disaster_monitor::types::DisasterFilter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "disaster_monitor")]
#[command(about = "Global disaster monitoring dashboard (USGS, NASA EONET, NewsAPI)")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// Port to listen on (overrides config and MONITOR_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch once and write the dashboard to an HTML file
    Snapshot {
        /// All, Earthquake, Wildfire or Storm
        #[arg(long, default_value = "All")]
        disaster: DisasterFilter,
        #[arg(long, default_value = "dashboard.html")]
        output: PathBuf,
    },
    /// Fetch once and print the unified records as JSON
    Records,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    // No credential, no work: fail before any request goes out
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let use_case = Arc::new(DashboardUseCase::new(Arc::new(ReqwestHttp::new()), &config));

    match cli.command {
        Commands::Serve { port } => {
            let state = AppState {
                use_case,
                metrics: init_metrics(),
            };
            start_server(state, port.unwrap_or(config.server.port)).await?;
        }
        Commands::Snapshot { disaster, output } => {
            let dashboard = use_case.run(disaster, Utc::now()).await;
            for err in &dashboard.errors {
                eprintln!("⚠️  {}", err.message);
            }
            std::fs::write(&output, dashboard.render_html()?)?;
            info!("Wrote dashboard snapshot to {}", output.display());
            println!(
                "✅ {} records, {} map markers -> {}",
                dashboard.records.len(),
                dashboard.map.markers.len(),
                output.display()
            );
        }
        Commands::Records => {
            let dashboard = use_case.run(DisasterFilter::All, Utc::now()).await;
            for err in &dashboard.errors {
                eprintln!("⚠️  {}", err.message);
            }
            println!("{}", serde_json::to_string_pretty(&dashboard.records)?);
        }
    }
    Ok(())
}
