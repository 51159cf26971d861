//! Trade-show order tracking API entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expo_orders::api::{create_router, AppState};
use expo_orders::config::Config;
use expo_orders::orders::{summarize_exhibitors, OrderStats};
use expo_orders::source::DataSource;
use expo_orders::utils::shutdown_signal;

/// Trade-show order tracking API.
#[derive(Parser, Debug)]
#[command(name = "expo-orders")]
#[command(about = "Read-only HTTP API for trade-show exhibitor orders")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port.
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port.
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Serve the built-in fixture dataset, ignoring the sheet source.
        #[arg(long)]
        fixture: bool,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Fetch and print orders from the configured source (diagnostic).
    FetchOrders,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("expo_orders=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::FetchOrders) => cmd_fetch_orders().await,
        Some(Command::Run { port, fixture }) => cmd_run(port, fixture).await,
        None => cmd_run(args.port, false).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("EXPO ORDERS API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Data Source: {}", config.data_source);
    if let Some(sheet_id) = &config.sheet_id {
        println!("  Sheet ID: {}", sheet_id);
    }
    println!("  Worksheet: {}", config.orders_worksheet);
    println!(
        "  API Key: {}",
        if config.sheets_api_key.is_some() {
            "present"
        } else {
            "not set"
        }
    );
    println!("  Port: {}", config.port);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Fetch and print orders from the configured source.
async fn cmd_fetch_orders() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("EXPO ORDERS API - SOURCE FETCH");
    println!("======================================================================");

    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let source = DataSource::from_config(&config);

    println!("\nFetching orders from {} source...\n", config.data_source);

    match source.fetch_orders().await {
        Ok(orders) => {
            println!("FETCH SUCCEEDED - {} orders", orders.len());
            println!("----------------------------------------------------------------------");
            for order in orders.iter().take(10) {
                println!(
                    "  {} | booth {} | {} | {} x{} | {}",
                    order.id,
                    order.booth_number,
                    order.exhibitor_name,
                    order.item,
                    order.quantity,
                    order.status
                );
            }
            if orders.len() > 10 {
                println!("  ... and {} more", orders.len() - 10);
            }

            let stats = OrderStats::from_orders(&orders);
            let exhibitors = summarize_exhibitors(&orders);
            println!("----------------------------------------------------------------------");
            println!("  Exhibitors: {}", exhibitors.len());
            println!("  Delivered: {}", stats.delivered);
            println!("  Out for delivery: {}", stats.out_for_delivery);
            println!("  In route: {}", stats.in_route);
            println!("  In process: {}", stats.in_process);
            println!("  Cancelled: {}", stats.cancelled);
            println!("======================================================================");
        }
        Err(e) => {
            println!("FETCH FAILED");
            println!("  Error: {}", e);
            println!("\nThe server would fall back to the fixture dataset.");
            println!("======================================================================");
        }
    }

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port: u16, fixture_override: bool) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if fixture_override {
        config.data_source = expo_orders::config::SOURCE_FIXTURE.to_string();
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Data source: {}", config.data_source);
    info!("Worksheet: {}", config.orders_worksheet);

    // The data source is built once and handed to the request-handling
    // context; each request re-fetches and recomputes from it.
    let source = DataSource::from_config(&config);
    let app_state = AppState::new(source);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
