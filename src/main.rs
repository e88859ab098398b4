use std::net::SocketAddr;
use std::process;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cubalink23::api::load_health;
use cubalink23::catalog;
use cubalink23::config::{self, DEFAULT_HOST};
use cubalink23::models::AppState;
use cubalink23::routes::build_router;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = reqwest::Client::builder()
        .user_agent(format!("Cubalink23/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        sessions: Arc::new(Mutex::new(std::collections::HashMap::new())),
        flash_store: Arc::new(Mutex::new(std::collections::HashMap::new())),
        api_base_url: config::get_api_base_url(),
        public_base_url: config::get_public_base_url(),
        client,
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!(
                    "{} {}: {}",
                    yansi::Paint::red("Failed to read custom stylesheet at"),
                    path,
                    e
                );
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting Cubalink23 web server");
    println!(
        "{} {}",
        yansi::Paint::new("Cubalink23 web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn sized_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

#[derive(Parser)]
#[command(
    name = "cubalink23",
    author,
    version,
    about = "Cubalink23 web front-end",
    long_about = r#"Cubalink23 — travel and store front-end server.

Serves the marketing pages (travel search, store, cart, account) with the
location selector, and proxies the health endpoint of the remote backend
configured via API_BASE_URL. Use `--env-file` or environment variables to
point at the backend.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 3000
  2) Inspect the location catalog:
      cubalink23 locations list
      cubalink23 locations show la-habana
"#,
    after_help = "Use `cubalink23 <subcommand> --help` for subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to (falls back to PORT, then 3000)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / backend reachability)
    #[command(
        about = "Validate configuration and backend reachability.",
        long_about = "Check the environment the server would run with, and ping the remote backend's health endpoint when API_BASE_URL is configured."
    )]
    CheckConfig { env_file: Option<String> },
    /// Inspect the built-in province/municipality catalog
    Locations {
        #[command(subcommand)]
        sub: LocationCommands,
    },
}

#[derive(Subcommand)]
enum LocationCommands {
    #[command(about = "List provinces", long_about = "Enumerate the provinces of the built-in catalog with slug and municipality count.")]
    List,
    #[command(about = "Show a province's municipalities", long_about = "List every municipality of a province with its derived slug, in catalog order.")]
    Show { province: String },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand: serve with defaults.
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        let port = config::get_port();
        start_server(state, DEFAULT_HOST, port, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if !state.has_remote_api() {
                println!(
                    "{}",
                    yansi::Paint::new(
                        "API_BASE_URL is not configured; searches and health checks run in local mode"
                    )
                    .yellow()
                );
                process::exit(0);
            }
            let resp = load_health(&state.client, &state.api_base_url).await;
            if resp.get("status").and_then(|s| s.as_str()) == Some("OK") {
                println!(
                    "{}",
                    yansi::Paint::new("Configuration looks valid (backend health OK)").green()
                );
                process::exit(0);
            } else {
                let json_str =
                    serde_json::to_string_pretty(&resp).unwrap_or_else(|_| "<non-json>".into());
                eprintln!(
                    "{}: {}",
                    yansi::Paint::new("Backend health check failed").red(),
                    json_str
                );
                process::exit(1);
            }
        }
        Commands::Locations { sub } => match sub {
            LocationCommands::List => {
                let mut table = sized_table();
                table.set_header(vec!["Slug", "Province", "Municipalities"]);
                for p in catalog::PROVINCES {
                    table.add_row(vec![
                        p.slug.to_string(),
                        p.name.to_string(),
                        p.municipalities.len().to_string(),
                    ]);
                }
                println!("\n{table}\n");
            }
            LocationCommands::Show { province } => {
                let Some(p) = catalog::lookup(&province) else {
                    eprintln!(
                        "{} '{}' {}",
                        yansi::Paint::new("Province").red(),
                        province,
                        yansi::Paint::new("not found (use `locations list` for slugs)").red()
                    );
                    process::exit(1);
                };
                let mut table = sized_table();
                table.set_header(vec!["Municipality", "Slug"]);
                for m in p.municipalities {
                    table.add_row(vec![(*m).to_string(), catalog::slugify(m)]);
                }
                println!("\n{}\n{table}\n", yansi::Paint::new(p.name).bold());
            }
        },
    }
}
