//! # GST Invoicer Library
//!
//! Presentation layer of the GST invoice generator: the editable session,
//! the commands that change it, and the renderers for the form and preview.
//!
//! ## Module Organization
//! ```text
//! gst_invoicer_lib/
//! ├── lib.rs          ◄─── You are here (startup, logging)
//! ├── cli.rs          ◄─── clap definitions and subcommand dispatch
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── InvoiceSession (form, items, view mode)
//! │   └── config.rs   ◄─── AppConfig (defaults → file → env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── SessionView response
//! │   ├── form.rs     ◄─── Field and line item edits
//! │   ├── invoice.rs  ◄─── Submit, preview, print
//! │   └── draft.rs    ◄─── JSON drafts
//! ├── render/
//! │   ├── mod.rs      ◄─── View model, styles, placeholders
//! │   ├── html.rs     ◄─── tera HTML
//! │   └── text.rs     ◄─── Fixed-width text
//! ├── print.rs        ◄─── PrintHost hand-off
//! └── error.rs        ◄─── AppError for commands
//! ```
//!
//! All invoice arithmetic lives in `gst-core`; nothing here computes a
//! total on its own.

pub mod cli;
pub mod commands;
pub mod error;
pub mod print;
pub mod render;
pub mod state;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use state::AppConfig;

/// Filter used when neither `RUST_LOG` nor the `log_filter` config key is set.
pub const DEFAULT_LOG_FILTER: &str = "info,gst_invoicer=debug,gst_invoicer_lib=debug";

/// Runs the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • built-in defaults                                                 │
/// │     • --config file, else <config dir>/gst-invoicer/config.toml         │
/// │     • GST_INVOICER_* environment variables                              │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG, else config log_filter, else DEFAULT_LOG_FILTER         │
/// │                                                                         │
/// │  3. Create Session ───────────────────────────────────────────────────► │
/// │     • blank form dated today with default rates and seller              │
/// │                                                                         │
/// │  4. Dispatch Subcommand ──────────────────────────────────────────────► │
/// │     • rendered output on stdout (or --output file)                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(config.log_filter.as_deref());
    info!(version = env!("CARGO_PKG_VERSION"), "Starting GST Invoicer");

    let today = chrono::Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(&cli.command, &config, today, &mut out)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gst_core=trace` - Show trace for one crate only
/// - Default: `fallback`, or [`DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr so rendered documents on stdout stay clean.
pub fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_FILTER))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
