//! # GST Invoicer Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GST Invoicer                                     │
//! │                                                                         │
//! │  main.rs ────► parses the command line                                 │
//! │                                                                         │
//! │  lib.rs ─────► loads config, sets up logging, dispatches               │
//! │                                                                         │
//! │  commands/ ──► update_field, add_item, submit_invoice, print_invoice   │
//! │                                                                         │
//! │  state/ ─────► InvoiceSession, AppConfig                               │
//! │                                                                         │
//! │  gst-core ───► totals, round off, amount in words                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use gst_invoicer_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    gst_invoicer_lib::run(Cli::parse())
}
