//! # Command Line Interface
//!
//! Subcommands drive the same commands a form would, from a JSON draft.
//!
//! ```text
//! gst-invoicer template                     > draft.json
//! gst-invoicer form     --input draft.json  (edit view, live totals)
//! gst-invoicer totals   --input draft.json  (JSON)
//! gst-invoicer preview  --input draft.json  [--style classic] [--format html] [--output out.html]
//! gst-invoicer print    --input draft.json  [--output invoice.html]
//! gst-invoicer words    117.9882
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::commands::draft::Draft;
use crate::commands::{form, invoice};
use crate::error::AppError;
use crate::print::FilePrintHost;
use crate::render::{OutputFormat, PreviewStyle, RenderedDocument};
use crate::state::{AppConfig, InvoiceSession};

/// GST invoice generator: fill a form, preview it, print it.
#[derive(Parser, Debug)]
#[command(name = "gst-invoicer", version, about)]
pub struct Cli {
    /// Config file (default: the platform config dir's gst-invoicer/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a blank draft with the configured defaults filled in.
    Template,

    /// Print the totals of a draft as JSON.
    Totals {
        #[arg(long, value_name = "DRAFT")]
        input: PathBuf,
    },

    /// Submit a draft and render its preview.
    Preview {
        #[arg(long, value_name = "DRAFT")]
        input: PathBuf,

        /// Layout (default from config)
        #[arg(long, value_enum)]
        style: Option<PreviewStyle>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Submit a draft and hand the printable page to the print host.
    Print {
        #[arg(long, value_name = "DRAFT")]
        input: PathBuf,

        #[arg(long, value_enum)]
        style: Option<PreviewStyle>,

        /// Where to write the page (default from config)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Render the edit form of a draft with live totals.
    Form {
        #[arg(long, value_name = "DRAFT")]
        input: PathBuf,
    },

    /// Spell an amount in words.
    Words {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Runs one subcommand, writing its result to `out`.
pub fn execute(
    command: &Command,
    config: &AppConfig,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let mut session = InvoiceSession::new(config.blank_form(today));

    match command {
        Command::Template => {
            let draft = Draft::from_session(&session)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&draft)?)?;
        }
        Command::Totals { input } => {
            load_into(&mut session, input)?;
            let totals = session.live_totals();
            writeln!(out, "{}", serde_json::to_string_pretty(&totals)?)?;
        }
        Command::Preview {
            input,
            style,
            format,
            output,
        } => {
            load_into(&mut session, input)?;
            invoice::submit_invoice(&mut session)?;
            let doc = invoice::preview_invoice(
                &session,
                config,
                style.unwrap_or(config.preview_style),
                *format,
            )?;
            emit(&doc, output.as_deref(), out)?;
        }
        Command::Print {
            input,
            style,
            output,
        } => {
            load_into(&mut session, input)?;
            invoice::submit_invoice(&mut session)?;
            let host = FilePrintHost::new(output.clone().unwrap_or_else(|| config.print_output.clone()));
            let receipt = invoice::print_invoice(
                &session,
                config,
                style.unwrap_or(config.preview_style),
                &host,
            )?;
            writeln!(out, "Sent to print: {}", receipt.destination)?;
        }
        Command::Form { input } => {
            load_into(&mut session, input)?;
            let doc = form::form_view(&session, config)?;
            emit(&doc, None, out)?;
        }
        Command::Words { amount } => {
            writeln!(out, "{}", form::amount_in_words(amount)?)?;
        }
    }
    Ok(())
}

fn load_into(session: &mut InvoiceSession, path: &Path) -> Result<(), AppError> {
    Draft::load(path)?.apply(session)
}

fn emit(doc: &RenderedDocument, output: Option<&Path>, out: &mut dyn Write) -> Result<(), AppError> {
    match output {
        Some(path) => {
            fs::write(path, doc.body.as_bytes())?;
            info!(path = %path.display(), title = %doc.title, "Document written");
        }
        None => {
            out.write_all(doc.body.as_bytes())?;
        }
    }
    Ok(())
}
