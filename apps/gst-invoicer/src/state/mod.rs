//! # State Module
//!
//! Manages application state for the invoicer.
//!
//! ## Why Two State Types?
//! The editable invoice and the configuration change at very different rates:
//!
//! 1. **InvoiceSession** changes on every keystroke and is passed `&mut`
//! 2. **AppConfig** is loaded once at startup and only ever read
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      CLI / caller                               │   │
//! │  │  let config = AppConfig::load(path)?;                           │   │
//! │  │  let mut session = InvoiceSession::new(config.blank_form(..));  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                           │
//! │               ▼                             ▼                           │
//! │  ┌────────────────────────┐    ┌────────────────────────┐              │
//! │  │    InvoiceSession      │    │      AppConfig         │              │
//! │  │                        │    │                        │              │
//! │  │  form + line items     │    │  default rates         │              │
//! │  │  view mode             │    │  seller defaults       │              │
//! │  │  preview snapshot      │    │  style, print output   │              │
//! │  └────────────────────────┘    └────────────────────────┘              │
//! │                                                                         │
//! │  Single-threaded: no Mutex, no globals. Each command runs to           │
//! │  completion on the session it was handed.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{default_config_path, AppConfig, SellerDefaults, ENV_PREFIX};
pub use session::{FormField, InvoiceSession, ItemField, PreviewSnapshot, ViewMode};
