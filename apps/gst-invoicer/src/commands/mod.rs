//! # Commands Module
//!
//! The event handlers of the invoice screen.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports, SessionView)
//! ├── form.rs     ◄─── Field and line item edits, amount in words
//! ├── invoice.rs  ◄─── Submit, back, reset, preview, print
//! └── draft.rs    ◄─── JSON drafts replayed through the form commands
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Caller (CLI, draft loader, tests)                                      │
//! │  ─────────────────────────────────                                      │
//! │  update_field(&mut session, "buyerName", "Acme Traders")                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  pub fn update_field(                                                   │
//! │      session: &mut InvoiceSession,  ◄── Owned by the caller            │
//! │      field: &str,                   ◄── Wire name of the field         │
//! │      value: &str,                   ◄── Raw input text                 │
//! │  ) -> Result<SessionView, AppError>                                     │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  Caller receives: SessionView { view, form, items, totals, words }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Passing
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn add_item(session: &mut InvoiceSession) -> ItemAdded
//!
//! // Needs session, config and a print host
//! fn print_invoice(session: &InvoiceSession, config: &AppConfig,
//!                  style: PreviewStyle, host: &dyn PrintHost)
//! ```

pub mod draft;
pub mod form;
pub mod invoice;

use gst_core::{InvoiceForm, LineItem, Totals};
use serde::Serialize;

use crate::state::{InvoiceSession, PreviewSnapshot, ViewMode};

/// What the form view needs after any edit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub view: ViewMode,
    pub form: InvoiceForm,
    pub items: Vec<LineItem>,
    /// Running totals of the current edits.
    pub totals: Totals,
    /// Words shown under the form (override or computed).
    pub words: String,
    pub snapshot: Option<PreviewSnapshot>,
}

impl From<&InvoiceSession> for SessionView {
    fn from(session: &InvoiceSession) -> Self {
        SessionView {
            view: session.view(),
            form: session.form().clone(),
            items: session.items().as_slice().to_vec(),
            totals: session.live_totals(),
            words: session.form_words(),
            snapshot: session.snapshot().cloned(),
        }
    }
}
