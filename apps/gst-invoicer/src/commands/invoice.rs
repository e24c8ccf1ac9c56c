//! # Invoice Commands
//!
//! Commands that move the invoice between the form and the preview.
//!
//! ## Invoice Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐  submit_invoice  ┌──────────┐  print_invoice  ┌───────┐  │
//! │  │   Form   │─────────────────►│ Preview  │────────────────►│ Host  │  │
//! │  └──────────┘                  └──────────┘                 └───────┘  │
//! │       ▲        back_to_form         │                                   │
//! │       └─────────────────────────────┘                                   │
//! │                                                                         │
//! │  reset_invoice: any state ──► empty Form                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use super::SessionView;
use crate::error::{AppError, ErrorCode};
use crate::print::{PrintHost, PrintReceipt};
use crate::render::{self, OutputFormat, PreviewStyle, RenderedDocument};
use crate::state::{AppConfig, InvoiceSession, PreviewSnapshot, ViewMode};

/// Validates the form, computes the totals and opens the preview.
///
/// ## Flow
/// 1. Buyer name present, rates within 0–100
/// 2. Totals computed once from the current lines
/// 3. Words written back into the form's `rupeesText`
/// 4. Form, lines and totals copied into the preview snapshot
///
/// ## Errors
/// `VALIDATION_ERROR` when a check fails; the session stays on the form.
pub fn submit_invoice(session: &mut InvoiceSession) -> Result<PreviewSnapshot, AppError> {
    debug!("submit_invoice command");
    let snapshot = session.submit()?;
    Ok(snapshot.clone())
}

/// Leaves the preview for the edit form. The snapshot is kept.
pub fn back_to_form(session: &mut InvoiceSession) -> SessionView {
    debug!("back_to_form command");
    session.back_to_form();
    SessionView::from(&*session)
}

/// Starts over with a blank form.
pub fn reset_invoice(session: &mut InvoiceSession) -> SessionView {
    debug!("reset_invoice command");
    session.reset();
    SessionView::from(&*session)
}

/// The snapshot on screen, or an error when the form is showing.
fn current_preview(session: &InvoiceSession) -> Result<&PreviewSnapshot, AppError> {
    match (session.view(), session.snapshot()) {
        (ViewMode::Preview, Some(snapshot)) => Ok(snapshot),
        _ => Err(AppError::new(
            ErrorCode::BusinessLogic,
            "Invoice has not been submitted",
        )),
    }
}

/// Renders the preview of the submitted invoice.
pub fn preview_invoice(
    session: &InvoiceSession,
    config: &AppConfig,
    style: PreviewStyle,
    format: OutputFormat,
) -> Result<RenderedDocument, AppError> {
    debug!(style = %style, ?format, "preview_invoice command");
    let snapshot = current_preview(session)?;
    render::render_preview(snapshot, style, format, config)
}

/// Sends the submitted invoice to the print host.
///
/// The document is the HTML preview with print styles that opens the print
/// dialog on load. Fire-and-forget: the receipt is only informational.
pub fn print_invoice(
    session: &InvoiceSession,
    config: &AppConfig,
    style: PreviewStyle,
    host: &dyn PrintHost,
) -> Result<PrintReceipt, AppError> {
    debug!(style = %style, "print_invoice command");
    let snapshot = current_preview(session)?;
    let doc = render::render_print(snapshot, style, config)?;
    let receipt = host.print(&doc)?;
    info!(destination = %receipt.destination, "print_invoice handed off");
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::form::{update_field, update_item};
    use crate::print::FilePrintHost;
    use chrono::NaiveDate;
    use gst_core::{InvoiceForm, Money};
    use std::cell::RefCell;

    fn filled_session() -> InvoiceSession {
        let mut s =
            InvoiceSession::new(InvoiceForm::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        update_field(&mut s, "buyerName", "Acme Traders").unwrap();
        update_item(&mut s, 1, "quantity", "3").unwrap();
        update_item(&mut s, 1, "price", "33.33").unwrap();
        s
    }

    /// Keeps every document it is handed.
    #[derive(Default)]
    struct RecordingHost {
        printed: RefCell<Vec<RenderedDocument>>,
    }

    impl PrintHost for RecordingHost {
        fn print(&self, doc: &RenderedDocument) -> Result<PrintReceipt, AppError> {
            self.printed.borrow_mut().push(doc.clone());
            Ok(PrintReceipt {
                destination: "memory".to_string(),
                bytes: doc.body.len(),
            })
        }
    }

    #[test]
    fn test_submit_invoice() {
        let mut s = filled_session();
        let snapshot = submit_invoice(&mut s).unwrap();
        assert_eq!(snapshot.totals.grand_total, Money::from_rupees(118));
        assert_eq!(s.view(), ViewMode::Preview);
    }

    #[test]
    fn test_submit_requires_buyer_name() {
        let mut s = filled_session();
        update_field(&mut s, "buyerName", "  ").unwrap();
        let err = submit_invoice(&mut s).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(s.view(), ViewMode::Form);
    }

    #[test]
    fn test_preview_requires_submit() {
        let s = filled_session();
        let err = preview_invoice(&s, &AppConfig::default(), PreviewStyle::Modern, OutputFormat::Text)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_back_to_form_hides_preview() {
        let mut s = filled_session();
        submit_invoice(&mut s).unwrap();
        let view = back_to_form(&mut s);
        assert_eq!(view.view, ViewMode::Form);
        assert!(view.snapshot.is_some());

        let err = preview_invoice(&s, &AppConfig::default(), PreviewStyle::Modern, OutputFormat::Html)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_print_hands_html_to_host() {
        let mut s = filled_session();
        submit_invoice(&mut s).unwrap();

        let host = RecordingHost::default();
        let receipt = print_invoice(&s, &AppConfig::default(), PreviewStyle::Classic, &host).unwrap();
        assert_eq!(receipt.destination, "memory");

        let printed = host.printed.borrow();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].format, OutputFormat::Html);
        assert!(printed[0].body.contains("window.print()"));
        assert!(printed[0].body.contains("₹118.00"));
    }

    #[test]
    fn test_print_to_file() {
        let mut s = filled_session();
        submit_invoice(&mut s).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.html");
        let host = FilePrintHost::new(&path);
        print_invoice(&s, &AppConfig::default(), PreviewStyle::Modern, &host).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Acme Traders"));
    }

    #[test]
    fn test_reset_invoice() {
        let mut s = filled_session();
        submit_invoice(&mut s).unwrap();
        let view = reset_invoice(&mut s);
        assert_eq!(view.view, ViewMode::Form);
        assert!(view.snapshot.is_none());
        assert!(view.form.buyer_name.is_empty());
    }
}
