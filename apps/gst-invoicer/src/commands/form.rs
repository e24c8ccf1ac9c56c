//! # Form Commands
//!
//! Commands fired while the user edits the form.
//!
//! ## Edit Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  keystroke ──► update_field / update_item ──► coercion ──► session     │
//! │                                                               │         │
//! │  [+ Add Product] ──► add_item ─────────────────────────────►  │         │
//! │  [×] ──────────────► remove_item (no-op on the last line) ──► │         │
//! │                                                               ▼         │
//! │                                         SessionView (live totals)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use gst_core::money_in_words;
use gst_core::Money;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::SessionView;
use crate::error::AppError;
use crate::render::{text, RenderedDocument};
use crate::state::{AppConfig, FormField, InvoiceSession, ItemField};

/// Response of `add_item`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAdded {
    /// Id of the new line.
    pub id: u32,
    pub session: SessionView,
}

/// Response of `remove_item`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRemoved {
    /// `false` when the request was ignored (last line or unknown id).
    pub removed: bool,
    pub session: SessionView,
}

/// Gets the current session for display.
pub fn get_session(session: &InvoiceSession) -> SessionView {
    debug!("get_session command");
    SessionView::from(session)
}

/// Updates one form field from raw input.
///
/// ## Arguments
/// * `field` - Wire name of the field (`buyerName`, `cgstRate`, ...)
/// * `value` - Text as typed
///
/// ## Errors
/// `VALIDATION_ERROR` for an unknown field name. Bad values never fail:
/// rates are coerced and a bad date is ignored.
pub fn update_field(
    session: &mut InvoiceSession,
    field: &str,
    value: &str,
) -> Result<SessionView, AppError> {
    debug!(field = %field, "update_field command");
    let field = FormField::from_str(field).map_err(AppError::validation)?;
    session.set_field(field, value);
    Ok(SessionView::from(&*session))
}

/// Updates one column of a line item from raw input.
///
/// ## Errors
/// - `NOT_FOUND` when no line has `id`
/// - `VALIDATION_ERROR` for an unknown column name
pub fn update_item(
    session: &mut InvoiceSession,
    id: u32,
    field: &str,
    value: &str,
) -> Result<SessionView, AppError> {
    debug!(id, field = %field, "update_item command");
    let field = ItemField::from_str(field).map_err(AppError::validation)?;
    session.set_item_field(id, field, value)?;
    Ok(SessionView::from(&*session))
}

/// Appends an empty line item.
pub fn add_item(session: &mut InvoiceSession) -> ItemAdded {
    debug!("add_item command");
    let id = session.add_item();
    ItemAdded {
        id,
        session: SessionView::from(&*session),
    }
}

/// Removes a line item unless it is the last one.
pub fn remove_item(session: &mut InvoiceSession, id: u32) -> ItemRemoved {
    debug!(id, "remove_item command");
    let removed = session.remove_item(id);
    ItemRemoved {
        removed,
        session: SessionView::from(&*session),
    }
}

/// Renders the edit form with live totals.
pub fn form_view(session: &InvoiceSession, config: &AppConfig) -> Result<RenderedDocument, AppError> {
    debug!("form_view command");
    text::render_form(session, config)
}

/// Spells an amount in words.
///
/// Accepts plain (`236`, `117.9882`) or scientific (`1e5`) notation.
/// Fractions are rounded to whole rupees first; the sign is ignored.
///
/// ## Errors
/// `VALIDATION_ERROR` when `amount` is not a number.
pub fn amount_in_words(amount: &str) -> Result<String, AppError> {
    debug!(amount = %amount, "amount_in_words command");
    let trimmed = amount.trim();
    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    let value = parsed
        .map_err(|e| AppError::validation(format!("Invalid amount '{}': {}", amount, e)))?;
    Ok(money_in_words(Money::from_decimal(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ViewMode;
    use chrono::NaiveDate;
    use gst_core::InvoiceForm;

    fn session() -> InvoiceSession {
        InvoiceSession::new(InvoiceForm::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()))
    }

    #[test]
    fn test_update_field_by_name() {
        let mut s = session();
        let view = update_field(&mut s, "buyerName", "Acme Traders").unwrap();
        assert_eq!(view.form.buyer_name, "Acme Traders");
        assert_eq!(view.view, ViewMode::Form);
    }

    #[test]
    fn test_update_field_unknown_name() {
        let mut s = session();
        let err = update_field(&mut s, "favouriteColour", "blue").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_item_recomputes_live_totals() {
        let mut s = session();
        update_item(&mut s, 1, "quantity", "2").unwrap();
        let view = update_item(&mut s, 1, "price", "100").unwrap();
        assert_eq!(view.totals.grand_total, Money::from_rupees(236));
        assert_eq!(view.words, "Two Hundred Thirty Six Rupees Only");
    }

    #[test]
    fn test_update_item_unknown_id() {
        let mut s = session();
        let err = update_item(&mut s, 9, "price", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_and_remove_commands() {
        let mut s = session();
        let added = add_item(&mut s);
        assert_eq!(added.id, 2);
        assert_eq!(added.session.items.len(), 2);

        let removed = remove_item(&mut s, 1);
        assert!(removed.removed);

        let ignored = remove_item(&mut s, 2);
        assert!(!ignored.removed);
        assert_eq!(ignored.session.items.len(), 1);
    }

    #[test]
    fn test_amount_in_words_command() {
        assert_eq!(
            amount_in_words("236").unwrap(),
            "Two Hundred Thirty Six Rupees Only"
        );
        assert_eq!(
            amount_in_words("117.9882").unwrap(),
            "One Hundred Eighteen Rupees Only"
        );
        assert_eq!(amount_in_words("1e5").unwrap(), "One Lakh Rupees Only");
        assert_eq!(amount_in_words("-21").unwrap(), "Twenty One Rupees Only");
        assert!(amount_in_words("twelve").is_err());
    }
}
