//! # Render Module
//!
//! Turns a session or a submitted snapshot into a document to show or print.
//!
//! ## One Renderer, Many Looks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Preview Rendering                                    │
//! │                                                                         │
//! │  PreviewSnapshot ──► InvoiceView (placeholders, ₹ formatting, labels)  │
//! │                           │                                             │
//! │            ┌──────────────┴──────────────┐                              │
//! │            ▼                             ▼                              │
//! │     html::render (tera)           text::render_preview                  │
//! │     print CSS, autoescape         fixed-width columns                   │
//! │     optional window.print()                                             │
//! │                                                                         │
//! │  PreviewStyle only swaps labels and CSS class:                          │
//! │    modern  │ classic │ compact                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never recomputed here; every figure comes from the snapshot.

pub mod html;
pub mod text;

use std::fmt;

use gst_core::LineItem;
use serde::{Deserialize, Serialize};

use crate::state::{AppConfig, PreviewSnapshot};

// =============================================================================
// Placeholders
// =============================================================================

/// Text printed in place of fields the user left empty.
pub mod placeholder {
    pub const BILL_NO: &str = "000001";
    pub const SELLER_NAME: &str = "Ganguly Industries";
    /// The form's signature block uses a neutral name.
    pub const SIGNATURE_NAME: &str = "Company Name";
    pub const SELLER_ADDRESS: &str = "Company Address";
    pub const SELLER_ADDRESS_LINE: &str = "Company address line";
    pub const UAN: &str = "UAN Number";
    pub const GSTIN: &str = "GSTIN Number";
    pub const PHONE: &str = "Phone number";
    pub const BUYER_NAME: &str = "Buyer Name";
    pub const BUYER_ADDRESS: &str = "Buyer address line";
    pub const BUYER_EMAIL: &str = "buyer@email.com";
    pub const ITEM_NAME: &str = "Item description";
    pub const HSN_SAC: &str = "HSN/SAC";
    pub const NOTE: &str = "Thank you for choosing us!";
}

/// `value` unless it is blank, else `fallback`.
pub fn or_placeholder(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

// =============================================================================
// Style and Format
// =============================================================================

/// Preview layout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    #[default]
    Modern,
    Classic,
    Compact,
}

impl PreviewStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewStyle::Modern => "modern",
            PreviewStyle::Classic => "classic",
            PreviewStyle::Compact => "compact",
        }
    }

    /// Wording used by this style.
    pub fn labels(&self) -> StyleLabels {
        match self {
            PreviewStyle::Modern => StyleLabels {
                title: "TAX INVOICE",
                number: "No.",
                date: "Date:",
                order: "Order:",
                billed_to: "Billed to:",
                from: "From:",
                description: "Description of Product",
                quantity: "Quantity",
                hsn_sac: "HSN/SAC",
                price: "Price",
                amount: "Amount",
                subtotal: "Total",
                round_off: "Round Off",
                grand_total: "Grand Total",
                words: "Rupees:",
                note: "Note:",
                signature: "For",
            },
            PreviewStyle::Classic => StyleLabels {
                title: "TAX INVOICE",
                number: "Invoice No.",
                date: "Dated:",
                order: "Buyer's Order No.:",
                billed_to: "Buyer (Bill to):",
                from: "Seller:",
                description: "Description of Goods",
                quantity: "Qty",
                hsn_sac: "HSN/SAC",
                price: "Rate",
                amount: "Amount",
                subtotal: "Taxable Value",
                round_off: "Round Off",
                grand_total: "Total Amount",
                words: "Amount Chargeable (in words):",
                note: "Declaration:",
                signature: "for",
            },
            PreviewStyle::Compact => StyleLabels {
                title: "INVOICE",
                number: "#",
                date: "Date",
                order: "Order",
                billed_to: "To",
                from: "From",
                description: "Item",
                quantity: "Qty",
                hsn_sac: "HSN",
                price: "Price",
                amount: "Amt",
                subtotal: "Subtotal",
                round_off: "Round off",
                grand_total: "Total",
                words: "In words:",
                note: "Note:",
                signature: "For",
            },
        }
    }
}

impl fmt::Display for PreviewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output markup.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
}

/// Fixed wording of one preview style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleLabels {
    pub title: &'static str,
    pub number: &'static str,
    pub date: &'static str,
    pub order: &'static str,
    pub billed_to: &'static str,
    pub from: &'static str,
    pub description: &'static str,
    pub quantity: &'static str,
    pub hsn_sac: &'static str,
    pub price: &'static str,
    pub amount: &'static str,
    pub subtotal: &'static str,
    pub round_off: &'static str,
    pub grand_total: &'static str,
    pub words: &'static str,
    pub note: &'static str,
    pub signature: &'static str,
}

// =============================================================================
// Rendered Document
// =============================================================================

/// Output of a renderer, ready to display or hand to a print host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub title: String,
    pub format: OutputFormat,
    pub body: String,
}

// =============================================================================
// Invoice View Model
// =============================================================================

/// One line item, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub name: String,
    pub quantity: u32,
    pub hsn_sac: String,
    pub price: String,
    pub amount: String,
}

/// Everything a preview template prints, already formatted.
///
/// Built once from a snapshot; the HTML and text renderers only lay it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView {
    pub style: PreviewStyle,
    pub labels: StyleLabels,

    pub bill_no: String,
    pub invoice_date: String,
    pub order_no: Option<String>,

    pub seller_name: String,
    pub seller_address: String,
    pub seller_address_line: String,
    pub seller_uan: String,
    pub seller_gstin: String,
    pub seller_phone: String,

    pub buyer_name: String,
    pub buyer_address: String,
    pub buyer_email: String,
    pub buyer_gstin: Option<String>,

    pub rows: Vec<RowView>,

    pub subtotal: String,
    pub cgst_label: String,
    pub cgst: String,
    pub sgst_label: String,
    pub sgst: String,
    pub round_off: String,
    pub grand_total: String,
    pub words: String,
    pub note: String,
}

impl InvoiceView {
    pub fn from_snapshot(snapshot: &PreviewSnapshot, style: PreviewStyle, config: &AppConfig) -> Self {
        let form = &snapshot.form;
        let totals = &snapshot.totals;
        let money = |m| config.format_currency(m);
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        InvoiceView {
            style,
            labels: style.labels(),

            bill_no: or_placeholder(&form.bill_no, placeholder::BILL_NO),
            invoice_date: form.invoice_date.format("%Y-%m-%d").to_string(),
            order_no: optional(&form.order_no),

            seller_name: or_placeholder(&form.industry_name, placeholder::SELLER_NAME),
            seller_address: or_placeholder(&form.company_address, placeholder::SELLER_ADDRESS),
            seller_address_line: or_placeholder(
                &form.company_address,
                placeholder::SELLER_ADDRESS_LINE,
            ),
            seller_uan: or_placeholder(&form.uan_number, placeholder::UAN),
            seller_gstin: or_placeholder(&form.gstin_number, placeholder::GSTIN),
            seller_phone: or_placeholder(&form.mobile_number, placeholder::PHONE),

            buyer_name: or_placeholder(&form.buyer_name, placeholder::BUYER_NAME),
            buyer_address: or_placeholder(&form.buyer_address, placeholder::BUYER_ADDRESS),
            buyer_email: or_placeholder(&form.buyer_email, placeholder::BUYER_EMAIL),
            buyer_gstin: optional(&form.buyer_gstin),

            rows: snapshot
                .items
                .iter()
                .map(|item| row_view(item, config))
                .collect(),

            subtotal: money(totals.subtotal),
            cgst_label: format!("CGST @ {}%", form.cgst_rate),
            cgst: money(totals.cgst),
            sgst_label: format!("SGST @ {}%", form.sgst_rate),
            sgst: money(totals.sgst),
            round_off: money(totals.round_off),
            grand_total: money(totals.grand_total),
            words: snapshot.words(),
            note: or_placeholder(&form.note, placeholder::NOTE),
        }
    }
}

fn row_view(item: &LineItem, config: &AppConfig) -> RowView {
    RowView {
        name: or_placeholder(&item.name, placeholder::ITEM_NAME),
        quantity: item.quantity,
        hsn_sac: or_placeholder(&item.hsn_sac, placeholder::HSN_SAC),
        price: config.format_currency(item.price),
        amount: config.format_currency(item.amount()),
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Renders the preview of a submitted invoice.
pub fn render_preview(
    snapshot: &PreviewSnapshot,
    style: PreviewStyle,
    format: OutputFormat,
    config: &AppConfig,
) -> Result<RenderedDocument, crate::error::AppError> {
    let view = InvoiceView::from_snapshot(snapshot, style, config);
    match format {
        OutputFormat::Html => html::render(&view, false),
        OutputFormat::Text => text::render_preview(&view),
    }
}

/// Renders the printable variant: HTML that opens the print dialog on load.
pub fn render_print(
    snapshot: &PreviewSnapshot,
    style: PreviewStyle,
    config: &AppConfig,
) -> Result<RenderedDocument, crate::error::AppError> {
    let view = InvoiceView::from_snapshot(snapshot, style, config);
    html::render(&view, true)
}

/// Document title shared by every renderer.
pub(crate) fn document_title(view: &InvoiceView) -> String {
    format!("{} {}", view.labels.title, view.bill_no)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::{FormField, InvoiceSession, ItemField};
    use chrono::NaiveDate;
    use gst_core::InvoiceForm;

    /// A submitted two-line invoice used by the renderer tests.
    pub(crate) fn sample_snapshot() -> PreviewSnapshot {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut session = InvoiceSession::new(InvoiceForm::new(date));
        session.set_field(FormField::BuyerName, "Acme Traders");
        session.set_field(FormField::BillNo, "INV-42");
        session.set_item_field(1, ItemField::Name, "Steel bolts").unwrap();
        session.set_item_field(1, ItemField::Quantity, "3").unwrap();
        session.set_item_field(1, ItemField::Price, "33.33").unwrap();
        let id = session.add_item();
        session.set_item_field(id, ItemField::Price, "0").unwrap();
        session.submit().unwrap().clone()
    }

    #[test]
    fn test_view_applies_placeholders() {
        let view = InvoiceView::from_snapshot(
            &sample_snapshot(),
            PreviewStyle::Modern,
            &AppConfig::default(),
        );

        assert_eq!(view.bill_no, "INV-42");
        assert_eq!(view.seller_name, "Ganguly Industries");
        assert_eq!(view.seller_address, "Company Address");
        assert_eq!(view.seller_uan, "UAN Number");
        assert_eq!(view.buyer_name, "Acme Traders");
        assert_eq!(view.buyer_address, "Buyer address line");
        assert_eq!(view.buyer_email, "buyer@email.com");
        assert_eq!(view.note, "Thank you for choosing us!");
        assert_eq!(view.rows[1].name, "Item description");
        assert_eq!(view.rows[1].hsn_sac, "HSN/SAC");
        assert!(view.order_no.is_none());
    }

    #[test]
    fn test_view_formats_totals() {
        let view = InvoiceView::from_snapshot(
            &sample_snapshot(),
            PreviewStyle::Modern,
            &AppConfig::default(),
        );

        assert_eq!(view.rows[0].price, "₹33.33");
        assert_eq!(view.rows[0].amount, "₹99.99");
        assert_eq!(view.subtotal, "₹99.99");
        assert_eq!(view.cgst_label, "CGST @ 9%");
        assert_eq!(view.cgst, "₹9.00");
        assert_eq!(view.sgst_label, "SGST @ 9%");
        assert_eq!(view.round_off, "₹0.01");
        assert_eq!(view.grand_total, "₹118.00");
        assert_eq!(view.words, "One Hundred Eighteen Rupees Only");
    }

    #[test]
    fn test_styles_differ_only_in_labels() {
        let snapshot = sample_snapshot();
        let config = AppConfig::default();
        let modern = InvoiceView::from_snapshot(&snapshot, PreviewStyle::Modern, &config);
        let classic = InvoiceView::from_snapshot(&snapshot, PreviewStyle::Classic, &config);

        assert_ne!(modern.labels, classic.labels);
        assert_eq!(modern.rows, classic.rows);
        assert_eq!(modern.grand_total, classic.grand_total);
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("  ", "x"), "x");
        assert_eq!(or_placeholder("value", "x"), "value");
    }
}
