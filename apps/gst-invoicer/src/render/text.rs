//! Plain text rendering for terminals.
//!
//! Two views: the submitted preview, laid out like the printed invoice, and
//! the edit form with running totals.

use std::fmt::{self, Write as _};

use gst_core::Totals;

use super::{document_title, or_placeholder, placeholder, InvoiceView, OutputFormat, RenderedDocument};
use crate::error::AppError;
use crate::state::{AppConfig, InvoiceSession};

const WIDTH: usize = 78;

fn rule(out: &mut String, ch: char) -> fmt::Result {
    writeln!(out, "{}", ch.to_string().repeat(WIDTH))
}

/// Left text and right text on one line, padded to the page width.
fn spread(out: &mut String, left: &str, right: &str) -> fmt::Result {
    let used = left.chars().count() + right.chars().count();
    let gap = WIDTH.saturating_sub(used).max(1);
    writeln!(out, "{}{}{}", left, " ".repeat(gap), right)
}

fn totals_line(out: &mut String, label: &str, value: &str) -> fmt::Result {
    writeln!(out, "{:>58}  {:>18}", label, value)
}

// =============================================================================
// Preview
// =============================================================================

/// Renders a submitted invoice as fixed-width text.
pub fn render_preview(view: &InvoiceView) -> Result<RenderedDocument, AppError> {
    let mut out = String::new();
    write_preview(&mut out, view)?;
    Ok(RenderedDocument {
        title: document_title(view),
        format: OutputFormat::Text,
        body: out,
    })
}

fn write_preview(out: &mut String, view: &InvoiceView) -> fmt::Result {
    let l = &view.labels;

    spread(out, l.title, &format!("{} {}", l.number, view.bill_no))?;
    rule(out, '=')?;
    writeln!(out, "{}", view.seller_name)?;
    writeln!(out, "{}", view.seller_address)?;
    writeln!(out, "UAN: {}", view.seller_uan)?;
    writeln!(out, "GSTIN: {}", view.seller_gstin)?;
    match &view.order_no {
        Some(order) => spread(
            out,
            &format!("{} {}", l.date, view.invoice_date),
            &format!("{} {}", l.order, order),
        )?,
        None => writeln!(out, "{} {}", l.date, view.invoice_date)?,
    }
    writeln!(out)?;

    let half = WIDTH / 2;
    writeln!(out, "{:<half$}{}", l.billed_to, l.from, half = half)?;
    writeln!(out, "{:<half$}{}", view.buyer_name, view.seller_name, half = half)?;
    writeln!(out, "{:<half$}{}", view.buyer_address, view.seller_address_line, half = half)?;
    writeln!(out, "{:<half$}{}", view.buyer_email, view.seller_phone, half = half)?;
    if let Some(gstin) = &view.buyer_gstin {
        writeln!(out, "GSTIN: {}", gstin)?;
    }
    writeln!(out)?;

    rule(out, '-')?;
    writeln!(
        out,
        "{:<28} {:>8} {:<12} {:>13} {:>13}",
        l.description, l.quantity, l.hsn_sac, l.price, l.amount
    )?;
    rule(out, '-')?;
    for row in &view.rows {
        writeln!(
            out,
            "{:<28} {:>8} {:<12} {:>13} {:>13}",
            truncate(&row.name, 28),
            row.quantity,
            truncate(&row.hsn_sac, 12),
            row.price,
            row.amount
        )?;
    }
    rule(out, '-')?;

    totals_line(out, l.subtotal, &view.subtotal)?;
    totals_line(out, &view.cgst_label, &view.cgst)?;
    totals_line(out, &view.sgst_label, &view.sgst)?;
    totals_line(out, l.round_off, &view.round_off)?;
    totals_line(out, l.grand_total, &view.grand_total)?;
    writeln!(out)?;

    writeln!(out, "{} {}", l.words, view.words)?;
    writeln!(out, "{} {}", l.note, view.note)?;
    writeln!(out)?;
    spread(out, "", &format!("{} {}", l.signature, view.seller_name))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

// =============================================================================
// Edit Form
// =============================================================================

/// Renders the edit form with live totals.
///
/// Empty fields print blank; placeholders are a preview concern, except for
/// the signature line.
pub fn render_form(session: &InvoiceSession, config: &AppConfig) -> Result<RenderedDocument, AppError> {
    let mut out = String::new();
    write_form(&mut out, session, config)?;
    Ok(RenderedDocument {
        title: "Invoice Form".to_string(),
        format: OutputFormat::Text,
        body: out,
    })
}

fn write_form(out: &mut String, session: &InvoiceSession, config: &AppConfig) -> fmt::Result {
    let form = session.form();
    let totals: Totals = session.live_totals();
    let money = |m| config.format_currency(m);

    writeln!(out, "Invoice Form")?;
    rule(out, '=')?;

    writeln!(out, "Business Details")?;
    writeln!(out, "  Industry Name:   {}", form.industry_name)?;
    writeln!(out, "  Company Address: {}", form.company_address)?;
    writeln!(out, "  UAN Number:      {}", form.uan_number)?;
    writeln!(out, "  GSTIN Number:    {}", form.gstin_number)?;
    writeln!(out, "  Mobile Number:   {}", form.mobile_number)?;
    writeln!(out, "  Bill No:         {}", form.bill_no)?;
    writeln!(out)?;

    writeln!(out, "Buyer Details")?;
    writeln!(out, "  Buyer Name *:    {}", form.buyer_name)?;
    writeln!(out, "  Buyer GSTIN:     {}", form.buyer_gstin)?;
    writeln!(out, "  Buyer Address:   {}", form.buyer_address)?;
    writeln!(out, "  Buyer Email:     {}", form.buyer_email)?;
    writeln!(out)?;

    writeln!(out, "Products")?;
    rule(out, '-')?;
    writeln!(
        out,
        "{:>4}  {:<24} {:<10} {:>8} {:>12} {:>12}",
        "#", "Product", "HSN/SAC", "Qty", "Price", "Amount"
    )?;
    for item in session.items() {
        writeln!(
            out,
            "{:>4}  {:<24} {:<10} {:>8} {:>12} {:>12}",
            item.id,
            truncate(&item.name, 24),
            truncate(&item.hsn_sac, 10),
            item.quantity,
            money(item.price),
            money(item.amount())
        )?;
    }
    rule(out, '-')?;

    totals_line(out, "Total:", &money(totals.subtotal))?;
    totals_line(out, &format!("CGST @ {}%:", form.cgst_rate), &money(totals.cgst))?;
    totals_line(out, &format!("SGST @ {}%:", form.sgst_rate), &money(totals.sgst))?;
    totals_line(out, "Round Off:", &money(totals.round_off))?;
    totals_line(out, "Grand Total:", &money(totals.grand_total))?;
    writeln!(out)?;

    writeln!(out, "Rupees: {}", session.form_words())?;
    spread(
        out,
        &format!("Order: {}", form.order_no),
        &format!("Date: {}", form.invoice_date.format("%Y-%m-%d")),
    )?;
    spread(
        out,
        "",
        &format!(
            "For {}",
            or_placeholder(&form.industry_name, placeholder::SIGNATURE_NAME)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_snapshot;
    use crate::render::PreviewStyle;
    use crate::state::{FormField, ItemField};
    use chrono::NaiveDate;
    use gst_core::InvoiceForm;

    #[test]
    fn test_preview_text_contains_invoice() {
        let view = InvoiceView::from_snapshot(
            &sample_snapshot(),
            PreviewStyle::Modern,
            &AppConfig::default(),
        );
        let doc = render_preview(&view).unwrap();

        assert_eq!(doc.format, OutputFormat::Text);
        assert!(doc.body.starts_with("TAX INVOICE"));
        assert!(doc.body.contains("No. INV-42"));
        assert!(doc.body.contains("Steel bolts"));
        assert!(doc.body.contains("CGST @ 9%"));
        assert!(doc.body.contains("₹118.00"));
        assert!(doc.body.contains("Rupees: One Hundred Eighteen Rupees Only"));
        assert!(doc.body.contains("For Ganguly Industries"));
    }

    #[test]
    fn test_compact_labels() {
        let view = InvoiceView::from_snapshot(
            &sample_snapshot(),
            PreviewStyle::Compact,
            &AppConfig::default(),
        );
        let doc = render_preview(&view).unwrap();
        assert!(doc.body.starts_with("INVOICE"));
        assert!(doc.body.contains("In words: One Hundred Eighteen Rupees Only"));
    }

    #[test]
    fn test_form_shows_live_totals_and_signature_placeholder() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut session = InvoiceSession::new(InvoiceForm::new(date));
        session.set_item_field(1, ItemField::Quantity, "2").unwrap();
        session.set_item_field(1, ItemField::Price, "100").unwrap();

        let doc = render_form(&session, &AppConfig::default()).unwrap();
        assert!(doc.body.contains("Grand Total:"));
        assert!(doc.body.contains("₹236.00"));
        assert!(doc.body.contains("Rupees: Two Hundred Thirty Six Rupees Only"));
        assert!(doc.body.contains("For Company Name"));
        assert!(doc.body.contains("Date: 2024-04-01"));
    }

    #[test]
    fn test_form_shows_words_override() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut session = InvoiceSession::new(InvoiceForm::new(date));
        session.set_field(FormField::RupeesText, "Custom words");
        let doc = render_form(&session, &AppConfig::default()).unwrap();
        assert!(doc.body.contains("Rupees: Custom words"));
    }

    #[test]
    fn test_preview_lines_fit_page_width() {
        let view = InvoiceView::from_snapshot(
            &sample_snapshot(),
            PreviewStyle::Classic,
            &AppConfig::default(),
        );
        let doc = render_preview(&view).unwrap();
        assert!(doc.body.ends_with('\n'));
        for line in doc.body.lines().filter(|l| l.starts_with('=') || l.starts_with('-')) {
            assert_eq!(line.chars().count(), WIDTH);
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
