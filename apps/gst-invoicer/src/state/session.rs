//! # Invoice Session
//!
//! The editable invoice: form fields, line items, and which view is showing.
//!
//! ## View Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐   submit()    ┌──────────┐   print_invoice              │
//! │  │   Form   │──────────────►│ Preview  │──────────────► print host     │
//! │  │ (edits)  │◄──────────────│(snapshot)│                               │
//! │  └──────────┘ back_to_form()└──────────┘                               │
//! │       │                                                                 │
//! │  set_field / set_item_field / add_item / remove_item                   │
//! │  live_totals() recomputed on every render                              │
//! │                                                                         │
//! │  reset() ──► fresh form, one empty line, Form view                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! `submit()` deep-copies the form and items together with the totals it
//! computed. The preview only ever reads that copy, so editing the form after
//! going back never changes an already rendered preview.

use std::fmt;
use std::str::FromStr;

use gst_core::validation::{coerce_price, coerce_quantity, coerce_rate, parse_invoice_date};
use gst_core::{
    compute_totals, money_in_words, CoreError, CoreResult, InvoiceForm, LineItem, LineItems, Totals,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

// =============================================================================
// Field Identifiers
// =============================================================================

/// Which view the presentation layer shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    #[default]
    Form,
    Preview,
}

/// An editable field of the invoice form.
///
/// Names match the serialized `InvoiceForm` keys (`buyerName`, `cgstRate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    IndustryName,
    CompanyAddress,
    UanNumber,
    GstinNumber,
    MobileNumber,
    BillNo,
    BuyerName,
    BuyerAddress,
    BuyerGstin,
    BuyerEmail,
    OrderNo,
    InvoiceDate,
    CgstRate,
    SgstRate,
    RupeesText,
    Note,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 16] = [
        FormField::IndustryName,
        FormField::CompanyAddress,
        FormField::UanNumber,
        FormField::GstinNumber,
        FormField::MobileNumber,
        FormField::BillNo,
        FormField::BuyerName,
        FormField::BuyerAddress,
        FormField::BuyerGstin,
        FormField::BuyerEmail,
        FormField::OrderNo,
        FormField::InvoiceDate,
        FormField::CgstRate,
        FormField::SgstRate,
        FormField::RupeesText,
        FormField::Note,
    ];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::IndustryName => "industryName",
            FormField::CompanyAddress => "companyAddress",
            FormField::UanNumber => "uanNumber",
            FormField::GstinNumber => "gstinNumber",
            FormField::MobileNumber => "mobileNumber",
            FormField::BillNo => "billNo",
            FormField::BuyerName => "buyerName",
            FormField::BuyerAddress => "buyerAddress",
            FormField::BuyerGstin => "buyerGstin",
            FormField::BuyerEmail => "buyerEmail",
            FormField::OrderNo => "orderNo",
            FormField::InvoiceDate => "invoiceDate",
            FormField::CgstRate => "cgstRate",
            FormField::SgstRate => "sgstRate",
            FormField::RupeesText => "rupeesText",
            FormField::Note => "note",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// An editable column of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Name,
    HsnSac,
    Quantity,
    Price,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::HsnSac => "hsnSac",
            ItemField::Quantity => "quantity",
            ItemField::Price => "price",
        }
    }
}

impl FromStr for ItemField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ItemField::Name),
            "hsnSac" => Ok(ItemField::HsnSac),
            "quantity" => Ok(ItemField::Quantity),
            "price" => Ok(ItemField::Price),
            other => Err(format!("Unknown item field: {}", other)),
        }
    }
}

// =============================================================================
// Preview Snapshot
// =============================================================================

/// Immutable copy of the invoice taken at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSnapshot {
    pub form: InvoiceForm,
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl PreviewSnapshot {
    /// The amount-in-words line to print.
    ///
    /// Uses the words stored with the form, falling back to spelling the
    /// grand total when none were supplied.
    pub fn words(&self) -> String {
        if self.form.rupees_text.trim().is_empty() {
            money_in_words(self.totals.grand_total)
        } else {
            self.form.rupees_text.clone()
        }
    }
}

// =============================================================================
// Invoice Session
// =============================================================================

/// The whole editable state of one invoice.
///
/// Owned by the caller and passed by `&mut` to every command; there is no
/// global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSession {
    form: InvoiceForm,
    items: LineItems,
    view: ViewMode,
    snapshot: Option<PreviewSnapshot>,
    /// What `reset()` returns the form to.
    blank: InvoiceForm,
}

impl InvoiceSession {
    /// Starts a session from a blank form (date, default rates and seller
    /// details already filled in) and a single empty line.
    pub fn new(blank: InvoiceForm) -> Self {
        InvoiceSession {
            form: blank.clone(),
            items: LineItems::new(),
            view: ViewMode::Form,
            snapshot: None,
            blank,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn form(&self) -> &InvoiceForm {
        &self.form
    }

    pub fn items(&self) -> &LineItems {
        &self.items
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn snapshot(&self) -> Option<&PreviewSnapshot> {
        self.snapshot.as_ref()
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Applies one keystroke-level edit to a form field.
    ///
    /// Rates are coerced to `0..=100`; text is stored verbatim. A date that
    /// does not parse as `YYYY-MM-DD` leaves the previous date in place.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        debug!(field = %field, "set_field");
        let form = &mut self.form;
        match field {
            FormField::IndustryName => form.industry_name = value.to_string(),
            FormField::CompanyAddress => form.company_address = value.to_string(),
            FormField::UanNumber => form.uan_number = value.to_string(),
            FormField::GstinNumber => form.gstin_number = value.to_string(),
            FormField::MobileNumber => form.mobile_number = value.to_string(),
            FormField::BillNo => form.bill_no = value.to_string(),
            FormField::BuyerName => form.buyer_name = value.to_string(),
            FormField::BuyerAddress => form.buyer_address = value.to_string(),
            FormField::BuyerGstin => form.buyer_gstin = value.to_string(),
            FormField::BuyerEmail => form.buyer_email = value.to_string(),
            FormField::OrderNo => form.order_no = value.to_string(),
            FormField::InvoiceDate => match parse_invoice_date(value) {
                Ok(date) => form.invoice_date = date,
                Err(e) => warn!(value = %value, "Ignoring invoice date: {}", e),
            },
            FormField::CgstRate => form.cgst_rate = coerce_rate(value),
            FormField::SgstRate => form.sgst_rate = coerce_rate(value),
            FormField::RupeesText => form.rupees_text = value.to_string(),
            FormField::Note => form.note = value.to_string(),
        }
    }

    /// Applies one edit to a line item column.
    ///
    /// Quantity and price are coerced; garbage becomes 0.
    pub fn set_item_field(&mut self, id: u32, field: ItemField, value: &str) -> CoreResult<()> {
        debug!(id, field = field.as_str(), "set_item_field");
        let item = self.items.get_mut(id)?;
        match field {
            ItemField::Name => item.name = value.to_string(),
            ItemField::HsnSac => item.hsn_sac = value.to_string(),
            ItemField::Quantity => item.quantity = coerce_quantity(value),
            ItemField::Price => item.price = coerce_price(value),
        }
        Ok(())
    }

    /// Appends an empty line and returns its id (max existing id + 1).
    pub fn add_item(&mut self) -> u32 {
        let id = self.items.add();
        debug!(id, "Line item added");
        id
    }

    /// Removes a line. Returns `false` (and changes nothing) when it is the
    /// only line left or the id is unknown.
    pub fn remove_item(&mut self, id: u32) -> bool {
        let removed = self.items.remove(id);
        if !removed {
            debug!(id, remaining = self.items.len(), "remove_item ignored");
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Totals and Submit
    // -------------------------------------------------------------------------

    /// Running totals for the form view.
    pub fn live_totals(&self) -> Totals {
        compute_totals(self.items.as_slice(), self.form.cgst_rate, self.form.sgst_rate)
    }

    /// The words shown under the form: the typed override if any, otherwise
    /// the live total spelled out.
    pub fn form_words(&self) -> String {
        if self.form.rupees_text.trim().is_empty() {
            self.live_totals().amount_in_words
        } else {
            self.form.rupees_text.clone()
        }
    }

    /// Validates, computes totals once and switches to the preview.
    ///
    /// On failure nothing changes and the view stays on the form.
    pub fn submit(&mut self) -> CoreResult<&PreviewSnapshot> {
        gst_core::validation::validate_form(&self.form, &self.items).map_err(CoreError::from)?;

        let totals = self.live_totals();
        self.form.rupees_text = totals.amount_in_words.clone();

        info!(
            bill_no = %self.form.bill_no,
            items = self.items.len(),
            grand_total = %totals.grand_total,
            "Invoice submitted"
        );

        self.view = ViewMode::Preview;
        let snapshot = self.snapshot.insert(PreviewSnapshot {
            form: self.form.clone(),
            items: self.items.as_slice().to_vec(),
            totals,
        });
        Ok(&*snapshot)
    }

    /// Returns to the edit form. The last snapshot is kept.
    pub fn back_to_form(&mut self) {
        self.view = ViewMode::Form;
    }

    /// Discards every edit: blank form, one empty line, no snapshot.
    pub fn reset(&mut self) {
        info!("Invoice session reset");
        self.form = self.blank.clone();
        self.items = LineItems::new();
        self.view = ViewMode::Form;
        self.snapshot = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gst_core::{Money, TaxRate};

    fn session() -> InvoiceSession {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        InvoiceSession::new(InvoiceForm::new(date))
    }

    #[test]
    fn test_new_session_has_one_line_and_form_view() {
        let s = session();
        assert_eq!(s.items().len(), 1);
        assert_eq!(s.view(), ViewMode::Form);
        assert!(s.snapshot().is_none());
        assert_eq!(s.form().cgst_rate, TaxRate::standard_half());
    }

    #[test]
    fn test_form_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
        assert!("sellerName".parse::<FormField>().is_err());
    }

    #[test]
    fn test_set_field_coerces_rates() {
        let mut s = session();
        s.set_field(FormField::CgstRate, "2.5");
        s.set_field(FormField::SgstRate, "abc");
        assert_eq!(s.form().cgst_rate, TaxRate::from_bps(250));
        assert!(s.form().sgst_rate.is_zero());
    }

    #[test]
    fn test_set_field_keeps_date_on_bad_input() {
        let mut s = session();
        s.set_field(FormField::InvoiceDate, "2024-05-20");
        assert_eq!(
            s.form().invoice_date,
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        );
        s.set_field(FormField::InvoiceDate, "not a date");
        assert_eq!(
            s.form().invoice_date,
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        );
    }

    #[test]
    fn test_set_item_field_coerces_numbers() {
        let mut s = session();
        s.set_item_field(1, ItemField::Quantity, "3.7").unwrap();
        s.set_item_field(1, ItemField::Price, "33.33xyz").unwrap();
        let item = s.items().get(1).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, Money::from_paise(3333));

        s.set_item_field(1, ItemField::Quantity, "abc").unwrap();
        assert_eq!(s.items().get(1).unwrap().quantity, 0);
    }

    #[test]
    fn test_large_quantity_is_kept_whole() {
        let mut s = session();
        s.set_item_field(1, ItemField::Quantity, "2000000").unwrap();
        s.set_item_field(1, ItemField::Price, "1").unwrap();
        assert_eq!(s.items().get(1).unwrap().quantity, 2_000_000);

        let totals = s.live_totals();
        assert_eq!(totals.subtotal, Money::from_rupees(2_000_000));
        assert_eq!(totals.grand_total, Money::from_rupees(2_360_000));
    }

    #[test]
    fn test_set_item_field_unknown_id() {
        let mut s = session();
        let err = s.set_item_field(42, ItemField::Name, "Bolt").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(42)));
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut s = session();
        assert_eq!(s.add_item(), 2);
        assert_eq!(s.add_item(), 3);
        assert!(s.remove_item(2));
        assert_eq!(s.add_item(), 4);

        assert!(s.remove_item(1));
        assert!(s.remove_item(3));
        // Sole remaining line stays
        assert!(!s.remove_item(4));
        assert_eq!(s.items().len(), 1);
    }

    #[test]
    fn test_submit_without_buyer_name_stays_on_form() {
        let mut s = session();
        let err = s.submit().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(s.view(), ViewMode::Form);
        assert!(s.snapshot().is_none());
    }

    #[test]
    fn test_submit_snapshots_totals_and_words() {
        let mut s = session();
        s.set_field(FormField::BuyerName, "Acme Traders");
        s.set_field(FormField::RupeesText, "typed by hand");
        s.set_item_field(1, ItemField::Quantity, "2").unwrap();
        s.set_item_field(1, ItemField::Price, "100").unwrap();

        let snapshot = s.submit().unwrap().clone();
        assert_eq!(snapshot.totals.grand_total, Money::from_rupees(236));
        assert_eq!(snapshot.words(), "Two Hundred Thirty Six Rupees Only");
        assert_eq!(s.form().rupees_text, "Two Hundred Thirty Six Rupees Only");
        assert_eq!(s.view(), ViewMode::Preview);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_edits() {
        let mut s = session();
        s.set_field(FormField::BuyerName, "Acme Traders");
        s.set_item_field(1, ItemField::Price, "10").unwrap();
        s.submit().unwrap();

        s.back_to_form();
        s.set_field(FormField::BuyerName, "Someone Else");
        s.set_item_field(1, ItemField::Price, "999").unwrap();

        let snapshot = s.snapshot().unwrap();
        assert_eq!(snapshot.form.buyer_name, "Acme Traders");
        assert_eq!(snapshot.items[0].price, Money::from_rupees(10));
        assert_eq!(s.view(), ViewMode::Form);
    }

    #[test]
    fn test_snapshot_words_fallback() {
        let mut s = session();
        s.set_field(FormField::BuyerName, "Acme");
        s.set_item_field(1, ItemField::Price, "5").unwrap();
        let mut snapshot = s.submit().unwrap().clone();
        snapshot.form.rupees_text.clear();
        // 5 + 0.45 + 0.45 rounds to 6
        assert_eq!(snapshot.words(), "Six Rupees Only");

        s.back_to_form();
        s.set_field(FormField::CgstRate, "0");
        s.set_field(FormField::SgstRate, "0");
        let mut snapshot = s.submit().unwrap().clone();
        snapshot.form.rupees_text.clear();
        assert_eq!(snapshot.words(), "Five Rupees Only");
    }

    #[test]
    fn test_form_words_prefers_override() {
        let mut s = session();
        s.set_item_field(1, ItemField::Price, "1").unwrap();
        assert_eq!(s.form_words(), "One Rupees Only");
        s.set_field(FormField::RupeesText, "Rupees One Only");
        assert_eq!(s.form_words(), "Rupees One Only");
    }

    #[test]
    fn test_reset() {
        let mut s = session();
        s.set_field(FormField::BuyerName, "Acme");
        s.add_item();
        s.submit().unwrap();
        s.reset();

        assert_eq!(s.view(), ViewMode::Form);
        assert!(s.snapshot().is_none());
        assert_eq!(s.items().len(), 1);
        assert!(s.form().buyer_name.is_empty());
    }

    #[test]
    fn test_session_serializes() {
        let s = session();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["view"], "form");
        assert_eq!(json["items"][0]["id"], 1);
        let back: InvoiceSession = serde_json::from_value(json).unwrap();
        assert_eq!(back.items().len(), 1);
    }
}
