//! # Domain Types
//!
//! Core domain types used throughout GST Invoicer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InvoiceForm    │   │    LineItem     │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  seller fields  │   │  id (u32)       │   │  percentage     │       │
//! │  │  buyer fields   │   │  name, hsnSac   │   │  9 = 9%         │       │
//! │  │  invoice date   │   │  quantity       │   │  2.5 = 2.5%     │       │
//! │  │  cgst / sgst    │   │  price (Money)  │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase so that a browser form and a draft file
//! share one vocabulary (`buyerName`, `hsnSac`, `cgstRate`, ...).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// A GST component rate, stored as an exact percentage.
///
/// ## Why a percentage and not basis points?
/// Rates arrive as typed text ("9", "2.5", "0.125") and are printed back
/// verbatim on the invoice ("CGST @ 9%"). Keeping the decimal the user typed
/// avoids a lossy bps conversion for odd rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct TaxRate(#[ts(type = "string")] Decimal);

impl TaxRate {
    /// Creates a tax rate from a percentage (9 = 9%).
    #[inline]
    pub fn from_percentage(pct: Decimal) -> Self {
        TaxRate(pct)
    }

    /// Creates a tax rate from basis points (900 = 9%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(Decimal::new(i64::from(bps), 2))
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percentage(&self) -> Decimal {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The standard intra-state split of 18% GST: 9% CGST + 9% SGST.
    pub fn standard_half() -> Self {
        TaxRate(Decimal::from(crate::DEFAULT_COMPONENT_RATE_PERCENT))
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Prints the bare number without trailing zeros (`9`, `2.5`).
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product or service row on the invoice.
///
/// The amount (`quantity × price`) is derived on demand and never stored, so
/// it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Row identifier, unique within the invoice.
    pub id: u32,

    /// Description of the product.
    #[serde(default)]
    pub name: String,

    /// HSN (goods) or SAC (services) classification code.
    #[serde(default)]
    pub hsn_sac: String,

    /// Units sold.
    #[serde(default)]
    pub quantity: u32,

    /// Unit price, GST exclusive.
    #[serde(default)]
    pub price: Money,
}

impl LineItem {
    /// A fresh row as the form creates it: quantity 1, price 0.
    pub fn new(id: u32) -> Self {
        LineItem {
            id,
            name: String::new(),
            hsn_sac: String::new(),
            quantity: 1,
            price: Money::zero(),
        }
    }

    /// Line amount (quantity × unit price).
    ///
    /// ```rust
    /// use gst_core::money::Money;
    /// use gst_core::types::LineItem;
    ///
    /// let mut item = LineItem::new(1);
    /// item.quantity = 2;
    /// item.price = Money::from_rupees(100);
    /// assert_eq!(item.amount(), Money::from_rupees(200));
    /// ```
    #[inline]
    pub fn amount(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Invoice Form
// =============================================================================

/// Everything the invoice form collects apart from the line items.
///
/// Text fields are optional in practice: an empty string means "not filled
/// in" and the preview prints a placeholder instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceForm {
    // --- Seller ---
    /// Seller business name.
    #[serde(default)]
    pub industry_name: String,
    #[serde(default)]
    pub company_address: String,
    /// Udyam registration number.
    #[serde(default)]
    pub uan_number: String,
    /// Seller GSTIN.
    #[serde(default)]
    pub gstin_number: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub bill_no: String,

    // --- Buyer ---
    /// The only field the form refuses to submit without.
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_address: String,
    #[serde(default)]
    pub buyer_gstin: String,
    #[serde(default)]
    pub buyer_email: String,

    // --- Order ---
    #[serde(default)]
    pub order_no: String,
    #[ts(as = "String")]
    pub invoice_date: NaiveDate,

    // --- Tax ---
    #[serde(default = "TaxRate::standard_half")]
    pub cgst_rate: TaxRate,
    #[serde(default = "TaxRate::standard_half")]
    pub sgst_rate: TaxRate,

    /// Amount in words. Free text while editing; overwritten with the
    /// computed words on submit.
    #[serde(default)]
    pub rupees_text: String,

    /// Closing line printed under the totals.
    #[serde(default)]
    pub note: String,
}

impl InvoiceForm {
    /// An empty form dated `invoice_date` with the standard 9% + 9% split.
    ///
    /// The date is a parameter because this crate never reads the clock.
    pub fn new(invoice_date: NaiveDate) -> Self {
        InvoiceForm {
            industry_name: String::new(),
            company_address: String::new(),
            uan_number: String::new(),
            gstin_number: String::new(),
            mobile_number: String::new(),
            bill_no: String::new(),
            buyer_name: String::new(),
            buyer_address: String::new(),
            buyer_gstin: String::new(),
            buyer_email: String::new(),
            order_no: String::new(),
            invoice_date,
            cgst_rate: TaxRate::standard_half(),
            sgst_rate: TaxRate::standard_half(),
            rupees_text: String::new(),
            note: String::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
