//! # Invoice Calculator
//!
//! Pure functions deriving the invoice totals from line items and the two
//! GST component rates.
//!
//! ## Computation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► Σ qty × price ──► subtotal                                   │
//! │                                 │                                       │
//! │                   ┌─────────────┼─────────────┐                         │
//! │                   ▼             │             ▼                         │
//! │           subtotal × cgst/100   │     subtotal × sgst/100               │
//! │                   │             │             │                         │
//! │                   └──────► raw total ◄────────┘                         │
//! │                                 │                                       │
//! │                     round to whole rupee (half up)                      │
//! │                                 │                                       │
//! │              grand total ◄──────┴──────► round off = grand − raw        │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │            amount in words                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both tax components are applied to the subtotal independently; CGST is
//! never taxed by SGST or vice versa.
//!
//! ## Example
//! ```rust
//! use gst_core::calculator::compute_totals;
//! use gst_core::money::Money;
//! use gst_core::types::{LineItem, TaxRate};
//!
//! let mut item = LineItem::new(1);
//! item.quantity = 2;
//! item.price = Money::from_rupees(100);
//!
//! let rate = TaxRate::standard_half();
//! let totals = compute_totals(&[item], rate, rate);
//!
//! assert_eq!(totals.grand_total, Money::from_rupees(236));
//! assert_eq!(totals.amount_in_words, "Two Hundred Thirty Six Rupees Only");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{LineItem, TaxRate};
use crate::words::money_in_words;

// =============================================================================
// Totals
// =============================================================================

/// The derived totals block printed under the line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    /// Σ line amounts.
    pub subtotal: Money,

    /// Central GST component.
    pub cgst: Money,

    /// State GST component.
    pub sgst: Money,

    /// subtotal + cgst + sgst, before rounding.
    pub raw_total: Money,

    /// `raw_total` rounded to whole rupees.
    pub grand_total: Money,

    /// `grand_total - raw_total`, in (-0.50, +0.50].
    pub round_off: Money,

    /// `grand_total` spelled out ("... Rupees Only").
    pub amount_in_words: String,
}

// =============================================================================
// Calculator Functions
// =============================================================================

/// Sum of `quantity × price` over all items.
///
/// Items whose quantity or price was coerced to 0 simply contribute 0.
pub fn subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::amount).sum()
}

/// `amount × rate / 100`, unrounded.
#[inline]
pub fn tax_amount(amount: Money, rate: TaxRate) -> Money {
    amount.apply_rate(rate)
}

/// Central GST on the subtotal.
pub fn cgst(items: &[LineItem], rate: TaxRate) -> Money {
    tax_amount(subtotal(items), rate)
}

/// State GST on the subtotal.
pub fn sgst(items: &[LineItem], rate: TaxRate) -> Money {
    tax_amount(subtotal(items), rate)
}

/// Subtotal plus both tax components, before rounding.
pub fn raw_total(items: &[LineItem], cgst_rate: TaxRate, sgst_rate: TaxRate) -> Money {
    let sub = subtotal(items);
    sub + tax_amount(sub, cgst_rate) + tax_amount(sub, sgst_rate)
}

/// The payable amount: raw total rounded to the nearest rupee, halves up.
pub fn grand_total(items: &[LineItem], cgst_rate: TaxRate, sgst_rate: TaxRate) -> Money {
    raw_total(items, cgst_rate, sgst_rate).round_to_rupee()
}

/// Signed adjustment reconciling the grand total with the raw total.
///
/// ```rust
/// use gst_core::calculator::round_off;
/// use gst_core::money::Money;
/// use gst_core::types::{LineItem, TaxRate};
///
/// let mut item = LineItem::new(1);
/// item.quantity = 3;
/// item.price = Money::from_paise(3333);
///
/// let rate = TaxRate::standard_half();
/// // raw 117.9882 → grand 118
/// assert_eq!(round_off(&[item], rate, rate).amount().normalize().to_string(), "0.0118");
/// ```
pub fn round_off(items: &[LineItem], cgst_rate: TaxRate, sgst_rate: TaxRate) -> Money {
    let raw = raw_total(items, cgst_rate, sgst_rate);
    raw.round_to_rupee() - raw
}

/// Computes the whole totals block in one pass over the items.
///
/// This is what the form calls once per submit; the individual functions
/// above are kept for live display while editing.
pub fn compute_totals(items: &[LineItem], cgst_rate: TaxRate, sgst_rate: TaxRate) -> Totals {
    let subtotal = subtotal(items);
    let cgst = tax_amount(subtotal, cgst_rate);
    let sgst = tax_amount(subtotal, sgst_rate);
    let raw_total = subtotal + cgst + sgst;
    let grand_total = raw_total.round_to_rupee();

    Totals {
        subtotal,
        cgst,
        sgst,
        raw_total,
        grand_total,
        round_off: grand_total - raw_total,
        amount_in_words: money_in_words(grand_total),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
