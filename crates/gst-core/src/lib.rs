//! # gst-core: Pure Invoice Logic for GST Invoicer
//!
//! This crate is the **heart** of GST Invoicer. It contains every rule that
//! turns a filled-in form into invoice totals, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GST Invoicer Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CLI (gst-invoicer)                           │   │
//! │  │    template ──► totals ──► preview ──► print                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           Commands / Session / Render (app crate)              │   │
//! │  │    update_field, add_item, submit_invoice, print_invoice       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gst-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │calculator │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │  Totals   │  │ coercion  │  │   │
//! │  │   │InvoiceForm│  │  TaxRate  │  │   words   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InvoiceForm, LineItem, TaxRate)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`items`] - The ordered, never-empty list of line items
//! - [`calculator`] - Subtotal, CGST, SGST, grand total and round off
//! - [`words`] - Amount in words, Indian numbering (lakh, crore)
//! - [`validation`] - Input coercion and submit-time checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same form in, same totals out
//! 2. **No I/O**: file system and terminal access is FORBIDDEN here
//! 3. **Exact Money**: rupee amounts are base-10 decimals, never `f64`
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gst_core::{compute_totals, LineItems, TaxRate};
//! use gst_core::validation::{coerce_price, coerce_quantity};
//!
//! let mut items = LineItems::new();
//! let first = items.get_mut(1).unwrap();
//! first.quantity = coerce_quantity("3");
//! first.price = coerce_price("33.33");
//!
//! let rate = TaxRate::standard_half();
//! let totals = compute_totals(items.as_slice(), rate, rate);
//!
//! assert_eq!(totals.grand_total.to_string(), "₹118.00");
//! assert_eq!(totals.round_off.to_string(), "₹0.01");
//! assert_eq!(totals.amount_in_words, "One Hundred Eighteen Rupees Only");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod items;
pub mod money;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gst_core::Money` instead of
// `use gst_core::money::Money`

pub use calculator::{compute_totals, Totals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use items::LineItems;
pub use money::Money;
pub use types::*;
pub use words::{amount_in_words, money_in_words};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest unit price, in rupees (one lakh crore).
pub const MAX_UNIT_PRICE_RUPEES: i64 = 1_000_000_000_000;

/// Upper bound of a single GST component rate, in percent.
pub const MAX_TAX_RATE_PERCENT: u32 = 100;

/// CGST and SGST applied to a fresh form, in percent.
pub const DEFAULT_COMPONENT_RATE_PERCENT: u32 = 9;
