//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GST_INVOICER_*`, nested keys with `__`)
//! 2. Config file (`--config <path>`, else `<config dir>/gst-invoicer/config.toml`)
//! 3. Defaults (this file)
//!
//! ## Example `config.toml`
//! ```toml
//! default_cgst_rate = 6
//! default_sgst_rate = 6
//! preview_style = "classic"
//! print_output = "out/invoice.html"
//!
//! [seller]
//! industry_name = "Ganguly Industries"
//! gstin_number = "19ABCDE1234F1Z5"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after loading, so no mutex needed.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use gst_core::money::RUPEE_SYMBOL;
use gst_core::validation::validate_tax_rate;
use gst_core::{InvoiceForm, Money, TaxRate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::render::PreviewStyle;

/// Environment variable prefix (`GST_INVOICER_DEFAULT_CGST_RATE=6`).
pub const ENV_PREFIX: &str = "GST_INVOICER";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CGST rate on a fresh form, in percent.
    pub default_cgst_rate: TaxRate,

    /// SGST rate on a fresh form, in percent.
    pub default_sgst_rate: TaxRate,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Preview layout used when none is given on the command line.
    pub preview_style: PreviewStyle,

    /// Where the file print host writes the printable document.
    pub print_output: PathBuf,

    /// tracing filter directive; `RUST_LOG` wins when set.
    pub log_filter: Option<String>,

    /// Seller details pre-filled into every new form.
    pub seller: SellerDefaults,
}

/// Seller-side fields that rarely change between invoices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerDefaults {
    pub industry_name: String,
    pub company_address: String,
    pub uan_number: String,
    pub gstin_number: String,
    pub mobile_number: String,
    pub note: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Tax: 9% CGST + 9% SGST
    /// - Currency: ₹
    /// - Style: modern
    /// - Print output: `invoice-print.html` in the working directory
    fn default() -> Self {
        AppConfig {
            default_cgst_rate: TaxRate::standard_half(),
            default_sgst_rate: TaxRate::standard_half(),
            currency_symbol: RUPEE_SYMBOL.to_string(),
            preview_style: PreviewStyle::default(),
            print_output: PathBuf::from("invoice-print.html"),
            log_filter: None,
            seller: SellerDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, the config file and the environment.
    ///
    /// An explicit `path` must exist; the platform default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`], reading environment overrides from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    debug!(path = %default_path.display(), "Looking for default config file");
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_tax_rate("default_cgst_rate", self.default_cgst_rate)?;
        validate_tax_rate("default_sgst_rate", self.default_sgst_rate)?;
        Ok(())
    }

    /// A blank form dated `today`, with default rates and seller details.
    pub fn blank_form(&self, today: NaiveDate) -> InvoiceForm {
        let mut form = InvoiceForm::new(today);
        form.cgst_rate = self.default_cgst_rate;
        form.sgst_rate = self.default_sgst_rate;
        form.industry_name = self.seller.industry_name.clone();
        form.company_address = self.seller.company_address.clone();
        form.uan_number = self.seller.uan_number.clone();
        form.gstin_number = self.seller.gstin_number.clone();
        form.mobile_number = self.seller.mobile_number.clone();
        form.note = self.seller.note.clone();
        form
    }

    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use gst_core::Money;
    /// use gst_invoicer_lib::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_paise(23600)), "₹236.00");
    /// assert_eq!(config.format_currency(Money::from_paise(-1)), "-₹0.01");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount.round_to_paise().amount();
        format!(
            "{}{}{:.2}",
            if rounded < Decimal::ZERO { "-" } else { "" },
            self.currency_symbol,
            rounded.abs()
        )
    }
}

/// `<platform config dir>/config.toml` for this app, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gst-invoicer").map(|dirs| dirs.config_dir().join("config.toml"))
}
