//! # Draft Files
//!
//! A draft is a JSON file holding what a user would type into the form:
//!
//! ```json
//! {
//!   "fields": { "buyerName": "Acme Traders", "cgstRate": 9, "invoiceDate": "2024-04-01" },
//!   "items": [ { "name": "Steel bolts", "hsnSac": "7318", "quantity": 3, "price": "33.33" } ]
//! }
//! ```
//!
//! Loading a draft replays it through the same form commands as keystrokes,
//! so numbers go through the same coercion (`"abc"` → 0, `-4` → 0).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::form::{add_item, update_field, update_item};
use crate::error::AppError;
use crate::state::InvoiceSession;

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Draft {
    /// Form field name → value.
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,

    /// Line items in display order.
    #[serde(default)]
    pub items: Vec<DraftItem>,
}

/// One line item of a draft. Missing columns keep the line's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DraftItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_sac: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

impl Draft {
    /// Reads a draft from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        debug!(path = %path.display(), "Loading draft");
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                crate::error::ErrorCode::IoError,
                format!("Cannot read draft {}: {}", path.display(), e),
            )
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Captures the current form and lines as a draft.
    pub fn from_session(session: &InvoiceSession) -> Result<Self, AppError> {
        let fields = match serde_json::to_value(session.form())? {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        };
        let items = session
            .items()
            .iter()
            .map(|item| DraftItem {
                name: Some(Value::String(item.name.clone())),
                hsn_sac: Some(Value::String(item.hsn_sac.clone())),
                quantity: Some(Value::from(item.quantity)),
                price: Some(Value::String(item.price.amount().to_string())),
            })
            .collect();
        Ok(Draft { fields, items })
    }

    /// Replays the draft into `session` through the form commands.
    ///
    /// The first draft item fills the session's existing first line; every
    /// further item adds a line.
    pub fn apply(&self, session: &mut InvoiceSession) -> Result<(), AppError> {
        for (name, value) in &self.fields {
            update_field(session, name, &input_text(name, value)?)?;
        }

        let first_id = session.items().iter().next().map(|item| item.id);
        for (index, item) in self.items.iter().enumerate() {
            let id = match (index, first_id) {
                (0, Some(first)) => first,
                _ => add_item(session).id,
            };
            let columns = [
                ("name", &item.name),
                ("hsnSac", &item.hsn_sac),
                ("quantity", &item.quantity),
                ("price", &item.price),
            ];
            for (column, value) in columns {
                if let Some(value) = value {
                    update_item(session, id, column, &input_text(column, value)?)?;
                }
            }
        }
        Ok(())
    }
}

/// The text a user would have typed for `value`.
fn input_text(name: &str, value: &Value) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        Value::Bool(b) => {
            warn!(field = %name, "Boolean draft value taken as text");
            Ok(b.to_string())
        }
        Value::Array(_) | Value::Object(_) => Err(AppError::validation(format!(
            "{} must be a string or number",
            name
        ))),
    }
}
