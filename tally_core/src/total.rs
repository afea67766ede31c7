//! # Total Calculation
//!
//! Multiplies an amount by a quantity, both supplied as raw text, and
//! renders the product for display. Follows the calculation pattern used
//! throughout the crate:
//!
//! - [`TotalInput`] - raw texts as the host delivered them
//! - [`TotalResult`] - parsed values, product and display string
//! - [`calculate`] - pure function, no I/O
//!
//! ## Example
//!
//! ```rust
//! use tally_core::settings::Settings;
//! use tally_core::total::{calculate, TotalInput};
//!
//! let input = TotalInput::new("2.5", Some("4"));
//! let result = calculate(&input, &Settings::default()).unwrap();
//! assert_eq!(result.total_display, "10.00");
//! assert_eq!(result.message(), "Total = 10.00");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TallyError, TallyResult};
use crate::number::{parse_float, to_fixed};
use crate::settings::Settings;

/// Field name reported when the prompt answer is invalid
pub const QUANTITY_FIELD: &str = "quantity";

/// Prefix of the success dialog
pub const TOTAL_PREFIX: &str = "Total = ";

/// Raw input for one total calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalInput {
    /// Current text of the amount field
    pub amount_text: String,

    /// Answer to the quantity prompt, `None` if the prompt was cancelled
    pub quantity_text: Option<String>,
}

impl TotalInput {
    /// Create an input from the field text and the prompt answer.
    pub fn new(amount_text: impl Into<String>, quantity_text: Option<impl Into<String>>) -> Self {
        TotalInput {
            amount_text: amount_text.into(),
            quantity_text: quantity_text.map(Into::into),
        }
    }
}

/// A successfully computed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalResult {
    /// Parsed amount
    pub amount: f64,

    /// Parsed quantity
    pub quantity: f64,

    /// Unrounded product
    pub total: f64,

    /// Product rendered with the configured number of decimals
    pub total_display: String,
}

impl TotalResult {
    /// Dialog text for this result, e.g. `Total = 30.00`
    pub fn message(&self) -> String {
        format!("{}{}", TOTAL_PREFIX, self.total_display)
    }
}

/// Parse both texts and multiply them.
///
/// # Errors
///
/// Returns [`TallyError::InvalidNumericInput`] naming the first value that is
/// not a number (the amount is checked before the quantity).
pub fn calculate(input: &TotalInput, settings: &Settings) -> TallyResult<TotalResult> {
    let amount = parse_text(Some(&input.amount_text), settings.blank_as_zero);
    let quantity = parse_text(input.quantity_text.as_deref(), settings.blank_as_zero);
    debug!(amount, quantity, "parsed total inputs");

    if amount.is_nan() {
        return Err(TallyError::invalid_numeric_input(
            settings.field_name.as_str(),
            input.amount_text.as_str(),
        ));
    }
    if quantity.is_nan() {
        return Err(TallyError::invalid_numeric_input(
            QUANTITY_FIELD,
            input.quantity_text.clone().unwrap_or_default(),
        ));
    }

    // Infinity * 0 is NaN and renders as "NaN"; only the inputs are validated.
    let total = amount * quantity;

    Ok(TotalResult {
        amount,
        quantity,
        total,
        total_display: to_fixed(total, settings.decimals),
    })
}

/// Parse one raw value. A cancelled prompt reads as empty text.
fn parse_text(text: Option<&str>, blank_as_zero: bool) -> f64 {
    match text {
        None | Some("") if blank_as_zero => 0.0,
        None => f64::NAN,
        Some(text) => parse_float(text),
    }
}
