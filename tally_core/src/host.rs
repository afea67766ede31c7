//! # Host Integration
//!
//! A total is triggered by a user action in some front end (a web form, a
//! terminal, a test). The front end implements [`Host`]; [`compute_total`]
//! drives one invocation against it:
//!
//! 1. read the amount field
//! 2. ask for the quantity (always, even if the amount is already bad)
//! 3. show exactly one dialog: the total or the invalid-input message
//!
//! ## Example
//!
//! ```rust
//! use tally_core::host::{compute_total, Host};
//! use tally_core::settings::Settings;
//!
//! struct Fixed(Vec<String>);
//!
//! impl Host for Fixed {
//!     fn field_text(&mut self, _name: &str) -> String {
//!         "10".to_string()
//!     }
//!     fn prompt(&mut self, _message: &str) -> Option<String> {
//!         Some("3".to_string())
//!     }
//!     fn alert(&mut self, message: &str) {
//!         self.0.push(message.to_string());
//!     }
//! }
//!
//! let mut host = Fixed(Vec::new());
//! let outcome = compute_total(&mut host, &Settings::default());
//! assert!(outcome.is_total());
//! assert_eq!(host.0, vec!["Total = 30.00"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::TallyError;
use crate::settings::Settings;
use crate::total::{calculate, TotalInput, TotalResult};

/// Front end that supplies the inputs and shows the dialog.
pub trait Host {
    /// Current text of the named form field.
    fn field_text(&mut self, name: &str) -> String;

    /// Block until the user answers `message`; `None` if cancelled.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Show a dialog with `message`.
    fn alert(&mut self, message: &str);
}

/// What one invocation showed the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "details")]
pub enum Outcome {
    /// Both values were numbers; the total was shown
    Total(TotalResult),
    /// A value was not a number; the invalid-input message was shown
    Invalid {
        error: TallyError,
        message: String,
    },
}

impl Outcome {
    /// Whether a total was shown
    pub fn is_total(&self) -> bool {
        matches!(self, Outcome::Total(_))
    }

    /// The dialog text that was shown
    pub fn message(&self) -> String {
        match self {
            Outcome::Total(result) => result.message(),
            Outcome::Invalid { message, .. } => message.clone(),
        }
    }
}

/// Run one total calculation against `host`.
///
/// Reads the field, prompts once, and shows exactly one dialog. Invalid input
/// never escapes as an error; it becomes [`Outcome::Invalid`].
pub fn compute_total<H: Host + ?Sized>(host: &mut H, settings: &Settings) -> Outcome {
    let amount_text = host.field_text(&settings.field_name);
    let quantity_text = host.prompt(&settings.prompt_text);
    let input = TotalInput {
        amount_text,
        quantity_text,
    };

    let outcome = match calculate(&input, settings) {
        Ok(result) => {
            info!(total = result.total, display = %result.total_display, "total computed");
            Outcome::Total(result)
        }
        Err(error) => {
            warn!(%error, "rejected total input");
            Outcome::Invalid {
                error,
                message: settings.invalid_message.clone(),
            }
        }
    };

    host.alert(&outcome.message());
    outcome
}
