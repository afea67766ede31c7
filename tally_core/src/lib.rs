//! # tally_core - Amount x Quantity Totals
//!
//! `tally_core` multiplies an amount read from a form field by a quantity the
//! user is prompted for, and produces the one dialog message the user sees.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`total::calculate`] is a pure function; nothing carries over between calls
//! - **Browser-compatible**: numbers parse and render the way a web page would
//! - **Host-agnostic**: front ends implement [`host::Host`] and call [`host::compute_total`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_core::{calculate, Settings, TotalInput};
//!
//! let result = calculate(&TotalInput::new("10", Some("3")), &Settings::default()).unwrap();
//! assert_eq!(result.message(), "Total = 30.00");
//!
//! let invalid = calculate(&TotalInput::new("abc", Some("5")), &Settings::default());
//! assert!(invalid.is_err());
//! ```
//!
//! ## Modules
//!
//! - [`total`] - The total calculation
//! - [`host`] - Host trait and the one-dialog invocation driver
//! - [`number`] - `parseFloat`/`toFixed` compatible number handling
//! - [`settings`] - Field, prompt, rounding and message settings
//! - [`errors`] - Structured error types

pub mod errors;
pub mod host;
pub mod number;
pub mod settings;
pub mod total;

// Re-export commonly used types at crate root for convenience
pub use errors::{TallyError, TallyResult};
pub use host::{compute_total, Host, Outcome};
pub use settings::{load_settings, Settings};
pub use total::{calculate, TotalInput, TotalResult};
