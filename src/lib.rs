#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::missing_errors_doc,        // error cases are in the type, not prose
    clippy::must_use_candidate,        // pure helpers are obvious enough
)]

pub mod config;
pub mod error;
pub mod form;
pub mod matcher;
pub mod pairs;
pub mod render;
pub mod router;
pub mod validate;

use form::{CheckForm, FormState};
use render::Style;

/// The single one-shot entry point: feed both fields through the form
/// and render the final state, indicator row plus any field messages.
#[must_use]
pub fn run(result: &str, bet: &str, style: Style) -> String {
    render::report(&check(result, bet), style)
}

/// Programmatic variant — returns the final form state instead of text.
#[must_use]
pub fn check(result: &str, bet: &str) -> FormState {
    let mut form = CheckForm::new();
    form.set_result(result);
    form.set_bet(bet);
    form.state().clone()
}
