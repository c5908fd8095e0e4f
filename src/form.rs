use serde::Serialize;

use crate::matcher::{PairMatch, match_pairs};
use crate::validate::{DEFAULT_RESULT, FieldError, validate_bet, validate_result};

/// Snapshot of the form after an update: field values, field errors, and
/// the recomputed indicator grid. Handed to every subscriber and returned
/// by [`CheckForm::state`].
#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    pub result: String,
    pub bet: String,
    pub result_error: Option<FieldError>,
    pub bet_error: Option<FieldError>,
    pub grid: Vec<PairMatch>,
}

impl FormState {
    /// The result string the grid was computed from: the field value
    /// when valid, [`DEFAULT_RESULT`] otherwise.
    #[must_use]
    pub fn display_result(&self) -> &str {
        if validate_result(&self.result).is_ok() {
            &self.result
        } else {
            DEFAULT_RESULT
        }
    }
}

type Listener = Box<dyn FnMut(&FormState)>;

/// The check form as an explicit state object. Every mutation re-runs
/// the pure validators and notifies subscribers with the new state;
/// [`CheckForm::blur`] re-validates without touching values.
/// Single-threaded by construction: each update completes before the
/// next is accepted, and equal inputs produce equal states.
pub struct CheckForm {
    state: FormState,
    listeners: Vec<Listener>,
}

impl CheckForm {
    /// Fresh form: both fields empty, no errors shown yet (nothing has
    /// been touched), grid rendered from the placeholder result.
    #[must_use]
    pub fn new() -> Self {
        CheckForm {
            state: FormState {
                result: String::new(),
                bet: String::new(),
                result_error: None,
                bet_error: None,
                grid: match_pairs(DEFAULT_RESULT, ""),
            },
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Register a listener fired after every update, in registration
    /// order.
    pub fn subscribe(&mut self, listener: impl FnMut(&FormState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_result(&mut self, value: impl Into<String>) {
        self.state.result = value.into();
        self.recompute();
        self.notify();
    }

    pub fn set_bet(&mut self, value: impl Into<String>) {
        self.state.bet = value.into();
        self.recompute();
        self.notify();
    }

    /// Re-validate without changing values (the blur event).
    pub fn blur(&mut self) {
        self.recompute();
        self.notify();
    }

    fn recompute(&mut self) {
        self.state.result_error = validate_result(&self.state.result).err();
        // Bet length is checked against the *informed* result, valid or
        // not, so a shrinking result can invalidate a previously fine bet.
        self.state.bet_error =
            validate_bet(&self.state.bet, self.state.result.chars().count()).err();
        self.state.grid = match_pairs(self.state.display_result(), &self.state.bet);
    }

    fn notify(&mut self) {
        let state = self.state.clone();
        for listener in &mut self.listeners {
            listener(&state);
        }
    }
}

impl Default for CheckForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fresh_form_renders_placeholder_grid() {
        let form = CheckForm::new();
        let state = form.state();
        assert_eq!(state.grid.len(), 6);
        assert!(state.grid.iter().all(|m| m.pair == "00" && !m.matched));
        assert!(state.result_error.is_none(), "untouched form shows no errors");
        assert!(state.bet_error.is_none());
    }

    #[test]
    fn invalid_result_falls_back_to_placeholder() {
        let mut form = CheckForm::new();
        form.set_result("12");
        form.set_bet("00");

        let state = form.state();
        assert_eq!(state.result_error, Some(FieldError::Invalid));
        assert_eq!(state.display_result(), DEFAULT_RESULT);
        // Grid computed from the placeholder, so the 00 bet matches all.
        assert!(state.grid.iter().all(|m| m.pair == "00" && m.matched));
    }

    #[test]
    fn valid_inputs_clear_errors() {
        let mut form = CheckForm::new();
        form.set_result("abc");
        assert_eq!(form.state().result_error, Some(FieldError::Invalid));

        form.set_result("010203040506");
        form.set_bet("0304");
        let state = form.state();
        assert!(state.result_error.is_none());
        assert!(state.bet_error.is_none());
        let matched: Vec<&str> = state
            .grid
            .iter()
            .filter(|m| m.matched)
            .map(|m| m.pair.as_str())
            .collect();
        assert_eq!(matched, vec!["03", "04"]);
    }

    #[test]
    fn shrinking_result_invalidates_bet() {
        let mut form = CheckForm::new();
        form.set_result("010203040506");
        form.set_bet("010203040506");
        assert!(form.state().bet_error.is_none());

        form.set_result("0102030405");
        assert_eq!(form.state().bet_error, Some(FieldError::BetTooLong));
    }

    #[test]
    fn every_update_notifies_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut form = CheckForm::new();
        let first = Rc::clone(&seen);
        form.subscribe(move |state| first.borrow_mut().push(("a", state.grid.len())));
        let second = Rc::clone(&seen);
        form.subscribe(move |state| second.borrow_mut().push(("b", state.grid.len())));

        form.set_result("0102030405");
        form.set_bet("01");
        form.blur();

        let calls = seen.borrow();
        assert_eq!(calls.len(), 6, "two listeners x three updates");
        assert_eq!(calls[0].0, "a");
        assert_eq!(calls[1].0, "b");
        assert_eq!(calls[0].1, 5, "five pairs once the result is valid");
    }

    #[test]
    fn blur_revalidates_without_changing_values() {
        let mut form = CheckForm::new();
        form.set_result("010203040506");
        let before = form.state().clone();

        form.blur();
        let after = form.state();
        assert_eq!(after.result, before.result);
        assert_eq!(after.bet, before.bet);
        assert_eq!(after.grid, before.grid);
    }

    #[test]
    fn recompute_is_idempotent_for_equal_inputs() {
        let mut a = CheckForm::new();
        a.set_result("010203040506");
        a.set_bet("0506");

        let mut b = CheckForm::new();
        b.set_bet("0506");
        b.set_result("010203040506");

        assert_eq!(a.state().grid, b.state().grid);
        assert_eq!(a.state().result_error, b.state().result_error);
        assert_eq!(a.state().bet_error, b.state().bet_error);
    }
}
