use std::fmt::Write;

use crate::form::FormState;
use crate::matcher::PairMatch;

const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// How output is painted. `Ansi` when stdout is a terminal, `Plain`
/// when piped: scripts get stable, greppable markers instead of escape
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Ansi,
    Plain,
}

/// The indicator row: one cell per result pair, in order.
/// Ansi paints matched cells green and the rest dim; Plain appends `*`
/// to matched cells.
#[must_use]
pub fn cells(grid: &[PairMatch], style: Style) -> String {
    let mut out = String::with_capacity(grid.len() * 8);
    for (i, m) in grid.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match style {
            Style::Ansi => {
                let paint = if m.matched { GREEN } else { DIM };
                let _ = write!(out, "{paint}({}){RESET}", m.pair);
            }
            Style::Plain => {
                let _ = write!(out, "({})", m.pair);
                if m.matched {
                    out.push('*');
                }
            }
        }
    }
    out
}

/// One line per failing field: `result: <message>` / `bet: <message>`.
/// Empty string when both fields are fine.
#[must_use]
pub fn field_errors(state: &FormState) -> String {
    let mut out = String::new();
    if let Some(err) = state.result_error {
        let _ = writeln!(out, "result: {err}");
    }
    if let Some(err) = state.bet_error {
        let _ = writeln!(out, "bet: {err}");
    }
    out
}

/// Complete one-shot output: the cell row, then any field messages.
/// The row always renders; validation messages accompany it, never
/// replace it.
#[must_use]
pub fn report(state: &FormState, style: Style) -> String {
    let mut out = cells(&state.grid, style);
    let errors = field_errors(state);
    if !errors.is_empty() {
        out.push('\n');
        out.push_str(errors.trim_end());
    }
    out
}
