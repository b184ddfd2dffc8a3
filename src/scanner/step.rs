use anyhow::{bail, Result};
use tracing::trace;

use crate::{
    scanner::{
        event::Output,
        rule::{Rule, Transition, RULES},
        state::ScanState,
    },
    utility::preview,
};

/// Applies the first rule that matches, emits its event and returns the new
/// state with the rest of the input.
pub fn step<'a, O: Output + ?Sized>(
    state: ScanState,
    input: &'a str,
    out: &mut O,
) -> Result<(ScanState, &'a str)> {
    let Transition {
        consumed,
        event,
        next,
    } = transition(state, input)?;

    if let Some(event) = &event {
        out.emit(event)?;
    }

    Ok((next, &input[consumed..]))
}

/// Picks the transition for `(state, input)` without emitting anything.
pub fn transition(state: ScanState, input: &str) -> Result<Transition> {
    transition_with(&RULES, state, input)
}

fn transition_with(rules: &[Rule], state: ScanState, input: &str) -> Result<Transition> {
    for rule in rules {
        if !rule.guard.admits(state) {
            continue;
        }

        if let Some(transition) = (rule.matcher)(input) {
            trace!(
                rule = rule.name,
                from = ?state,
                to = ?transition.next,
                rest = %preview(&input[transition.consumed..], 10),
                "scan"
            );
            return Ok(transition);
        }
    }

    // 最後の 2 規則で空でない入力と空の入力の両方を拾うので，ここには来ない
    bail!(
        "No rule matched: state {:?}, input {:?}",
        state,
        preview(input, 10)
    )
}
