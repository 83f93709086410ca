use crate::{Nonterminal, ParseStack, ParseTable, StateId};

use crate::coolp_trace;

/// Number of tokens that must be shifted after an error before the next one is reported
pub(crate) const RECOVERY_SHIFTS: u8 = 3;

/// Where recovery resumes after unwinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resync {
    /// Shift the `error` pseudo-token into `target`
    Error {
        target: StateId,
        /// Line of the deepest slot popped on the way, if any slot was popped
        popped_line: Option<usize>,
    },
    /// Nothing above the class list accepts `error`; tokens are skipped up to the next
    /// `class` or the end of input
    NextClass { popped_line: Option<usize> },
}

/// Pops slots off `stack` until its top state can shift the `error` pseudo-token
///
/// Unwinding stops at the class list (or the program reduced from it) right above the
/// bottom slot, which is kept. Returns `None` when the stack runs down to the bottom
/// slot without reaching either. The bottom slot itself is never popped.
pub fn unwind<V>(stack: &mut ParseStack<V>, table: &ParseTable) -> Option<Resync> {
    let initial = table.initial_state();
    let class_level = [
        table.goto(initial, Nonterminal::ClassList),
        table.goto(initial, Nonterminal::Program),
    ];
    let mut popped_line = None;
    loop {
        let state = stack.top_state();
        if let Some(target) = table.error_target(state) {
            coolp_trace!("error shift from state {} to {}", state, target);
            return Some(Resync::Error {
                target,
                popped_line,
            });
        }
        match stack.depth() {
            1 => return None,
            2 if class_level.contains(&Some(state)) => {
                coolp_trace!("resynchronize on the class list in state {}", state);
                return Some(Resync::NextClass { popped_line });
            }
            _ => {}
        }
        coolp_trace!("pop state {}", state);
        if let Some((_, line)) = stack.pop(1).pop() {
            popped_line = Some(line);
        }
    }
}
