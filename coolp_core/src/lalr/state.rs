/// Index of a parser state, `0..ParseTable::state_count()`
pub type StateId = usize;

/// State the automaton starts in
pub const INITIAL_STATE: StateId = 0;

/// State entered by shifting the end of input after a complete program
pub const FINAL_STATE: StateId = 7;
