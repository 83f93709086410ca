mod grammar;
pub use self::grammar::Grammar;

mod rule;
pub use self::rule::{Production, Rule};

mod parse_table;
pub use self::parse_table::ParseTable;

mod state;
pub use self::state::{StateId, FINAL_STATE, INITIAL_STATE};

mod symbol;
pub use self::symbol::{Nonterminal, Symbol, Terminal};

mod action;
pub use self::action::Action;

mod tables;
