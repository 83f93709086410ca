use std::fmt;

use crate::lalr::{Production, StateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Shift(StateId),
    Reduce(Production),
    Accept,
    Error,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Action::Shift(state) => write!(f, "s{}", state),
            Action::Reduce(production) => write!(f, "r{}", production.number()),
            Action::Accept => write!(f, "acc"),
            Action::Error => Ok(()),
        }
    }
}
