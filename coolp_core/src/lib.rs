mod lalr;

pub use crate::lalr::*;
