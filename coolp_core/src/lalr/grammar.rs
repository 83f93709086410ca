use crate::lalr::{Nonterminal, Production, Rule, Terminal};

/// Description of the grammar the parse tables were built for
#[derive(Debug, Clone)]
pub struct Grammar {
    pub start: Nonterminal,
    pub end: Terminal,
    /// Pseudo-terminal shifted by error recovery
    pub error: Terminal,
    pub terminals: &'static [Terminal],
    pub nonterminals: &'static [Nonterminal],
    pub productions: &'static [Production],
}

impl Grammar {
    pub fn cool() -> Self {
        Grammar {
            start: Nonterminal::Program,
            end: Terminal::End,
            error: Terminal::Error,
            terminals: &Terminal::ALL,
            nonterminals: &Nonterminal::ALL,
            productions: &Production::ALL,
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = (Production, &'static Rule)> + '_ {
        self.productions.iter().map(|p| (*p, p.rule()))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::cool()
    }
}
