use std::collections::BTreeMap;

use crate::lalr::tables::{
    CHECK, DEFACT, DEFGOTO, LAST, PACT, PACT_DEFAULT, PGOTO, STATE_COUNT, STOS, TABLE,
    TABLE_ERROR,
};
use crate::lalr::{Action, Grammar, Nonterminal, Production, StateId, Symbol, Terminal};
use crate::lalr::{FINAL_STATE, INITIAL_STATE};

/// Read-only view of the LALR(1) automaton of the COOL grammar
#[derive(Debug, Clone)]
pub struct ParseTable {
    pub grammar: Grammar,
}

impl Default for ParseTable {
    fn default() -> Self {
        ParseTable::new()
    }
}

impl ParseTable {
    pub fn new() -> Self {
        ParseTable {
            grammar: Grammar::cool(),
        }
    }

    pub fn state_count(&self) -> usize {
        STATE_COUNT
    }

    pub fn initial_state(&self) -> StateId {
        INITIAL_STATE
    }

    /// Whether the action of `state` depends on the lookahead token
    ///
    /// States answering `false` always take their default action, so a parser must not
    /// read a token before acting in them.
    pub fn consults_lookahead(&self, state: StateId) -> bool {
        PACT[state] != PACT_DEFAULT
    }

    /// Action taken in `state` with `terminal` as lookahead
    pub fn action(&self, state: StateId, terminal: Terminal) -> Action {
        match self.entry(state, terminal) {
            Some(value) => decode(value),
            None => self.default_action(state),
        }
    }

    /// Action taken in `state` for every lookahead without an explicit entry
    pub fn default_action(&self, state: StateId) -> Action {
        match Production::from_number(DEFACT[state] as usize) {
            Some(production) => Action::Reduce(production),
            None => Action::Error,
        }
    }

    /// Explicit entries of the action row of `state`, in terminal order
    ///
    /// Lookaheads not listed take `default_action(state)`.
    pub fn explicit_actions(&self, state: StateId) -> Vec<(Terminal, Action)> {
        Terminal::ALL
            .iter()
            .filter_map(|t| self.entry(state, *t).map(|value| (*t, decode(value))))
            .collect()
    }

    /// State entered after reducing to `nonterminal` with `state` on top of the stack
    pub fn goto(&self, state: StateId, nonterminal: Nonterminal) -> Option<StateId> {
        let index = PGOTO[nonterminal.index()] as isize + state as isize;
        let target = if in_table(index) && CHECK[index as usize] == state as i16 {
            TABLE[index as usize]
        } else {
            DEFGOTO[nonterminal.index()]
        };
        if target >= 0 {
            Some(target as StateId)
        } else {
            None
        }
    }

    /// State entered by shifting the `error` pseudo-terminal in `state`, if it may be shifted
    pub fn error_target(&self, state: StateId) -> Option<StateId> {
        match self.entry(state, Terminal::Error) {
            Some(value) if value > 0 => Some(value as StateId),
            _ => None,
        }
    }

    /// Symbol shifted or reduced to enter `state`
    ///
    /// The initial state is entered by no symbol at all and answers `None`.
    pub fn accessing_symbol(&self, state: StateId) -> Option<Symbol> {
        if state == INITIAL_STATE {
            return None;
        }
        STOS.get(state)
            .and_then(|number| Symbol::from_number(*number as usize))
    }

    /// Terminals with an explicit, non-error action in `state`
    ///
    /// Default reductions are not listed, so states that never consult the lookahead
    /// answer an empty list.
    pub fn expected(&self, state: StateId) -> Vec<Terminal> {
        Terminal::ALL
            .iter()
            .copied()
            .filter(|t| *t != Terminal::Error)
            .filter(|t| match self.entry(state, *t) {
                Some(value) => value != TABLE_ERROR,
                None => false,
            })
            .collect()
    }

    /// All edges of the automaton as `(from, symbol, to)`
    ///
    /// Terminal edges are the explicit shifts. Nonterminal edges are recovered from the
    /// compressed goto table by checking which reductions can actually expose a state: a
    /// goto `(s, A)` exists when some rule `A -> α` can be walked from `s` to a state
    /// that reduces by it.
    pub fn transitions(&self) -> Vec<(StateId, Symbol, StateId)> {
        let mut edges = Vec::new();
        for state in 0..STATE_COUNT {
            for terminal in Terminal::ALL.iter() {
                if let Action::Shift(target) = self.action(state, *terminal) {
                    edges.push((state, Symbol::Terminal(*terminal), target));
                }
                if *terminal == Terminal::End && self.action(state, *terminal) == Action::Accept
                {
                    edges.push((state, Symbol::Terminal(*terminal), FINAL_STATE));
                }
            }
        }

        let gotos = self.reachable_gotos();
        for ((state, nonterminal), target) in gotos {
            edges.push((state, Symbol::Nonterminal(nonterminal), target));
        }
        edges.sort_by_key(|(from, symbol, _)| (*from, symbol_number(*symbol)));
        edges
    }

    fn reachable_gotos(&self) -> BTreeMap<(StateId, Nonterminal), StateId> {
        let mut gotos = BTreeMap::new();
        let mut changed = true;
        while changed {
            changed = false;
            for state in 0..STATE_COUNT {
                for (production, rule) in self.grammar.rules() {
                    if rule.lhs == Nonterminal::Accept || gotos.contains_key(&(state, rule.lhs)) {
                        continue;
                    }
                    let end = rule.rhs.iter().try_fold(state, |current, symbol| match symbol {
                        Symbol::Terminal(t) => match self.entry(current, *t) {
                            Some(value) if value > 0 => Some(value as StateId),
                            _ => None,
                        },
                        Symbol::Nonterminal(n) => gotos.get(&(current, *n)).copied(),
                    });
                    if let Some(end) = end {
                        if self.reduces_by(end, production) {
                            if let Some(target) = self.goto(state, rule.lhs) {
                                gotos.insert((state, rule.lhs), target);
                                changed = true;
                            }
                        }
                    }
                }
            }
        }
        gotos
    }

    fn reduces_by(&self, state: StateId, production: Production) -> bool {
        self.default_action(state) == Action::Reduce(production)
            || self
                .explicit_actions(state)
                .iter()
                .any(|(_, action)| *action == Action::Reduce(production))
    }

    /// Raw `TABLE` value for `(state, terminal)` if the row has an explicit entry
    fn entry(&self, state: StateId, terminal: Terminal) -> Option<i16> {
        let base = PACT[state];
        if base == PACT_DEFAULT {
            return None;
        }
        let index = base as isize + terminal.number() as isize;
        if in_table(index) && CHECK[index as usize] == terminal.number() as i16 {
            Some(TABLE[index as usize])
        } else {
            None
        }
    }
}

fn in_table(index: isize) -> bool {
    index >= 0 && index as usize <= LAST
}

fn decode(value: i16) -> Action {
    if value > 0 {
        let target = value as StateId;
        if target == FINAL_STATE {
            Action::Accept
        } else {
            Action::Shift(target)
        }
    } else if value == TABLE_ERROR {
        Action::Error
    } else {
        match Production::from_number((-value) as usize) {
            Some(production) => Action::Reduce(production),
            None => Action::Error,
        }
    }
}

fn symbol_number(symbol: Symbol) -> usize {
    match symbol {
        Symbol::Terminal(t) => t.number(),
        Symbol::Nonterminal(n) => n.number(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use matches::assert_matches;

    #[test]
    fn test_initial_state() {
        let table = ParseTable::new();
        assert_eq!(table.action(0, Terminal::Class), Action::Shift(1));
        assert_eq!(table.action(0, Terminal::End), Action::Error);
        assert_eq!(table.expected(0), vec![Terminal::Class]);
        assert_eq!(table.goto(0, Nonterminal::Program), Some(2));
        assert_eq!(table.goto(0, Nonterminal::ClassList), Some(3));
        assert_eq!(table.goto(0, Nonterminal::Class), Some(4));
        assert_eq!(table.error_target(0), None);
        assert_eq!(table.accessing_symbol(0), None);
    }

    #[test]
    fn test_accept() {
        let table = ParseTable::new();
        assert_eq!(table.action(2, Terminal::End), Action::Accept);
        assert_eq!(table.expected(2), vec![Terminal::End]);
        assert_eq!(table.default_action(FINAL_STATE), Action::Reduce(Production::Accept));
    }

    #[test]
    fn test_default_reductions() {
        let table = ParseTable::new();
        assert!(!table.consults_lookahead(4));
        assert_eq!(table.default_action(4), Action::Reduce(Production::ClassListSingle));
        assert_eq!(table.action(4, Terminal::Plus), Action::Reduce(Production::ClassListSingle));
        assert!(table.consults_lookahead(0));
        assert_matches!(table.default_action(0), Action::Error);
    }

    #[test]
    fn test_error_targets() {
        let table = ParseTable::new();
        let targets: Vec<_> = (0..table.state_count())
            .filter_map(|s| table.error_target(s).map(|t| (s, t)))
            .collect();
        assert_eq!(
            targets,
            vec![
                (1, 5),
                (9, 12),
                (11, 18),
                (27, 37),
                (50, 67),
                (61, 78),
                (94, 67),
                (133, 67),
                (150, 67),
            ]
        );
        for (_, target) in targets {
            assert_eq!(
                table.accessing_symbol(target),
                Some(Symbol::Terminal(Terminal::Error))
            );
        }
    }

    #[test]
    fn test_relational_operators_chain_left() {
        let table = ParseTable::new();
        // `expr < expr` with a following relational operator
        assert_eq!(table.default_action(107), Action::Reduce(Production::Lt));
        for op in [Terminal::Lt, Terminal::Le, Terminal::Eq].iter() {
            assert_eq!(table.action(107, *op), Action::Reduce(Production::Lt));
        }
        assert_eq!(table.action(107, Terminal::Plus), Action::Shift(85));
        assert_eq!(table.action(107, Terminal::Dot), Action::Shift(90));
    }

    #[test]
    fn test_transitions() {
        let table = ParseTable::new();
        let edges = table.transitions();
        let from_initial: Vec<_> = edges.iter().filter(|(from, _, _)| *from == 0).collect();
        assert_eq!(
            from_initial,
            vec![
                &(0, Symbol::Terminal(Terminal::Class), 1),
                &(0, Symbol::Nonterminal(Nonterminal::Program), 2),
                &(0, Symbol::Nonterminal(Nonterminal::ClassList), 3),
                &(0, Symbol::Nonterminal(Nonterminal::Class), 4),
            ]
        );
        for (_, symbol, to) in edges.iter() {
            assert_eq!(table.accessing_symbol(*to), Some(*symbol));
        }
        let goto_count = edges
            .iter()
            .filter(|(_, symbol, _)| matches!(symbol, Symbol::Nonterminal(_)))
            .count();
        assert_eq!(goto_count, 59);
        assert_eq!(edges.len(), 745 + 59);
    }
}
