use std::error::Error;
use std::fmt;

use crate::StateId;

/// The three parallel parser stacks: states, semantic values and source lines
///
/// All three always have the same depth. Capacity starts at the configured initial depth
/// and doubles whenever it is reached, up to a hard maximum.
#[derive(Debug)]
pub struct ParseStack<V> {
    states: Vec<StateId>,
    values: Vec<V>,
    lines: Vec<usize>,
    capacity: usize,
    max_depth: usize,
}

/// Returned by `ParseStack::push` when the maximum depth is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOverflow {
    pub max_depth: usize,
}

impl fmt::Display for StackOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "parser stack exceeds {} entries", self.max_depth)
    }
}

impl Error for StackOverflow {}

impl<V> ParseStack<V> {
    /// Creates the stacks holding the single bottom slot `(state, value, line)`
    pub fn new(
        state: StateId,
        value: V,
        line: usize,
        initial_depth: usize,
        max_depth: usize,
    ) -> Self {
        let capacity = initial_depth.max(1).min(max_depth.max(1));
        let mut stack = ParseStack {
            states: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            lines: Vec::with_capacity(capacity),
            capacity,
            max_depth: max_depth.max(1),
        };
        stack.states.push(state);
        stack.values.push(value);
        stack.lines.push(line);
        stack
    }

    pub fn push(&mut self, state: StateId, value: V, line: usize) -> Result<(), StackOverflow> {
        if self.states.len() >= self.capacity {
            self.grow()?;
        }
        self.states.push(state);
        self.values.push(value);
        self.lines.push(line);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), StackOverflow> {
        if self.capacity >= self.max_depth {
            return Err(StackOverflow {
                max_depth: self.max_depth,
            });
        }
        self.capacity = (self.capacity * 2).min(self.max_depth);
        let additional = self.capacity - self.states.len();
        self.states.reserve_exact(additional);
        self.values.reserve_exact(additional);
        self.lines.reserve_exact(additional);
        Ok(())
    }

    /// Pops the top `count` slots, returned bottom to top as `(value, line)`
    pub fn pop(&mut self, count: usize) -> Vec<(V, usize)> {
        let start = self.states.len() - count;
        self.states.truncate(start);
        self.values
            .drain(start..)
            .zip(self.lines.drain(start..))
            .collect()
    }

    pub fn top_state(&self) -> StateId {
        self.states[self.states.len() - 1]
    }

    pub fn top_line(&self) -> usize {
        self.lines[self.lines.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn states(&self) -> &[StateId] {
        &self.states
    }
}
