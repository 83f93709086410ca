//! Interned lexemes
//!
//! Identifiers, integer literals and string literals are stored once in one of three
//! process-wide tables and handed around as [`Atom`]s. Two atoms from the same table are
//! equal exactly when they point at the same entry, so comparing names is a pointer
//! comparison.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;

#[derive(Clone)]
pub struct Atom(Arc<str>);

impl Atom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Atom({:?})", self.as_str())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// A table of interned lexemes
///
/// Safe to share between threads: lookups take a read lock, insertions a write lock.
/// Interning the same lexeme twice yields the same atom.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: RwLock<HashSet<Arc<str>>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(lexemes: &[&str]) -> Self {
        let table = Self::new();
        for lexeme in lexemes {
            table.intern(lexeme);
        }
        table
    }

    pub fn intern(&self, lexeme: &str) -> Atom {
        if let Some(atom) = self.lookup(lexeme) {
            return atom;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have won the race since the read lock was released
        if let Some(existing) = entries.get(lexeme) {
            return Atom(existing.clone());
        }
        let entry: Arc<str> = Arc::from(lexeme);
        entries.insert(entry.clone());
        Atom(entry)
    }

    pub fn lookup(&self, lexeme: &str) -> Option<Atom> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(lexeme).map(|entry| Atom(entry.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Names the rest of the compiler refers to without having seen them in a source file
pub mod names {
    pub const ARG: &str = "arg";
    pub const ARG2: &str = "arg2";
    pub const BOOL: &str = "Bool";
    pub const CONCAT: &str = "concat";
    pub const COOL_ABORT: &str = "abort";
    pub const COPY: &str = "copy";
    pub const INT: &str = "Int";
    pub const IN_INT: &str = "in_int";
    pub const IN_STRING: &str = "in_string";
    pub const IO: &str = "IO";
    pub const LENGTH: &str = "length";
    pub const MAIN: &str = "Main";
    pub const MAIN_METH: &str = "main";
    pub const NO_CLASS: &str = "_no_class";
    pub const NO_TYPE: &str = "_no_type";
    pub const OBJECT: &str = "Object";
    pub const OUT_INT: &str = "out_int";
    pub const OUT_STRING: &str = "out_string";
    pub const PRIM_SLOT: &str = "_prim_slot";
    pub const SELF: &str = "self";
    pub const SELF_TYPE: &str = "SELF_TYPE";
    pub const STR: &str = "String";
    pub const STR_FIELD: &str = "_str_field";
    pub const SUBSTR: &str = "substr";
    pub const TYPE_NAME: &str = "type_name";
    pub const VAL: &str = "_val";

    pub(crate) const ALL: &[&str] = &[
        ARG, ARG2, BOOL, CONCAT, COOL_ABORT, COPY, INT, IN_INT, IN_STRING, IO, LENGTH, MAIN,
        MAIN_METH, NO_CLASS, NO_TYPE, OBJECT, OUT_INT, OUT_STRING, PRIM_SLOT, SELF, SELF_TYPE,
        STR, STR_FIELD, SUBSTR, TYPE_NAME, VAL,
    ];
}

lazy_static! {
    /// Identifiers and type names
    pub static ref ID_TABLE: SymbolTable = SymbolTable::with_entries(names::ALL);
    /// Integer literals, kept as their decimal lexeme
    pub static ref INT_TABLE: SymbolTable = SymbolTable::with_entries(&["0"]);
    /// String literals, kept unescaped
    pub static ref STRING_TABLE: SymbolTable = SymbolTable::with_entries(&[""]);
}

/// Shorthand for `ID_TABLE.intern(name)`
pub fn id(name: &str) -> Atom {
    ID_TABLE.intern(name)
}
