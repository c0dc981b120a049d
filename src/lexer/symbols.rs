//! Interning of lexeme spellings.
//!
//! Every distinct spelling maps to exactly one [`Symbol`], so two tokens with
//! the same spelling can be compared with [`Symbol::same`] instead of string
//! comparison. Reserved words and operators are registered up front from the
//! [`TokenKindTable`], which is how the scanner tells `while` apart from an
//! identifier without a separate keyword check.

use std::{collections::HashMap, fmt::Display, rc::Rc};

use super::tokens::{TokenKind, TokenKindTable, TOKEN_KINDS};

#[derive(Debug, PartialEq, Eq)]
pub struct Symbol {
    spelling: String,
    kind: TokenKind,
}

impl Symbol {
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Reference identity, the fast path for "is this the same identifier".
    pub fn same(a: &Rc<Symbol>, b: &Rc<Symbol>) -> bool {
        Rc::ptr_eq(a, b)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling)
    }
}

#[derive(Debug)]
pub struct SymbolTable {
    symbols: HashMap<String, Rc<Symbol>>,
}

impl SymbolTable {
    /// Creates a table pre-populated with every fixed spelling of `kinds`.
    pub fn new(kinds: &TokenKindTable) -> Self {
        let mut table = SymbolTable {
            symbols: HashMap::with_capacity(kinds.len()),
        };

        for (spelling, kind) in kinds.entries() {
            table.intern(spelling, kind);
        }

        table
    }

    /// Returns the symbol registered for `spelling`, registering it under
    /// `default_kind` on first use. An existing symbol keeps its kind.
    pub fn intern(&mut self, spelling: &str, default_kind: TokenKind) -> Rc<Symbol> {
        if let Some(symbol) = self.symbols.get(spelling) {
            return Rc::clone(symbol);
        }

        let symbol = Rc::new(Symbol {
            spelling: spelling.to_string(),
            kind: default_kind,
        });
        self.symbols.insert(spelling.to_string(), Rc::clone(&symbol));
        symbol
    }

    /// Looks up `spelling` without registering it.
    pub fn resolve(&self, spelling: &str) -> Option<Rc<Symbol>> {
        self.symbols.get(spelling).map(Rc::clone)
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.symbols.contains_key(spelling)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    /// A table pre-populated from the process-wide [`TOKEN_KINDS`].
    fn default() -> Self {
        SymbolTable::new(&TOKEN_KINDS)
    }
}
