use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use super::symbols::Symbol;

lazy_static! {
    /// The process-wide token kind table.
    ///
    /// Call `lazy_static::initialize(&TOKEN_KINDS)` before building any scanner
    /// and hand the table to [`SymbolTable::new`](super::symbols::SymbolTable::new).
    pub static ref TOKEN_KINDS: TokenKindTable = TokenKindTable::new();
}

/// Every spelling with a fixed token kind.
///
/// `.` and `//` are deliberately absent: a dot always opens a float literal
/// and two slashes open a line comment.
pub const FIXED_SPELLINGS: &[(&str, TokenKind)] = &[
    ("program", TokenKind::Program),
    ("int", TokenKind::Int),
    ("float", TokenKind::Float),
    ("boolean", TokenKind::Boolean),
    ("char", TokenKind::Char),
    ("void", TokenKind::Void),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    ("=", TokenKind::Assignment),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEquals),
    (">", TokenKind::Greater),
    (">=", TokenKind::GreaterEquals),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("!", TokenKind::Not),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("+=", TokenKind::PlusEquals),
    ("-=", TokenKind::MinusEquals),
    ("*=", TokenKind::StarEquals),
    ("/=", TokenKind::SlashEquals),
    ("->", TokenKind::Arrow),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatLiteral,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Ampersand,
    Pipe,
    Or,
    And,

    Semicolon,
    Colon,
    Comma,
    Arrow,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Program,
    Int,
    Float,
    Boolean,
    Char,
    Void,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    Function,
    Return,
    Break,
    Continue,
    True,
    False,
}

impl TokenKind {
    /// Kinds whose spelling varies from token to token.
    pub fn is_variable_spelling(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::FloatLiteral
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Bidirectional mapping between fixed spellings and their kinds.
#[derive(Debug)]
pub struct TokenKindTable {
    kinds: HashMap<&'static str, TokenKind>,
    spellings: HashMap<TokenKind, &'static str>,
}

impl TokenKindTable {
    pub fn new() -> Self {
        let mut kinds = HashMap::with_capacity(FIXED_SPELLINGS.len());
        let mut spellings = HashMap::with_capacity(FIXED_SPELLINGS.len());

        for &(spelling, kind) in FIXED_SPELLINGS {
            kinds.insert(spelling, kind);
            spellings.insert(kind, spelling);
        }

        TokenKindTable { kinds, spellings }
    }

    pub fn kind_of(&self, spelling: &str) -> Option<TokenKind> {
        self.kinds.get(spelling).copied()
    }

    pub fn spelling_of(&self, kind: TokenKind) -> Option<&'static str> {
        self.spellings.get(&kind).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.kinds.iter().map(|(spelling, kind)| (*spelling, *kind))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for TokenKindTable {
    fn default() -> Self {
        Self::new()
    }
}

/// A scanned lexeme: its interned symbol plus the inclusive column span on one line.
#[derive(Debug, Clone)]
pub struct Token {
    pub(crate) line_number: usize,
    pub(crate) left_position: usize,
    pub(crate) right_position: usize,
    pub(crate) symbol: Rc<Symbol>,
}

impl Token {
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn left_position(&self) -> usize {
        self.left_position
    }

    pub fn right_position(&self) -> usize {
        self.right_position
    }

    pub fn symbol(&self) -> &Rc<Symbol> {
        &self.symbol
    }

    pub fn kind(&self) -> TokenKind {
        self.symbol.kind()
    }

    pub fn spelling(&self) -> &str {
        self.symbol.spelling()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  left: {} right: {} line: {}",
            self.spelling(),
            self.left_position,
            self.right_position,
            self.line_number
        )
    }
}
