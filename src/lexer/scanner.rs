use std::{fs::File, io::BufReader, path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl, SourceError},
    Position, MK_TOKEN,
};

use super::{
    source::{CharacterSource, SourceReader},
    symbols::{Symbol, SymbolTable},
    tokens::{Token, TokenKind},
};

const COMMENT_OPENER: &str = "//";

// Vertical tab and form feed count as whitespace alongside the usual four.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Pull-based tokenizer over a [`CharacterSource`].
///
/// `ch` always holds the next unconsumed character. Comments and illegal
/// input never reach the caller: they are skipped inside [`Scanner::next_token`],
/// and illegal input is recorded in [`Scanner::diagnostics`].
pub struct Scanner<'t, S: CharacterSource> {
    source: Option<S>,
    symbols: &'t mut SymbolTable,
    ch: char,
    at_eof: bool,
    line_no: usize,
    start_position: usize,
    diagnostics: Vec<Error>,
}

impl<'t> Scanner<'t, SourceReader<BufReader<File>>> {
    pub fn open<P: AsRef<Path>>(path: P, symbols: &'t mut SymbolTable) -> std::io::Result<Self> {
        Ok(Scanner::new(SourceReader::open(path)?, symbols))
    }
}

impl<'t, S: CharacterSource> Scanner<'t, S> {
    pub fn new(source: S, symbols: &'t mut SymbolTable) -> Self {
        let mut scanner = Scanner {
            source: Some(source),
            symbols,
            ch: '\0',
            at_eof: false,
            line_no: 0,
            start_position: 0,
            diagnostics: vec![],
        };

        scanner.advance();
        scanner
    }

    /// Returns the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.at_eof {
                self.close();
                return None;
            }

            while is_whitespace(self.ch) {
                if !self.advance() {
                    self.close();
                    return None;
                }
            }

            if let Some(source) = self.source.as_ref() {
                self.line_no = source.line();
                self.start_position = source.column();
            }

            let token = if is_identifier_start(self.ch) {
                Some(self.scan_identifier())
            } else if self.ch.is_ascii_digit() {
                Some(self.scan_number())
            } else if self.ch == '.' {
                self.scan_leading_dot_float()
            } else {
                self.scan_operator()
            };

            if token.is_some() {
                return token;
            }
        }
    }

    /// Releases the character source. Later calls are no-ops.
    pub fn close(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.close();
            tracing::debug!(
                diagnostics = self.diagnostics.len(),
                "scanner released its source"
            );
        }
        self.at_eof = true;
    }

    pub fn is_at_eof(&self) -> bool {
        self.at_eof
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Moves the lookahead one character forward. Returns `false` once the
    /// source has nothing left, leaving the scanner at end of input.
    fn advance(&mut self) -> bool {
        let Some(source) = self.source.as_mut() else {
            self.at_eof = true;
            return false;
        };

        match source.read() {
            Ok(c) => {
                self.ch = c;
                true
            }
            Err(SourceError::EndOfInput) => {
                self.at_eof = true;
                false
            }
            Err(SourceError::Io(err)) => {
                let position = Position::new(source.line(), source.column());
                tracing::error!(line = position.line, error = %err, "failed to read source");
                self.diagnostics.push(Error::new(
                    ErrorImpl::SourceUnreadable {
                        message: err.to_string(),
                    },
                    position,
                ));
                self.at_eof = true;
                false
            }
        }
    }

    fn current_line(&self) -> usize {
        self.source.as_ref().map_or(self.line_no, |source| source.line())
    }

    fn make_token(&self, length: usize, symbol: Rc<Symbol>) -> Token {
        let token = MK_TOKEN!(
            self.line_no,
            self.start_position,
            self.start_position + length - 1,
            symbol
        );
        tracing::trace!(%token, kind = %token.kind(), "scanned token");
        token
    }

    fn report(&mut self, error: ErrorImpl) {
        let position = Position::new(self.line_no, self.start_position);
        tracing::warn!(line = position.line, column = position.column, "{}", error);
        self.diagnostics.push(Error::new(error, position));
    }

    fn scan_identifier(&mut self) -> Token {
        let mut lexeme = String::new();
        loop {
            lexeme.push(self.ch);
            if !self.advance() || !is_identifier_part(self.ch) {
                break;
            }
        }

        // Reserved words were registered up front and keep their own kind.
        let symbol = self.symbols.intern(&lexeme, TokenKind::Identifier);
        self.make_token(lexeme.chars().count(), symbol)
    }

    fn scan_number(&mut self) -> Token {
        let mut lexeme = String::new();
        let mut kind = TokenKind::IntegerLiteral;
        loop {
            lexeme.push(self.ch);
            if !self.advance() {
                break;
            }

            // A fraction may be empty: `3.` is the float 3.0.
            if self.ch == '.' && kind == TokenKind::IntegerLiteral {
                kind = TokenKind::FloatLiteral;
                lexeme.push('.');
                if !self.advance() {
                    break;
                }
            }

            if !self.ch.is_ascii_digit() {
                break;
            }
        }

        let symbol = self.symbols.intern(&lexeme, kind);
        self.make_token(lexeme.len(), symbol)
    }

    fn scan_leading_dot_float(&mut self) -> Option<Token> {
        let mut lexeme = String::from('.');
        if !self.advance() || !self.ch.is_ascii_digit() {
            self.report(ErrorImpl::MalformedLeadingDotLiteral { spelling: lexeme });
            return None;
        }

        loop {
            lexeme.push(self.ch);
            if !self.advance() || !self.ch.is_ascii_digit() {
                break;
            }
        }

        let symbol = self.symbols.intern(&lexeme, TokenKind::FloatLiteral);
        Some(self.make_token(lexeme.len(), symbol))
    }

    /// Longest match over at most two characters. When the pair is not a
    /// registered spelling, the second character stays as the lookahead.
    fn scan_operator(&mut self) -> Option<Token> {
        let first = self.ch;

        if self.advance() {
            let pair: String = [first, self.ch].iter().collect();

            if pair == COMMENT_OPENER {
                self.skip_comment();
                return None;
            }

            if let Some(symbol) = self.symbols.resolve(&pair) {
                self.advance();
                return Some(self.make_token(2, symbol));
            }
        }

        let spelling = first.to_string();
        match self.symbols.resolve(&spelling) {
            Some(symbol) => Some(self.make_token(1, symbol)),
            None => {
                self.report(ErrorImpl::IllegalCharacter { spelling });
                None
            }
        }
    }

    fn skip_comment(&mut self) {
        let line = self.line_no;
        tracing::trace!(line, "skipping comment");

        while self.advance() {
            if self.current_line() != line {
                break;
            }
        }
    }
}

impl<S: CharacterSource> Iterator for Scanner<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl<S: CharacterSource> Drop for Scanner<'_, S> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Scans all of `text`, returning the tokens together with every diagnostic
/// reported along the way.
pub fn tokenize(text: &str, symbols: &mut SymbolTable) -> (Vec<Token>, Vec<Error>) {
    let mut scanner = Scanner::new(SourceReader::from_str(text), symbols);
    let tokens = scanner.by_ref().collect::<Vec<_>>();

    (tokens, scanner.take_diagnostics())
}
