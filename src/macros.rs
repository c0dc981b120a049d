//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$line` - The 1-based source line
/// * `$left` - Column of the first character of the lexeme
/// * `$right` - Column of the last character of the lexeme
/// * `$symbol` - The interned `Rc<Symbol>`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(1, 4, 6, symbols.intern("foo", TokenKind::Identifier));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($line:expr, $left:expr, $right:expr, $symbol:expr) => {
        Token {
            line_number: $line,
            left_position: $left,
            right_position: $right,
            symbol: $symbol,
        }
    };
}
