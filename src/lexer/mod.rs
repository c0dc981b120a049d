//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts a character source into a
//! stream of tokens for parsing. It handles:
//!
//! - Character-at-a-time reading with line and column tracking
//! - Recognition of reserved words, identifiers, integer and float literals
//! - Greedy two-character operator matching
//! - Line comments and recovery from illegal input
//! - Interning of every spelling into a shared symbol table

pub mod scanner;
pub mod source;
pub mod symbols;
pub mod tokens;
