//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while scanning. It includes:
//!
//! - Diagnostics with source position information
//! - The scanner's diagnostic variants (illegal characters, malformed literals)
//! - Failures reported by a character source
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
