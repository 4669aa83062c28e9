// ============================================================================
// itx - Text Tokenizer - Library Interface
// ============================================================================
//
// This module exposes the internal modules for integration testing.
// The main binary (main.rs) uses these modules directly.

pub mod cli;
pub mod source;
pub mod tokens;
