//! Bracket-syntax codec tests
//!
//! These tests run query parameter pairs through the public parser and
//! serializer.

mod parse;
mod serialize;
