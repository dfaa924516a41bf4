//! Tests for the braille cell model
//!
//! Covers the letter matcher, copy-on-write grid behaviour, text export and
//! image sampling as seen from outside the crate.

mod export_tests;
mod grid_tests;
