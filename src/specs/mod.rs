// src/specs/mod.rs
//! # Page specs
//!
//! Each spec encodes *where the data lives in one page's HTML* and *how to read it*.
//!
//! ## What lives here
//! - **Pure extraction** from an already parsed `scraper::Html`.
//! - **Selector choice** (the constants live in `config::consts`).
//! - **Tolerant lookups**: an optional sub-element that is missing becomes an empty
//!   field, never an error.
//!
//! ## What does **not** live here
//! - Reading the input file, picking an output name, writing CSV. See `runner` and `file`.
//!
//! ## Conventions & invariants
//! - Rows come out in document order.
//! - Row shapes are stable: identity columns first, then cells exactly as found.
//!   No padding or truncation to the header width.
//!
//! ## Testing notes
//! - Specs are tested offline against saved HTML (`tests/fixtures`).
pub mod scoreboard;
