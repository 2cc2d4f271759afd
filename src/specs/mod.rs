// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge: *where the ground truth lives in the HTML* and
//! *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Row → record mapping** for the ratings table (`courses`).
//! - **Value coercion** for the rating attribute (`rating`).
//!
//! ## What does **not** live here
//! - Parsing HTML text into a tree, selector handling (`core`).
//! - Ranking, export formats, files (`rank`, `export`, `csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → file::read_input → core::HtmlDocument::parse
//!     → specs::courses::Extractor::extract → rank (optional) → export::render
//! ```
//!
//! ## Conventions & invariants
//! - One record per matched row, in document order. No filtering, no dedup.
//! - Missing data never errors: `0` for the rating, `""` for text.
//! - Specs work against the `core::Document` traits, so they are testable
//!   offline against inline HTML or an in-memory tree.
pub mod courses;
pub mod rating;
