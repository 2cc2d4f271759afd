// src/lib.rs
//! Course rating table scraper.
//!
//! Reads an HTML ratings table, turns every `<tr>` into a [`Record`]
//! (`star`, `course`, `professor`, `courseCode`) and exports the sequence as
//! JSON, CSV/TSV or SQL. Ranking of the extracted courses lives in [`rank`].

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod record;
pub mod specs;

pub mod csv;
pub mod export;
pub mod file;
pub mod rank;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::{Document, HtmlDocument, Node, Query, Tree};
pub use crate::error::{Error, Result};
pub use crate::record::{RankedCourse, Record, Star};
pub use crate::specs::courses::{Extractor, extract_records};
pub use crate::export::json::serialize;
pub use crate::rank::rank;
