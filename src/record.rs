// src/record.rs
use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::consts::NEUTRAL_STAR;

/// A course rating. Always finite; serializes as an integer when integral.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Star(f64);

impl Star {
    pub const ZERO: Star = Star(0.0);
    pub const NEUTRAL: Star = Star(NEUTRAL_STAR);

    /// Non-finite values become zero; `-0.0` becomes `0.0`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() { Star(value + 0.0) } else { Star::ZERO }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    fn as_integer(self) -> Option<i64> {
        // 2^53: beyond this f64 can't hold every integer anyway
        const EXACT: f64 = 9_007_199_254_740_992.0;
        (self.0.fract() == 0.0 && self.0.abs() <= EXACT).then_some(self.0 as i64)
    }
}

impl From<i64> for Star {
    fn from(v: i64) -> Self {
        Star::new(v as f64)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(i) => write!(f, "{i}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Star {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// One table row. Field order is the serialized order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub star: Star,
    pub course: String,
    pub professor: String,
    pub course_code: String,
}

/// A ranked, deduplicated course.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedCourse {
    pub course_name: String,
    pub professor_name: String,
    pub star: Star,
    pub point: f64,
}

/* ---------------- Tabular view (CSV/TSV/SQL) ---------------- */

/// One output cell: text gets quoted by SQL, numbers don't.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(String),
}

impl Cell<'_> {
    pub fn as_text(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Number(n) => n,
        }
    }
}

/// Row types that export as flat columns.
pub trait Tabular {
    /// Column names, in the same order as [`Tabular::cells`].
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell<'_>>;
}

impl Tabular for Record {
    fn columns() -> &'static [&'static str] {
        &["star", "course", "professor", "courseCode"]
    }

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Number(self.star.to_string()),
            Cell::Text(&self.course),
            Cell::Text(&self.professor),
            Cell::Text(&self.course_code),
        ]
    }
}

impl Tabular for RankedCourse {
    fn columns() -> &'static [&'static str] {
        &["course_name", "professor_name", "star", "point"]
    }

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.course_name),
            Cell::Text(&self.professor_name),
            Cell::Number(self.star.to_string()),
            Cell::Number(self.point.to_string()),
        ]
    }
}
