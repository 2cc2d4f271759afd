// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::error::Error;

/// Where the scraper looks for rows, ratings and the course cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub row_selector: String,
    pub star_selector: String,
    pub course_selector: String,
    pub rating_attr: String,
    pub locator: FieldLocator,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            row_selector: s!(ROW_SELECTOR),
            star_selector: s!(STAR_SELECTOR),
            course_selector: s!(COURSE_SELECTOR),
            rating_attr: s!(RATING_ATTR),
            locator: FieldLocator::Siblings,
        }
    }
}

/// How `professor` and `courseCode` are found within a row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldLocator {
    /// Neighbours of the course cell: previous = code, next = professor.
    #[default]
    Siblings,
    /// Fixed cell positions among the row's element children.
    Columns(ColumnMap),
}

/// Zero-based cell indexes, written `CODE,COURSE,PROFESSOR` on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub code: usize,
    pub course: usize,
    pub professor: usize,
}

impl FromStr for ColumnMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::Columns(s!(s)))?;

        match parts.as_slice() {
            &[code, course, professor] => Ok(Self { code, course, professor }),
            _ => Err(Error::Columns(s!(s))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Tsv,
    Sql,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Sql => "sql",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json | ExportFormat::Sql => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub pretty: bool,
    pub table: String,
    out_path: Option<OutputPath>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            include_headers: false,
            pretty: false,
            table: s!(DEFAULT_TABLE),
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// Parse a user path into dir + stem (+ extension if typed).
    /// A trailing separator or an existing directory means "directory only".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);

        if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            self.out_path = Some(OutputPath { dir: p.to_path_buf(), file_stem: None, ext: None });
            return;
        }

        let dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        self.out_path = Some(OutputPath {
            dir,
            file_stem: p.file_stem().map(|x| x.to_os_string()),
            ext: p.extension().map(|x| x.to_os_string()),
        });
    }

    /// Stdout when no path was set.
    pub fn writes_to_stdout(&self) -> bool {
        self.out_path.is_none()
    }

    /// Final file path. `default_stem` fills in a missing file name;
    /// a user-typed extension wins over the format's.
    pub fn out_path(&self, default_stem: &str) -> Option<PathBuf> {
        let out = self.out_path.as_ref()?;
        let stem = out
            .file_stem
            .clone()
            .unwrap_or_else(|| OsString::from(default_stem));
        let mut name = stem;
        name.push(".");
        match &out.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        Some(out.dir.join(name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: Option<OsString>, // without extension
    ext: Option<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_map_parses_three_indexes() {
        let m: ColumnMap = "0, 2,3".parse().unwrap();
        assert_eq!(m, ColumnMap { code: 0, course: 2, professor: 3 });
    }

    #[test]
    fn column_map_rejects_wrong_arity_and_junk() {
        assert!("1,2".parse::<ColumnMap>().is_err());
        assert!("1,2,3,4".parse::<ColumnMap>().is_err());
        assert!("a,b,c".parse::<ColumnMap>().is_err());
    }

    #[test]
    fn stdout_until_a_path_is_set() {
        let mut export = ExportOptions::default();
        assert!(export.writes_to_stdout());
        assert_eq!(export.out_path(DEFAULT_FILE), None);

        export.set_path("out/ratings.json");
        assert!(!export.writes_to_stdout());
    }

    #[test]
    fn format_extension_applies_when_user_typed_none() {
        let mut export = ExportOptions::default();
        export.set_path("out/ratings");
        export.format = ExportFormat::Sql;
        let p = export.out_path(DEFAULT_FILE).unwrap();
        assert_eq!(p, Path::new("out").join("ratings.sql"));
    }

    #[test]
    fn user_extension_survives_format_change() {
        let mut export = ExportOptions::default();
        export.set_path("out/hello.txt");
        export.format = ExportFormat::Tsv;
        let p = export.out_path(DEFAULT_FILE).unwrap();
        assert!(p.to_string_lossy().ends_with("hello.txt"));
    }

    #[test]
    fn dir_hint_uses_default_stem() {
        let mut export = ExportOptions::default();
        export.set_path("out/ranked/");
        export.format = ExportFormat::Csv;
        let p = export.out_path(DEFAULT_RANKED_FILE).unwrap();
        assert_eq!(p.file_name().unwrap(), "sorted_ranking.csv");
    }
}
