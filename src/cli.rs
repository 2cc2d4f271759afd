// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::consts::*;
use crate::config::{ColumnMap, ExportFormat, ExportOptions, ExtractOptions, FieldLocator};
use crate::core::HtmlDocument;
use crate::error::Result;
use crate::export;
use crate::file;
use crate::rank::rank;
use crate::specs::courses::Extractor;

/// Extract course ratings from an HTML table.
#[derive(Parser, Debug)]
#[command(name = "star_scrape", version, about)]
pub struct Cli {
    /// HTML file to read. Omit or pass `-` for stdin.
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Rank courses by rating instead of listing rows.
    #[arg(long)]
    pub rank: bool,

    /// Output file or directory. Stdout when omitted.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Emit a header line for CSV/TSV.
    #[arg(long)]
    pub include_headers: bool,

    /// Table name used in SQL output.
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    #[arg(long, default_value = ROW_SELECTOR)]
    pub row_selector: String,

    #[arg(long, default_value = STAR_SELECTOR)]
    pub star_selector: String,

    #[arg(long, default_value = COURSE_SELECTOR)]
    pub course_selector: String,

    /// Attribute of the star element holding the rating.
    #[arg(long, default_value = RATING_ATTR)]
    pub rating_attr: String,

    /// Take code, course and professor from fixed cell positions.
    #[arg(long, value_name = "CODE,COURSE,PROF")]
    pub columns: Option<ColumnMap>,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            row_selector: self.row_selector.clone(),
            star_selector: self.star_selector.clone(),
            course_selector: self.course_selector.clone(),
            rating_attr: self.rating_attr.clone(),
            locator: match self.columns {
                Some(map) => FieldLocator::Columns(map),
                None => FieldLocator::Siblings,
            },
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::default();
        export.format = self.format;
        export.include_headers = self.include_headers;
        export.pretty = self.pretty;
        export.table = self.table.clone();
        if let Some(out) = &self.out {
            export.set_path(out);
        }
        export
    }

    fn default_stem(&self) -> &'static str {
        if self.rank { DEFAULT_RANKED_FILE } else { DEFAULT_FILE }
    }
}

/// Scrape `html` and render it as the command line asks.
pub fn render(html: &str, args: &Cli) -> Result<String> {
    let extractor = Extractor::new(args.extract_options())?;
    let doc = HtmlDocument::parse(html);
    let records = extractor.extract(&doc);
    let export = args.export_options();

    if args.rank {
        let ranked = rank(&records);
        info!(courses = ranked.len(), "ranked");
        export::render(&ranked, &export)
    } else {
        export::render(&records, &export)
    }
}

pub fn run(args: Cli) -> Result<()> {
    let html = file::read_input(args.input.as_deref())?;
    let out = render(&html, &args)?;
    let export = args.export_options();

    if file::write_export(&export, args.default_stem(), &out)?.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        if !out.ends_with('\n') {
            writeln!(stdout)?;
        }
    }
    Ok(())
}
