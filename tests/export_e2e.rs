// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use star_scrape::config::{ExportFormat, ExportOptions};
use star_scrape::file::write_export;
use star_scrape::{HtmlDocument, export, extract_records, rank};

const PAGE: &str = r#"<table>
<tr><td>CS101</td><td class="bold">Intro (Section 1)</td><td>O'Neil</td><td><a class="star" title="4"></a></td></tr>
<tr><td>CS101</td><td class="bold">Intro (Section 2)</td><td>O'Neil</td><td><a class="star" title="4"></a></td></tr>
<tr><td>CS205</td><td class="bold">Compilers</td><td>Park</td><td><a class="star" title="5"></a></td></tr>
<tr><td>CS300</td><td class="bold">Ethics</td><td>Rossi</td><td></td></tr>
</table>"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("star_scrape_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn json_file_in_directory_gets_default_name() {
    let dir = tmp_dir("json");
    let records = extract_records(&HtmlDocument::parse(PAGE));

    let mut opts = ExportOptions::default();
    opts.set_path(dir.to_str().unwrap());
    let body = export::render(&records, &opts).unwrap();
    let written = write_export(&opts, "star", &body).unwrap().unwrap();

    assert_eq!(written, dir.join("star.json"));
    let text = fs::read_to_string(&written).unwrap();
    assert!(text.starts_with(r#"[{"star":4,"course":"Intro (Section 1)","professor":"O'Neil","courseCode":"CS101"}"#));
}

#[test]
fn ranked_sql_dedups_and_escapes() {
    let dir = tmp_dir("sql");
    let records = extract_records(&HtmlDocument::parse(PAGE));
    let ranked = rank(&records);

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Sql;
    opts.set_path(&format!("{}/", dir.display()));
    let body = export::render(&ranked, &opts).unwrap();
    let written = write_export(&opts, "sorted_ranking", &body).unwrap().unwrap();
    assert!(written.ends_with("sorted_ranking.sql"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, [
        "INSERT INTO rating (course_name, professor_name, star, point) VALUES ('Compilers', 'Park', 5, 75);",
        "INSERT INTO rating (course_name, professor_name, star, point) VALUES ('Intro', 'O''Neil', 4, 50);",
        "INSERT INTO rating (course_name, professor_name, star, point) VALUES ('Ethics', 'Rossi', 3, 0);",
    ]);
}

#[test]
fn csv_with_headers() {
    let dir = tmp_dir("csv");
    let records = extract_records(&HtmlDocument::parse(PAGE));

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.include_headers = true;
    opts.set_path(dir.join("ratings").to_str().unwrap());
    let body = export::render(&records, &opts).unwrap();
    let written = write_export(&opts, "star", &body).unwrap().unwrap();

    assert_eq!(written, dir.join("ratings.csv"));
    let text = fs::read_to_string(&written).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("star,course,professor,courseCode"));
    assert_eq!(lines.next(), Some("4,Intro (Section 1),O'Neil,CS101"));
    assert_eq!(lines.last(), Some("0,Ethics,Rossi,CS300"));
}
