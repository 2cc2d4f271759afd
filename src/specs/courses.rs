// src/specs/courses.rs
//! Scraping *spec* for the course ratings table.
//!
//! Every row matched by the row selector becomes exactly one [`Record`], in
//! document order, whatever it contains:
//! - `star` from the rating anchor's attribute (see [`rating::coerce`]);
//! - `course` from the course cell;
//! - `professor` / `courseCode` from the course cell's next / previous element
//!   sibling, or from fixed columns when a [`ColumnMap`] is configured.
//!
//! Missing pieces fall back to `0` / `""`. Nothing here fails once the
//! selectors compile.
//!
//! [`ColumnMap`]: crate::config::ColumnMap

use std::sync::LazyLock;

use tracing::{debug, info};

use super::rating;
use crate::config::{ExtractOptions, FieldLocator};
use crate::core::sanitize::{preview, trim_text};
use crate::core::{Document, Node, Query};
use crate::error::Result;
use crate::record::Record;

static STANDARD: LazyLock<Extractor> =
    LazyLock::new(|| Extractor::new(ExtractOptions::default()).unwrap());

/// Extract with the default selectors (`tr`, `a.star`, `td.bold`) and the `title` attribute.
pub fn extract_records<D: Document>(doc: &D) -> Vec<Record> {
    STANDARD.extract(doc)
}

#[derive(Clone, Debug)]
pub struct Extractor {
    rows: Query,
    star: Query,
    course: Query,
    rating_attr: String,
    locator: FieldLocator,
}

impl Extractor {
    /// Compile the selectors in `options`.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            rows: Query::parse(&options.row_selector)?,
            star: Query::parse(&options.star_selector)?,
            course: Query::parse(&options.course_selector)?,
            rating_attr: options.rating_attr,
            locator: options.locator,
        })
    }

    pub fn extract<D: Document>(&self, doc: &D) -> Vec<Record> {
        let rows = doc.rows(&self.rows);
        let records: Vec<Record> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.extract_row(i, *row))
            .collect();

        info!(rows = records.len(), selector = %self.rows, "extracted records");
        records
    }

    fn extract_row<'a, N: Node<'a>>(&self, index: usize, row: N) -> Record {
        let raw_star = row
            .find_first(&self.star)
            .and_then(|a| a.attribute(&self.rating_attr));
        if raw_star.is_none() {
            debug!(row = index, "no rating");
        }

        let (code, course, professor) = match &self.locator {
            FieldLocator::Siblings => {
                let course = row.find_first(&self.course);
                (
                    course.and_then(|c| c.prev_element()),
                    course,
                    course.and_then(|c| c.next_element()),
                )
            }
            FieldLocator::Columns(map) => {
                let cells = row.element_children();
                (
                    cells.get(map.code).copied(),
                    cells.get(map.course).copied(),
                    cells.get(map.professor).copied(),
                )
            }
        };
        if course.is_none() {
            debug!(row = index, text = %preview(&row.text_content(), 80), "no course cell");
        }

        Record {
            star: rating::coerce(raw_star),
            course: text_of(course),
            professor: text_of(professor),
            course_code: text_of(code),
        }
    }
}

fn text_of<'a, N: Node<'a>>(node: Option<N>) -> String {
    node.map(|n| s!(trim_text(&n.text_content()))).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnMap;
    use crate::core::HtmlDocument;
    use crate::record::Star;

    fn doc(rows: &str) -> HtmlDocument {
        HtmlDocument::parse(&format!("<html><body><table>{rows}</table></body></html>"))
    }

    #[test]
    fn default_selectors_compile() {
        assert!(Extractor::new(ExtractOptions::default()).is_ok());
    }

    #[test]
    fn full_row() {
        let d = doc(r#"
            <tr>
              <td>CS101</td>
              <td class="bold"> Intro to Systems </td>
              <td>Dr. Smith</td>
              <td><a class="star" title="4"></a></td>
            </tr>
        "#);
        let out = extract_records(&d);
        assert_eq!(out, vec![Record {
            star: Star::from(4),
            course: s!("Intro to Systems"),
            professor: s!("Dr. Smith"),
            course_code: s!("CS101"),
        }]);
    }

    #[test]
    fn course_without_neighbours() {
        let d = doc(r#"<tr><td class="bold">Algorithms</td></tr>"#);
        let out = extract_records(&d);
        assert_eq!(out[0].star, Star::ZERO);
        assert_eq!(out[0].course, "Algorithms");
        assert_eq!(out[0].professor, "");
        assert_eq!(out[0].course_code, "");
    }

    #[test]
    fn header_row_yields_default_record() {
        let d = doc(r#"
            <tr><th>Code</th><th>Course</th><th>Professor</th></tr>
            <tr><td>X1</td><td class="bold">Logic</td><td>Kim</td></tr>
        "#);
        let out = extract_records(&d);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Record::default());
        assert_eq!(out[1].course_code, "X1");
    }

    #[test]
    fn anchor_without_title_is_zero() {
        let d = doc(r#"<tr><td class="bold">A</td><td><a class="star">★</a></td></tr>"#);
        assert_eq!(extract_records(&d)[0].star, Star::ZERO);
    }

    #[test]
    fn neighbour_tag_and_class_do_not_matter() {
        let d = doc(r#"<tr><th class="code">C9</th><td class="bold">B</td><th>Lee</th></tr>"#);
        let out = extract_records(&d);
        assert_eq!(out[0].course_code, "C9");
        assert_eq!(out[0].professor, "Lee");
    }

    #[test]
    fn only_first_course_cell_counts() {
        let d = doc(r#"<tr><td>c</td><td class="bold">First</td><td class="bold">Second</td></tr>"#);
        let out = extract_records(&d);
        assert_eq!(out[0].course, "First");
        assert_eq!(out[0].professor, "Second");
    }

    #[test]
    fn custom_selectors_and_attribute() {
        let opts = ExtractOptions {
            row_selector: s!("tr.course"),
            star_selector: s!("span.rate"),
            course_selector: s!("td.name"),
            rating_attr: s!("data-score"),
            ..ExtractOptions::default()
        };
        let ex = Extractor::new(opts).unwrap();
        let d = doc(r#"
            <tr><td>ignored</td></tr>
            <tr class="course"><td>K1</td><td class="name">Ethics</td><td>Park</td>
                <td><span class="rate" data-score="2.5"></span></td></tr>
        "#);
        let out = ex.extract(&d);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].star, Star::new(2.5));
        assert_eq!(out[0].course, "Ethics");
    }

    #[test]
    fn column_locator_reads_fixed_cells() {
        let opts = ExtractOptions {
            locator: FieldLocator::Columns(ColumnMap { code: 0, course: 1, professor: 3 }),
            ..ExtractOptions::default()
        };
        let ex = Extractor::new(opts).unwrap();
        let d = doc(r#"
            <tr><td>CS2</td><td>Compilers</td><td>3 credits</td><td>Choi</td></tr>
            <tr><td>CS3</td><td>Short</td></tr>
        "#);
        let out = ex.extract(&d);
        assert_eq!(out[0].course_code, "CS2");
        assert_eq!(out[0].course, "Compilers");
        assert_eq!(out[0].professor, "Choi");
        assert_eq!(out[1].professor, "");
    }

    #[test]
    fn bad_selector_is_an_error() {
        let opts = ExtractOptions { course_selector: s!("table td"), ..ExtractOptions::default() };
        assert!(Extractor::new(opts).is_err());
    }
}
