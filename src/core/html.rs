// src/core/html.rs
//! `scraper`-backed document.
//!
//! Parsing goes through html5ever, so the tree is what a browser would build:
//! `<tbody>` is inserted, stray `<tr>` outside a table is dropped, and
//! entities like `&nbsp;` are already decoded in text content.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::dom::{Document, Node};
use super::query::Query;

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!(errors = html.errors.len(), "html parsed with recoverable errors");
        }
        Self { html }
    }

    /// Parse a fragment such as a bare `<table>…</table>`.
    pub fn parse_fragment(source: &str) -> Self {
        Self { html: Html::parse_fragment(source) }
    }

}

impl Document for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn rows<'a>(&'a self, query: &Query) -> Vec<ElementRef<'a>> {
        self.html.select(query.selector()).collect()
    }
}

impl<'a> Node<'a> for ElementRef<'a> {
    fn find_first(&self, query: &Query) -> Option<Self> {
        self.select(query.selector()).next()
    }

    fn prev_element(&self) -> Option<Self> {
        self.prev_siblings().find_map(ElementRef::wrap)
    }

    fn next_element(&self) -> Option<Self> {
        self.next_siblings().find_map(ElementRef::wrap)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}
