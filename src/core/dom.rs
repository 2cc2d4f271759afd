// src/core/dom.rs
//! Capability traits the extractor needs from a document.
//!
//! Anything that can enumerate rows, find a first descendant, step to the
//! neighbouring element, list element children and read attributes/text can
//! be scraped. Two backends ship with the crate: [`HtmlDocument`] over
//! `scraper`, and the in-memory [`Tree`].
//!
//! [`HtmlDocument`]: super::html::HtmlDocument
//! [`Tree`]: super::tree::Tree

use super::query::Query;

pub trait Document {
    type Node<'a>: Node<'a>
    where
        Self: 'a;

    /// Every element matching `query`, in document order.
    fn rows<'a>(&'a self, query: &Query) -> Vec<Self::Node<'a>>;
}

/// An element handle. Handles are cheap to copy and borrow the document.
pub trait Node<'a>: Copy {
    /// First descendant (not self) matching `query`, in document order.
    fn find_first(&self, query: &Query) -> Option<Self>;

    /// Previous sibling that is an element; text nodes are skipped.
    fn prev_element(&self) -> Option<Self>;

    /// Next sibling that is an element; text nodes are skipped.
    fn next_element(&self) -> Option<Self>;

    /// Direct element children, in order.
    fn element_children(&self) -> Vec<Self>;

    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// Concatenated text of the element and all its descendants, untrimmed.
    fn text_content(&self) -> String;
}
