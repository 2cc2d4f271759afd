// src/core/mod.rs

pub mod dom;
pub mod html;
pub mod query;
pub mod sanitize;
pub mod tree;

pub use dom::{Document, Node};
pub use html::HtmlDocument;
pub use query::Query;
pub use tree::{NodeId, Tree, TreeNode};
