// src/core/query.rs
//! Compound selectors shared by every document backend.
//!
//! A [`Query`] is one compound selector: an optional tag (or `*`), any number
//! of `.class` parts and any number of attribute parts, e.g. `a.star`,
//! `td.bold`, `a[title]`, `a[title^="4"]`. Attribute operators are `=`, `~=`,
//! `|=`, `^=`, `$=` and `*=`, matched case-sensitively. No combinators or
//! flags: row queries run over the whole document and field queries run
//! inside one row.
//!
//! The same text is compiled by `scraper` for the HTML backend and matched
//! by hand for the in-memory [`Tree`](super::tree::Tree).

use scraper::Selector;

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct Query {
    source: String,
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
    compiled: Selector,
}

/// One `[name]` / `[name OP value]` part.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AttrTest {
    name: String,
    op: Option<(AttrOp, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttrOp {
    Equals,
    Includes,
    DashMatch,
    Prefix,
    Suffix,
    Substring,
}

impl AttrOp {
    fn from_prefix(c: char) -> Option<Self> {
        match c {
            '~' => Some(AttrOp::Includes),
            '|' => Some(AttrOp::DashMatch),
            '^' => Some(AttrOp::Prefix),
            '$' => Some(AttrOp::Suffix),
            '*' => Some(AttrOp::Substring),
            _ => None,
        }
    }

    fn test(self, have: &str, want: &str) -> bool {
        match self {
            AttrOp::Equals => have == want,
            AttrOp::Includes => {
                !want.is_empty()
                    && !want.contains(char::is_whitespace)
                    && have.split_ascii_whitespace().any(|w| w == want)
            }
            AttrOp::DashMatch => {
                have == want
                    || have.strip_prefix(want).is_some_and(|r| r.starts_with('-'))
            }
            AttrOp::Prefix => !want.is_empty() && have.starts_with(want),
            AttrOp::Suffix => !want.is_empty() && have.ends_with(want),
            AttrOp::Substring => !want.is_empty() && have.contains(want),
        }
    }
}

impl Query {
    pub fn parse(text: &str) -> Result<Self> {
        let source = text.trim();
        let invalid = |reason: String| Error::Selector { selector: s!(source), reason };

        let parts = parse_compound(source).map_err(invalid)?;
        let compiled = Selector::parse(source).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            source: s!(source),
            tag: parts.tag,
            classes: parts.classes,
            attrs: parts.attrs,
            compiled,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The `scraper` form of this query.
    pub fn selector(&self) -> &Selector {
        &self.compiled
    }

    /// Match an element given its tag name and an attribute lookup.
    /// Tag and attribute names compare ASCII case-insensitively, classes exactly.
    pub fn matches<'v>(&self, tag: &str, attr: impl Fn(&str) -> Option<&'v str>) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if !self.classes.is_empty() {
            let class_attr = attr("class").unwrap_or("");
            let has_all = self
                .classes
                .iter()
                .all(|c| class_attr.split_ascii_whitespace().any(|have| have == c));
            if !has_all {
                return false;
            }
        }

        self.attrs.iter().all(|t| match (attr(t.name.as_str()), &t.op) {
            (Some(have), Some((op, want))) => op.test(have, want),
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/* ---------- parsing ---------- */

#[derive(Default)]
struct Parts {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

fn is_ident(c: char) -> bool {
    !c.is_whitespace() && !".[]#:>+~,*=\"'()^$|!".contains(c)
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Quoted string or bare identifier. Anything else (flags, stray quotes) is refused.
fn attr_value(v: &str) -> Option<&str> {
    for q in ['"', '\''] {
        if let Some(inner) = v.strip_prefix(q) {
            return inner.strip_suffix(q).filter(|i| !i.contains(q));
        }
    }
    (!v.is_empty() && v.chars().all(is_ident)).then_some(v)
}

fn parse_attr(body: &str) -> std::result::Result<AttrTest, String> {
    let bad = || format!("unsupported attribute selector '[{body}]'");

    let Some(eq) = body.find('=') else {
        let name = body.trim();
        if name.is_empty() || !name.chars().all(is_ident) {
            return Err(bad());
        }
        return Ok(AttrTest { name: name.to_ascii_lowercase(), op: None });
    };

    let (lhs, rhs) = (&body[..eq], &body[eq + 1..]);
    let (name, op) = match lhs.chars().last().and_then(AttrOp::from_prefix) {
        Some(op) => (&lhs[..lhs.len() - 1], op),
        None => (lhs, AttrOp::Equals),
    };
    let name = name.trim();
    if name.is_empty() || !name.chars().all(is_ident) {
        return Err(bad());
    }
    let value = attr_value(rhs.trim()).ok_or_else(bad)?;
    Ok(AttrTest { name: name.to_ascii_lowercase(), op: Some((op, s!(value))) })
}

fn parse_compound(source: &str) -> std::result::Result<Parts, String> {
    if source.is_empty() {
        return Err(s!("empty selector"));
    }

    let mut parts = Parts::default();
    let mut rest = source;
    let mut universal = false;

    if let Some(r) = rest.strip_prefix('*') {
        universal = true;
        rest = r;
    } else {
        let (ident, r) = take_ident(rest);
        if !ident.is_empty() {
            parts.tag = Some(ident.to_ascii_lowercase());
            rest = r;
        }
    }

    while !rest.is_empty() {
        if let Some(r) = rest.strip_prefix('.') {
            let (ident, r) = take_ident(r);
            if ident.is_empty() {
                return Err(s!("missing class name after '.'"));
            }
            parts.classes.push(s!(ident));
            rest = r;
        } else if let Some(r) = rest.strip_prefix('[') {
            let close = r.find(']').ok_or_else(|| s!("unterminated attribute selector"))?;
            parts.attrs.push(parse_attr(&r[..close])?);
            rest = &r[close + 1..];
        } else {
            return Err(format!("only compound selectors are supported, found '{rest}'"));
        }
    }

    if !universal && parts.tag.is_none() && parts.classes.is_empty() && parts.attrs.is_empty() {
        return Err(s!("expected a tag, class or attribute"));
    }
    Ok(parts)
}
