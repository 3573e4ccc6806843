//! Parsed HTML document with the queries rubric rules need

mod element;

pub use element::ElementHandle;

use crate::error::CheckError;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An immutable parsed HTML document
#[derive(Debug)]
pub struct Document {
    html: Html,
    /// File the markup was read from, if any
    source: Option<PathBuf>,
}

impl Document {
    /// Parse markup into a document. Parsing never fails: malformed markup is
    /// recovered the way browsers recover it.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
            source: None,
        }
    }

    /// Read and parse a UTF-8 HTML file
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let markup = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CheckError::DocumentNotFound {
                path: path.to_path_buf(),
            },
            _ => CheckError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let mut doc = Self::parse(&markup);
        doc.source = Some(path.to_path_buf());
        Ok(doc)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The `<html>` element
    pub fn root(&self) -> ElementHandle<'_> {
        ElementHandle::new(self.html.root_element())
    }

    /// All elements with the given tag name, in document order
    pub fn find_all(&self, tag: &str) -> Vec<ElementHandle<'_>> {
        self.elements()
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(ElementHandle::new)
            .collect()
    }

    /// First element with the given tag name
    pub fn find_first(&self, tag: &str) -> Option<ElementHandle<'_>> {
        self.elements()
            .find(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(ElementHandle::new)
    }

    /// Elements carrying `name`, optionally restricted to an exact value
    pub fn find_by_attribute(&self, name: &str, value: Option<&str>) -> Vec<ElementHandle<'_>> {
        self.elements()
            .map(ElementHandle::new)
            .filter(|el| match (el.attribute(name), value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            })
            .collect()
    }

    /// Elements matching a CSS selector
    pub fn select(&self, css: &str) -> Result<Vec<ElementHandle<'_>>, CheckError> {
        let selector = Selector::parse(css).map_err(|e| CheckError::InvalidSelector {
            selector: css.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.html.select(&selector).map(ElementHandle::new).collect())
    }

    /// Concatenated text of the whole document
    pub fn text(&self) -> String {
        self.root().text()
    }

    /// Text of every comment node, in document order
    pub fn comments(&self) -> Vec<String> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_comment().map(|c| String::from(&**c)))
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }
}

/// Collapse whitespace runs to single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
