//! Queryable markup documents
//!
//! Extraction code talks to pages only through [`Document`] and [`Node`]:
//! find the nodes matching a CSS selector, pick the nth match, read an
//! attribute, read text content. Where the markup comes from is the job of a
//! [`DocumentProvider`].

mod provider;

pub use provider::DocumentProvider;

use crate::{Result, Top250Error};
use scraper::{ElementRef, Html, Selector};

/// A parsed markup page
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses markup text into a document
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Decodes a raw response body and parses it
    ///
    /// # Arguments
    ///
    /// * `url` - Where the body came from, used in the error
    /// * `bytes` - The raw body
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - Body was valid UTF-8 markup
    /// * `Err(Top250Error::Markup)` - Body could not be decoded
    pub fn from_bytes(url: &str, bytes: &[u8]) -> Result<Self> {
        let markup = std::str::from_utf8(bytes).map_err(|e| Top250Error::Markup {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::parse(markup))
    }

    /// Returns every node matching the selector, in document order
    pub fn find(&self, selector: &str) -> Result<Vec<Node<'_>>> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).map(Node::new).collect())
    }

    /// Returns the nth (0-based) node matching the selector, if there is one
    pub fn nth(&self, selector: &str, n: usize) -> Result<Option<Node<'_>>> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).nth(n).map(Node::new))
    }

    /// Returns the concatenated text of every node matching the selector
    pub fn text(&self, selector: &str) -> Result<String> {
        Ok(self.find(selector)?.iter().map(Node::text).collect())
    }
}

/// An element inside a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Returns every descendant matching the selector, in document order
    pub fn find(&self, selector: &str) -> Result<Vec<Node<'a>>> {
        let selector = parse_selector(selector)?;
        Ok(self.element.select(&selector).map(Node::new).collect())
    }

    /// Returns the nth (0-based) descendant matching the selector
    pub fn nth(&self, selector: &str, n: usize) -> Result<Option<Node<'a>>> {
        let selector = parse_selector(selector)?;
        Ok(self.element.select(&selector).nth(n).map(Node::new))
    }

    /// Returns the concatenated text of every descendant matching the selector
    ///
    /// No match yields an empty string.
    pub fn text_of(&self, selector: &str) -> Result<String> {
        Ok(self.find(selector)?.iter().map(Node::text).collect())
    }

    /// Returns the text of the nth descendant matching the selector, or an
    /// empty string when there are fewer matches
    pub fn nth_text(&self, selector: &str, n: usize) -> Result<String> {
        Ok(self
            .nth(selector, n)?
            .map(|node| node.text())
            .unwrap_or_default())
    }

    /// Looks up an attribute value
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Returns the element's tag name
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Returns all text content below this node, concatenated
    pub fn text(&self) -> String {
        self.element.text().collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Top250Error::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
