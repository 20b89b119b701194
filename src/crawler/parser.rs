//! Entry parser for listing pages
//!
//! Each ranked entry is an `<li>` holding a heading (`.hd`), a body (`.bd`)
//! and usually a one-line quote. Fields are read by position:
//!
//! | Field | Source |
//! |-------|--------|
//! | title | 1st span in the heading link |
//! | subtitle | 2nd span, leading separators stripped |
//! | other_titles | 3rd span, leading separators stripped |
//! | description | 1st line of the body paragraph |
//! | year / region / genre_tags | 2nd line of the body paragraph, split on `/` |
//! | rating_score | `.rating_num`, verbatim |
//! | rating_count | 4th span of the star block, digits only |
//! | quote | `.quote .inq` |
//!
//! Missing spans and regions give empty fields. A body paragraph without the
//! two-line layout is an error: it means the page layout changed.

use crate::document::{Document, Node};
use crate::model::ItemRecord;
use crate::{Result, Top250Error};

const ENTRIES: &str = "#content > div > div.article > ol > li";
const HEADING_SPANS: &str = ".hd a span";
const BODY_PARAGRAPH: &str = ".bd p";
const RATING_SCORE: &str = ".bd .star .rating_num";
const RATING_SPANS: &str = ".bd .star span";
const QUOTE: &str = ".quote .inq";

/// Position of the "N人评价" span inside the star block
const RATING_COUNT_SPAN: usize = 3;

/// Extracts every entry on a listing page, in document order
pub fn extract_items(doc: &Document) -> Result<Vec<ItemRecord>> {
    doc.find(ENTRIES)?.iter().map(extract_item).collect()
}

/// Extracts the fields of a single entry node
pub fn extract_item(entry: &Node<'_>) -> Result<ItemRecord> {
    let title = entry.nth_text(HEADING_SPANS, 0)?;
    let subtitle = strip_leading_separators(&entry.nth_text(HEADING_SPANS, 1)?).to_string();
    let other_titles = strip_leading_separators(&entry.nth_text(HEADING_SPANS, 2)?).to_string();

    let body = split_body(&entry.nth_text(BODY_PARAGRAPH, 0)?)?;

    let rating_score = entry.text_of(RATING_SCORE)?;
    let rating_count = digits_only(entry.nth_text(RATING_SPANS, RATING_COUNT_SPAN)?.trim());

    let quote = entry.text_of(QUOTE)?;

    Ok(ItemRecord {
        title,
        subtitle,
        other_titles,
        description: body.description,
        year: body.year,
        region: body.region,
        genre_tags: body.genre_tags,
        rating_score,
        rating_count,
        quote,
    })
}

/// The two lines of an entry's body paragraph
#[derive(Debug, PartialEq, Eq)]
struct Body {
    description: String,
    year: String,
    region: String,
    genre_tags: String,
}

/// Splits body text into the description line and the
/// `year / region / genre_tags` line
///
/// Entries released in several years list every year before the region
/// (`1961 / 1964 / 中国大陆 / 剧情 动画`), so the last two parts are the
/// region and genre tags and everything before them is the year.
fn split_body(text: &str) -> Result<Body> {
    let text = text.trim();
    let mut lines = text.split('\n');

    let description = lines.next().unwrap_or_default();
    let facts = lines.next().ok_or_else(|| Top250Error::UnexpectedFormat {
        field: "body text",
        text: text.to_string(),
    })?;

    let mut parts: Vec<&str> = facts.split('/').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(Top250Error::UnexpectedFormat {
            field: "year / region / genre line",
            text: facts.to_string(),
        });
    }

    let genre_tags = parts.pop().unwrap_or_default().to_string();
    let region = parts.pop().unwrap_or_default().to_string();

    Ok(Body {
        description: description.to_string(),
        year: parts.join(" / "),
        region,
        genre_tags,
    })
}

/// Strips the leading run of spaces, non-breaking spaces and slashes that
/// separates alternate titles
fn strip_leading_separators(text: &str) -> &str {
    text.trim_start_matches(&[' ', '\u{a0}', '/'][..])
}

/// Keeps only the ASCII digits, e.g. "1,234人评价" becomes "1234"
fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
