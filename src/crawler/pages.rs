//! Pagination discovery
//!
//! Only the first listing page carries the paginator, so every other page is
//! found by reading its links.

use crate::document::Document;
use crate::model::PageDescriptor;
use crate::{Result, Top250Error};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Direct-child page links of the paginator; the "next" link nested in
/// `span.next` does not match
const PAGINATOR_LINKS: &str = "#content > div > div.article > div.paginator > a";

/// Discovers every listing page from the first page's paginator
///
/// The result always starts with page 1 (empty relative path), followed by
/// each paginator link in document order. A link whose number was already
/// seen is dropped with a warning.
///
/// # Returns
///
/// * `Ok(Vec<PageDescriptor>)` - All listing pages
/// * `Err(Top250Error::InvalidPageNumber)` - A link's text is not a page number
/// * `Err(Top250Error::ZeroPageNumber)` - A link claims to be page 0
/// * `Err(Top250Error::MissingAttribute)` - A link has no `href`
pub fn discover_pages(doc: &Document) -> Result<Vec<PageDescriptor>> {
    let first = PageDescriptor::first();
    let mut seen = HashSet::from([first.number]);
    let mut pages = vec![first];

    for link in doc.find(PAGINATOR_LINKS)? {
        let number = parse_page_number(&link.text())?;
        let relative_path = link
            .attr("href")
            .ok_or_else(|| Top250Error::MissingAttribute {
                element: link.name().to_string(),
                attribute: "href".to_string(),
            })?;

        if !seen.insert(number) {
            warn!(
                "Skipping repeated link to page {} ({:?})",
                number, relative_path
            );
            continue;
        }

        pages.push(PageDescriptor {
            number,
            relative_path: relative_path.to_string(),
        });
    }

    debug!("Paginator lists {} pages", pages.len());
    Ok(pages)
}

fn parse_page_number(text: &str) -> Result<u32> {
    let number: u32 = text
        .trim()
        .parse()
        .map_err(|source| Top250Error::InvalidPageNumber {
            text: text.to_string(),
            source,
        })?;

    if number == 0 {
        return Err(Top250Error::ZeroPageNumber {
            text: text.to_string(),
        });
    }

    Ok(number)
}
