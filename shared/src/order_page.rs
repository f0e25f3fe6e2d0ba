//! Lookups against the order details page rendered by the panel.
//!
//! A row is located by the attribute holding its album order number. Its price
//! is read from a fixed position relative to that element:
//!
//! ```text
//! <td><span>0.00</span></td><td id="A-1">A-1</td>
//!  ^    ^     ^               ^
//!  |    |     |               matched element
//!  |    |     first child: price text
//!  |    last child
//!  previous sibling
//! ```
//!
//! The page has no stable selectors, so any change to this shape surfaces as a
//! [`LayoutMismatch`] rather than a wrong answer. Siblings are raw nodes:
//! whitespace between the two cells is a text node and breaks the chain.

use scraper::{ElementRef, Html, Node};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutMismatch {
    #[error("matched element has no previous sibling")]
    MissingPreviousSibling,
    #[error("price cell has no children")]
    MissingLastChild,
    #[error("price cell content is empty")]
    MissingFirstChild,
    #[error("price cell content is not text")]
    NotText,
}

/// Parses `page` and evaluates the row for `row_id`. `Ok(None)` means the
/// page has no such row.
pub fn evaluate_page(
    page: &str,
    row_id_attribute: &str,
    row_id: &str,
    price_zero_value: &str,
) -> Result<Option<bool>, LayoutMismatch> {
    let document = Html::parse_document(page);

    match find_row(&document, row_id_attribute, row_id) {
        Some(row) => is_price_zero(row, price_zero_value).map(Some),
        None => Ok(None),
    }
}

/// First element in document order whose `attribute` equals `value`.
///
/// Walks the tree in pre-order without recursion, so nesting depth is bounded
/// only by the parser.
pub fn find_row<'a>(document: &'a Html, attribute: &str, value: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().attr(attribute) == Some(value))
}

pub fn is_price_zero(row: ElementRef, price_zero_value: &str) -> Result<bool, LayoutMismatch> {
    Ok(price_text(row)? == price_zero_value)
}

fn price_text(row: ElementRef) -> Result<String, LayoutMismatch> {
    let price_cell = row
        .prev_sibling()
        .ok_or(LayoutMismatch::MissingPreviousSibling)?;
    let content = price_cell
        .last_child()
        .ok_or(LayoutMismatch::MissingLastChild)?;
    let price = content
        .first_child()
        .ok_or(LayoutMismatch::MissingFirstChild)?;

    match price.value() {
        Node::Text(text) => Ok(text.to_string()),
        Node::Element(_) => ElementRef::wrap(price)
            .map(|element| element.text().collect())
            .ok_or(LayoutMismatch::NotText),
        _ => Err(LayoutMismatch::NotText),
    }
}
