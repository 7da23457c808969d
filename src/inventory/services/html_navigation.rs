//! Structural helpers over a parsed AIDA64 page.
//!
//! AIDA64 writes old-style markup (upper-case tags, unclosed cells, named
//! anchors in front of each section). html5ever normalizes all of that, so
//! these helpers only deal with the resulting tree.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("static selector is valid"));

static NAMED_ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[name]").expect("static selector is valid"));

/// Upper bound for a `colspan` value; larger values are clamped.
const MAX_COLSPAN: usize = 64;

/// Collapses every whitespace run (including non-breaking spaces) into a
/// single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Flattened text of an element: every text node trimmed, empty ones
/// dropped, the rest joined with single spaces.
pub fn flattened_text(element: ElementRef<'_>) -> String {
    let joined = element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}

/// All `<tr>` elements of the document in document order.
pub fn all_rows(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.select(&ROW_SELECTOR)
}

/// First `<a name="...">` whose name equals `name`.
pub fn find_named_anchor<'a>(document: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    document
        .select(&NAMED_ANCHOR_SELECTOR)
        .find(|anchor| anchor.value().attr("name") == Some(name))
}

/// First element called `tag` that comes after `node` in document order.
///
/// Descendants of `node` count as "after", like a forward search through
/// the serialized markup would.
pub fn next_element_named<'a>(
    document: &'a Html,
    node: ElementRef<'a>,
    tag: &str,
) -> Option<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .skip_while(|candidate| candidate.id() != node.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == tag)
}

/// Grandparent element of `element`, if both ancestors are elements.
pub fn grandparent(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .parent()
        .and_then(|parent| parent.parent())
        .and_then(ElementRef::wrap)
}

/// Cell texts of the rows that belong to `table` itself.
///
/// Rows of nested tables are left out. Cells with `colspan="n"` are
/// repeated `n` times so column positions line up with the header.
pub fn table_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    table
        .select(&ROW_SELECTOR)
        .filter(|row| owning_table(*row).map(|t| t.id()) == Some(table.id()))
        .map(row_cells)
        .collect()
}

fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "table")
}

fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| matches!(child.value().name(), "td" | "th"))
    {
        let text = collapse_whitespace(&cell.text().collect::<String>());
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, MAX_COLSPAN);
        for _ in 0..span {
            cells.push(text.clone());
        }
    }
    cells
}
