//! Page composition: lays measured tables onto pages, tracking the cursor
//! and breaking pages when remaining space runs out. Produces a pure layout
//! representation; nothing here touches the PDF backend.

mod cursor;

pub use cursor::PageCursor;

use crate::style::{self, CELL_PADDING, MARGIN, TABLE_GAP};
use crate::table::{MeasuredRow, TableDescriptor, CONTENT_WIDTH};

/// Fixed Y position of the two header boxes on page one.
pub const HEADER_BOX_Y: f32 = 45.0;

/// Gap between the two header boxes.
const HEADER_BOX_GUTTER: f32 = 10.0;

pub const HEADER_BOX_WIDTH: f32 = (CONTENT_WIDTH - HEADER_BOX_GUTTER) / 2.0;

/// A table placed at an absolute Y on some page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTable {
    pub y: f32,
    pub table: TableDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub tables: Vec<PlacedTable>,
}

/// Company Information / Document Details box drawn once on page one. Values
/// may carry a status color (overall checklist status, overdue dates).
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBox {
    pub title: String,
    pub rows: Vec<HeaderRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub label: String,
    pub value: String,
    pub value_color: Option<style::Color>,
}

impl HeaderRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), value_color: None }
    }

    pub fn colored(label: impl Into<String>, value: impl Into<String>, color: style::Color) -> Self {
        Self { label: label.into(), value: value.into(), value_color: Some(color) }
    }
}

impl HeaderBox {
    pub fn new(title: impl Into<String>, rows: Vec<HeaderRow>) -> Self {
        Self { title: title.into(), rows }
    }

    pub fn height(&self) -> f32 {
        let title = style::line_height_mm(style::HEADER_FONT_SIZE) + 2.0 * CELL_PADDING;
        let body = self.rows.len() as f32 * style::line_height_mm(style::BODY_FONT_SIZE);
        title + body + 2.0 * CELL_PADDING
    }
}

/// The fully composed document: everything the drawing pass needs, and the
/// structure the idempotence and pagination tests assert on.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub title: String,
    pub header_left: HeaderBox,
    pub header_right: HeaderBox,
    pub pages: Vec<PageLayout>,
    /// Footer left text; `None` when the company has no registration numbers.
    pub registration_line: Option<String>,
}

impl DocumentLayout {
    /// Y where flowing content starts on page one, below both header boxes.
    pub fn content_start(header_left: &HeaderBox, header_right: &HeaderBox) -> f32 {
        HEADER_BOX_Y + header_left.height().max(header_right.height()) + TABLE_GAP
    }
}

/// Lays tables down a sequence of pages, splitting rows where a table
/// overflows and starting fresh pages for atomic blocks.
pub struct Composer {
    cursor: PageCursor,
    current: PageLayout,
    pages: Vec<PageLayout>,
}

impl Composer {
    pub fn new(start_y: f32) -> Self {
        Self {
            cursor: PageCursor::at(start_y),
            current: PageLayout::default(),
            pages: Vec::new(),
        }
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    fn start_new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.cursor = PageCursor::top();
    }

    /// Place a flowing table, splitting body rows across pages when needed.
    /// The header row repeats on every continuation page.
    pub fn place_table(&mut self, table: TableDescriptor) {
        // Never strand the head alone at the bottom of a page.
        let first_unit = table.head_height()
            + table.rows.first().map(|r| r.height).unwrap_or(0.0);
        if self.cursor.needs_page_break(first_unit) && !self.current.tables.is_empty() {
            self.start_new_page();
        }

        let mut remaining: Vec<MeasuredRow> = table.rows.clone();
        let mut part = table.continuation(Vec::new());
        part.title_band = table.title_band.clone();

        loop {
            let mut taken = Vec::new();
            let mut used = part.head_height();
            while let Some(row) = remaining.first() {
                if self.cursor.needs_page_break(used + row.height) && !taken.is_empty() {
                    break;
                }
                used += row.height;
                taken.push(remaining.remove(0));
            }

            let chunk = TableDescriptor {
                title_band: part.title_band.take(),
                header: part.header.clone(),
                rows: taken,
                col_widths: part.col_widths.clone(),
                font_size: part.font_size,
            };
            let height = chunk.total_height();
            tracing::debug!(y = self.cursor.y(), height, "placing table chunk");
            self.current.tables.push(PlacedTable { y: self.cursor.y(), table: chunk });
            self.cursor = self.cursor.advance(height + TABLE_GAP);

            if remaining.is_empty() {
                break;
            }
            self.start_new_page();
        }
    }

    /// Place an atomic block (hazard grid): break to a fresh page once the
    /// cursor is past the block threshold, then flow as usual.
    pub fn place_block(&mut self, table: TableDescriptor) {
        if self.cursor.past_block_threshold() && !self.current.tables.is_empty() {
            self.start_new_page();
        }
        self.place_table(table);
    }

    pub fn finish(mut self) -> Vec<PageLayout> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Footer text for page `index` (zero-based) of `total`.
pub fn page_number_text(index: usize, total: usize) -> String {
    format!("Page {} of {}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{build_table, Cell, ColumnWidth, TableSpec};
    use pretty_assertions::assert_eq;

    fn table_with_rows(n: usize) -> TableDescriptor {
        let mut spec = TableSpec::new(vec![ColumnWidth::Auto]);
        for i in 0..n {
            spec.push_row(vec![Cell::new(format!("row {i}"))]);
        }
        build_table(spec).unwrap()
    }

    #[test]
    fn test_single_table_stays_on_one_page() {
        let mut composer = Composer::new(MARGIN);
        composer.place_table(table_with_rows(3));
        let pages = composer.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].tables.len(), 1);
        assert_eq!(pages[0].tables[0].y, MARGIN);
    }

    #[test]
    fn test_cursor_advances_by_height_plus_gap() {
        let table = table_with_rows(2);
        let height = table.total_height();
        let mut composer = Composer::new(MARGIN);
        composer.place_table(table);
        assert_eq!(composer.cursor().y(), MARGIN + height + TABLE_GAP);
    }

    #[test]
    fn test_long_table_splits_across_pages() {
        let mut composer = Composer::new(MARGIN);
        composer.place_table(table_with_rows(80));
        let pages = composer.finish();
        assert!(pages.len() >= 2, "expected a page break, got {} pages", pages.len());
        // Every chunk starts at the top margin except the first.
        for page in &pages[1..] {
            assert_eq!(page.tables[0].y, MARGIN);
        }
    }

    #[test]
    fn test_block_breaks_page_past_threshold() {
        use crate::style::{BLOCK_BREAK_MARGIN, PAGE_HEIGHT};

        let mut composer = Composer::new(MARGIN);
        let mut filler = table_with_rows(1);
        // Grow the filler until the cursor would land past the block
        // threshold while plenty of flowing space is still left.
        let mut rows = 1;
        while MARGIN + filler.total_height() + TABLE_GAP <= PAGE_HEIGHT - BLOCK_BREAK_MARGIN {
            rows += 1;
            filler = table_with_rows(rows);
        }
        composer.place_table(filler);
        assert!(composer.cursor().past_block_threshold());

        composer.place_block(table_with_rows(3));
        let pages = composer.finish();
        assert_eq!(pages.len(), 2);
        // The block landed alone at the top of the new page.
        assert_eq!(pages.last().unwrap().tables[0].y, MARGIN);
    }

    #[test]
    fn test_page_number_text() {
        assert_eq!(page_number_text(0, 3), "Page 1 of 3");
        assert_eq!(page_number_text(2, 3), "Page 3 of 3");
    }
}
