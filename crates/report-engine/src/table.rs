//! Table building: turns formatted section content into measured, drawable
//! table descriptors. Measurement happens here so the composer can make page
//! break decisions from heights alone and the drawing layer stays dumb.

use crate::style::{
    self, Align, Color, FontStyle, CELL_PADDING, MARGIN, PAGE_WIDTH,
};

/// Usable width between page margins.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Default fixed width of the label column in label/value tables.
pub const LABEL_COLUMN_WIDTH: f32 = 55.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Auto,
    Fixed(f32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub fill: Option<Color>,
    pub text_color: Option<Color>,
    pub font: FontStyle,
    pub align: Align,
    /// Number of columns this cell spans (0 is treated as 1).
    pub col_span: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: CellStyle::default() }
    }

    /// Left column of a label/value table: bold on a light-gray fill.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CellStyle {
                fill: Some(style::LABEL_FILL),
                font: FontStyle::Bold,
                ..CellStyle::default()
            },
        }
    }

    /// Status cell colored by pass/fail.
    pub fn status(text: impl Into<String>, passed: bool) -> Self {
        Self {
            text: text.into(),
            style: CellStyle {
                text_color: Some(if passed { style::PASS_GREEN } else { style::FAIL_RED }),
                font: FontStyle::Bold,
                ..CellStyle::default()
            },
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.style.fill = Some(fill);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.style.text_color = Some(color);
        self
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.style.font = font;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.style.align = align;
        self
    }

    pub fn spanning(mut self, cols: usize) -> Self {
        self.style.col_span = cols;
        self
    }
}

/// Colored band drawn above the header row (hazard grids use this).
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBand {
    pub text: String,
    pub fill: Color,
}

/// Input to `build_table`: unmeasured rows plus column hints.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub title_band: Option<TitleBand>,
    pub header: Option<Vec<Cell>>,
    pub rows: Vec<Vec<Cell>>,
    pub columns: Vec<ColumnWidth>,
    pub zebra: bool,
    pub font_size: f32,
}

impl TableSpec {
    pub fn new(columns: Vec<ColumnWidth>) -> Self {
        Self {
            title_band: None,
            header: None,
            rows: Vec::new(),
            columns,
            zebra: false,
            font_size: style::BODY_FONT_SIZE,
        }
    }

    /// Two-column label/value table from formatted rows, with a section title
    /// as the header band across both columns.
    pub fn label_value(title: &str, rows: &[(String, String)]) -> Self {
        let mut spec = Self::new(vec![
            ColumnWidth::Fixed(LABEL_COLUMN_WIDTH),
            ColumnWidth::Auto,
        ]);
        spec.header = Some(vec![section_header_cell(title, 2)]);
        for (label, value) in rows {
            spec.rows.push(vec![Cell::label(label.clone()), Cell::new(value.clone())]);
        }
        spec
    }

    /// Single-column table holding one formatted text blob under a header.
    pub fn single_column(title: &str, body: &str) -> Self {
        let mut spec = Self::new(vec![ColumnWidth::Auto]);
        spec.header = Some(vec![section_header_cell(title, 1)]);
        spec.rows.push(vec![Cell::new(body)]);
        spec
    }

    pub fn with_title_band(mut self, text: impl Into<String>, fill: Color) -> Self {
        self.title_band = Some(TitleBand { text: text.into(), fill });
        self
    }

    pub fn with_header(mut self, header: Vec<Cell>) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_zebra(mut self) -> Self {
        self.zebra = true;
        self
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }
}

/// Header cell spanning a whole table: white bold text on the dark fill.
pub fn section_header_cell(text: &str, span: usize) -> Cell {
    Cell::new(text)
        .with_fill(style::HEADER_FILL)
        .with_text_color(style::WHITE)
        .with_font(FontStyle::Bold)
        .spanning(span)
}

/// A cell measured and positioned within its row.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredCell {
    pub lines: Vec<String>,
    pub style: CellStyle,
    pub x_offset: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRow {
    pub cells: Vec<MeasuredCell>,
    pub height: f32,
}

/// Fully measured table ready for placement and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescriptor {
    pub title_band: Option<TitleBand>,
    pub header: Option<MeasuredRow>,
    pub rows: Vec<MeasuredRow>,
    pub col_widths: Vec<f32>,
    pub font_size: f32,
}

impl TableDescriptor {
    /// Height of the non-repeating parts (title band plus header row).
    pub fn head_height(&self) -> f32 {
        let band = self
            .title_band
            .as_ref()
            .map(|_| style::line_height_mm(style::HEADER_FONT_SIZE) + 2.0 * CELL_PADDING)
            .unwrap_or(0.0);
        band + self.header.as_ref().map(|h| h.height).unwrap_or(0.0)
    }

    pub fn body_height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).sum()
    }

    pub fn total_height(&self) -> f32 {
        self.head_height() + self.body_height()
    }

    /// Clone the head (band + header) with a different row set; the composer
    /// uses this to continue a split table on the next page.
    pub fn continuation(&self, rows: Vec<MeasuredRow>) -> TableDescriptor {
        TableDescriptor {
            title_band: None,
            header: self.header.clone(),
            rows,
            col_widths: self.col_widths.clone(),
            font_size: self.font_size,
        }
    }
}

/// Measure a table spec. Returns `None` for zero body rows: empty tables are
/// never emitted, the caller skips the section instead.
pub fn build_table(spec: TableSpec) -> Option<TableDescriptor> {
    if spec.rows.is_empty() {
        return None;
    }

    let col_widths = resolve_columns(&spec.columns);
    let header = spec
        .header
        .as_ref()
        .map(|cells| measure_row(cells, &col_widths, style::HEADER_FONT_SIZE));

    let mut rows = Vec::with_capacity(spec.rows.len());
    for (index, cells) in spec.rows.iter().enumerate() {
        let mut row = measure_row(cells, &col_widths, spec.font_size);
        if spec.zebra && index % 2 == 1 {
            for cell in &mut row.cells {
                if cell.style.fill.is_none() {
                    cell.style.fill = Some(style::ZEBRA_FILL);
                }
            }
        }
        rows.push(row);
    }

    Some(TableDescriptor {
        title_band: spec.title_band,
        header,
        rows,
        col_widths,
        font_size: spec.font_size,
    })
}

/// Fixed columns keep their width; the remainder is split evenly across the
/// auto columns.
fn resolve_columns(columns: &[ColumnWidth]) -> Vec<f32> {
    let fixed_total: f32 = columns
        .iter()
        .map(|c| match c {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Auto => 0.0,
        })
        .sum();
    let auto_count = columns
        .iter()
        .filter(|c| matches!(c, ColumnWidth::Auto))
        .count();
    let auto_width = if auto_count > 0 {
        ((CONTENT_WIDTH - fixed_total) / auto_count as f32).max(10.0)
    } else {
        0.0
    };

    columns
        .iter()
        .map(|c| match c {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Auto => auto_width,
        })
        .collect()
}

fn measure_row(cells: &[Cell], col_widths: &[f32], font_size: f32) -> MeasuredRow {
    let mut measured = Vec::with_capacity(cells.len());
    let mut col = 0usize;
    let mut x_offset = 0.0f32;
    let mut max_lines = 1usize;

    for cell in cells {
        let span = cell.style.col_span.max(1).min(col_widths.len().saturating_sub(col).max(1));
        let width: f32 = col_widths[col..(col + span).min(col_widths.len())].iter().sum();
        let lines = style::wrap_text(&cell.text, (width - 2.0 * CELL_PADDING).max(1.0), font_size);
        max_lines = max_lines.max(lines.len());
        measured.push(MeasuredCell {
            lines,
            style: cell.style.clone(),
            x_offset,
            width,
        });
        x_offset += width;
        col += span;
    }

    let height = max_lines as f32 * style::line_height_mm(font_size) + 2.0 * CELL_PADDING;
    MeasuredRow { cells: measured, height }
}
