//! The printpdf drawing pass. Consumes the pure `DocumentLayout` produced by
//! the composer and paints it page by page; all measurement decisions were
//! made upstream, so this module only translates coordinates and styles.

use std::io::{BufWriter, Cursor};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, ImageTransform, ImageXObject, IndirectFontRef, Line, Mm,
    PdfDocument, PdfLayerReference, Point, Px,
};

use crate::assets::EmbeddedLogo;
use crate::compose::{
    page_number_text, DocumentLayout, HeaderBox, PlacedTable, HEADER_BOX_WIDTH, HEADER_BOX_Y,
};
use crate::error::RenderError;
use crate::style::{
    self, Align, Color, FontStyle, CELL_PADDING, FOOTER_FONT_SIZE, FOOTER_Y, HEADER_FONT_SIZE,
    MARGIN, PAGE_HEIGHT, PAGE_WIDTH, PT_TO_MM, TITLE_FONT_SIZE,
};
use crate::table::TableDescriptor;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    bold_italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: FontStyle) -> &IndirectFontRef {
        match font {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
            FontStyle::BoldItalic => &self.bold_italic,
        }
    }
}

/// Flip a top-origin layout Y to PDF bottom-origin coordinates.
fn pdf_y(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(color.0, color.1, color.2, None))
}

/// Paint the layout and return the serialized PDF bytes.
pub fn draw_document(
    layout: &DocumentLayout,
    logo: Option<&EmbeddedLogo>,
) -> Result<Vec<u8>, RenderError> {
    if layout.pages.is_empty() {
        return Err(RenderError::EmptyDocument);
    }

    let (doc, page1, layer1) =
        PdfDocument::new(&layout.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let fonts = Fonts {
        regular: builtin(&doc, BuiltinFont::Helvetica)?,
        bold: builtin(&doc, BuiltinFont::HelveticaBold)?,
        italic: builtin(&doc, BuiltinFont::HelveticaOblique)?,
        bold_italic: builtin(&doc, BuiltinFont::HelveticaBoldOblique)?,
    };

    let total = layout.pages.len();
    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (p, l) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(p).get_layer(l)
        };

        if index == 0 {
            if let Some(logo) = logo {
                draw_logo(&layer, logo);
            }
            draw_title(&layer, &fonts, &layout.title);
            draw_header_box(&layer, &fonts, &layout.header_left, MARGIN);
            draw_header_box(
                &layer,
                &fonts,
                &layout.header_right,
                PAGE_WIDTH - MARGIN - HEADER_BOX_WIDTH,
            );
        }

        for placed in &page.tables {
            draw_table(&layer, &fonts, placed);
        }

        draw_footer(&layer, &fonts, layout.registration_line.as_deref(), index, total);
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(Cursor::new(&mut bytes)))
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}

fn builtin(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font)
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

fn draw_logo(layer: &PdfLayerReference, logo: &EmbeddedLogo) {
    let image = printpdf::Image::from(ImageXObject {
        width: Px(logo.width_px as usize),
        height: Px(logo.height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: logo.rgb.clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // At 72 dpi one pixel is one point, so the natural size in mm is
    // px * PT_TO_MM; scale from there to the fitted box.
    let natural_w = logo.width_px as f32 * PT_TO_MM;
    let natural_h = logo.height_px as f32 * PT_TO_MM;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN)),
            translate_y: Some(pdf_y(MARGIN + logo.height_mm)),
            scale_x: Some(logo.width_mm / natural_w),
            scale_y: Some(logo.height_mm / natural_h),
            dpi: Some(72.0),
            ..Default::default()
        },
    );
}

fn draw_title(layer: &PdfLayerReference, fonts: &Fonts, title: &str) {
    let width = style::text_width_mm(title, TITLE_FONT_SIZE);
    let x = (PAGE_WIDTH - width) / 2.0;
    layer.set_fill_color(pdf_color(style::TEXT_GRAY));
    layer.use_text(title, TITLE_FONT_SIZE, Mm(x), pdf_y(28.0), &fonts.bold);
}

fn draw_header_box(layer: &PdfLayerReference, fonts: &Fonts, header: &HeaderBox, x: f32) {
    let height = header.height();
    let title_h = style::line_height_mm(HEADER_FONT_SIZE) + 2.0 * CELL_PADDING;

    fill_rect(layer, x, HEADER_BOX_Y, HEADER_BOX_WIDTH, title_h, style::HEADER_FILL);
    stroke_rect(layer, x, HEADER_BOX_Y, HEADER_BOX_WIDTH, height, style::BORDER_GRAY);

    layer.set_fill_color(pdf_color(style::WHITE));
    layer.use_text(
        &header.title,
        HEADER_FONT_SIZE,
        Mm(x + CELL_PADDING),
        pdf_y(HEADER_BOX_Y + title_h - CELL_PADDING),
        &fonts.bold,
    );

    let line_h = style::line_height_mm(style::BODY_FONT_SIZE);
    let label_width = 32.0;
    let mut baseline = HEADER_BOX_Y + title_h + CELL_PADDING + line_h * 0.8;
    for row in &header.rows {
        layer.set_fill_color(pdf_color(style::TEXT_GRAY));
        layer.use_text(
            &row.label,
            style::BODY_FONT_SIZE,
            Mm(x + CELL_PADDING),
            pdf_y(baseline),
            &fonts.bold,
        );
        layer.set_fill_color(pdf_color(row.value_color.unwrap_or(style::TEXT_GRAY)));
        layer.use_text(
            &row.value,
            style::BODY_FONT_SIZE,
            Mm(x + CELL_PADDING + label_width),
            pdf_y(baseline),
            &fonts.regular,
        );
        baseline += line_h;
    }
}

fn draw_table(layer: &PdfLayerReference, fonts: &Fonts, placed: &PlacedTable) {
    let table = &placed.table;
    let mut y = placed.y;

    if let Some(band) = &table.title_band {
        let band_h = style::line_height_mm(HEADER_FONT_SIZE) + 2.0 * CELL_PADDING;
        fill_rect(layer, MARGIN, y, row_width(table), band_h, band.fill);
        stroke_rect(layer, MARGIN, y, row_width(table), band_h, style::BORDER_GRAY);
        layer.set_fill_color(pdf_color(style::TEXT_GRAY));
        layer.use_text(
            &band.text,
            HEADER_FONT_SIZE,
            Mm(MARGIN + CELL_PADDING),
            pdf_y(y + band_h - CELL_PADDING),
            &fonts.bold,
        );
        y += band_h;
    }

    if let Some(header) = &table.header {
        draw_row(layer, fonts, header, y, HEADER_FONT_SIZE);
        y += header.height;
    }

    for row in &table.rows {
        draw_row(layer, fonts, row, y, table.font_size);
        y += row.height;
    }
}

fn row_width(table: &TableDescriptor) -> f32 {
    table.col_widths.iter().sum()
}

fn draw_row(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    row: &crate::table::MeasuredRow,
    y: f32,
    font_size: f32,
) {
    let line_h = style::line_height_mm(font_size);

    for cell in &row.cells {
        let x = MARGIN + cell.x_offset;
        if let Some(fill) = cell.style.fill {
            fill_rect(layer, x, y, cell.width, row.height, fill);
        }
        stroke_rect(layer, x, y, cell.width, row.height, style::BORDER_GRAY);

        layer.set_fill_color(pdf_color(cell.style.text_color.unwrap_or(style::TEXT_GRAY)));
        let font = fonts.get(cell.style.font);
        for (i, line) in cell.lines.iter().enumerate() {
            let text_w = style::text_width_mm(line, font_size);
            let text_x = match cell.style.align {
                Align::Left => x + CELL_PADDING,
                Align::Center => x + (cell.width - text_w) / 2.0,
                Align::Right => x + cell.width - CELL_PADDING - text_w,
            };
            let baseline = y + CELL_PADDING + (i as f32 + 0.8) * line_h;
            layer.use_text(line, font_size, Mm(text_x), pdf_y(baseline), font);
        }
    }
}

fn draw_footer(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    registration: Option<&str>,
    index: usize,
    total: usize,
) {
    let page_text = page_number_text(index, total);
    let page_w = style::text_width_mm(&page_text, FOOTER_FONT_SIZE);
    let page_x = PAGE_WIDTH - MARGIN - page_w;

    layer.set_fill_color(pdf_color(style::TEXT_GRAY));
    if let Some(reg) = registration {
        // The two pieces share one line; keep the left text clear of the
        // right-aligned page number.
        let available = page_x - MARGIN - 5.0;
        let reg = truncate_to_width(reg, available, FOOTER_FONT_SIZE);
        layer.use_text(&reg, FOOTER_FONT_SIZE, Mm(MARGIN), pdf_y(FOOTER_Y), &fonts.regular);
    }
    layer.use_text(&page_text, FOOTER_FONT_SIZE, Mm(page_x), pdf_y(FOOTER_Y), &fonts.regular);
}

fn truncate_to_width(text: &str, max_width: f32, font_size: f32) -> String {
    if style::text_width_mm(text, font_size) <= max_width {
        return text.to_string();
    }
    let budget = (max_width / style::char_width_mm(font_size)).floor().max(1.0) as usize;
    let mut out: String = text.chars().take(budget.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Color) {
    layer.set_fill_color(pdf_color(color));
    let polygon = printpdf::Polygon {
        rings: vec![rect_points(x, y, w, h)],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };
    layer.add_polygon(polygon);
}

fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Color) {
    layer.set_outline_color(pdf_color(color));
    layer.set_outline_thickness(0.5);
    let line = Line {
        points: rect_points(x, y, w, h),
        is_closed: true,
    };
    layer.add_line(line);
}

fn rect_points(x: f32, y: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
    vec![
        (Point::new(Mm(x), pdf_y(y)), false),
        (Point::new(Mm(x + w), pdf_y(y)), false),
        (Point::new(Mm(x + w), pdf_y(y + h)), false),
        (Point::new(Mm(x), pdf_y(y + h)), false),
    ]
}
