//! Purchase orders: supplier box, zebra-striped items table, totals.

use site_types::{CompanySettings, PurchaseOrder};

use crate::compose::{Composer, DocumentLayout, HeaderBox, HeaderRow};
use crate::style::{Align, FontStyle};
use crate::table::{
    build_table, section_header_cell, Cell, ColumnWidth, TableDescriptor, TableSpec,
};

use super::{company_box, fmt_date};

const QTY_COLUMN_WIDTH: f32 = 15.0;
const UNITS_COLUMN_WIDTH: f32 = 20.0;
const MONEY_COLUMN_WIDTH: f32 = 25.0;

fn money(amount: f64) -> String {
    format!("£{amount:.2}")
}

fn money_cell(amount: f64) -> Cell {
    Cell::new(money(amount)).with_align(Align::Right)
}

fn supplier_table(record: &PurchaseOrder) -> Option<TableDescriptor> {
    let mut rows = vec![("Name".to_string(), record.supplier_name.clone())];
    if !record.supplier_address.is_empty() {
        rows.push(("Address".to_string(), record.supplier_address.join(", ")));
    }
    build_table(TableSpec::label_value("SUPPLIER", &rows))
}

fn items_table(record: &PurchaseOrder) -> Option<TableDescriptor> {
    let mut spec = TableSpec::new(vec![
        ColumnWidth::Fixed(QTY_COLUMN_WIDTH),
        ColumnWidth::Auto,
        ColumnWidth::Fixed(UNITS_COLUMN_WIDTH),
        ColumnWidth::Fixed(MONEY_COLUMN_WIDTH),
        ColumnWidth::Fixed(MONEY_COLUMN_WIDTH),
    ])
    .with_header(vec![
        section_header_cell("Qty", 1),
        section_header_cell("Description", 1),
        section_header_cell("Units", 1),
        section_header_cell("Unit Price", 1),
        section_header_cell("Total", 1),
    ])
    .with_zebra();
    for item in &record.items {
        spec.push_row(vec![
            Cell::new(format!("{}", item.qty)),
            Cell::new(&item.description),
            Cell::new(&item.units),
            money_cell(item.price),
            money_cell(item.line_total()),
        ]);
    }
    build_table(spec)
}

fn totals_table(record: &PurchaseOrder) -> Option<TableDescriptor> {
    let mut spec = TableSpec::new(vec![
        ColumnWidth::Auto,
        ColumnWidth::Fixed(MONEY_COLUMN_WIDTH),
    ]);
    spec.push_row(vec![Cell::label("Subtotal"), money_cell(record.subtotal())]);
    if record.include_vat {
        spec.push_row(vec![Cell::label("VAT (20%)"), money_cell(record.vat())]);
    }
    spec.push_row(vec![
        Cell::label("Total"),
        money_cell(record.total()).with_font(FontStyle::Bold),
    ]);
    build_table(spec)
}

pub fn compose_purchase_order(
    record: &PurchaseOrder,
    settings: &CompanySettings,
) -> DocumentLayout {
    let mut detail_rows = vec![
        HeaderRow::new("PO Number", &record.po_number),
        HeaderRow::new("Date", fmt_date(record.date)),
    ];
    if let Some(project) = &record.project {
        detail_rows.push(HeaderRow::new("Project", project));
    }

    let header_left = company_box(settings);
    let header_right = HeaderBox::new("Document Details", detail_rows);

    let mut composer = Composer::new(DocumentLayout::content_start(&header_left, &header_right));
    if let Some(table) = supplier_table(record) {
        composer.place_table(table);
    }
    if let Some(table) = items_table(record) {
        composer.place_table(table);
    }
    if let Some(table) = totals_table(record) {
        composer.place_table(table);
    }
    if let Some(notes) = record.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        if let Some(table) = build_table(TableSpec::single_column("NOTES", notes)) {
            composer.place_table(table);
        }
    }

    DocumentLayout {
        title: "Purchase Order".to_string(),
        header_left,
        header_right,
        pages: composer.finish(),
        registration_line: settings.registration_line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use site_types::PurchaseOrderItem;

    fn settings() -> CompanySettings {
        CompanySettings {
            name: "Hartley Groundworks Ltd".into(),
            address_line1: "Unit 4, Mill Lane".into(),
            address_line2: None,
            city: "Leeds".into(),
            postcode: "LS1 4DJ".into(),
            phone: "0113 496 0000".into(),
            email: "office@hartleygroundworks.co.uk".into(),
            company_number: Some("09876543".into()),
            vat_number: Some("GB 123 4567 89".into()),
            logo_url: None,
        }
    }

    fn order(include_vat: bool) -> PurchaseOrder {
        PurchaseOrder {
            po_number: "PO-0042".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            supplier_name: "Brampton Builders Merchants".into(),
            supplier_address: vec!["12 Forge Road".into(), "York".into()],
            project: Some("Mill Lane Phase 2".into()),
            items: vec![
                PurchaseOrderItem {
                    qty: 10.0,
                    description: "25kg postcrete".into(),
                    units: "bag".into(),
                    price: 6.5,
                },
                PurchaseOrderItem {
                    qty: 2.0,
                    description: "Scaffold board 3.9m".into(),
                    units: "each".into(),
                    price: 18.0,
                },
            ],
            include_vat,
            notes: None,
        }
    }

    fn table_header(layout: &DocumentLayout, index: usize) -> String {
        layout.pages[0].tables[index].table.header.as_ref().unwrap().cells[0].lines[0].clone()
    }

    #[test]
    fn test_tables_in_order_supplier_items_totals() {
        let layout = compose_purchase_order(&order(true), &settings());
        assert_eq!(layout.pages[0].tables.len(), 3);
        assert_eq!(table_header(&layout, 0), "SUPPLIER");
        assert_eq!(table_header(&layout, 1), "Qty");
    }

    #[test]
    fn test_money_cells_are_right_aligned_pounds() {
        let layout = compose_purchase_order(&order(false), &settings());
        let items = &layout.pages[0].tables[1].table;
        let line_total = &items.rows[0].cells[4];
        assert_eq!(line_total.lines[0], "£65.00");
        assert_eq!(line_total.style.align, Align::Right);
    }

    #[test]
    fn test_totals_include_vat_row_only_when_requested() {
        let with_vat = compose_purchase_order(&order(true), &settings());
        let without = compose_purchase_order(&order(false), &settings());
        let totals_with = &with_vat.pages[0].tables[2].table;
        let totals_without = &without.pages[0].tables[2].table;
        assert_eq!(totals_with.rows.len(), 3);
        assert_eq!(totals_without.rows.len(), 2);
        assert_eq!(totals_with.rows[1].cells[1].lines[0], "£20.20");
        assert_eq!(totals_with.rows[2].cells[1].lines[0], "£121.20");
    }

    #[test]
    fn test_notes_table_appears_when_notes_present() {
        let mut record = order(false);
        record.notes = Some("Deliver to site gate B before 8am.".into());
        let layout = compose_purchase_order(&record, &settings());
        assert_eq!(layout.pages[0].tables.len(), 4);
        assert_eq!(table_header(&layout, 3), "NOTES");
    }
}
