//! Property maintenance breakdown workbook.

use invoice_store::aggregate;
use invoice_store::StoreSnapshot;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::error::Result;
use crate::format::short_date;

const PROPERTY_HEADERS: [&str; 6] = [
    "Property",
    "Address",
    "Units",
    "Total Spend",
    "Invoice Count",
    "Avg per Unit",
];

const INVOICE_HEADERS: [&str; 9] = [
    "Invoice #",
    "Date",
    "Vendor",
    "Property",
    "Amount",
    "Status",
    "Trust Score",
    "Savings Potential",
    "Flags",
];

/// Two sheets: per-property totals and one row per invoice.
pub fn render(snapshot: &StoreSnapshot) -> Result<Vec<u8>> {
    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xE0E0E0));

    let mut workbook = Workbook::new();
    workbook.push_worksheet(property_sheet(snapshot, &header)?);
    workbook.push_worksheet(invoice_sheet(snapshot, &header)?);

    Ok(workbook.save_to_buffer()?)
}

fn property_sheet(snapshot: &StoreSnapshot, header: &Format) -> Result<Worksheet> {
    let per_unit = Format::new().set_num_format("0.00");

    let mut sheet = Worksheet::new();
    sheet.set_name("Property Breakdown")?;
    write_headers(&mut sheet, &PROPERTY_HEADERS, header)?;

    for (row, metric) in aggregate::property_metrics(snapshot).iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, &metric.property.name)?;
        sheet.write_string(row, 1, &metric.property.address)?;
        sheet.write_number(row, 2, metric.property.units)?;
        sheet.write_number(row, 3, metric.total_spend)?;
        sheet.write_number(row, 4, metric.invoice_count as f64)?;
        sheet.write_number_with_format(row, 5, metric.avg_per_unit, &per_unit)?;
    }

    for col in 0..PROPERTY_HEADERS.len() as u16 {
        sheet.set_column_width(col, if col == 1 { 40 } else { 15 })?;
    }

    Ok(sheet)
}

fn invoice_sheet(snapshot: &StoreSnapshot, header: &Format) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name("Detailed Invoices")?;
    write_headers(&mut sheet, &INVOICE_HEADERS, header)?;

    for (row, invoice) in snapshot.invoices.iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, &invoice.invoice_number)?;
        sheet.write_string(row, 1, short_date(&invoice.date))?;
        sheet.write_string(row, 2, snapshot.vendor_name(&invoice.vendor_id))?;
        sheet.write_string(row, 3, snapshot.property_name(&invoice.property_id))?;
        sheet.write_number(row, 4, invoice.total_amount)?;
        sheet.write_string(row, 5, invoice.status.as_str())?;
        sheet.write_number(row, 6, invoice.trust_score())?;
        sheet.write_number(row, 7, invoice.savings_potential())?;
        sheet.write_string(row, 8, invoice.flags().join("; "))?;
    }

    for col in 0..INVOICE_HEADERS.len() as u16 {
        sheet.set_column_width(col, if col == 2 || col == 3 { 25 } else { 15 })?;
    }

    Ok(sheet)
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<()> {
    for (col, title) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, format)?;
    }
    Ok(())
}
