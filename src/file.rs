// src/file.rs

use std::{fs, path::Path};

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};

use crate::config::consts::{
    COLUMN_PAD, HEADER_FILL, HEADER_FONT_SIZE, MAX_CELL_CHARS, MAX_COLUMN_WIDTH,
};
use crate::data::{Cell, DataSet};
use crate::error::FetchError;

/// One named sheet of the output workbook.
pub struct Sheet {
    pub name: &'static str,
    pub data: DataSet,
}

impl Sheet {
    pub fn new(name: &'static str, data: DataSet) -> Self {
        Self { name, data }
    }
}

/// Write every sheet, in order, into a single workbook at `path`.
/// Parent directories are created as needed.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<(), FetchError> {
    logd!("Writing {} sheets to {}", sheets.len(), path.display());

    ensure_parent(path)?;

    let header = header_format();
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(sheet.name)?;
        write_sheet(ws, &sheet.data, &header)?;
        logd!("{}: {} rows", sheet.name, sheet.data.len());
    }
    workbook.save(path)?;

    Ok(())
}

/// Solid teal fill, bold white 11pt text, centered both ways.
pub fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(HEADER_FONT_SIZE)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Widest rendered value plus padding, capped.
pub fn column_width(max_len: usize) -> usize {
    (max_len + COLUMN_PAD).min(MAX_COLUMN_WIDTH)
}

fn write_sheet(ws: &mut Worksheet, ds: &DataSet, header: &Format) -> Result<(), XlsxError> {
    if ds.is_empty() {
        logd!("No rows; writing header only");
    }
    for (c, name) in ds.headers.iter().enumerate() {
        ws.write_string_with_format(0, c as u16, name, header)?;
    }

    for (r, row) in ds.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Empty => {}
                Cell::Int(v) => { ws.write_number(r, c, *v as f64)?; }
                Cell::Float(v) => { ws.write_number(r, c, *v)?; }
                Cell::Text(s) => { ws.write_string(r, c, fit_cell(s))?; }
            }
        }
    }

    for (c, w) in ds.column_widths().into_iter().enumerate() {
        ws.set_column_width(c as u16, column_width(w) as f64)?;
    }

    Ok(())
}

/// Excel rejects longer strings; cut at a char boundary instead of failing the export.
fn fit_cell(s: &str) -> &str {
    match s.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            logw!("Truncating a {}-char cell to {MAX_CELL_CHARS}", s.chars().count());
            &s[..cut]
        }
        None => s,
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
