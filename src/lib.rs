//! # reportpdf
//!
//! reportpdf writes the downloadable finance report as a PDF file, byte by
//! byte. There is no PDF library involved at runtime: the page contents,
//! the object graph and the cross-reference table are all produced here.
//!
//! The report has a fixed A4 layout: a header with the scope and period of
//! the report, an optional summary block on the first page, a five column
//! transaction table split over as many pages as needed and a footer with
//! the page counter. Text is reduced to printable ASCII so that the two
//! standard Helvetica fonts can render it without embedding anything.
//!
//! ```rust
//! use reportpdf::{build_report, PrintableRow, ReportOptions, StatsBlock};
//!
//! let rows = vec![
//!     PrintableRow::new("01/06/2026", "Salary", "R$ 5.000,00", "Income", "June salary"),
//!     PrintableRow::new("03/06/2026", "Groceries", "R$ 412,35", "Expense", "Supermarket"),
//! ];
//! let options = ReportOptions::new("Personal", "June 2026")
//!     .with_user_name("Ana")
//!     .with_stats(StatsBlock {
//!         real_expenses: "R$ 412,35".into(),
//!         future_expenses: "R$ 1.200,00".into(),
//!         difference: "R$ 3.387,65".into(),
//!     });
//!
//! let pdf = build_report(&rows, &options).unwrap();
//! assert!(pdf.starts_with(b"%PDF-1.4"));
//! ```
//!
//! Rows and options can also arrive as JSON, see [`build_report_from_json`].

pub mod color;
pub mod date;
pub mod document;
pub mod errors;
pub mod font;
pub mod layout;
pub mod model;
pub mod ops;
pub mod paginate;
pub mod report;
pub mod serialize;
pub mod text;
pub mod units;
pub mod xref;

pub use crate::{
    color::{Color, Greyscale, Rgb},
    document::{assemble, PdfDocument, PdfObject},
    errors::ReportError,
    font::BuiltinFont,
    layout::{build_page, build_page_stream, ROWS_PER_PAGE},
    model::{PrintableRow, ProjectionsBlock, ReportOptions, ReportRequest, StatsBlock},
    ops::{encode_ops, Op, PaintMode},
    paginate::{page_count, paginate},
    report::{build_report, build_report_from_json, report_file_name},
    serialize::serialize,
    text::{escape, sanitize, truncate},
    units::{Point, Pt, Rect},
    xref::{read_xref, verify_xref, XrefEntry},
};
