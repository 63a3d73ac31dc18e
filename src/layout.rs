//! Fixed layout of a report page.
//!
//! Coordinates are in points with the origin at the bottom left corner of an
//! A4 page. Nothing wraps: every string is cut to the character budget of the
//! place it is drawn at, which is what keeps text inside its column.

use crate::{
    color::{Color, Greyscale, Rgb},
    date::{now, to_report_timestamp},
    font::BuiltinFont,
    model::{PrintableRow, ReportOptions},
    ops::{encode_ops, Op, PaintMode},
    text::{sanitize, truncate},
    units::{Point, Pt, Rect},
};

/// ISO A4 width
pub const PAGE_WIDTH: f32 = 595.28;
/// ISO A4 height
pub const PAGE_HEIGHT: f32 = 841.89;
/// Table rows that fit on one page, including the first page with a full summary block
pub const ROWS_PER_PAGE: usize = 30;

pub const BRAND_TITLE: &str = "Finora";
pub const BRAND_SUBTITLE: &str = "Premium financial report";
pub const FOOTER_LABEL: &str = "Finora Premium";
pub const EMPTY_TABLE_MESSAGE: &str = "No transactions for this period.";

/// Baseline of the brand title
const TOP: f32 = PAGE_HEIGHT - 56.0;
/// Left edge of all header and summary text
const TEXT_LEFT: f32 = 60.0;
/// The table frame spans 55..585, slightly wider than the outermost columns
const FRAME_LEFT: f32 = 55.0;
const FRAME_WIDTH: f32 = 530.0;
const HEADER_BOTTOM: f32 = TOP - 98.0;
const HEADER_TEXT_BUDGET: usize = 90;

const SUMMARY_COLUMNS: usize = 3;
const SUMMARY_ROW_HEIGHT: f32 = 32.0;
const SUMMARY_PADDING: f32 = 8.0;
const SUMMARY_VALUE_BUDGET: usize = 26;

const TABLE_HEADER_HEIGHT: f32 = 18.0;
const ROW_STEP: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 8.0;

const FOOTER_RULE_Y: f32 = 62.0;
const FOOTER_TEXT_Y: f32 = 48.0;
const FOOTER_FONT_SIZE: f32 = 8.0;

const BRAND_COLOR: Color = Color::Rgb(Rgb::new(0.11, 0.3, 0.55));
const TEXT_COLOR: Color = Color::Greyscale(Greyscale::new(0.1));
const MUTED_TEXT_COLOR: Color = Color::Greyscale(Greyscale::new(0.4));
const RULE_COLOR: Color = Color::Greyscale(Greyscale::new(0.6));
const SUMMARY_BACKGROUND: Color = Color::Rgb(Rgb::new(0.93, 0.95, 0.98));
const TABLE_HEADER_BACKGROUND: Color = Color::Greyscale(Greyscale::new(0.9));
const ZEBRA_BACKGROUND: Color = Color::Greyscale(Greyscale::new(0.97));

/// One column of the transaction table
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Column {
    pub title: &'static str,
    pub x: f32,
    pub width: f32,
    /// Cell text is truncated to this many characters
    pub max_chars: usize,
}

pub const COLUMNS: [Column; 5] = [
    Column { title: "Date", x: 60.0, width: 60.0, max_chars: 12 },
    Column { title: "Category", x: 130.0, width: 120.0, max_chars: 28 },
    Column { title: "Amount", x: 270.0, width: 70.0, max_chars: 18 },
    Column { title: "Type", x: 360.0, width: 60.0, max_chars: 12 },
    Column { title: "Description", x: 430.0, width: 150.0, max_chars: 42 },
];

fn cells(row: &PrintableRow) -> [&str; 5] {
    [
        row.date.as_str(),
        row.category.as_str(),
        row.amount.as_str(),
        row.kind.as_str(),
        row.description.as_str(),
    ]
}

/// Builds the drawing commands of one page.
///
/// `page_index` is 1-based. The summary block is only drawn on page 1, and
/// only if the options carry stats and/or projections.
pub fn build_page(
    chunk: &[PrintableRow],
    options: &ReportOptions,
    page_index: usize,
    total_pages: usize,
) -> Vec<Op> {
    let mut ops = Vec::new();

    add_header(&mut ops, options);

    let mut table_top = HEADER_BOTTOM - 12.0;
    if page_index == 1 {
        let items = options.summary_items();
        if !items.is_empty() {
            let summary_bottom = add_summary(&mut ops, &items, HEADER_BOTTOM - 12.0);
            table_top = summary_bottom - 16.0;
        }
    }

    add_table_header(&mut ops, table_top);
    if chunk.is_empty() {
        add_empty_message(&mut ops, table_top);
    } else {
        add_table_body(&mut ops, chunk, table_top);
    }

    add_footer(&mut ops, page_index, total_pages);

    ops
}

/// `build_page`, encoded into content stream bytes
pub fn build_page_stream(
    chunk: &[PrintableRow],
    options: &ReportOptions,
    page_index: usize,
    total_pages: usize,
) -> Vec<u8> {
    encode_ops(&build_page(chunk, options, page_index, total_pages))
}

fn text(font: BuiltinFont, size: f32, x: f32, y: f32, text: String) -> Op {
    Op::WriteText {
        font,
        size: Pt(size),
        pos: Point::new(x, y),
        text,
    }
}

fn rule(ops: &mut Vec<Op>, y: f32, thickness: f32, col: Color) {
    ops.push(Op::SetOutlineColor { col });
    ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    ops.push(Op::DrawLine {
        from: Point::new(FRAME_LEFT, y),
        to: Point::new(FRAME_LEFT + FRAME_WIDTH, y),
    });
}

/// Approximate rendered width, good enough to align short ASCII labels
fn approx_width(text: &str, font: BuiltinFont, size: f32) -> f32 {
    text.len() as f32 * size * font.average_char_width()
}

fn add_header(ops: &mut Vec<Op>, options: &ReportOptions) {
    use BuiltinFont::*;

    let generated_at = options.generated_at.unwrap_or_else(now);

    ops.push(Op::SetFillColor { col: BRAND_COLOR });
    ops.push(text(HelveticaBold, 20.0, TEXT_LEFT, TOP, BRAND_TITLE.to_string()));
    ops.push(Op::SetFillColor { col: MUTED_TEXT_COLOR });
    ops.push(text(Helvetica, 11.0, TEXT_LEFT, TOP - 20.0, BRAND_SUBTITLE.to_string()));

    ops.push(Op::SetFillColor { col: TEXT_COLOR });
    let scope = format!("Scope: {}", sanitize(&options.scope_label));
    ops.push(text(Helvetica, 10.0, TEXT_LEFT, TOP - 44.0, truncate(&scope, HEADER_TEXT_BUDGET)));
    let period = format!("Period: {}", sanitize(&options.period_label));
    ops.push(text(Helvetica, 10.0, TEXT_LEFT, TOP - 58.0, truncate(&period, HEADER_TEXT_BUDGET)));
    let user_name = options.user_name.as_deref().map(sanitize);
    if let Some(user_name) = user_name.filter(|name| !name.trim().is_empty()) {
        let user = format!("User: {}", user_name.trim());
        ops.push(text(Helvetica, 10.0, TEXT_LEFT, TOP - 72.0, truncate(&user, HEADER_TEXT_BUDGET)));
    }
    ops.push(Op::SetFillColor { col: MUTED_TEXT_COLOR });
    let stamp = format!("Generated at: {}", to_report_timestamp(&generated_at));
    ops.push(text(Helvetica, 8.0, TEXT_LEFT, TOP - 86.0, stamp));

    rule(ops, HEADER_BOTTOM, 1.5, BRAND_COLOR);
}

/// Draws the summary grid below `top` and returns the y of its bottom edge
fn add_summary(ops: &mut Vec<Op>, items: &[(&str, &str)], top: f32) -> f32 {
    let rows = items.len().div_ceil(SUMMARY_COLUMNS);
    let height = rows as f32 * SUMMARY_ROW_HEIGHT + 2.0 * SUMMARY_PADDING;
    let bottom = top - height;
    let column_width = FRAME_WIDTH / SUMMARY_COLUMNS as f32;

    ops.push(Op::SaveGraphicsState);
    ops.push(Op::SetFillColor { col: SUMMARY_BACKGROUND });
    ops.push(Op::DrawRectangle {
        rect: Rect::new(FRAME_LEFT, bottom, FRAME_WIDTH, height),
        mode: PaintMode::Fill,
    });
    ops.push(Op::RestoreGraphicsState);

    for (i, (label, value)) in items.iter().enumerate() {
        let x = FRAME_LEFT + 10.0 + (i % SUMMARY_COLUMNS) as f32 * column_width;
        let label_y = top - SUMMARY_PADDING - 11.0 - (i / SUMMARY_COLUMNS) as f32 * SUMMARY_ROW_HEIGHT;
        ops.push(Op::SetFillColor { col: MUTED_TEXT_COLOR });
        ops.push(text(BuiltinFont::Helvetica, 8.0, x, label_y, label.to_string()));
        ops.push(Op::SetFillColor { col: TEXT_COLOR });
        ops.push(text(
            BuiltinFont::HelveticaBold,
            11.0,
            x,
            label_y - 13.0,
            truncate(value, SUMMARY_VALUE_BUDGET),
        ));
    }

    bottom
}

fn add_table_header(ops: &mut Vec<Op>, top: f32) {
    ops.push(Op::SaveGraphicsState);
    ops.push(Op::SetFillColor { col: TABLE_HEADER_BACKGROUND });
    ops.push(Op::SetOutlineColor { col: RULE_COLOR });
    ops.push(Op::SetOutlineThickness { pt: Pt(0.5) });
    ops.push(Op::DrawRectangle {
        rect: Rect::new(FRAME_LEFT, top - TABLE_HEADER_HEIGHT, FRAME_WIDTH, TABLE_HEADER_HEIGHT),
        mode: PaintMode::FillStroke,
    });
    ops.push(Op::RestoreGraphicsState);

    ops.push(Op::SetFillColor { col: TEXT_COLOR });
    for column in COLUMNS.iter() {
        ops.push(text(
            BuiltinFont::HelveticaBold,
            9.0,
            column.x,
            top - 12.5,
            column.title.to_string(),
        ));
    }

    rule(ops, top - TABLE_HEADER_HEIGHT - 6.0, 0.75, RULE_COLOR);
}

fn add_table_body(ops: &mut Vec<Op>, chunk: &[PrintableRow], top: f32) {
    let first_baseline = top - TABLE_HEADER_HEIGHT - 20.0;

    for (i, row) in chunk.iter().enumerate() {
        let y = first_baseline - i as f32 * ROW_STEP;

        if i % 2 == 1 {
            ops.push(Op::SaveGraphicsState);
            ops.push(Op::SetFillColor { col: ZEBRA_BACKGROUND });
            ops.push(Op::DrawRectangle {
                rect: Rect::new(FRAME_LEFT, y - 5.0, FRAME_WIDTH, ROW_STEP),
                mode: PaintMode::Fill,
            });
            ops.push(Op::RestoreGraphicsState);
        }

        ops.push(Op::SetFillColor { col: TEXT_COLOR });
        for (column, cell) in COLUMNS.iter().zip(cells(row)) {
            ops.push(text(
                BuiltinFont::Helvetica,
                BODY_FONT_SIZE,
                column.x,
                y,
                truncate(cell, column.max_chars),
            ));
        }
    }
}

fn add_empty_message(ops: &mut Vec<Op>, top: f32) {
    let width = approx_width(EMPTY_TABLE_MESSAGE, BuiltinFont::Helvetica, 10.0);
    ops.push(Op::SetFillColor { col: MUTED_TEXT_COLOR });
    ops.push(text(
        BuiltinFont::Helvetica,
        10.0,
        (PAGE_WIDTH - width) / 2.0,
        top - TABLE_HEADER_HEIGHT - 40.0,
        EMPTY_TABLE_MESSAGE.to_string(),
    ));
}

fn add_footer(ops: &mut Vec<Op>, page_index: usize, total_pages: usize) {
    rule(ops, FOOTER_RULE_Y, 0.5, RULE_COLOR);

    ops.push(Op::SetFillColor { col: MUTED_TEXT_COLOR });
    ops.push(text(
        BuiltinFont::Helvetica,
        FOOTER_FONT_SIZE,
        TEXT_LEFT,
        FOOTER_TEXT_Y,
        FOOTER_LABEL.to_string(),
    ));

    let counter = format!("{}/{}", page_index, total_pages);
    let width = approx_width(&counter, BuiltinFont::Helvetica, FOOTER_FONT_SIZE);
    ops.push(text(
        BuiltinFont::Helvetica,
        FOOTER_FONT_SIZE,
        FRAME_LEFT + FRAME_WIDTH - 5.0 - width,
        FOOTER_TEXT_Y,
        counter,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectionsBlock, StatsBlock};
    use time::macros::datetime;

    fn options() -> ReportOptions {
        ReportOptions::new("Household", "June 2026")
            .with_generated_at(datetime!(2026-06-30 18:05 UTC))
    }

    fn texts(ops: &[Op]) -> Vec<&str> {
        ops.iter().filter_map(Op::text).collect()
    }

    fn row(description: &str) -> PrintableRow {
        PrintableRow::new("01/06/2026", "Groceries", "R$ 45,90", "Expense", description)
    }

    #[test]
    fn header_lines() {
        let ops = build_page(&[], &options().with_user_name("Ana"), 1, 1);
        let texts = texts(&ops);
        assert!(texts.contains(&"Scope: Household"));
        assert!(texts.contains(&"Period: June 2026"));
        assert!(texts.contains(&"User: Ana"));
        assert!(texts.contains(&"Generated at: 2026-06-30 18:05 UTC"));
    }

    #[test]
    fn user_line_is_optional() {
        let ops = build_page(&[], &options(), 1, 1);
        assert!(!texts(&ops).iter().any(|t| t.starts_with("User:")));
    }

    #[test]
    fn blank_user_name_is_omitted() {
        for name in ["", "   ", "\n\t", "\u{2028}"] {
            let ops = build_page(&[], &options().with_user_name(name), 1, 1);
            assert!(
                !texts(&ops).iter().any(|t| t.starts_with("User:")),
                "user line drawn for {:?}",
                name
            );
        }
    }

    #[test]
    fn empty_chunk_draws_placeholder_only() {
        let ops = build_page(&[], &options(), 1, 1);
        let texts = texts(&ops);
        assert!(texts.contains(&EMPTY_TABLE_MESSAGE));
        // column titles are still there, no cells
        assert!(texts.contains(&"Description"));
        assert!(!texts.contains(&"Groceries"));
    }

    #[test]
    fn one_text_per_cell() {
        let chunk = vec![row("Weekly shopping"), row("Bakery")];
        let ops = build_page(&chunk, &options(), 1, 1);
        let texts = texts(&ops);
        assert_eq!(texts.iter().filter(|t| **t == "Groceries").count(), 2);
        assert!(texts.contains(&"Bakery"));
        assert!(!texts.contains(&EMPTY_TABLE_MESSAGE));
    }

    #[test]
    fn cells_are_truncated_per_column() {
        let long = "x".repeat(80);
        let chunk = vec![PrintableRow::new(&long, &long, &long, &long, &long)];
        let ops = build_page(&chunk, &options(), 1, 1);
        for (column, budget) in COLUMNS.iter().zip([12, 28, 18, 12, 42]) {
            let cell = ops
                .iter()
                .find_map(|op| match op {
                    Op::WriteText { pos, text, .. }
                        if pos.x == Pt(column.x) && text.starts_with('x') =>
                    {
                        Some(text.clone())
                    }
                    _ => None,
                })
                .unwrap();
            assert_eq!(cell.len(), budget);
            assert!(cell.ends_with("..."));
        }
    }

    #[test]
    fn summary_only_on_first_page() {
        let options = options()
            .with_stats(StatsBlock {
                real_expenses: "R$ 2.000,00".into(),
                future_expenses: "R$ 500,00".into(),
                difference: "R$ 1.500,00".into(),
            })
            .with_projections(ProjectionsBlock::default());

        let first = build_page(&[], &options, 1, 2);
        assert!(texts(&first).contains(&"Real expenses"));
        assert!(texts(&first).contains(&"Negative balance risk"));

        let second = build_page(&[], &options, 2, 2);
        assert!(!texts(&second).contains(&"Real expenses"));
        assert!(!texts(&second).contains(&"R$ 2.000,00"));
    }

    #[test]
    fn summary_pushes_the_table_down() {
        fn header_bar_top(ops: &[Op]) -> f32 {
            ops.iter()
                .find_map(|op| match op {
                    Op::DrawRectangle { rect, mode: PaintMode::FillStroke } => {
                        Some((rect.y + rect.height).0)
                    }
                    _ => None,
                })
                .unwrap()
        }
        fn summary_bottom(ops: &[Op]) -> Option<f32> {
            ops.iter().find_map(|op| match op {
                Op::DrawRectangle { rect, mode: PaintMode::Fill } => Some(rect.y.0),
                _ => None,
            })
        }

        let one_row = options().with_stats(StatsBlock::default());
        let two_rows = one_row.clone().with_projections(ProjectionsBlock::default());

        let plain = build_page(&[], &options(), 1, 1);
        let small = build_page(&[], &one_row, 1, 1);
        let large = build_page(&[], &two_rows, 1, 1);

        assert!(summary_bottom(&plain).is_none());
        assert!(header_bar_top(&small) < header_bar_top(&plain));
        assert!(header_bar_top(&large) < header_bar_top(&small));
        assert!(header_bar_top(&large) < summary_bottom(&large).unwrap());
        assert!(header_bar_top(&small) < summary_bottom(&small).unwrap());
    }

    #[test]
    fn full_page_stays_above_the_footer() {
        let chunk = (0..ROWS_PER_PAGE).map(|i| row(&format!("row {}", i))).collect::<Vec<_>>();
        let options = options()
            .with_stats(StatsBlock::default())
            .with_projections(ProjectionsBlock::default());
        let ops = build_page(&chunk, &options, 1, 1);
        let lowest = ops
            .iter()
            .filter_map(|op| match op {
                Op::WriteText { pos, text, .. } if text.starts_with("row ") => Some(pos.y.0),
                _ => None,
            })
            .fold(f32::MAX, f32::min);
        assert!(lowest - 5.0 > FOOTER_RULE_Y);
    }

    #[test]
    fn footer_counter() {
        let ops = build_page(&[], &options(), 3, 7);
        assert!(texts(&ops).contains(&"3/7"));
        assert!(texts(&ops).contains(&FOOTER_LABEL));
    }
}
