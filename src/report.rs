use log::{debug, warn};

use crate::{
    date::now,
    document::assemble,
    errors::ReportError,
    layout::{build_page_stream, BRAND_TITLE, ROWS_PER_PAGE},
    model::{PrintableRow, ReportOptions, ReportRequest},
    paginate::paginate,
    serialize::serialize,
    xref::verify_xref,
};

/// Builds the complete PDF report for `rows`.
///
/// Rows are laid out [`ROWS_PER_PAGE`] per page in the given order; an empty
/// list still yields one page with a placeholder message. When
/// `options.generated_at` is `None` the current time is used, resolved once so
/// all pages carry the same timestamp.
///
/// The result is checked by reading its cross-reference table back; an offset
/// that does not land on its object is returned as an error rather than as a
/// file readers would reject.
pub fn build_report(rows: &[PrintableRow], options: &ReportOptions) -> Result<Vec<u8>, ReportError> {
    let mut options = options.clone();
    options.generated_at.get_or_insert_with(now);

    let chunks = paginate(rows, ROWS_PER_PAGE);
    let total_pages = chunks.len();
    debug!("building report: {} rows on {} pages", rows.len(), total_pages);

    let streams = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| build_page_stream(chunk, &options, i + 1, total_pages))
        .collect::<Vec<_>>();

    let doc = assemble(streams);
    let bytes = serialize(&doc)?;

    if let Err(e) = verify_xref(&bytes) {
        warn!("discarding report with inconsistent xref table: {}", e);
        return Err(e);
    }

    debug!(
        "report done: {} objects, {} bytes",
        doc.objects.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Parses a JSON report request (`{"rows": [...], "options": {...}}`) and builds the report
pub fn build_report_from_json(json: &str) -> Result<Vec<u8>, ReportError> {
    let request: ReportRequest = serde_json::from_str(json)?;
    build_report(&request.rows, &request.options)
}

/// Download name for a report: `"<Brand>-premium-<kind>-<unixMillis>.pdf"`
pub fn report_file_name(kind: &str, unix_millis: i64) -> String {
    format!("{}-premium-{}-{}.pdf", BRAND_TITLE, kind, unix_millis)
}
