/// Splits `rows` into consecutive pages of at most `page_size` rows.
///
/// Always returns at least one page: an empty input yields a single empty
/// chunk so that an empty report still renders one page. Rows keep their
/// order and are never dropped or merged. A `page_size` of 0 is treated as 1.
pub fn paginate<T>(rows: &[T], page_size: usize) -> Vec<&[T]> {
    if rows.is_empty() {
        return vec![rows];
    }
    rows.chunks(page_size.max(1)).collect()
}

/// Number of pages `paginate` produces for `row_count` rows
pub fn page_count(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1)).max(1)
}
