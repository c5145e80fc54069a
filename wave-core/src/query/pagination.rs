/// Number of pages needed for `count` items; 0 when there are none.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice for the 1-based `page`. Pages outside `1..=total_pages` are empty;
/// keeping navigation in bounds is the caller's job.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    match page_bounds(items.len(), page, page_size) {
        Some((start, end)) => &items[start..end],
        None => &[],
    }
}

/// Pin `page` into `1..=total_pages` (1 when there are no pages).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// 1-based inclusive item range shown on `page`, for "Showing 11-20 of 25".
pub fn visible_range(
    count: usize,
    page: usize,
    page_size: usize,
) -> Option<(usize, usize)> {
    page_bounds(count, page, page_size).map(|(start, end)| (start + 1, end))
}

fn page_bounds(
    count: usize,
    page: usize,
    page_size: usize,
) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let start = (page - 1).checked_mul(page_size)?;
    if start >= count {
        return None;
    }
    Some((start, start.saturating_add(page_size).min(count)))
}
