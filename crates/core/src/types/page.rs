//! Offset pagination over an in-memory list.
//!
//! Pages are 1-indexed. Out-of-range pages produce an empty window rather
//! than an error, so callers never have to validate `page` themselves.

use std::ops::Range;

/// Page used when the client does not send a usable one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not send a usable one.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// A resolved page of a list with `total` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Requested page, echoed back unclamped.
    pub page: i64,
    /// Effective page size (always positive).
    pub per_page: i64,
    pub total: usize,
    pub total_pages: usize,
    start: usize,
    end: usize,
}

impl PageWindow {
    /// Resolve `page`/`per_page` against a list of `total` entries.
    ///
    /// A non-positive `per_page` falls back to [`DEFAULT_PER_PAGE`]. Offsets
    /// are clamped to `[0, total]`.
    #[must_use]
    pub fn new(page: i64, per_page: i64, total: usize) -> Self {
        let per_page = if per_page <= 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };

        let total_i64 = i64::try_from(total).unwrap_or(i64::MAX);
        let start = page.saturating_sub(1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);

        let page_size = usize::try_from(per_page).unwrap_or(usize::MAX);

        Self {
            page,
            per_page,
            total,
            total_pages: total.div_ceil(page_size),
            start: clamp_offset(start, total_i64),
            end: clamp_offset(end, total_i64),
        }
    }

    /// Index range into the underlying list.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Borrow this window's entries out of `items`.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.range()).unwrap_or_default()
    }
}

fn clamp_offset(offset: i64, total: i64) -> usize {
    usize::try_from(offset.clamp(0, total)).unwrap_or(0)
}
