/// Page sizes offered under the participant and teacher grids.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Client side pagination over an already fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    rows_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

impl Pager {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Changing the page size always returns to the first page. Zero is ignored.
    pub fn with_rows_per_page(self, rows_per_page: usize) -> Self {
        if rows_per_page == 0 {
            return self;
        }
        Self {
            page: 0,
            rows_per_page,
        }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.rows_per_page).min(items.len());
        let end = (start + self.rows_per_page).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_by_page() {
        let items: Vec<u32> = (0..12).collect();
        let pager = Pager::default();
        assert_eq!(pager.slice(&items), &[0, 1, 2, 3, 4]);
        assert_eq!(pager.with_page(2).slice(&items), &[10, 11]);
        assert!(pager.with_page(3).slice(&items).is_empty());
        assert_eq!(pager.page_count(items.len()), 3);
    }

    #[test]
    fn changing_rows_resets_page() {
        let pager = Pager::default().with_page(2).with_rows_per_page(10);
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.rows_per_page(), 10);
        assert_eq!(pager.with_rows_per_page(0), pager);
    }
}
