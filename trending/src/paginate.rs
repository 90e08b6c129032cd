//! Fixed-size pages over an ordered list.

use std::num::NonZeroUsize;

/// Number of pages needed for `count` items. Never less than one, so an empty
/// list still renders a single (empty) page.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Current page (1-based) and the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl PageState {
    /// Small enough that the built-in catalogue spans more than one page.
    pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
        Some(size) => size,
        None => unreachable!(),
    };

    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Like [`Self::new`] but a zero size falls back to the default.
    pub fn with_size(page_size: usize) -> Self {
        Self::new(NonZeroUsize::new(page_size).unwrap_or(Self::DEFAULT_PAGE_SIZE))
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn reset(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    /// Moves to `page`, which is taken as-is (below one becomes one) and
    /// clamped against the data on the next [`apply`].
    pub fn go_to(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    pub fn next(self, count: usize) -> Self {
        self.go_to(self.current_page.saturating_add(1)).clamped(count)
    }

    pub fn previous(self) -> Self {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Pulls the current page back into `[1, total_pages(count)]`.
    pub fn clamped(self, count: usize) -> Self {
        let last = total_pages(count, self.page_size);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<E> Page<E> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Raw slice for a 1-based page. Empty when the page lies outside the data.
pub fn slice<E>(entities: &[E], page: usize, page_size: NonZeroUsize) -> &[E] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if page == 0 || start >= entities.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(entities.len());
    &entities[start..end]
}

/// Cuts the requested page out of `entities`, clamping the page number first
/// so a valid page is always returned when one exists.
pub fn apply<E: Clone>(entities: &[E], page: &PageState) -> Page<E> {
    let page = page.clamped(entities.len());
    Page {
        items: slice(entities, page.current_page, page.page_size).to_vec(),
        current_page: page.current_page,
        total_pages: total_pages(entities.len(), page.page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(10)), 1);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
        assert_eq!(total_pages(3, size(2)), 2);
    }

    #[test]
    fn test_pages_cover_sequence_exactly_once() {
        for len in 0..40usize {
            for page_size in 1..9usize {
                let data: Vec<usize> = (0..len).collect();
                let first = apply(&data, &PageState::new(size(page_size)));
                let mut joined = Vec::new();
                for p in 1..=first.total_pages {
                    let page = apply(&data, &PageState::new(size(page_size)).go_to(p));
                    assert_eq!(page.current_page, p);
                    joined.extend(page.items);
                }
                assert_eq!(joined, data, "len {len} size {page_size}");
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let data: Vec<u8> = (0..5).collect();
        let page = apply(&data, &PageState::new(size(2)).go_to(9));
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![4]);
    }

    #[test]
    fn test_raw_slice_out_of_range_is_empty() {
        let data = [1, 2, 3];
        assert!(slice(&data, 3, size(2)).is_empty());
        assert!(slice(&data, 0, size(2)).is_empty());
        assert_eq!(slice(&data, 2, size(2)), &[3]);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let data: Vec<u8> = Vec::new();
        let page = apply(&data, &PageState::default().go_to(4));
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_navigation_helpers() {
        let state = PageState::new(size(2));
        assert_eq!(state.previous().current_page(), 1);
        assert_eq!(state.next(5).next(5).current_page(), 3);
        assert_eq!(state.next(5).next(5).next(5).current_page(), 3);
        assert_eq!(state.go_to(3).reset().current_page(), 1);
        assert_eq!(PageState::with_size(0).page_size(), PageState::DEFAULT_PAGE_SIZE);
    }
}
