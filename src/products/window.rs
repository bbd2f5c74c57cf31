//! Skip/take pagination over an already fetched list.

/// A page of results: skip `offset` items, then take at most `limit`.
///
/// Negative values select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: i64,
    pub limit: i64,
}

impl Window {
    pub const DEFAULT_OFFSET: i64 = 0;
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Apply the window, preserving input order.
    pub fn apply<T>(self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let (Ok(offset), Ok(limit)) = (usize::try_from(self.offset), usize::try_from(self.limit))
        else {
            return Vec::new();
        };
        items.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET, Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_remaining_items() {
        let items: Vec<u32> = (0..20).collect();
        for (offset, limit) in [(0, 10), (5, 10), (15, 10), (19, 1), (20, 3), (25, 3), (0, 0)] {
            let expected = limit.min(20 - offset).max(0) as usize;
            let page = Window::new(offset, limit).apply(items.clone());
            assert_eq!(page.len(), expected, "offset={offset} limit={limit}");
            if let Some(first) = page.first() {
                assert_eq!(i64::from(*first), offset);
            }
        }
    }

    #[test]
    fn test_default_is_first_ten() {
        let page = Window::default().apply(0..100);
        assert_eq!(page, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_negative_values_select_nothing() {
        assert!(Window::new(-1, 10).apply(0..5).is_empty());
        assert!(Window::new(0, -1).apply(0..5).is_empty());
    }
}
