//! Keyset pagination helpers shared by list queries.
//!
//! A page is fetched with one extra row ("lookahead"). If the extra row shows
//! up there is another page; it is trimmed before the page is returned, so no
//! separate count query is needed.

use std::future::Future;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(size: u32) -> Option<Self> {
        (size > 0).then_some(Self(size))
    }

    /// Lenient query-string parsing: anything that is not a positive integer
    /// (missing, empty, zero, negative, non-numeric, out of range) yields the
    /// default size.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|value| u32::try_from(value).ok())
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of rows to request from the store.
    pub fn lookahead(self) -> u32 {
        self.0.saturating_add(1)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Lookahead<T> {
    /// Trim a lookahead fetch down to `size` rows.
    pub fn trim(mut rows: Vec<T>, size: PageSize) -> Self {
        let limit = size.get() as usize;
        let has_more = rows.len() > limit;
        rows.truncate(limit);
        Self {
            items: rows,
            has_more,
        }
    }

    /// Resume key for the next page: the key of the last row, present only
    /// when more rows exist.
    pub fn next_key<K>(&self, key: impl FnOnce(&T) -> K) -> Option<K> {
        if self.has_more {
            self.items.last().map(key)
        } else {
            None
        }
    }
}

/// Run `fetch` with the lookahead row count and trim the result.
pub async fn fetch_with_lookahead<T, E, F, Fut>(size: PageSize, fetch: F) -> Result<Lookahead<T>, E>
where
    F: FnOnce(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let rows = fetch(size.lookahead()).await?;
    Ok(Lookahead::trim(rows, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn from_param_accepts_positive_integers() {
        assert_eq!(PageSize::from_param(Some("5")).get(), 5);
        assert_eq!(PageSize::from_param(Some(" 42 ")).get(), 42);
    }

    #[test]
    fn from_param_falls_back_to_default() {
        for raw in [None, Some(""), Some("0"), Some("-3"), Some("abc"), Some("1.5")] {
            assert_eq!(
                PageSize::from_param(raw).get(),
                DEFAULT_PAGE_SIZE,
                "input {raw:?}"
            );
        }
        assert_eq!(
            PageSize::from_param(Some("99999999999")).get(),
            DEFAULT_PAGE_SIZE
        );
    }

    #[test]
    fn lookahead_requests_one_extra_row() {
        assert_eq!(size(20).lookahead(), 21);
        assert_eq!(size(u32::MAX).lookahead(), u32::MAX);
    }

    #[test]
    fn trim_detects_extra_row() {
        let page = Lookahead::trim(vec![1, 2, 3, 4], size(3));
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.has_more);
        assert_eq!(page.next_key(|v| *v), Some(3));
    }

    #[test]
    fn trim_keeps_short_pages_intact() {
        let page = Lookahead::trim(vec![1, 2, 3], size(3));
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(!page.has_more);
        assert_eq!(page.next_key(|v| *v), None);

        let empty: Lookahead<i32> = Lookahead::trim(vec![], size(3));
        assert!(empty.items.is_empty());
        assert_eq!(empty.next_key(|v| *v), None);
    }

    #[tokio::test]
    async fn fetch_with_lookahead_passes_limit_plus_one() {
        let page = fetch_with_lookahead(size(2), |requested| async move {
            assert_eq!(requested, 3);
            Ok::<_, ()>(vec!["a", "b", "c"])
        })
        .await
        .unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn fetch_with_lookahead_propagates_errors() {
        let result: Result<Lookahead<u8>, &str> =
            fetch_with_lookahead(size(2), |_| async { Err("store down") }).await;
        assert_eq!(result.unwrap_err(), "store down");
    }
}
