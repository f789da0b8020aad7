use serde::Deserialize;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize)]
pub struct PageLimit(pub u64);

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize)]
pub struct PageOffset(pub u64);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pagination {
    pub limit: PageLimit,
    pub offset: PageOffset,
}

impl Pagination {
    /// Accepts `limit > 0` and `offset >= 0`; anything else is rejected.
    pub fn try_new(limit: i64, offset: i64) -> Option<Self> {
        if limit <= 0 || offset < 0 {
            return None;
        }
        let limit = u64::try_from(limit).ok()?;
        let offset = u64::try_from(offset).ok()?;
        Some(Self {
            limit: PageLimit(limit),
            offset: PageOffset(offset),
        })
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.limit.0).unwrap_or(usize::MAX)
    }

    pub fn offset(&self) -> usize {
        usize::try_from(self.offset.0).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_limit_and_negative_offset() {
        assert!(Pagination::try_new(0, 0).is_none());
        assert!(Pagination::try_new(-1, 0).is_none());
        assert!(Pagination::try_new(10, -1).is_none());
        assert!(Pagination::try_new(i64::MIN, 0).is_none());
    }

    #[test]
    fn large_limit_is_accepted() {
        let page = Pagination::try_new(5_000_000_000, 0).unwrap();
        assert_eq!(page.limit.0, 5_000_000_000);
        let page = Pagination::try_new(i64::MAX, i64::MAX).unwrap();
        assert!(page.limit() > 0);
    }

    #[test]
    fn accepts_valid_bounds() {
        let page = Pagination::try_new(10, 0).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
        let page = Pagination::try_new(1, 25).unwrap();
        assert_eq!(page.offset(), 25);
    }
}
