//! Offset-based pagination for listing queries.
//!
//! Callers pass `page_num` / `page_size` as raw strings; a [`PageRequest`]
//! turns them into the `LIMIT` / `OFFSET` pair the store applies verbatim.
//!
//! Both values must be at least 1. A non-positive page would otherwise
//! become a negative `LIMIT` or `OFFSET`, which SQLite silently treats as
//! "no limit" / "no offset".

use crate::domains::listings::errors::ValidationError;

/// Page number used when the caller omits `page_num`.
pub const DEFAULT_PAGE_NUM: i64 = 1;

/// Page size used when the caller omits `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_num: i64,
    page_size: i64,
    offset: i64,
}

impl PageRequest {
    /// Build a page request from already-parsed numbers.
    pub fn new(page_num: i64, page_size: i64) -> Result<Self, ValidationError> {
        if page_num < 1 {
            return Err(ValidationError::single("invalid page_num"));
        }
        if page_size < 1 {
            return Err(ValidationError::single("invalid page_size"));
        }
        let offset = (page_num - 1)
            .checked_mul(page_size)
            .ok_or_else(|| ValidationError::single("invalid page_num"))?;

        Ok(Self {
            page_num,
            page_size,
            offset,
        })
    }

    /// Parse raw request parameters, applying defaults for missing values.
    ///
    /// `page_num` is checked before `page_size`; the first failure wins.
    pub fn parse(page_num: Option<&str>, page_size: Option<&str>) -> Result<Self, ValidationError> {
        let page_num = match page_num {
            Some(raw) => parse_int(raw).ok_or_else(|| ValidationError::single("invalid page_num"))?,
            None => DEFAULT_PAGE_NUM,
        };
        let page_size = match page_size {
            Some(raw) => {
                parse_int(raw).ok_or_else(|| ValidationError::single("invalid page_size"))?
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Self::new(page_num, page_size)
    }

    pub fn page_num(&self) -> i64 {
        self.page_num
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Number of rows to skip: `(page_num - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Parse a request parameter as a signed integer.
///
/// Surrounding whitespace and a leading `+`/`-` are accepted.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
