use super::errors::PaginationError;

/// Validated pagination intent of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Create a page request from already-numeric values.
    ///
    /// # Errors
    /// * `InvalidPageParameter` - `page` is zero or `limit` is not an allowed page size
    pub fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        if page < PaginationPolicy::DEFAULT_PAGE {
            return Err(PaginationError::invalid(
                "page",
                &page.to_string(),
                "must be at least 1",
            ));
        }
        if !PaginationPolicy::ALLOWED_LIMITS.contains(&limit) {
            return Err(PaginationError::invalid(
                "limit",
                &limit.to_string(),
                PaginationPolicy::allowed_limits_reason(),
            ));
        }
        Ok(Self { page, limit })
    }

    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items preceding this page: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// A page of items plus the metadata needed to navigate the full result set.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PageResult<T> {
    /// Transform the items while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items_per_page: self.items_per_page,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}

/// Rules for turning raw query parameters into a [`PageRequest`] and for
/// computing [`PageResult`] metadata.
///
/// A page past the last one is not an error: it yields an empty item list with
/// accurate totals, so a client paging while the catalog shrinks sees stable
/// page numbers.
pub struct PaginationPolicy;

impl PaginationPolicy {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const ALLOWED_LIMITS: [u32; 3] = [10, 20, 50];

    /// Parse raw `page` / `limit` query values.
    ///
    /// Absent values fall back to page 1 and limit 10. Present values are never
    /// clamped: anything that is not an integer, not positive or not an allowed
    /// page size is rejected.
    ///
    /// # Errors
    /// * `InvalidPageParameter` - Either parameter is malformed or out of range
    pub fn parse(
        raw_page: Option<&str>,
        raw_limit: Option<&str>,
    ) -> Result<PageRequest, PaginationError> {
        let page = match raw_page {
            Some(raw) => Self::parse_page(raw)?,
            None => Self::DEFAULT_PAGE,
        };
        let limit = match raw_limit {
            Some(raw) => Self::parse_limit(raw)?,
            None => Self::DEFAULT_LIMIT,
        };

        PageRequest::new(page, limit)
    }

    /// Build the response envelope for one page.
    ///
    /// `total_pages = ceil(total_items / limit)`, so an empty result set has
    /// zero pages.
    pub fn build_result<T>(
        items: Vec<T>,
        total_items: u64,
        request: &PageRequest,
    ) -> PageResult<T> {
        let total_pages = total_items.div_ceil(u64::from(request.limit()));
        let current_page = request.page();

        PageResult {
            items,
            current_page,
            total_pages,
            total_items,
            items_per_page: request.limit(),
            has_next_page: u64::from(current_page) < total_pages,
            has_previous_page: current_page > 1,
        }
    }

    fn parse_page(raw: &str) -> Result<u32, PaginationError> {
        let value: i64 = raw
            .parse()
            .map_err(|_| PaginationError::invalid("page", raw, "must be an integer"))?;

        if value < 1 {
            return Err(PaginationError::invalid("page", raw, "must be at least 1"));
        }

        u32::try_from(value).map_err(|_| PaginationError::invalid("page", raw, "is too large"))
    }

    fn parse_limit(raw: &str) -> Result<u32, PaginationError> {
        let value: i64 = raw
            .parse()
            .map_err(|_| PaginationError::invalid("limit", raw, "must be an integer"))?;

        Self::ALLOWED_LIMITS
            .iter()
            .copied()
            .find(|allowed| i64::from(*allowed) == value)
            .ok_or_else(|| PaginationError::invalid("limit", raw, Self::allowed_limits_reason()))
    }

    fn allowed_limits_reason() -> &'static str {
        "must be one of 10, 20, 50"
    }
}
