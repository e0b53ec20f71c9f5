use serde::{Deserialize, Serialize};

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination query parameters (`?pageIndex=1&pageSize=10`).
///
/// `page_index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    // ---
    #[serde(default = "default_page_index")]
    pub page_index: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_index() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_index: default_page_index(),
            page_size: default_page_size(),
        }
    }
}

impl PageParams {
    // ---
    /// Returns a description of the first invalid parameter, if any.
    pub fn validate(&self) -> Result<(), String> {
        // ---
        if self.page_index == 0 {
            return Err("pageIndex must be at least 1".to_string());
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!("pageSize must be between 1 and {MAX_PAGE_SIZE}"));
        }
        Ok(())
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        i64::from(self.page_index.saturating_sub(1)) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of results plus the totals needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    // ---
    pub list: Vec<T>,
    pub total: i64,
    pub page_index: u32,
    pub page_size: u32,
    pub total_pages: i64,
}

impl<T> PageData<T> {
    // ---
    pub fn new(list: Vec<T>, total: i64, params: &PageParams) -> Self {
        // ---
        let page_size = i64::from(params.page_size.max(1));
        let total = total.max(0);

        Self {
            list,
            total,
            page_index: params.page_index,
            page_size: params.page_size,
            total_pages: (total + page_size - 1) / page_size,
        }
    }
}
