//! Argument and result types for the four API families.
//!
//! These are plain data carriers. The proxies only read the identifiers they
//! need for audit metadata; everything else is forwarded untouched.

pub mod ecs;
pub mod pvtz;
pub mod slb;
pub mod vpc;

/// Paging information returned alongside list results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page_number: u32,
    /// Entries per page
    pub page_size: u32,
    /// Total entries across all pages
    pub total_count: u32,
}

/// Paging request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageArgs {
    /// 1-based page index, provider default when `None`
    pub page_number: Option<u32>,
    /// Entries per page, provider default when `None`
    pub page_size: Option<u32>,
}
