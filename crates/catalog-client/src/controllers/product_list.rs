//! Product List Controller
//!
//! Paginated product+stock table. Page changes are explicit commands: each
//! transition hands back a `PageRequest` stamped with a sequence number, and
//! only the response to the latest request is applied.

use log::{debug, warn};

use crate::api::ProductApi;
use crate::error::ApiResult;
use crate::models::{ProductListEntry, ProductPage};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

const LOAD_ERROR: &str = "Error fetching products";
const DELETE_ERROR: &str = "Error deleting product";

/// Load status of the table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// A page fetch issued by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    seq: u64,
}

impl PageRequest {
    pub async fn send(&self, api: &dyn ProductApi) -> ApiResult<ProductPage> {
        api.list_products(self.page, self.size).await
    }
}

/// What `apply_page` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageUpdate {
    /// Superseded by a newer request; nothing changed
    Stale,
    Applied,
    /// The server now reports fewer pages than the current index. The page was
    /// moved back to the last one and this request loads it.
    Clamped(PageRequest),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductListController {
    page: u32,
    page_size: u32,
    total_pages: u32,
    entries: Vec<ProductListEntry>,
    status: ListStatus,
    /// Last delete failure, shown above the table
    delete_error: Option<String>,
    /// Sequence number of the newest page request
    seq: u64,
}

impl ProductListController {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Default::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn entries(&self) -> &[ProductListEntry] {
        &self.entries
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Load error or delete error, whichever the user should see
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(msg) => Some(msg.as_str()),
            _ => self.delete_error.as_deref(),
        }
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn can_previous(&self) -> bool {
        self.page > 0
    }

    /// Start loading `page`; the returned request supersedes any still in flight
    pub fn load_page(&mut self, page: u32, size: u32) -> PageRequest {
        self.page = page;
        self.page_size = size.max(1);
        self.status = ListStatus::Loading;
        self.delete_error = None;
        self.seq += 1;
        debug!("loading products page {} (seq {})", self.page, self.seq);
        PageRequest { page: self.page, size: self.page_size, seq: self.seq }
    }

    /// Reload the current page
    pub fn reload(&mut self) -> PageRequest {
        self.load_page(self.page, self.page_size)
    }

    pub fn next(&mut self) -> Option<PageRequest> {
        if !self.can_next() {
            return None;
        }
        Some(self.load_page(self.page + 1, self.page_size))
    }

    pub fn previous(&mut self) -> Option<PageRequest> {
        if !self.can_previous() {
            return None;
        }
        Some(self.load_page(self.page - 1, self.page_size))
    }

    /// Apply a page response
    pub fn apply_page(&mut self, request: PageRequest, result: ApiResult<ProductPage>) -> PageUpdate {
        if request.seq != self.seq {
            debug!(
                "discarding stale response for page {} (seq {}, latest {})",
                request.page, request.seq, self.seq
            );
            return PageUpdate::Stale;
        }
        match result {
            Ok(page) => {
                self.entries = page.content;
                self.total_pages = page.total_pages;
                self.status = ListStatus::Loaded;
                let last = self.total_pages.saturating_sub(1);
                if self.page > last {
                    debug!(
                        "page {} is past the end ({} pages), moving to page {}",
                        self.page, self.total_pages, last
                    );
                    return PageUpdate::Clamped(self.load_page(last, self.page_size));
                }
            }
            Err(e) => {
                warn!("loading products page {} failed: {}", request.page, e);
                self.status = ListStatus::Failed(LOAD_ERROR.to_string());
            }
        }
        PageUpdate::Applied
    }

    /// Apply the outcome of deleting `id`; the list only changes on success
    pub fn apply_delete(&mut self, id: &str, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.delete_error = None;
                if let Some(pos) = self.entries.iter().position(|e| e.id() == id) {
                    self.entries.remove(pos);
                }
            }
            Err(e) => {
                warn!("deleting product {} failed: {}", id, e);
                self.delete_error = Some(DELETE_ERROR.to_string());
            }
        }
    }
}
