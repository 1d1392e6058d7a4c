use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// Relations to attach: a comma-separated name list, a JSON populate
    /// object, or a shorthand string such as "deep"
    pub populate: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DetailQueryParams {
    /// Relations to attach, same shapes as on list endpoints
    pub populate: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseMeta {
    pub pagination: PaginationMeta,
}

impl ResponseMeta {
    pub fn paginated(page: u64, per_page: u64, total_items: u64) -> Self {
        Self {
            pagination: PaginationMeta {
                page,
                per_page,
                total_pages: total_items.div_ceil(per_page.max(1)),
                total_items,
            },
        }
    }

    /// Meta for unpaginated listings (the filtered live stream endpoints)
    pub fn unpaginated(total_items: u64) -> Self {
        Self {
            pagination: PaginationMeta {
                page: 1,
                per_page: total_items,
                total_pages: 1,
                total_items,
            },
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}
