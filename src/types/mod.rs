//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::{
    ListQuery, PageRequest, Paginated, PaginationMeta, LIMIT_HEADER, PAGE_HEADER,
    TOTAL_COUNT_HEADER, TOTAL_PAGES_HEADER,
};
pub use response::{ApiResponse, EnderecoResponse};
