//! Pagination types for list endpoints.

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::config::{MAX_PAGE_SIZE, MSG_LIMITE_INVALIDO, MSG_PAGINA_INVALIDA, MSG_PAGINA_VAZIA};
use crate::errors::{AppError, AppResult};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";
pub const PAGE_HEADER: &str = "x-page";
pub const LIMIT_HEADER: &str = "x-limit";

/// Raw `?page=&limit=` query; defaults are resolved by the service.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number (default 1)
    #[param(example = 1)]
    pub page: Option<i64>,
    /// Items per page (default 10, capped at 100)
    #[param(example = 10)]
    pub limit: Option<i64>,
}

/// Checked page coordinates: `page >= 1`, `1 <= limit <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Validate raw values. The page bound is checked before the limit.
    ///
    /// A page whose offset does not fit the database's signed 64-bit
    /// OFFSET lies past any possible result and is reported as empty.
    pub fn new(page: i64, limit: i64) -> AppResult<Self> {
        if page < 1 {
            return Err(AppError::bad_request(MSG_PAGINA_INVALIDA));
        }
        if limit < 1 {
            return Err(AppError::bad_request(MSG_LIMITE_INVALIDO));
        }

        let page = page as u64;
        let limit = (limit as u64).min(MAX_PAGE_SIZE);

        let addressable = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !addressable {
            return Err(AppError::not_found(MSG_PAGINA_VAZIA));
        }

        Ok(Self { page, limit })
    }

    /// Rows to skip before this page; never exceeds `i64::MAX`
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// One page of rows plus its metadata.
///
/// Responds with the rows as a bare JSON array; the metadata travels in
/// the `x-total-count`, `x-total-pages`, `x-page` and `x-limit` headers.
#[derive(Debug)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: PageRequest, total: u64) -> Self {
        Self {
            data,
            meta: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total,
                total_pages: total.div_ceil(page.limit),
            },
        }
    }
}

impl PaginationMeta {
    fn headers(&self) -> HeaderMap {
        [
            (TOTAL_COUNT_HEADER, self.total),
            (TOTAL_PAGES_HEADER, self.total_pages),
            (PAGE_HEADER, self.page),
            (LIMIT_HEADER, self.limit),
        ]
        .into_iter()
        .map(|(name, value)| (HeaderName::from_static(name), HeaderValue::from(value)))
        .collect()
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        (self.meta.headers(), Json(self.data)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_offset_arithmetic() {
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
        assert_eq!(PageRequest::new(2, 7).unwrap().offset(), 7);
    }

    #[test]
    fn test_page_below_one_rejected() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert_eq!(err.to_string(), MSG_PAGINA_INVALIDA);

        let err = PageRequest::new(-4, 10).unwrap_err();
        assert_eq!(err.to_string(), MSG_PAGINA_INVALIDA);
    }

    #[test]
    fn test_limit_below_one_rejected() {
        let err = PageRequest::new(1, 0).unwrap_err();
        assert_eq!(err.to_string(), MSG_LIMITE_INVALIDO);
    }

    #[test]
    fn test_page_checked_before_limit() {
        let err = PageRequest::new(0, 0).unwrap_err();
        assert_eq!(err.to_string(), MSG_PAGINA_INVALIDA);
    }

    #[test]
    fn test_limit_capped() {
        let page = PageRequest::new(1, 5_000).unwrap();
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_unaddressable_page_is_past_the_end() {
        let err = PageRequest::new(i64::MAX, 10).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), MSG_PAGINA_VAZIA);

        let err = PageRequest::new(1 << 62, 4).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_largest_addressable_page_accepted() {
        let page = PageRequest::new(i64::MAX, 1).unwrap();
        assert_eq!(page.offset(), (i64::MAX - 1) as u64);
    }

    #[test]
    fn test_response_is_array_with_meta_headers() {
        let page = PageRequest::new(2, 10).unwrap();
        let response = Paginated::new(vec![1u8, 2, 3], page, 13).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[TOTAL_COUNT_HEADER], "13");
        assert_eq!(headers[TOTAL_PAGES_HEADER], "2");
        assert_eq!(headers[PAGE_HEADER], "2");
        assert_eq!(headers[LIMIT_HEADER], "10");
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PageRequest::new(1, 10).unwrap();
        assert_eq!(Paginated::<u8>::new(vec![], page, 0).meta.total_pages, 0);
        assert_eq!(Paginated::<u8>::new(vec![], page, 10).meta.total_pages, 1);
        assert_eq!(Paginated::<u8>::new(vec![], page, 11).meta.total_pages, 2);
    }
}
