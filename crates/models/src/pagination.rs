use serde::Serialize;
use strum::{Display, EnumString};

/// Page used when the request does not name one
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the request does not name one
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest offset or page size a store accepts (a signed 64-bit row count)
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Logical paging request as it arrives from a client.
///
/// `S` is the set of fields the listing can be sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationOptions<S> {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<S>,
    pub sort_order: Option<SortOrder>,
}

impl<S> Default for PaginationOptions<S> {
    fn default() -> Self {
        Self {
            page: None,
            limit: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

/// Concrete offset/limit/order derived from [`PaginationOptions`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<S> {
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
    /// Only set when both the field and the direction were requested
    pub sort: Option<(S, SortOrder)>,
}

/// Row offset of `page`, or `None` when it does not fit in [`MAX_ROWS`]
pub fn page_offset(page: u64, limit: u64) -> Option<u64> {
    page.saturating_sub(1)
        .checked_mul(limit)
        .filter(|skip| *skip <= MAX_ROWS)
}

/// Resolves defaults and computes the row offset.
///
/// A page or limit of zero counts as absent. Offsets and limits beyond
/// [`MAX_ROWS`] are clamped to it, which yields an empty page.
pub fn calculate_pagination<S: Clone>(options: &PaginationOptions<S>) -> Pagination<S> {
    let page = options.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
    let limit = options
        .limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_ROWS);
    let sort = match (&options.sort_by, options.sort_order) {
        (Some(field), Some(order)) => Some((field.clone(), order)),
        _ => None,
    };

    Pagination {
        page,
        limit,
        skip: page_offset(page, limit).unwrap_or(MAX_ROWS),
        sort,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// One page of a listing together with its metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub meta: PaginationMeta,
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let pagination = calculate_pagination::<String>(&PaginationOptions::default());
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
        assert_eq!(pagination.skip, 0);
        assert!(pagination.sort.is_none());
    }

    #[test]
    fn test_skip_is_computed_from_page_and_limit() {
        let options = PaginationOptions::<String> {
            page: Some(2),
            limit: Some(5),
            ..Default::default()
        };
        let pagination = calculate_pagination(&options);
        assert_eq!(pagination.skip, 5);

        let options = PaginationOptions::<String> {
            page: Some(0),
            limit: Some(0),
            ..Default::default()
        };
        let pagination = calculate_pagination(&options);
        assert_eq!((pagination.page, pagination.limit), (1, DEFAULT_LIMIT));
    }

    #[test]
    fn test_huge_pages_stay_within_row_bounds() {
        assert_eq!(page_offset(3, 10), Some(20));
        assert_eq!(page_offset(1_844_674_407_370_955_161, 10), None);
        assert_eq!(page_offset(2, MAX_ROWS), Some(MAX_ROWS));

        let options = PaginationOptions::<String> {
            page: Some(1_844_674_407_370_955_161),
            limit: Some(u64::MAX),
            ..Default::default()
        };
        let pagination = calculate_pagination(&options);
        assert_eq!(pagination.limit, MAX_ROWS);
        assert_eq!(pagination.skip, MAX_ROWS);
    }

    #[test]
    fn test_sort_requires_field_and_order() {
        let only_field = PaginationOptions {
            sort_by: Some("title"),
            ..Default::default()
        };
        assert!(calculate_pagination(&only_field).sort.is_none());

        let only_order = PaginationOptions::<&str> {
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };
        assert!(calculate_pagination(&only_order).sort.is_none());

        let both = PaginationOptions {
            sort_by: Some("title"),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };
        assert_eq!(
            calculate_pagination(&both).sort,
            Some(("title", SortOrder::Asc))
        );
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!(SortOrder::from_str("asc"), Ok(SortOrder::Asc));
        assert_eq!(SortOrder::from_str("DESC"), Ok(SortOrder::Desc));
        assert!(SortOrder::from_str("up").is_err());
    }
}
