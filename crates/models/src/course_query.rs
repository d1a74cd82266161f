use crate::{
    pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_ROWS, PaginationOptions, SortOrder, page_offset},
    validation::ValidationError,
};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Fields a course listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CourseSortField {
    Title,
    Code,
    Credits,
    CreatedAt,
    UpdatedAt,
}

/// An exact-match condition on one course field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFilter {
    Title(String),
    Code(String),
    Credits(i32),
}

/// Conditions applied to a course listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilters {
    /// Case-insensitive substring matched against the searchable fields
    pub search_term: Option<String>,
    /// Exact-match conditions, all of which must hold
    pub exact: Vec<CourseFilter>,
}

/// A parsed `GET /courses` query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseListQuery {
    pub filters: CourseFilters,
    pub options: PaginationOptions<CourseSortField>,
}

fn parse_number<T: FromStr>(
    errors: &mut ValidationError,
    key: &str,
    value: &str,
    message: &str,
) -> Option<T> {
    match value.trim().parse() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.push(key, message);
            None
        }
    }
}

impl CourseListQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// Empty values are treated as absent. Unknown keys are rejected. When a
    /// key repeats, the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        let mut errors = ValidationError::default();
        let mut title = None;
        let mut code = None;
        let mut credits = None;

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if value.is_empty() {
                continue;
            }

            match key {
                "searchTerm" => query.filters.search_term = Some(value.to_owned()),
                "title" => title = Some(value.to_owned()),
                "code" => code = Some(value.to_owned()),
                "credits" => {
                    credits = parse_number(&mut errors, key, value, "credits must be an integer")
                }
                "page" => {
                    query.options.page =
                        parse_number(&mut errors, key, value, "page must be a positive integer")
                }
                "limit" => {
                    query.options.limit =
                        parse_number(&mut errors, key, value, "limit must be a positive integer")
                }
                "sortBy" => match CourseSortField::from_str(value) {
                    Ok(field) => query.options.sort_by = Some(field),
                    Err(_) => errors.push(key, format!("Cannot sort courses by '{value}'")),
                },
                "sortOrder" => match SortOrder::from_str(value) {
                    Ok(order) => query.options.sort_order = Some(order),
                    Err(_) => errors.push(key, "sortOrder must be 'asc' or 'desc'"),
                },
                _ => errors.push(key, format!("Unknown query parameter '{key}'")),
            }
        }

        let page = query.options.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = query.options.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        if limit > MAX_ROWS {
            errors.push("limit", "limit is too large");
        } else if page_offset(page, limit).is_none() {
            errors.push("page", "page is out of range");
        }

        query.filters.exact = [
            title.map(CourseFilter::Title),
            code.map(CourseFilter::Code),
            credits.map(CourseFilter::Credits),
        ]
        .into_iter()
        .flatten()
        .collect();

        errors.into_result(query)
    }
}
