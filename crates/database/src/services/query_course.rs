use super::course::CourseService;
use crate::{entities::courses, error::ServiceResult};
use log::debug;
use models::{
    course_query::{CourseFilter, CourseFilters, CourseSortField},
    pagination::{Paginated, PaginationMeta, PaginationOptions, SortOrder, calculate_pagination},
};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};

/// Columns matched by `searchTerm`
const SEARCHABLE_COLUMNS: [courses::Column; 2] = [courses::Column::Title, courses::Column::Code];

/// Escapes LIKE wildcards so the term is matched literally
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring match on one column
fn contains_insensitive(column: courses::Column, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((courses::Entity, column))))
        .like(LikeExpr::new(contains_pattern(term)).escape('\\'))
}

/// Predicate for one exact-match filter
fn filter_predicate(filter: &CourseFilter) -> SimpleExpr {
    match filter {
        CourseFilter::Title(title) => courses::Column::Title.eq(title.as_str()),
        CourseFilter::Code(code) => courses::Column::Code.eq(code.as_str()),
        CourseFilter::Credits(credits) => courses::Column::Credits.eq(*credits),
    }
}

fn sort_column(field: CourseSortField) -> courses::Column {
    match field {
        CourseSortField::Title => courses::Column::Title,
        CourseSortField::Code => courses::Column::Code,
        CourseSortField::Credits => courses::Column::Credits,
        CourseSortField::CreatedAt => courses::Column::CreatedAt,
        CourseSortField::UpdatedAt => courses::Column::UpdatedAt,
    }
}

impl CourseService {
    /// Build the WHERE clause: search OR-group AND exact-match AND-group
    pub(crate) fn build_filter_condition(filters: &CourseFilters) -> Condition {
        let mut condition = Condition::all();

        if let Some(term) = filters.search_term.as_deref() {
            let search = SEARCHABLE_COLUMNS
                .into_iter()
                .fold(Condition::any(), |any, column| {
                    any.add(contains_insensitive(column, term))
                });
            condition = condition.add(search);
        }

        if !filters.exact.is_empty() {
            let exact = filters
                .exact
                .iter()
                .fold(Condition::all(), |all, filter| all.add(filter_predicate(filter)));
            condition = condition.add(exact);
        }

        condition
    }

    /// Query courses with pagination and filtering.
    ///
    /// `meta.total` counts the rows matching the filters, not the whole table.
    pub async fn get_courses(
        &self,
        filters: &CourseFilters,
        options: &PaginationOptions<CourseSortField>,
    ) -> ServiceResult<Paginated<courses::Model>> {
        let pagination = calculate_pagination(options);
        let query = courses::Entity::find().filter(Self::build_filter_condition(filters));

        let total = query.clone().count(self.connection()).await?;

        let query = match pagination.sort {
            Some((field, order)) => query.order_by(
                sort_column(field),
                match order {
                    SortOrder::Asc => Order::Asc,
                    SortOrder::Desc => Order::Desc,
                },
            ),
            None => query.order_by_desc(courses::Column::CreatedAt),
        }
        // Ties keep a stable order across pages
        .order_by_asc(courses::Column::Id);

        debug!(
            "Listing courses: page {}, limit {}, skip {}, {} matching",
            pagination.page, pagination.limit, pagination.skip, total
        );

        let data = query
            .offset(pagination.skip)
            .limit(pagination.limit)
            .all(self.connection())
            .await?;

        Ok(Paginated {
            meta: PaginationMeta {
                total,
                page: pagination.page,
                limit: pagination.limit,
            },
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_time, seed_course, setup_db};
    use chrono::Duration;
    use models::course_query::CourseListQuery;
    use sea_orm::{DatabaseBackend, QueryTrait};

    fn titles(page: &Paginated<courses::Model>) -> Vec<&str> {
        page.data.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("ALGO"), "%algo%");
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[tokio::test]
    async fn test_no_filters_match_every_row() {
        let sql = courses::Entity::find()
            .filter(CourseService::build_filter_condition(&CourseFilters::default()))
            .build(DatabaseBackend::Postgres)
            .to_string();
        assert!(!sql.contains("LIKE"));
        assert!(!sql.contains(" = "));

        let db = setup_db().await;
        seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        seed_course(&db, "Biology", "BIO-101", base_time()).await;
        let service = CourseService::new(db);

        let page = service
            .get_courses(&CourseFilters::default(), &PaginationOptions::default())
            .await
            .unwrap();
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.data.len(), 2);
    }

    #[test]
    fn test_search_and_exact_filters_are_combined() {
        let filters = CourseFilters {
            search_term: Some("algo".to_owned()),
            exact: vec![CourseFilter::Credits(3)],
        };
        let sql = courses::Entity::find()
            .filter(CourseService::build_filter_condition(&filters))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("courses"."title") LIKE '%algo%'"#));
        assert!(sql.contains(" OR "));
        assert!(sql.contains(r#""courses"."credits" = 3"#));
    }

    #[tokio::test]
    async fn test_second_page_in_default_order() {
        let db = setup_db().await;
        for i in 1..=12 {
            let created_at = base_time() + Duration::minutes(i);
            seed_course(&db, &format!("Course {i}"), &format!("C-{i:03}"), created_at).await;
        }
        let service = CourseService::new(db);

        let options = PaginationOptions {
            page: Some(2),
            limit: Some(5),
            ..Default::default()
        };
        let page = service
            .get_courses(&CourseFilters::default(), &options)
            .await
            .unwrap();

        // Newest first: rows 6-10 are courses 7 down to 3
        assert_eq!(
            titles(&page),
            ["Course 7", "Course 6", "Course 5", "Course 4", "Course 3"]
        );
        assert_eq!(page.meta, PaginationMeta { total: 12, page: 2, limit: 5 });
    }

    #[tokio::test]
    async fn test_equal_timestamps_page_without_overlap() {
        let db = setup_db().await;
        for i in 1..=6 {
            seed_course(&db, &format!("Course {i}"), &format!("C-{i:03}"), base_time()).await;
        }
        let service = CourseService::new(db);

        let mut seen = Vec::new();
        for page in 1..=3 {
            let options = PaginationOptions {
                page: Some(page),
                limit: Some(2),
                ..Default::default()
            };
            let page = service
                .get_courses(&CourseFilters::default(), &options)
                .await
                .unwrap();
            seen.extend(page.data.into_iter().map(|c| c.id));
        }

        let mut ids = seen.clone();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert_eq!(seen, ids);
    }

    #[tokio::test]
    async fn test_page_beyond_row_range_is_empty() {
        let db = setup_db().await;
        seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let service = CourseService::new(db);

        let options = PaginationOptions {
            page: Some(1_844_674_407_370_955_161),
            limit: Some(u64::MAX),
            ..Default::default()
        };
        let page = service
            .get_courses(&CourseFilters::default(), &options)
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 1);
    }

    #[tokio::test]
    async fn test_explicit_sort() {
        let db = setup_db().await;
        seed_course(&db, "Biology", "BIO-101", base_time()).await;
        seed_course(&db, "Algorithms", "CSE-201", base_time() + Duration::minutes(1)).await;
        seed_course(&db, "Chemistry", "CHE-101", base_time() + Duration::minutes(2)).await;
        let service = CourseService::new(db);

        let query = CourseListQuery::from_pairs([("sortBy", "title"), ("sortOrder", "asc")]).unwrap();
        let page = service
            .get_courses(&query.filters, &query.options)
            .await
            .unwrap();
        assert_eq!(titles(&page), ["Algorithms", "Biology", "Chemistry"]);

        // A direction without a field falls back to newest first
        let query = CourseListQuery::from_pairs([("sortOrder", "asc")]).unwrap();
        let page = service
            .get_courses(&query.filters, &query.options)
            .await
            .unwrap();
        assert_eq!(titles(&page), ["Chemistry", "Algorithms", "Biology"]);
    }

    #[tokio::test]
    async fn test_search_term_is_case_insensitive_substring() {
        let db = setup_db().await;
        seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        seed_course(&db, "Data Structures", "ALGOithm101", base_time() + Duration::minutes(1)).await;
        seed_course(&db, "Biology", "BIO-101", base_time() + Duration::minutes(2)).await;
        let service = CourseService::new(db);

        let filters = CourseFilters {
            search_term: Some("algo".to_owned()),
            ..Default::default()
        };
        let page = service
            .get_courses(&filters, &PaginationOptions::default())
            .await
            .unwrap();

        assert_eq!(titles(&page), ["Data Structures", "Algorithms"]);
    }

    #[tokio::test]
    async fn test_search_term_wildcards_match_literally() {
        let db = setup_db().await;
        seed_course(&db, "100% Rust", "RST-100", base_time()).await;
        seed_course(&db, "1000 Rust", "RST-200", base_time()).await;
        let service = CourseService::new(db);

        let filters = CourseFilters {
            search_term: Some("0%".to_owned()),
            ..Default::default()
        };
        let page = service
            .get_courses(&filters, &PaginationOptions::default())
            .await
            .unwrap();

        assert_eq!(titles(&page), ["100% Rust"]);
    }

    #[tokio::test]
    async fn test_total_counts_filtered_rows() {
        let db = setup_db().await;
        seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        seed_course(&db, "Operating Systems", "CSE-301", base_time()).await;
        seed_course(&db, "Biology", "BIO-101", base_time()).await;
        let service = CourseService::new(db);

        let filters = CourseFilters {
            search_term: None,
            exact: vec![CourseFilter::Code("CSE-301".to_owned())],
        };
        let page = service
            .get_courses(&filters, &PaginationOptions::default())
            .await
            .unwrap();

        assert_eq!(titles(&page), ["Operating Systems"]);
        // Counts the filtered set, not all three rows
        assert_eq!(page.meta.total, 1);
    }

    #[tokio::test]
    async fn test_search_and_exact_filters_must_both_hold() {
        let db = setup_db().await;
        seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let advanced = seed_course(&db, "Advanced Algorithms", "CSE-401", base_time()).await;
        let service = CourseService::new(db);

        let query =
            CourseListQuery::from_pairs([("searchTerm", "ALGORITHMS"), ("code", "CSE-401")]).unwrap();
        let page = service
            .get_courses(&query.filters, &query.options)
            .await
            .unwrap();

        assert_eq!(page.data, vec![advanced]);
        assert_eq!(page.meta.total, 1);
    }
}
