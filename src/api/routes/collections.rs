//! Collection Routes
//!
//! Read-only listings of the five dashboard collections.
//!
//! - GET /api/ - Absolute URL of every collection
//! - GET /api/:kind/ - A collection, bare or paginated

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::{Page, PageQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::Endpoints;
use crate::model::EntityKind;

/// GET /api/
pub async fn api_root(State(state): State<Arc<AppState>>) -> Json<Endpoints> {
    Json(Endpoints::from_api_root(&state.config.public_url()))
}

/// GET /api/:kind/
///
/// Without a configured page size the collection is returned as a bare
/// array. With one, the response is a page object and `?page=N` selects
/// the page.
pub async fn list_collection(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Response> {
    let kind: EntityKind = kind
        .parse()
        .map_err(|e: crate::model::UnknownEntityKind| ApiError::NotFound(e.to_string()))?;

    let records = state.store.records(kind)?;

    match state.config.page_size {
        None => Ok(Json(records).into_response()),
        Some(size) => {
            let url = format!("{}{}", state.config.public_url(), kind.api_path());
            let page = paginate(records, query.page.as_deref(), size, &url)?;
            Ok(Json(page).into_response())
        }
    }
}

/// Slice one page out of a collection.
///
/// The first page is always valid, even for an empty collection. The link to
/// page 1 carries no query string.
pub fn paginate(
    records: Vec<Value>,
    page: Option<&str>,
    size: usize,
    url: &str,
) -> ApiResult<Page<Value>> {
    let size = size.max(1);
    let count = records.len();
    let pages = count.div_ceil(size).max(1);

    let number = match page {
        None => 1,
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ApiError::NotFound("Invalid page.".to_string()))?,
    };
    if number == 0 || number > pages {
        return Err(ApiError::NotFound("Invalid page.".to_string()));
    }

    let results = records
        .into_iter()
        .skip((number - 1) * size)
        .take(size)
        .collect();

    let next = (number < pages).then(|| format!("{}?page={}", url, number + 1));
    let previous = match number {
        1 => None,
        2 => Some(url.to_string()),
        n => Some(format!("{}?page={}", url, n - 1)),
    };

    Ok(Page {
        count,
        next,
        previous,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://localhost:8000/api/users/";

    fn records(n: usize) -> Vec<Value> {
        (1..=n).map(|i| json!({ "id": i })).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(records(5), None, 2, URL).unwrap();

        assert_eq!(page.count, 5);
        assert_eq!(page.results, vec![json!({"id": 1}), json!({"id": 2})]);
        assert_eq!(page.next.as_deref(), Some("http://localhost:8000/api/users/?page=2"));
        assert_eq!(page.previous, None);
    }

    #[test]
    fn test_middle_and_last_pages() {
        let second = paginate(records(5), Some("2"), 2, URL).unwrap();
        assert_eq!(second.previous.as_deref(), Some(URL));
        assert_eq!(second.next.as_deref(), Some("http://localhost:8000/api/users/?page=3"));

        let last = paginate(records(5), Some("3"), 2, URL).unwrap();
        assert_eq!(last.results, vec![json!({"id": 5})]);
        assert_eq!(last.next, None);
        assert_eq!(last.previous.as_deref(), Some("http://localhost:8000/api/users/?page=2"));
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let page = paginate(Vec::new(), Some("1"), 10, URL).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_invalid_pages() {
        for raw in ["0", "4", "-1", "abc", ""] {
            let result = paginate(records(5), Some(raw), 2, URL);
            assert!(matches!(result, Err(ApiError::NotFound(_))), "page {:?}", raw);
        }
    }
}
