//! HTTP routes for the directory datasets.
//!
//! The query string is read as raw key/value pairs and the first value of
//! each key wins. Numeric parameters are coerced, so neither a malformed nor
//! a repeated `page` turns into a 400.

use super::AppState;
use crate::query::{PageRequest, QueryPage};
use crate::records::{Account, Member, User};
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Raw query string pairs, in request order
type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, if any.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query parameters for `/api/members`
#[derive(Debug, Default)]
pub struct MembersParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub q: Option<String>,
}

impl MembersParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "pageSize"),
            q: first_value(pairs, "q"),
        }
    }
}

/// Query parameters for `/api/users`
#[derive(Debug, Default)]
pub struct UsersParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub search: Option<String>,
}

impl UsersParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            per_page: first_value(pairs, "perPage"),
            search: first_value(pairs, "search"),
        }
    }
}

/// Query parameters for `/api/directory`
#[derive(Debug, Default)]
pub struct DirectoryParams {
    pub search: Option<String>,
}

impl DirectoryParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            search: first_value(pairs, "search"),
        }
    }
}

/// Response for `/api/members`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersResponse {
    pub members: Vec<Member>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl From<QueryPage<Member>> for MembersResponse {
    fn from(page: QueryPage<Member>) -> Self {
        Self {
            members: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// Pager metadata nested in [`UsersResponse`]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Response for `/api/users`
#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    pub data: Vec<Account>,
    pub pagination: Pagination,
}

impl From<QueryPage<Account>> for UsersResponse {
    fn from(page: QueryPage<Account>) -> Self {
        Self {
            success: true,
            pagination: Pagination {
                page: page.page,
                per_page: page.page_size,
                total: page.total,
                total_pages: page.total_pages,
            },
            data: page.items,
        }
    }
}

/// Response for `/api/directory`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub users: Vec<User>,
    /// Search text exactly as received
    pub search_query: String,
    /// Size of the unfiltered directory
    pub total_users: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Create the API routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/members", get(members_handler))
        .route("/api/users", get(users_handler))
        .route("/api/directory", get(directory_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
}

/// GET /api/members - Paged team members
async fn members_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Json<MembersResponse> {
    let params = MembersParams::from_pairs(&pairs);
    let request = PageRequest::from_raw(
        params.q.as_deref(),
        params.page.as_deref(),
        params.page_size.as_deref(),
        state.members.default_page_size(),
    );
    state.simulate_latency().await;

    let page = state.members.run(&request);
    tracing::debug!(
        search = %request.search,
        total = page.total,
        page = page.page,
        "members query"
    );
    Json(page.into())
}

/// GET /api/users - Paged accounts
async fn users_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Json<UsersResponse> {
    let params = UsersParams::from_pairs(&pairs);
    let request = PageRequest::from_raw(
        params.search.as_deref(),
        params.page.as_deref(),
        params.per_page.as_deref(),
        state.accounts.default_page_size(),
    );
    state.simulate_latency().await;

    let page = state.accounts.run(&request);
    tracing::debug!(
        search = %request.search,
        total = page.total,
        page = page.page,
        "users query"
    );
    Json(page.into())
}

/// GET /api/directory - Filtered directory, unpaginated
async fn directory_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Json<DirectoryResponse> {
    let params = DirectoryParams::from_pairs(&pairs);
    let search_query = params.search.unwrap_or_default();
    state.simulate_latency().await;

    let users: Vec<User> = state
        .directory
        .filter(&search_query)
        .into_iter()
        .cloned()
        .collect();
    tracing::info!(
        search = %search_query,
        found = users.len(),
        "filtering directory"
    );

    Json(DirectoryResponse {
        users,
        search_query,
        total_users: state.directory.len(),
    })
}

/// GET /health - Liveness and dataset sizes
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "datasets": {
            "members": state.members.len(),
            "users": state.accounts.len(),
            "directory": state.directory.len(),
        }
    }))
}

async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("No route for {}", uri.path()),
        }),
    )
}
