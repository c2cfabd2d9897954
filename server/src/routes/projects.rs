//! Read-only catalog endpoints.
//!
//! The catalog is compiled into the binary, so handlers borrow `'static`
//! records and never fail for reasons other than a bad request.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use folio_client::data::projects::{PROJECTS, Project, find_project};
use folio_client::state::gallery::{GalleryFilter, filter_projects};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    /// `all`, `mobile`, `desktop`, or `web`. Absent means `all`.
    pub category: Option<String>,
}

/// `GET /api/projects[?category=..]` in catalog order.
pub async fn list_projects(Query(query): Query<ProjectQuery>) -> Result<Json<Vec<&'static Project>>, StatusCode> {
    let filter = match query.category.as_deref() {
        None => GalleryFilter::All,
        Some(raw) => GalleryFilter::parse(raw).ok_or_else(|| {
            tracing::debug!(category = raw, "unknown project category");
            StatusCode::BAD_REQUEST
        })?,
    };
    Ok(Json(filter_projects(PROJECTS, filter)))
}

/// `GET /api/projects/{id}`.
pub async fn get_project(Path(id): Path<String>) -> Result<Json<&'static Project>, StatusCode> {
    find_project(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}
