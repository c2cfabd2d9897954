use super::*;

fn query(category: Option<&str>) -> Query<ProjectQuery> {
    Query(ProjectQuery { category: category.map(str::to_owned) })
}

// =============================================================
// list_projects
// =============================================================

#[tokio::test]
async fn list_without_category_returns_full_catalog_in_order() {
    let Json(projects) = list_projects(query(None)).await.unwrap();
    let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
    let expected: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn list_all_matches_unfiltered() {
    let Json(all) = list_projects(query(Some("all"))).await.unwrap();
    assert_eq!(all.len(), PROJECTS.len());
}

#[tokio::test]
async fn list_filters_by_category() {
    let Json(mobile) = list_projects(query(Some("mobile"))).await.unwrap();
    assert!(!mobile.is_empty());
    assert!(mobile.iter().all(|p| p.category.as_str() == "mobile"));

    let Json(web) = list_projects(query(Some("web"))).await.unwrap();
    assert!(web.iter().all(|p| p.category.as_str() == "web"));
}

#[tokio::test]
async fn list_rejects_unknown_category() {
    let err = list_projects(query(Some("embedded"))).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_items_carry_lowercase_category() {
    let Json(projects) = list_projects(query(Some("mobile"))).await.unwrap();
    let value = serde_json::to_value(&projects).unwrap();
    assert!(value.as_array().unwrap().iter().all(|p| p["category"] == "mobile"));
}

// =============================================================
// get_project
// =============================================================

#[tokio::test]
async fn get_returns_known_project() {
    let Json(project) = get_project(Path("pizza-ordering".to_owned())).await.unwrap();
    assert_eq!(project.id, "pizza-ordering");

    let value = serde_json::to_value(project).unwrap();
    assert!(value.get("fullDescription").is_some());
    assert!(value.get("full_description").is_none());
}

#[tokio::test]
async fn get_unknown_project_is_not_found() {
    let err = get_project(Path("no-such-project".to_owned())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
