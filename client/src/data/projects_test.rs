use super::*;
use std::collections::HashSet;

#[test]
fn catalog_ids_are_unique() {
    let mut seen = HashSet::new();
    for project in PROJECTS {
        assert!(seen.insert(project.id), "duplicate project id {}", project.id);
    }
}

#[test]
fn catalog_counts_by_category() {
    let count = |c: Category| PROJECTS.iter().filter(|p| p.category == c).count();
    assert_eq!(PROJECTS.len(), 9);
    assert_eq!(count(Category::Mobile), 3);
    assert_eq!(count(Category::Desktop), 2);
    assert_eq!(count(Category::Web), 4);
}

#[test]
fn find_project_resolves_known_id() {
    let project = find_project("pizza-ordering").expect("pizza-ordering should exist");
    assert_eq!(project.title, "Pizza Ordering System");
    assert_eq!(project.category, Category::Desktop);
}

#[test]
fn find_project_unknown_id_is_none() {
    assert!(find_project("does-not-exist").is_none());
    assert!(find_project("").is_none());
}

#[test]
fn overview_prefers_full_description() {
    let project = find_project("car-rental").unwrap();
    assert_eq!(project.overview(), project.full_description.unwrap());

    let mut short_only = project.clone();
    short_only.full_description = None;
    assert_eq!(short_only.overview(), project.description);
}

#[test]
fn screenshot_list_is_empty_when_absent() {
    assert!(find_project("car-rental").unwrap().screenshot_list().is_empty());
    assert_eq!(find_project("pizza-ordering").unwrap().screenshot_list().len(), 3);
}

#[test]
fn every_project_has_title_description_and_technologies() {
    for project in PROJECTS {
        assert!(!project.title.is_empty(), "{} has no title", project.id);
        assert!(!project.description.is_empty(), "{} has no description", project.id);
        assert!(!project.technologies.is_empty(), "{} has no technologies", project.id);
    }
}

#[test]
fn category_parse_round_trips_labels() {
    for category in Category::ALL {
        assert_eq!(Category::parse(category.as_str()), Some(category));
    }
    assert_eq!(Category::parse("Mobile"), None);
    assert_eq!(Category::parse("all"), None);
}

#[test]
fn project_serializes_with_camel_case_and_skips_missing_fields() {
    let value = serde_json::to_value(find_project("smart-campus-system").unwrap()).unwrap();
    assert_eq!(value["category"], "web");
    assert!(value.get("fullDescription").is_some());
    assert!(value.get("myContribution").is_some());
    assert!(value.get("demo").is_none());
    assert!(value.get("screenshots").is_none());
}
