use super::*;

// =============================================================
// ModalState transitions
// =============================================================

#[test]
fn modal_default_is_closed() {
    let modal = ModalState::default();
    assert!(!modal.is_open());
    assert!(modal.project().is_none());
}

#[test]
fn open_known_project_selects_it() {
    let mut modal = ModalState::default();
    assert!(modal.open("pizza-ordering"));
    assert!(modal.is_open());
    assert_eq!(modal.project().map(|p| p.id), Some("pizza-ordering"));
}

#[test]
fn open_unknown_project_leaves_state_unchanged() {
    let mut modal = ModalState::default();
    assert!(!modal.open("missing"));
    assert_eq!(modal, ModalState::Closed);

    modal.open("car-rental");
    assert!(!modal.open("missing"));
    assert_eq!(modal.project().map(|p| p.id), Some("car-rental"));
}

#[test]
fn close_returns_to_closed() {
    let mut modal = ModalState::default();
    modal.open("news-headlines");
    modal.close();
    assert_eq!(modal, ModalState::Closed);
    modal.close();
    assert_eq!(modal, ModalState::Closed);
}

// =============================================================
// ProjectDetail
// =============================================================

#[test]
fn detail_renders_title_and_description_for_every_project() {
    for project in crate::data::projects::PROJECTS {
        let mut modal = ModalState::default();
        assert!(modal.open(project.id));
        let detail = ProjectDetail::new(modal.project().unwrap());
        assert_eq!(detail.title(), project.title);
        assert_eq!(detail.overview(), project.full_description.unwrap_or(project.description));
    }
}

#[test]
fn detail_facts_include_present_fields_then_type() {
    let detail = ProjectDetail::new(find_project("pizza-ordering").unwrap());
    let labels: Vec<_> = detail.facts().iter().map(|f| f.label).collect();
    assert_eq!(labels, vec!["Duration", "Team", "Type"]);
    assert_eq!(detail.facts()[2].value, "Desktop Application");
}

#[test]
fn detail_facts_skip_missing_duration_and_team() {
    let mut project = find_project("car-rental").unwrap().clone();
    project.duration = None;
    project.team = None;
    let project: &'static Project = Box::leak(Box::new(project));
    let facts = ProjectDetail::new(project).facts();
    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].label, "Type");
}

#[test]
fn challenges_render_only_when_solutions_exist_too() {
    let with_both = ProjectDetail::new(find_project("transportation-app").unwrap());
    assert!(with_both.challenges_and_solutions().is_some());

    let without = ProjectDetail::new(find_project("car-rental").unwrap());
    assert!(without.challenges_and_solutions().is_none());

    let mut half = find_project("pizza-ordering").unwrap().clone();
    half.solutions = None;
    let half: &'static Project = Box::leak(Box::new(half));
    assert!(ProjectDetail::new(half).challenges_and_solutions().is_none());
}

#[test]
fn contribution_empty_unless_provided() {
    assert!(ProjectDetail::new(find_project("pizza-ordering").unwrap()).contribution().is_empty());
    assert_eq!(
        ProjectDetail::new(find_project("smart-campus-system").unwrap())
            .contribution()
            .len(),
        6
    );
}

#[test]
fn links_list_source_before_demo() {
    let detail = ProjectDetail::new(find_project("flutter-news-app").unwrap());
    let labels: Vec<_> = detail.links().iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["View Source Code", "Live Demo"]);

    let source_only = ProjectDetail::new(find_project("car-rental").unwrap());
    assert_eq!(source_only.links().len(), 1);
    assert!(!source_only.links()[0].primary);
}

#[test]
fn header_image_shown_without_screenshots() {
    let detail = ProjectDetail::new(find_project("the-ruin-ui").unwrap());
    assert!(detail.screenshots().is_empty());
    assert_eq!(detail.header_image(), Some("/assets/theRuin/Main.jpg"));
    assert_eq!(detail.category_badge(), ("🌐", "Web"));
}

#[test]
fn header_image_missing_when_project_has_none() {
    let mut bare = find_project("car-rental").unwrap().clone();
    bare.image = None;
    let bare: &'static Project = Box::leak(Box::new(bare));
    assert_eq!(ProjectDetail::new(bare).header_image(), None);
}
