use std::sync::Arc;

use campusgate::modules::guard::{RouteDecision, RouteGuard};
use campusgate::modules::nav::NavigationFilter;
use campusgate::modules::session::{SessionPhase, identity_for_email};
use campusgate::registry::default_registry;
use campusgate_models::sections::section_ids;
use campusgate_models::value_types::Email;

fn filter() -> NavigationFilter {
    NavigationFilter::new(Arc::new(default_registry()))
}

fn authenticated(email: &str) -> SessionPhase {
    SessionPhase::Authenticated(identity_for_email(&Email::new_unchecked(email)))
}

#[test]
fn test_no_entries_without_an_identity() {
    let filter = filter();
    assert!(filter.visible_entries(&SessionPhase::Anonymous).is_empty());
    assert!(filter.visible_entries(&SessionPhase::Settling).is_empty());
}

#[test]
fn test_administrator_sees_everything_but_grades() {
    let filter = filter();
    let entries = filter.visible_entries(&authenticated("admin@college.edu"));

    let sections: Vec<&str> = entries.iter().map(|e| e.section.as_str()).collect();
    assert!(!sections.contains(&section_ids::GRADES));
    assert_eq!(entries.len(), section_ids::all().len() - 1);
}

#[test]
fn test_student_sees_only_student_sections() {
    let filter = filter();
    let entries = filter.visible_entries(&authenticated("someone@college.edu"));

    let sections: Vec<&str> = entries.iter().map(|e| e.section.as_str()).collect();
    assert_eq!(
        sections,
        vec![
            section_ids::DASHBOARD,
            section_ids::GRADES,
            section_ids::PROFILE
        ]
    );
}

#[test]
fn test_entries_preserve_registry_order() {
    let filter = filter();
    let entries = filter.visible_entries(&authenticated("head@college.edu"));

    let all = section_ids::all();
    let positions: Vec<usize> = entries
        .iter()
        .map(|e| all.iter().position(|id| *id == e.section).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_entries_carry_label_and_icon() {
    let filter = filter();
    let entries = filter.visible_entries(&authenticated("someone@college.edu"));

    let dashboard = &entries[0];
    assert_eq!(dashboard.section, section_ids::DASHBOARD);
    assert_eq!(dashboard.label, "Dashboard");
    assert_eq!(dashboard.icon, "lucide:layout-dashboard");
}

#[test]
fn test_visible_entries_match_guard_decisions() {
    // The sidebar must show a section exactly when the guard would allow it
    let registry = Arc::new(default_registry());
    let filter = NavigationFilter::new(registry.clone());
    let guard = RouteGuard::new(registry);

    for email in [
        "admin@college.edu",
        "rector@college.edu",
        "head@college.edu",
        "instructor@college.edu",
        "someone@college.edu",
    ] {
        let session = authenticated(email);
        let visible: Vec<String> = filter
            .visible_entries(&session)
            .into_iter()
            .map(|e| e.section)
            .collect();

        for section in section_ids::all() {
            let allowed =
                guard.evaluate(&session, section) == Ok(RouteDecision::Allowed);
            assert_eq!(
                visible.contains(&section.to_string()),
                allowed,
                "nav and guard disagree on '{}' for '{}'",
                section,
                email
            );
        }
    }
}
