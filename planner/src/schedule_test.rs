use super::*;
use crate::subject::{Complexity, Priority};

fn subject(id: i64, priority: u8, complexity: u8) -> Subject {
    Subject {
        id,
        name: format!("subject-{id}"),
        days_left: 10,
        total_units: 10,
        completed_units: 0,
        priority: Priority(priority),
        complexity: Complexity(complexity),
    }
}

fn ids(plan: &DailyPlan) -> Vec<i64> {
    plan.sessions.iter().map(|s| s.subject_id).collect()
}

#[test]
fn session_duration_and_value_follow_ratings() {
    let session = Session::for_subject(&subject(1, 2, 3));
    assert_eq!(session.duration_minutes, 60);
    assert_eq!(session.base_value, 4.0);
}

#[test]
fn plan_day_fills_the_limit_and_returns_last_subject_first() {
    let subjects = vec![subject(1, 1, 1), subject(2, 3, 2), subject(3, 5, 5)];
    let plan = plan_day(&subjects, 90);
    assert_eq!(ids(&plan), vec![2, 1]);
    assert_eq!(plan.total_minutes, 90);
    assert!((plan.total_value - 7.7).abs() < 1e-9);
}

#[test]
fn plan_day_applies_fatigue_to_each_added_session() {
    let subjects = vec![subject(1, 5, 1), subject(2, 5, 1), subject(3, 5, 1)];
    let plan = plan_day(&subjects, 120);
    assert_eq!(ids(&plan), vec![3, 2, 1]);
    assert!((plan.total_value - 2.7).abs() < 1e-9);
}

#[test]
fn plan_day_keeps_earlier_subject_on_tie() {
    let subjects = vec![subject(1, 5, 1), subject(2, 5, 1)];
    let plan = plan_day(&subjects, 40);
    assert_eq!(ids(&plan), vec![1]);
}

#[test]
fn plan_day_is_empty_when_nothing_fits() {
    let subjects = vec![subject(1, 1, 5)];
    let plan = plan_day(&subjects, 30);
    assert!(plan.sessions.is_empty());
    assert_eq!(plan.total_minutes, 0);
    assert_eq!(plan.total_value, 0.0);
}

#[test]
fn plan_day_handles_no_subjects() {
    assert_eq!(plan_day(&[], 240), DailyPlan::default());
}

#[test]
fn plan_day_clamps_the_limit_to_one_day() {
    let subjects = (1..=40).map(|id| subject(id, 1, 1)).collect::<Vec<_>>();
    let plan = plan_day(&subjects, u32::MAX);
    assert_eq!(plan, plan_day(&subjects, MAX_DAY_MINUTES));
    assert!(plan.total_minutes <= MAX_DAY_MINUTES);
    assert!(!plan.sessions.is_empty());
}
