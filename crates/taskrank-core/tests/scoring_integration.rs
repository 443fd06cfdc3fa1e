//! Integration tests for the scoring engine.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use taskrank_core::scoring::{dependency_score, urgency_for_days, urgency_score};
use taskrank_core::{
    apply_scores, calculate_priority_score, generate_task_explanation, get_top_tasks_for_today,
    score_tasks, BlockedCounts, Task,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn due(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

#[test]
fn test_reference_collection_ranks_urgent_quick_task_first() {
    let tasks = vec![
        Task::new(1, "Ship hotfix", due(1), 2.0, 10),
        Task::new(2, "Quarterly plan", due(30), 20.0, 2),
        Task::new(3, "Refactor module", due(7), 5.0, 5),
    ];
    let scored = score_tasks(&tasks, today());
    assert_eq!(scored[0].task_id, 1);
}

#[test]
fn test_overdue_quick_task_dominates_distant_blocked_one() {
    let perfect = Task::new(1, "Perfect", due(-1), 1.0, 10);
    let worst = Task::new(2, "Worst", due(60), 40.0, 1).with_dependencies([1, 3, 4]);
    let perfect_score = calculate_priority_score(&perfect, today(), None);
    let worst_score = calculate_priority_score(&worst, today(), None);
    assert!(
        perfect_score > worst_score * 3.0,
        "{perfect_score} vs {worst_score}"
    );
}

#[test]
fn test_blocker_outranks_identical_dependent() {
    let mut tasks = vec![
        Task::new(1, "Design", due(5), 4.0, 6),
        Task::new(2, "Build", due(5), 4.0, 6).with_dependencies([1]),
        Task::new(3, "Test", due(5), 4.0, 6).with_dependencies([1, 2]),
    ];
    let scored = score_tasks(&tasks, today());
    let order: Vec<u64> = scored.iter().map(|s| s.task_id).collect();
    assert_eq!(order, vec![1, 2, 3]);

    apply_scores(&mut tasks, &scored);
    assert!(tasks[0].priority_score > tasks[1].priority_score);
    assert!(tasks[1].priority_score > tasks[2].priority_score);
}

#[test]
fn test_tiebreak_by_due_date_is_a_caller_concern() {
    let tasks = vec![
        Task::new(1, "Later", due(3001), 3.0, 9),
        Task::new(2, "Sooner", due(3000), 3.0, 9),
    ];
    let mut scored = score_tasks(&tasks, today());
    // Both land on the same rounded urgency, so engine order is input order.
    assert_eq!(scored[0].priority_score, scored[1].priority_score);
    assert_eq!(scored[0].task_id, 1);

    scored.sort_by(|a, b| {
        b.priority_score
            .total_cmp(&a.priority_score)
            .then_with(|| tasks[a.index].due_date.cmp(&tasks[b.index].due_date))
    });
    assert_eq!(scored[0].task_id, 2);
}

#[test]
fn test_single_task_has_no_dependency_term() {
    let task = Task::new(1, "Solo", due(3), 3.0, 5).with_dependencies([1]);
    assert_eq!(dependency_score(&task, None), 0.0);
    let scored = score_tasks(std::slice::from_ref(&task), today());
    assert_eq!(scored[0].breakdown.dependency, 0.0);
}

#[test]
fn test_suggestions_explain_top_entries() {
    let tasks = vec![
        Task::new(1, "Standup notes", due(0), 1.0, 9),
        Task::new(2, "Backlog grooming", due(10), 6.0, 3),
        Task::new(3, "Migration", due(-2), 30.0, 8),
        Task::new(4, "Docs", due(2), 3.0, 5),
    ];
    let top = get_top_tasks_for_today(&tasks, today(), 3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].scored.task_id, 1);
    assert_eq!(
        top[0].explanation,
        "🔥 Due TODAY • ⭐ High importance (9/10) • ✅ Quick task (1h)"
    );
    assert!(top.iter().all(|s| s.scored.task_id != 2));
    assert_eq!(
        generate_task_explanation(&tasks[1], today()),
        "Standard priority task"
    );
}

proptest! {
    #[test]
    fn prop_urgency_strictly_decreasing_in_short_range(d in 2i64..60) {
        prop_assert!(urgency_for_days(d) > urgency_for_days(d + 1));
    }

    #[test]
    fn prop_urgency_never_increases(d in 2i64..5000) {
        prop_assert!(urgency_for_days(d) >= urgency_for_days(d + 1));
    }

    #[test]
    fn prop_overdue_urgency_is_max(d in -10_000i64..=0) {
        let task = Task::new(1, "t", due(d), 1.0, 1);
        prop_assert_eq!(urgency_score(&task, today()), 100.0);
    }

    #[test]
    fn prop_dependency_term_bounded(dependents in 0usize..12) {
        let mut tasks = vec![Task::new(1, "root", due(3), 1.0, 5)];
        for i in 0..dependents {
            tasks.push(Task::new(i as u64 + 2, "leaf", due(3), 1.0, 5).with_dependencies([1]));
        }
        let counts = BlockedCounts::from_collection(&tasks);
        let score = dependency_score(&tasks[0], Some(&counts));
        prop_assert_eq!(score, (dependents as f64 * 15.0).min(50.0));
    }

    #[test]
    fn prop_scores_rounded_and_idempotent(
        specs in prop::collection::vec((-30i64..120, 1u32..=500, 1u8..=10), 1..20)
    ) {
        let tasks: Vec<Task> = specs
            .iter()
            .enumerate()
            .map(|(i, (days, tenths, importance))| {
                let deps = if i > 0 { vec![i as u64] } else { Vec::new() };
                Task::new(i as u64 + 1, "t", due(*days), *tenths as f64 / 10.0, *importance)
                    .with_dependencies(deps)
            })
            .collect();

        let first = score_tasks(&tasks, today());
        let second = score_tasks(&tasks, today());
        prop_assert_eq!(&first, &second);

        for s in &first {
            let cents = s.priority_score * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
        for pair in first.windows(2) {
            prop_assert!(pair[0].priority_score >= pair[1].priority_score);
        }
    }
}
