use std::sync::Arc;

use chrono::NaiveDateTime;
use guardpost_domain::{GeneratedShift, PositionId, ShiftWindow, SoldierId};

use crate::test_support::FakeRosterGateway;

use super::ShiftPlanningService;

fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").unwrap_or_else(|_| unreachable!())
}

fn proposal(station: &str, soldier: i64) -> GeneratedShift {
    GeneratedShift {
        station: station.to_owned(),
        soldier_id: SoldierId::from_raw(soldier),
        soldier_name: format!("soldier {soldier}"),
        start_time: timestamp("2026-08-28T08:00:00"),
        end_time: timestamp("2026-08-28T12:00:00"),
    }
}

fn windows() -> Vec<ShiftWindow> {
    vec![
        ShiftWindow::parse("08:00-12:00").unwrap_or_else(|_| unreachable!()),
        ShiftWindow::parse("12:00-16:00").unwrap_or_else(|_| unreachable!()),
    ]
}

#[tokio::test]
async fn empty_window_list_is_rejected_before_any_call() {
    let gateway = Arc::new(FakeRosterGateway::default());
    let service = ShiftPlanningService::new(gateway.clone());

    assert!(service.generate_and_commit(&[]).await.is_err());
    assert!(gateway.created_duties.lock().await.is_empty());
    assert_eq!(*gateway.duty_list_calls.lock().await, 0);
}

#[tokio::test]
async fn generation_failure_aborts_the_whole_run() {
    let gateway = Arc::new(FakeRosterGateway::default());
    gateway.seed_position(7, "Gate").await;
    *gateway.generate_failure.lock().await = Some("collaborator unreachable".to_owned());
    let service = ShiftPlanningService::new(gateway.clone());

    assert!(service.generate_and_commit(&windows()).await.is_err());
    assert!(gateway.created_duties.lock().await.is_empty());
    assert_eq!(*gateway.duty_list_calls.lock().await, 0);
}

#[tokio::test]
async fn unresolvable_station_is_skipped_without_aborting_siblings() {
    let gateway = Arc::new(FakeRosterGateway::default());
    gateway.seed_position(7, "Gate").await;
    gateway.generate_response.lock().await.generated_shifts =
        vec![proposal("Watchtower", 4), proposal("Gate", 5)];
    let service = ShiftPlanningService::new(gateway.clone());

    let outcome = service
        .generate_and_commit(&windows())
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(outcome.skipped.len(), 1);
    assert!(outcome.skipped[0].contains("Watchtower"));
    assert_eq!(outcome.committed, 1);

    let attempted = gateway.created_duties.lock().await;
    assert_eq!(attempted.len(), 1);
    assert_eq!(attempted[0].soldier_id, SoldierId::from_raw(5));
}

#[tokio::test]
async fn partial_commit_failure_preserves_the_successes() {
    let gateway = Arc::new(FakeRosterGateway::default());
    gateway.seed_position(7, "Gate").await;
    gateway.generate_response.lock().await.generated_shifts =
        vec![proposal("Gate", 4), proposal("Gate", 5)];
    gateway
        .failing_duty_soldiers
        .lock()
        .await
        .push(SoldierId::from_raw(4));
    let service = ShiftPlanningService::new(gateway.clone());

    let outcome = service
        .generate_and_commit(&windows())
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(outcome.committed, 1);
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].contains("soldier 4"));

    // The refreshed roster reflects exactly the successful commit.
    assert_eq!(outcome.duties.len(), 1);
    assert_eq!(outcome.duties[0].soldier, "soldier 5");
    assert_eq!(*gateway.duty_list_calls.lock().await, 1);
}

#[tokio::test]
async fn gate_scenario_commits_one_duty_and_carries_the_warning() {
    let gateway = Arc::new(FakeRosterGateway::default());
    gateway.seed_position(7, "Gate").await;
    {
        let mut response = gateway.generate_response.lock().await;
        response.warnings = vec!["Position X understaffed".to_owned()];
        response.generated_shifts = vec![proposal("Gate", 5)];
    }
    let service = ShiftPlanningService::new(gateway.clone());

    let outcome = service
        .generate_and_commit(&windows())
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(outcome.warnings, ["Position X understaffed"]);
    assert_eq!(outcome.committed, 1);
    assert!(outcome.skipped.is_empty());
    assert!(outcome.failures.is_empty());

    let attempted = gateway.created_duties.lock().await;
    assert_eq!(attempted.len(), 1);
    assert_eq!(attempted[0].soldier_id, SoldierId::from_raw(5));
    assert_eq!(attempted[0].position_id, PositionId::from_raw(7));
    assert_eq!(attempted[0].start_time, timestamp("2026-08-28T08:00:00"));
    assert_eq!(attempted[0].end_time, timestamp("2026-08-28T12:00:00"));
    assert_eq!(*gateway.duty_list_calls.lock().await, 1);
}
