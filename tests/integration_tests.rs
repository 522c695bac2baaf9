use chrono::NaiveDate;
use delay_tracker::core::panel::PanelState;
use delay_tracker::{
    DraftSettings, FormSession, FormState, OpenAiDrafter, ProjectSelection, TrackerError,
};
use httpmock::prelude::*;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn settings_for(server: &MockServer) -> DraftSettings {
    DraftSettings {
        api_endpoint: server.url("/v1/chat/completions"),
        api_key: "test-key".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        temperature: 0.7,
    }
}

#[tokio::test]
async fn test_end_to_end_delay_to_email_with_real_http() {
    // Setup mock completion API
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("Authorization", "Bearer test-key")
            .body_contains("- Project: Construction Stadium")
            .body_contains("- Sub-project: Execution")
            .body_contains("- Activity: Sign-Off")
            .body_contains("- Planned Start Date: 2024-01-01")
            .body_contains("- Actual Start Date: 2024-02-15")
            .body_contains("- Delay: 45 days");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": "Dear Client,\n\nThe Sign-Off activity is delayed by 45 days.\n\nSincerely"
                    }
                }]
            }));
    });

    // Fill and submit the form
    let mut session = FormSession::new();
    session.selection = ProjectSelection::new("Construction Stadium", "Execution", "Sign-Off");
    session.planned_start = Some(date(2024, 1, 1));
    session.actual_start = Some(date(2024, 2, 15));

    let result = session.submit().unwrap();
    assert_eq!(result.total_days, 45);
    assert_eq!(
        result.message,
        "Notice of delay letter to be sent within 1 month, 15 days."
    );
    assert_eq!(
        session.timeline_route().as_deref(),
        Some("/gantt?startDate=2024-01-01&endDate=2024-02-15")
    );

    // Draft the email through the networked drafter
    let drafter = Arc::new(OpenAiDrafter::new(settings_for(&server)));
    let panel = session.open_email_panel(drafter).unwrap();

    match panel.wait().await {
        PanelState::Ready(body) => {
            assert!(body.contains("delayed by 45 days"));
        }
        state => panic!("expected a drafted email, got {:?}", state),
    }

    api_mock.assert();
}

#[tokio::test]
async fn test_backend_failure_surfaces_as_retryable_panel_state() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "Failed to generate email"}));
    });

    let mut session = FormSession::new();
    session.selection = ProjectSelection::new("Construction Studio", "Planning", "Final Delivery");
    session.planned_start = Some(date(2024, 3, 1));
    session.actual_start = Some(date(2024, 3, 10));
    session.submit().unwrap();

    let drafter = Arc::new(OpenAiDrafter::new(settings_for(&server)));
    let panel = session.open_email_panel(drafter).unwrap();

    // The failure lands in the panel state; nothing retries automatically,
    // so the mock is hit exactly once.
    assert!(matches!(panel.wait().await, PanelState::Failed(_)));
    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_validation_failure_never_reaches_the_network() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200);
    });

    let mut session = FormSession::new();
    session.selection = ProjectSelection::new("Construction Stadium", "Execution", "Sign-Off");
    session.planned_start = Some(date(2024, 2, 15));
    session.actual_start = Some(date(2024, 1, 1));

    let err = session.submit().unwrap_err();
    assert!(matches!(err, TrackerError::InvalidDateRange { .. }));

    // The session never left the editing state, so no panel can open and no
    // request is made.
    let drafter = Arc::new(OpenAiDrafter::new(settings_for(&server)));
    assert!(session.open_email_panel(drafter).is_err());
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_clear_returns_to_initial_state_mid_flight() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .delay(std::time::Duration::from_millis(200))
            .json_body(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "late"}}]
            }));
    });

    let mut session = FormSession::new();
    session.selection = ProjectSelection::new("Construction Stadium", "Initiation", "Sign-Off");
    session.planned_start = Some(date(2024, 5, 1));
    session.actual_start = Some(date(2024, 5, 2));
    session.submit().unwrap();

    let drafter = Arc::new(OpenAiDrafter::new(settings_for(&server)));
    session.open_email_panel(drafter).unwrap();

    // Clearing while the draft is in flight drops the panel; the late
    // response has nowhere to land and the session is back to editing.
    session.clear();
    assert!(session.panel_mut().is_none());
    assert!(matches!(session.state(), FormState::Editing { error: None }));
}
