//! End-to-end export tests: generator output through each backend

use std::time::Duration;

use tally_sheets::prelude::*;

fn two_team_snapshot() -> MatchSnapshot {
    MatchSnapshot {
        players: vec![
            PlayerRef::new("p1", "Alice", "t1"),
            PlayerRef::new("p2", "Bob", "t1"),
            PlayerRef::new("p3", "Cara", "t2"),
        ],
        team_names: TeamNameMap::from([("t1", "Alpha"), ("t2", "Beta")]),
        phases: vec![
            PhaseRecord {
                actions: vec![ScoringAction::new("p1", 10)],
                bonus: Some(BonusOutcome::new("t1", vec![10, 0, 10])),
            },
            PhaseRecord {
                actions: vec![ScoringAction::new("p3", -5), ScoringAction::new("p2", 10)],
                bonus: Some(BonusOutcome::new("t1", vec![0, 0, 0])),
            },
        ],
    }
}

fn test_account() -> ServiceAccount {
    ServiceAccount {
        email: "exporter@example-project.iam.gserviceaccount.com".to_string(),
        token: "test-token".to_string(),
    }
}

fn test_config(base_url: String) -> SheetsConfig {
    SheetsConfig {
        base_url,
        retry_base_delay: Duration::from_millis(1),
    }
}

const TARGET: &str = "https://docs.google.com/spreadsheets/d/doc123/edit";

#[tokio::test]
async fn cloud_export_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let clear = server
        .mock("POST", "/v4/spreadsheets/doc123/values:batchClear")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let update = server
        .mock("POST", "/v4/spreadsheets/doc123/values:batchUpdate")
        .with_status(200)
        .with_body(r#"{"responses":[{"updatedCells":12}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = SheetsClient::new();
    client.configure(test_account(), test_config(server.url()));

    let outcome = export_scoresheet(
        &two_team_snapshot(),
        ScoresheetFormat::CloudTotals,
        3,
        Some(TARGET),
        &client,
    )
    .await
    .unwrap();

    assert_eq!(outcome.message, "Round 3 scoresheet updated.");
    assert!(outcome.workbook.is_none());
    clear.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn cloud_export_requires_a_target() {
    let client = SheetsClient::new();
    let err = export_scoresheet(
        &two_team_snapshot(),
        ScoresheetFormat::CloudParts,
        1,
        None,
        &client,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ExportError::MissingTarget));
}

#[tokio::test]
async fn file_export_returns_workbook_bytes() {
    let client = SheetsClient::new();
    let outcome = export_scoresheet(
        &two_team_snapshot(),
        ScoresheetFormat::FileWorkbook,
        1,
        None,
        &client,
    )
    .await
    .unwrap();

    assert_eq!(outcome.message, "Round 1 scoresheet exported.");
    let bytes = outcome.workbook.expect("file format yields a workbook");
    // XLSX packages are ZIP archives.
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn trim_advisory_reaches_the_message() {
    let mut snapshot = two_team_snapshot();
    let capacity = ScoresheetFormat::FileWorkbook
        .parameters()
        .phase_row_capacity as usize;
    while snapshot.phases.len() <= capacity + 1 {
        snapshot.phases.push(PhaseRecord {
            actions: vec![ScoringAction::new("p1", 10)],
            bonus: None,
        });
    }

    let client = SheetsClient::new();
    let outcome = export_scoresheet(&snapshot, ScoresheetFormat::FileWorkbook, 2, None, &client)
        .await
        .unwrap();
    assert!(outcome.message.ends_with(GeneratedSheet::TRIM_ADVISORY));
}

#[tokio::test]
async fn generator_errors_pass_through() {
    let snapshot = MatchSnapshot::default();
    let client = SheetsClient::new();
    let err = export_scoresheet(&snapshot, ScoresheetFormat::CloudTotals, 1, Some(TARGET), &client)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Generator(_)));
}

#[tokio::test]
async fn roster_export_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let update = server
        .mock("POST", "/v4/spreadsheets/doc123/values:batchUpdate")
        .with_status(200)
        .with_body(r#"{"responses":[{"updatedCells":5}]}"#)
        .create_async()
        .await;
    // Roster clears come from the format's fixed clear list.
    let clear = server
        .mock("POST", "/v4/spreadsheets/doc123/values:batchClear")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = SheetsClient::new();
    client.configure(test_account(), test_config(server.url()));

    let snapshot = two_team_snapshot();
    let outcome = export_rosters(
        &snapshot.players,
        &snapshot.team_names,
        ScoresheetFormat::CloudTotals,
        Some(TARGET),
        &client,
    )
    .await
    .unwrap();

    assert_eq!(outcome.message, "Rosters updated.");
    clear.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn roster_file_export() {
    let snapshot = two_team_snapshot();
    let client = SheetsClient::new();
    let outcome = export_rosters(
        &snapshot.players,
        &snapshot.team_names,
        ScoresheetFormat::FileWorkbook,
        None,
        &client,
    )
    .await
    .unwrap();
    assert_eq!(outcome.message, "Rosters exported.");
    assert!(outcome.workbook.is_some());
}
