use chrono::NaiveDate;
use recovery_backup::{BackupConfig, BackupError, BackupOutcome, Exporter};
use recovery_store_client::config::Config;
use recovery_store_client::http_client::ReqwestRecoveryStore;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn exporter_for(server: &MockServer, backup_dir: &std::path::Path) -> Exporter {
    let uri = server.uri();
    let cfg = Config::from_env_with(|k| match k {
        "RECOVERY_STORE_URL" => Some(format!("{uri}/")),
        "RECOVERY_STORE_KEY" => Some("anon-key".into()),
        _ => None,
    })
    .expect("store config");
    let store = ReqwestRecoveryStore::from_config(&cfg).expect("client");
    Exporter::new(Arc::new(store), cfg.table, BackupConfig::new(backup_dir))
}

#[tokio::test]
async fn backs_up_table_served_over_http() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {"date": "2024-01-01", "m_ready": 87, "oura_rec": 91, "notes": "felt\ngood"},
        {"date": "2024-01-02", "m_ready": 80, "resistance": "N", "joint": 1, "notes": ""}
    ]);
    Mock::given(method("GET"))
        .and(path("/rest/v1/daily_entries"))
        .and(query_param("select", "*"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let outcome = exporter_for(&server, dir.path())
        .run_on(date)
        .await
        .expect("run");
    assert!(matches!(outcome, BackupOutcome::Written(ref r) if r.rows == 2));

    let csv = std::fs::read_to_string(dir.path().join("recovery-data-2024-06-30.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "2024-01-01,87,,91,,,,,,,,,,,felt good");
    assert_eq!(lines[2], "2024-01-02,80,,,,,,,,,,,N,1,");

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("recovery-data-2024-06-30.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json, body);
}

#[tokio::test]
async fn empty_table_over_http_is_a_no_op() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/daily_entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let backup_dir = dir.path().join("out");
    let outcome = exporter_for(&server, &backup_dir)
        .run_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .await
        .expect("run");
    assert_eq!(outcome, BackupOutcome::Empty);
    assert!(!backup_dir.exists());
}

#[tokio::test]
async fn rejected_key_fails_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/daily_entries"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = exporter_for(&server, dir.path())
        .run_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .await
        .expect_err("should fail");
    assert!(matches!(err, BackupError::Store(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
