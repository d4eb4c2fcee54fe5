use crate::helpers::test_app::TestApp;

#[tokio::test]
async fn metrics_include_active_sessions() {
    let app = TestApp::spawn_app().await;
    let _session = app.create_session().await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/metrics", app.base_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("unscramble_active_sessions"));
    assert!(body.contains("unscramble_finished_games"));
}
