use crate::helpers::test_app::TestApp;

#[tokio::test]
async fn create_session_works() {
    let app = TestApp::spawn_app().await;

    let session = app.create_session().await;

    let state = session.initial_state;
    assert_eq!(state.status, "PLAYING");
    assert_eq!(state.score, 0);
    assert_eq!(state.words_played, 0);
    assert_eq!(state.max_words, 10);
    assert_eq!(state.final_score, None);
    assert!(!state.scrambled_word.is_empty());
}

#[tokio::test]
async fn get_session_returns_the_current_state() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;

    let state = session.state().await.unwrap();

    assert_eq!(state, session.initial_state);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let app = TestApp::spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/session/nope1/skip", app.base_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_guess_shows_an_error_and_keeps_the_word() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;

    let state = session.guess("definitely not the word").await.unwrap();

    assert_eq!(state.input_error, Some("Try again!".to_string()));
    assert!(!state.clear_input);
    assert_eq!(state.score, 0);
    assert_eq!(state.words_played, 0);
    assert_eq!(state.scrambled_word, session.initial_state.scrambled_word);
}

#[tokio::test]
async fn correct_guess_scores_and_clears_the_input() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;
    let _ = session.guess("wrong").await.unwrap();

    let state = session.guess_correctly(&session.initial_state).await;

    assert_eq!(state.input_error, None);
    assert!(state.clear_input);
    assert_eq!(state.score, 20);
    assert_eq!(state.words_played, 1);
}

#[tokio::test]
async fn correct_guess_tolerates_surrounding_whitespace() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;
    let word = session.unscramble(&session.initial_state.scrambled_word);

    let state = session.guess(&format!("  {word} ")).await.unwrap();

    assert_eq!(state.score, 20);
}

#[tokio::test]
async fn skip_moves_on_without_scoring() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;

    let state = session.skip().await.unwrap();

    assert_eq!(state.score, 0);
    assert_eq!(state.words_played, 1);
    assert_eq!(state.status, "PLAYING");
}

#[tokio::test]
async fn ten_correct_guesses_show_a_final_score_of_two_hundred() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;
    let mut state = session.initial_state.clone();
    let mut seen_words = vec![];

    for _ in 0..app.max_words {
        assert_eq!(state.status, "PLAYING");
        seen_words.push(session.unscramble(&state.scrambled_word));
        state = session.guess_correctly(&state).await;
    }

    assert_eq!(state.status, "SHOWING_SUMMARY");
    assert_eq!(state.score, 200);
    assert_eq!(state.words_played, 10);
    assert_eq!(state.final_score, Some(200));
    seen_words.sort();
    seen_words.dedup();
    assert_eq!(seen_words.len(), 10);
}

#[tokio::test]
async fn summary_blocks_guesses_and_skips() {
    let app = TestApp::spawn_app_with(|config| config.game.max_words = 1).await;
    let session = app.create_session().await;
    let state = session.skip().await.unwrap();
    assert_eq!(state.status, "SHOWING_SUMMARY");

    let error = session.skip().await.unwrap_err();
    assert_eq!(error.r#type, "GAME_FINISHED");

    let error = session.guess("anything").await.unwrap_err();
    assert_eq!(error.r#type, "GAME_FINISHED");
}

#[tokio::test]
async fn summary_choice_is_rejected_while_playing() {
    let app = TestApp::spawn_app().await;
    let session = app.create_session().await;

    let error = session.choose("PLAY_AGAIN").await.unwrap_err();

    assert_eq!(error.r#type, "GAME_IN_PROGRESS");
}

#[tokio::test]
async fn play_again_restarts_the_game() {
    let app = TestApp::spawn_app_with(|config| config.game.max_words = 2).await;
    let session = app.create_session().await;
    let state = session.guess_correctly(&session.initial_state).await;
    let state = session.guess_correctly(&state).await;
    assert_eq!(state.final_score, Some(40));

    let state = session.choose("PLAY_AGAIN").await.unwrap();

    assert_eq!(state.status, "PLAYING");
    assert_eq!(state.score, 0);
    assert_eq!(state.words_played, 0);
    assert_eq!(state.final_score, None);
}

#[tokio::test]
async fn exit_ends_the_session() {
    let app = TestApp::spawn_app_with(|config| config.game.max_words = 1).await;
    let session = app.create_session().await;
    let _ = session.skip().await.unwrap();

    let state = session.choose("EXIT").await.unwrap();
    assert_eq!(state.status, "EXITED");
    assert_eq!(state.final_score, Some(0));

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let error = session.state().await.unwrap_err();
    assert_eq!(error.r#type, "SESSION_DOES_NOT_EXIST");
}

#[tokio::test]
async fn inactive_session_is_removed() {
    let app = TestApp::spawn_app_with(|config| config.game.inactivity_timeout_seconds = 1).await;
    let session = app.create_session().await;

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    let error = session.state().await.unwrap_err();
    assert_eq!(error.r#type, "SESSION_DOES_NOT_EXIST");
}
