use std::net::SocketAddr;

use tokio::net::TcpListener;
use unscramble::config::Config;
use unscramble::word_pool::WordPool;

use super::test_session::{SessionState, TestSession};

pub struct TestApp {
    pub base_address: String,
    pub words: WordPool,
    pub max_words: usize,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        TestApp::spawn_app_with(|_| {}).await
    }

    pub async fn spawn_app_with<F>(customize: F) -> TestApp
    where
        F: FnOnce(&mut Config),
    {
        // Binding to port 0 triggers an OS scan for an available port, this way we can run tests in parallel where each runs its own application
        let random_port_address = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(random_port_address)
            .await
            .expect("Failed to bind to bind random port.");
        let address = listener.local_addr().unwrap();
        let config = {
            let mut config = Config::get().expect("Failed to read configuration.");
            customize(&mut config);
            config
        };
        let words = WordPool::from_file(&config.game.words_file, config.game.max_words)
            .expect("Failed to read the words file.");
        let max_words = config.game.max_words;

        let server = unscramble::startup::create_web_server(config, listener)
            .expect("Failed to create the server.");
        let _ = tokio::spawn(server);

        TestApp {
            base_address: format!("localhost:{}", address.port()),
            words,
            max_words,
        }
    }

    pub async fn create_session(&self) -> TestSession {
        let response = reqwest::Client::new()
            .post(format!("http://{}/session", self.base_address))
            .send()
            .await
            .expect("Failed to execute CreateSession request.");
        assert!(response.status().is_success());

        let session_created: SessionCreatedResponse = response
            .json()
            .await
            .expect("Failed to parse SessionCreatedResponse.");
        assert!(!session_created.id.is_empty());

        TestSession {
            base_address: self.base_address.clone(),
            id: session_created.id,
            words: self.words.words().to_vec(),
            initial_state: session_created.state,
        }
    }
}

#[derive(serde::Deserialize)]
struct SessionCreatedResponse {
    id: String,
    state: SessionState,
}
