use serde::{Deserialize, Serialize};

pub struct TestSession {
    pub base_address: String,
    pub id: String,
    pub words: Vec<String>,
    pub initial_state: SessionState,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub status: String,
    pub scrambled_word: String,
    pub score: u32,
    pub words_played: usize,
    pub max_words: usize,
    pub input_error: Option<String>,
    pub clear_input: bool,
    pub final_score: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub r#type: String,
    pub title: String,
    pub detail: String,
}

#[derive(Serialize)]
struct SubmitWordRequest<'a> {
    word: &'a str,
}

#[derive(Serialize)]
struct SummaryChoiceRequest<'a> {
    choice: &'a str,
}

impl TestSession {
    pub async fn state(&self) -> Result<SessionState, ErrorResponse> {
        let response = reqwest::Client::new()
            .get(self.url(""))
            .send()
            .await
            .expect("Failed to execute GetSession request.");
        TestSession::parse(response).await
    }

    pub async fn guess(&self, word: &str) -> Result<SessionState, ErrorResponse> {
        let response = reqwest::Client::new()
            .post(self.url("/guess"))
            .json(&SubmitWordRequest { word })
            .send()
            .await
            .expect("Failed to execute Guess request.");
        TestSession::parse(response).await
    }

    pub async fn skip(&self) -> Result<SessionState, ErrorResponse> {
        let response = reqwest::Client::new()
            .post(self.url("/skip"))
            .send()
            .await
            .expect("Failed to execute Skip request.");
        TestSession::parse(response).await
    }

    pub async fn choose(&self, choice: &str) -> Result<SessionState, ErrorResponse> {
        let response = reqwest::Client::new()
            .post(self.url("/summary"))
            .json(&SummaryChoiceRequest { choice })
            .send()
            .await
            .expect("Failed to execute SummaryChoice request.");
        TestSession::parse(response).await
    }

    /// Finds the word behind a scramble. The bundled word list has no two words made of the same letters.
    pub fn unscramble(&self, scrambled_word: &str) -> String {
        let letters = sorted_chars(scrambled_word);
        self.words
            .iter()
            .find(|word| sorted_chars(word) == letters)
            .cloned()
            .expect("The scrambled word does not come from the word list.")
    }

    pub async fn guess_correctly(&self, state: &SessionState) -> SessionState {
        let word = self.unscramble(&state.scrambled_word);
        self.guess(&word).await.expect("The correct guess failed.")
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}/session/{}{}", self.base_address, self.id, path)
    }

    async fn parse(response: reqwest::Response) -> Result<SessionState, ErrorResponse> {
        if response.status().is_success() {
            Ok(response
                .json()
                .await
                .expect("Failed to parse SessionState."))
        } else {
            let error: ErrorResponse = response
                .json()
                .await
                .expect("Failed to parse ErrorResponse.");
            assert!(!error.title.is_empty());
            assert!(!error.detail.is_empty());
            Err(error)
        }
    }
}

fn sorted_chars(word: &str) -> Vec<char> {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars
}
