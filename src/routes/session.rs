use std::future::Future;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::session::actor_client::SessionClient;
use crate::session::{SessionStatus, SessionView, SummaryChoice};
use crate::session_factory::actor_client::SessionFactoryClient;

#[derive(Serialize)]
pub struct CreateSessionResponse {
    id: String,
    state: SessionStateDto,
}

#[derive(Deserialize)]
pub struct SubmitWordRequest {
    word: String,
}

#[derive(Deserialize)]
pub struct SummaryChoiceRequest {
    choice: SummaryChoiceDto,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryChoiceDto {
    PlayAgain,
    Exit,
}

impl From<SummaryChoiceDto> for SummaryChoice {
    fn from(choice: SummaryChoiceDto) -> Self {
        match choice {
            SummaryChoiceDto::PlayAgain => SummaryChoice::PlayAgain,
            SummaryChoiceDto::Exit => SummaryChoice::Exit,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateDto {
    status: String,
    scrambled_word: String,
    score: u32,
    words_played: usize,
    max_words: usize,
    input_error: Option<String>,
    clear_input: bool,
    final_score: Option<u32>,
}

impl From<SessionView> for SessionStateDto {
    fn from(view: SessionView) -> Self {
        SessionStateDto {
            status: status_to_string(&view.status),
            scrambled_word: view.scrambled_word,
            score: view.score,
            words_played: view.words_played,
            max_words: view.max_words,
            input_error: view.input_error,
            clear_input: view.clear_input,
            final_score: view.final_score,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorDto {
    r#type: String,
    title: String,
    detail: String,
}

pub async fn create(State(session_factory): State<Arc<SessionFactoryClient>>) -> Response {
    let result = async {
        let session_id = session_factory.create_session().await?;
        let view = session_factory.get_session(&session_id).await?.view().await?;
        Ok::<CreateSessionResponse, Error>(CreateSessionResponse {
            id: session_id,
            state: view.into(),
        })
    }
    .await;

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_to_response(error),
    }
}

pub async fn get(
    State(session_factory): State<Arc<SessionFactoryClient>>,
    Path(session_id): Path<String>,
) -> Response {
    with_session(&session_factory, &session_id, |session| async move {
        session.view().await
    })
    .await
}

pub async fn submit_word(
    State(session_factory): State<Arc<SessionFactoryClient>>,
    Path(session_id): Path<String>,
    Json(request): Json<SubmitWordRequest>,
) -> Response {
    with_session(&session_factory, &session_id, |session| async move {
        session.submit_word(&request.word).await
    })
    .await
}

pub async fn skip_word(
    State(session_factory): State<Arc<SessionFactoryClient>>,
    Path(session_id): Path<String>,
) -> Response {
    with_session(&session_factory, &session_id, |session| async move {
        session.skip_word().await
    })
    .await
}

pub async fn choose_summary_option(
    State(session_factory): State<Arc<SessionFactoryClient>>,
    Path(session_id): Path<String>,
    Json(request): Json<SummaryChoiceRequest>,
) -> Response {
    with_session(&session_factory, &session_id, |session| async move {
        session.choose(request.choice.into()).await
    })
    .await
}

async fn with_session<F, Fut>(
    session_factory: &SessionFactoryClient,
    session_id: &str,
    action: F,
) -> Response
where
    F: FnOnce(SessionClient) -> Fut,
    Fut: Future<Output = Result<SessionView, Error>>,
{
    let result = match session_factory.get_session(session_id).await {
        Ok(session) => action(session).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(view) => (StatusCode::OK, Json(SessionStateDto::from(view))).into_response(),
        Err(error) => error_to_response(error),
    }
}

pub fn status_to_string(status: &SessionStatus) -> String {
    match status {
        SessionStatus::Playing => "PLAYING",
        SessionStatus::ShowingSummary => "SHOWING_SUMMARY",
        SessionStatus::Exited => "EXITED",
    }
    .to_string()
}

fn error_to_response(error: Error) -> Response {
    let (status_code, r#type, title) = match &error {
        Error::Domain(DomainError::SessionDoesNotExist(_)) => (
            StatusCode::NOT_FOUND,
            "SESSION_DOES_NOT_EXIST",
            "The session does not exist",
        ),
        Error::Domain(DomainError::SessionExited(_)) => (
            StatusCode::CONFLICT,
            "SESSION_EXITED",
            "The session has already exited",
        ),
        Error::Domain(DomainError::InvalidStateForWordSubmission(_, _))
        | Error::Domain(DomainError::InvalidStateForSkip(_, _))
        | Error::Domain(DomainError::InvalidStateForAdvance(_, _))
        | Error::Domain(DomainError::InvalidStateForRecordCorrect(_, _)) => (
            StatusCode::CONFLICT,
            "GAME_FINISHED",
            "The game has finished, choose to play again or exit",
        ),
        Error::Domain(DomainError::InvalidStateForSummaryChoice(_, _)) => (
            StatusCode::CONFLICT,
            "GAME_IN_PROGRESS",
            "The game is still in progress",
        ),
        Error::Domain(DomainError::EmptyWordPool)
        | Error::Domain(DomainError::NotEnoughWords(_, _))
        | Error::Domain(DomainError::UnscramblableWord(_))
        | Error::Domain(DomainError::InvalidMaxWords(_))
        | Error::Domain(DomainError::ScoreOverflow(_, _))
        | Error::WordsFile(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INVALID_CONFIGURATION",
            "The game is not configured correctly",
        ),
        Error::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER",
            "Internal Server error",
        ),
    };

    (
        status_code,
        Json(ErrorDto {
            r#type: r#type.to_string(),
            title: title.to_string(),
            detail: error.to_string(),
        }),
    )
        .into_response()
}
