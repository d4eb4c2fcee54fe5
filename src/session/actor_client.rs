use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::session::actor::{SessionCommand, SessionEvent};
use crate::session::{SessionView, SummaryChoice};

#[derive(Clone, Debug)]
pub struct SessionClient {
    pub(super) session_id: String,
    pub(super) session_tx: Sender<SessionCommand>,
}

impl SessionClient {
    pub async fn view(&self) -> Result<SessionView, Error> {
        self.request(
            |response_tx| SessionCommand::GetView { response_tx },
            "GetView",
        )
        .await
    }

    pub async fn submit_word(&self, word: &str) -> Result<SessionView, Error> {
        self.request(
            |response_tx| SessionCommand::SubmitWord {
                word: word.to_string(),
                response_tx,
            },
            "SubmitWord",
        )
        .await
    }

    pub async fn skip_word(&self) -> Result<SessionView, Error> {
        self.request(
            |response_tx| SessionCommand::SkipWord { response_tx },
            "SkipWord",
        )
        .await
    }

    pub async fn choose(&self, choice: SummaryChoice) -> Result<SessionView, Error> {
        self.request(
            |response_tx| SessionCommand::ChooseSummaryOption {
                choice,
                response_tx,
            },
            "ChooseSummaryOption",
        )
        .await
    }

    async fn request<F>(&self, create_command: F, command_name: &str) -> Result<SessionView, Error>
    where
        F: FnOnce(OneshotSender<SessionEvent>) -> SessionCommand,
    {
        let (tx, rx): (OneshotSender<SessionEvent>, OneshotReceiver<SessionEvent>) =
            oneshot::channel();

        // A closed channel means the session actor already stopped, either because the player exited or
        // because of inactivity. For the player the session is gone.
        if let Err(error) = self.session_tx.send(create_command(tx)).await {
            log::info!(
                "The Session is not alive. Can't send SessionCommand::{command_name}. SessionId: '{}', Error: '{error}'.",
                self.session_id
            );
            return Err(self.session_does_not_exist());
        }

        match rx.await {
            Ok(SessionEvent::View { view }) => Ok(view),
            Ok(SessionEvent::Error { error }) => Err(error),
            Err(_) => {
                log::info!(
                    "Sent SessionCommand::{command_name} to the Session, but the Session channel died. SessionId: '{}'.",
                    self.session_id
                );
                Err(self.session_does_not_exist())
            }
        }
    }

    fn session_does_not_exist(&self) -> Error {
        Error::Domain(DomainError::SessionDoesNotExist(self.session_id.clone()))
    }
}
