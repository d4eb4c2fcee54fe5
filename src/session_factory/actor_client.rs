use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

use crate::error::Error;
use crate::session::actor_client::SessionClient;
use crate::session_factory::actor::{SessionFactoryCommand, SessionFactoryResponse};

#[derive(Clone, Debug)]
pub struct SessionFactoryClient {
    pub(super) session_factory_tx: Sender<SessionFactoryCommand>,
}

impl SessionFactoryClient {
    pub async fn create_session(&self) -> Result<String, Error> {
        match self
            .request(|response_channel| SessionFactoryCommand::CreateSession { response_channel })
            .await?
        {
            SessionFactoryResponse::SessionCreated { session_id } => Ok(session_id),
            response => Err(SessionFactoryClient::handle_response_error(response)),
        }
    }

    pub async fn remove_session(&self, session_id: &str) -> Result<(), Error> {
        self.send_command(
            SessionFactoryCommand::RemoveSession {
                session_id: session_id.to_string(),
            },
            "The SessionFactory channel is closed",
        )
        .await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SessionClient, Error> {
        match self
            .request(|response_channel| SessionFactoryCommand::GetSessionActor {
                session_id: session_id.to_string(),
                response_channel,
            })
            .await?
        {
            SessionFactoryResponse::SessionActor { session } => Ok(session),
            response => Err(SessionFactoryClient::handle_response_error(response)),
        }
    }

    async fn request<F>(&self, create_command: F) -> Result<SessionFactoryResponse, Error>
    where
        F: FnOnce(OneshotSender<SessionFactoryResponse>) -> SessionFactoryCommand,
    {
        let (tx, rx): (
            OneshotSender<SessionFactoryResponse>,
            OneshotReceiver<SessionFactoryResponse>,
        ) = oneshot::channel();

        self.send_command(create_command(tx), "The SessionFactory channel is closed")
            .await?;

        rx.await.map_err(|_| {
            Error::log_and_create_internal(
                "Sent a command to the SessionFactory actor, but the actor channel died.",
            )
        })
    }

    async fn send_command(
        &self,
        command: SessionFactoryCommand,
        error_message: &str,
    ) -> Result<(), Error> {
        self.session_factory_tx
            .send(command)
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!("{error_message}. Error: '{error}'"))
            })
    }

    fn handle_response_error(response: SessionFactoryResponse) -> Error {
        match response {
            SessionFactoryResponse::Error { error } => error,
            unexpected_response => Error::log_and_create_internal(&format!(
                "Received an unexpected SessionFactoryResponse. SessionFactoryResponse: '{unexpected_response:?}'."
            )),
        }
    }
}
