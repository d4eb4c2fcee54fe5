use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::sync::oneshot::Sender as OneshotSender;
use tokio::sync::{
    mpsc,
    mpsc::{Receiver, Sender},
};
use tokio::time;

use crate::error::Error;
use crate::metrics::{ACTIVE_SESSIONS, FINISHED_GAMES};
use crate::session::actor_client::SessionClient;
use crate::session::{Session, SessionStatus, SessionView, SummaryChoice};
use crate::session_factory::actor_client::SessionFactoryClient;

/// Owns one `Session` and applies the player's actions to it one at a time.
pub struct SessionActor {
    session: Session,
    session_rx: Receiver<SessionCommand>,
    session_factory: SessionFactoryClient,
    inactivity_timeout: Duration,
}

impl SessionActor {
    pub fn spawn(
        session: Session,
        inactivity_timeout: Duration,
        session_factory: SessionFactoryClient,
    ) -> SessionClient {
        let (session_tx, session_rx): (Sender<SessionCommand>, Receiver<SessionCommand>) =
            mpsc::channel(32);
        let session_id = session.id().to_string();

        tokio::spawn(
            SessionActor {
                session,
                session_rx,
                session_factory,
                inactivity_timeout,
            }
            .start(),
        );

        SessionClient {
            session_id,
            session_tx,
        }
    }

    async fn start(mut self) {
        ACTIVE_SESSIONS.inc();

        loop {
            match time::timeout(self.inactivity_timeout, self.session_rx.recv()).await {
                Err(_) => {
                    log::info!(
                        "No activity detected in session {} after {} seconds. Stopping session actor.",
                        self.session.id(),
                        self.inactivity_timeout.as_secs()
                    );
                    break;
                }
                Ok(None) => {
                    log::info!("Session channel has been dropped. Stopping session actor.");
                    break;
                }
                Ok(Some(command)) => {
                    let was_showing_summary =
                        self.session.view().status == SessionStatus::ShowingSummary;
                    let (result, response_tx) = match command {
                        SessionCommand::GetView { response_tx } => {
                            (Ok(self.session.view()), response_tx)
                        }
                        SessionCommand::SubmitWord { word, response_tx } => {
                            (self.session.submit_word(&word), response_tx)
                        }
                        SessionCommand::SkipWord { response_tx } => {
                            (self.session.skip_word(), response_tx)
                        }
                        SessionCommand::ChooseSummaryOption {
                            choice,
                            response_tx,
                        } => (self.session.choose(choice), response_tx),
                    };

                    if let Ok(view) = &result {
                        if view.status == SessionStatus::ShowingSummary && !was_showing_summary {
                            FINISHED_GAMES.inc();
                        }
                    }

                    let event = match result {
                        Ok(view) => SessionEvent::View { view },
                        Err(error) => SessionEvent::Error { error },
                    };
                    if let Err(event) = response_tx.send(event) {
                        log::error!(
                            "Sent {event} to the player but the response channel is closed. SessionId: '{}'.",
                            self.session.id()
                        );
                    }

                    if self.session.has_exited() {
                        break;
                    }
                }
            }
        }

        self.stop_session().await;
        ACTIVE_SESSIONS.dec();
    }

    async fn stop_session(self) {
        let session_id = self.session.id();
        if let Err(error) = self.session_factory.remove_session(session_id).await {
            log::error!("The SessionFactory channel is closed, can't remove the Session. SessionId: '{session_id}', Error: '{error}'.");
        }
    }
}

#[derive(Debug)]
pub(crate) enum SessionCommand {
    GetView {
        response_tx: OneshotSender<SessionEvent>,
    },
    SubmitWord {
        word: String,
        response_tx: OneshotSender<SessionEvent>,
    },
    SkipWord {
        response_tx: OneshotSender<SessionEvent>,
    },
    ChooseSummaryOption {
        choice: SummaryChoice,
        response_tx: OneshotSender<SessionEvent>,
    },
}

#[derive(Debug)]
pub(crate) enum SessionEvent {
    View { view: SessionView },
    Error { error: Error },
}

impl Display for SessionEvent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                SessionEvent::View { view } => format!("SessionEvent::View({:?})", view.status),
                SessionEvent::Error { error } => format!("Error '{error}'"),
            }
        )
    }
}
