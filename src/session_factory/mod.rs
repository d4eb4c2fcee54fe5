pub mod actor;
pub mod actor_client;

use rand::distributions::{Alphanumeric, DistString};
use std::collections::HashMap;

use crate::config::GameSettings;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::session::actor::SessionActor;
use crate::session::actor_client::SessionClient;
use crate::session::Session;
use crate::session_factory::actor_client::SessionFactoryClient;
use crate::word_pool::WordPool;

pub struct SessionFactory {
    session_clients: HashMap<String, SessionClient>,
    game_settings: GameSettings,
    words: WordPool,
}

impl SessionFactory {
    pub fn new(game_settings: GameSettings, words: WordPool) -> Self {
        SessionFactory {
            session_clients: HashMap::default(),
            game_settings,
            words,
        }
    }

    pub fn create_new_session(
        &mut self,
        session_factory: SessionFactoryClient,
    ) -> Result<String, Error> {
        let id = self.create_unique_session_id();
        let session = Session::new(&id, self.words.clone(), &self.game_settings)?;
        self.session_clients.insert(
            id.clone(),
            SessionActor::spawn(
                session,
                self.game_settings.inactivity_timeout(),
                session_factory,
            ),
        );
        log::info!("Session created. SessionId: '{id}'.");

        Ok(id)
    }

    pub fn remove_session(&mut self, session_id: &str) -> Option<SessionClient> {
        self.session_clients.remove(session_id)
    }

    pub fn get_session(&self, session_id: &str) -> Result<&SessionClient, Error> {
        match self.session_clients.get(session_id) {
            Some(session) => Ok(session),
            None => Err(Error::Domain(DomainError::SessionDoesNotExist(
                session_id.to_string(),
            ))),
        }
    }

    fn create_unique_session_id(&self) -> String {
        loop {
            let id = Alphanumeric
                .sample_string(&mut rand::thread_rng(), 5)
                .replace('O', "P")
                .replace('0', "1")
                .replace('I', "J")
                .replace('l', "m");
            if !self.session_clients.contains_key(&id) {
                return id;
            }
        }
    }
}
