use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Error;
use crate::metrics::register_metrics;
use crate::routes;
use crate::session_factory::actor::SessionFactoryActor;
use crate::word_pool::WordPool;

/// Loads the word pool and wires the router to a running SessionFactory actor. Fails before serving anything
/// when the word pool cannot play a full game.
pub fn create_web_server(
    config: Config,
    listener: TcpListener,
) -> Result<impl Future<Output = std::io::Result<()>>, Error> {
    let words = WordPool::from_file(&config.game.words_file, config.game.max_words)?;
    register_metrics();

    let session_factory_client = Arc::new(SessionFactoryActor::spawn(config.game.clone(), words));
    let router = routes::create_router(&config).with_state(session_factory_client);

    match listener.local_addr() {
        Ok(address) => log::info!("Listening on {address}"),
        Err(error) => log::warn!("Could not read the listener address. Error: '{error}'."),
    }
    Ok(async move { axum::serve(listener, router.into_make_service()).await })
}
