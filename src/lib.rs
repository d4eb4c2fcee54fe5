#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod game_round;
pub mod metrics;
mod routes;
pub mod session;
pub mod session_factory;
pub mod startup;
pub mod word_pool;
