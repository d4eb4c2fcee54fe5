use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;
use serde_aux::prelude::{deserialize_bool_from_anything, deserialize_number_from_string};

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub application: ApplicationSettings,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub allow_cors: bool,
    pub game: GameSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GameSettings {
    /// Words played in a single game before the final score is shown.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_words: usize,
    /// Points awarded for every correctly unscrambled word.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub score_increase: u32,
    #[serde(default, deserialize_with = "deserialize_bool_from_anything")]
    pub ignore_case: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub inactivity_timeout_seconds: u64,
    pub words_file: String,
}

impl GameSettings {
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_seconds)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            max_words: 10,
            score_increase: 20,
            ignore_case: false,
            inactivity_timeout_seconds: 600,
            words_file: "words/en.txt".to_string(),
        }
    }
}

impl Config {
    /// Reads `config/base.yaml`, then `config/<ENVIRONMENT>.yaml`, then any `APP_` environment variables
    /// (e.g. `APP_GAME__MAX_WORDS=5`).
    pub fn get() -> Result<Config, ConfigError> {
        let base_path = std::env::current_dir().map_err(|error| {
            ConfigError::Message(format!(
                "Failed to determine the current directory. Error: '{error}'."
            ))
        })?;
        let configuration_directory = base_path.join("config");

        let environment: Environment = std::env::var("ENVIRONMENT")
            .unwrap_or_else(|_| DEV.to_string())
            .try_into()
            .map_err(ConfigError::Message)?;

        let environment_filename = format!("{}.yaml", environment.as_str());

        let config = config::Config::builder()
            .add_source(config::File::from(
                configuration_directory.join("base.yaml"),
            ))
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize::<Config>()
    }
}

#[derive(Debug, PartialEq)]
enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
