use std::env;

use url::Url;

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, Environment, Settings, TextGenerationSettings,
};

pub mod types;

const TEST_DATABASE_URL: &str = "sqlite::memory:";

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    if let Err(e) = dotenvy::from_filename(env_file_name) {
        // Deployments may provide every variable through the real environment.
        if !e.not_found() {
            return Err(format!("Failed to fetch env file: {}", e));
        }
    }

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_development_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

/// Settings for tests: an in-memory SQLite database and no inference credential.
pub fn get_test_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            ..b.application
        },
        database: DatabaseSettings {
            url: env::var("TEST_DATABASE_URL").unwrap_or_else(|_| TEST_DATABASE_URL.to_string()),
        },
        debug: true,
        ..b
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "https".to_string(),
            host: "0.0.0.0".to_string(),
            base_url: "".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: match env::var("APP_PORT") {
                Ok(port) => port.parse::<u16>().map_err(|e| e.to_string())?,
                Err(_) => s.application.port,
            },
            frontend_url: parse_frontend_url(
                &env::var("FRONTEND_URL").unwrap_or(s.application.frontend_url),
            )?,
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        text_generation: TextGenerationSettings {
            api_url: env::var("TEXT_GENERATION__API_URL").unwrap_or(s.text_generation.api_url),
            api_token: env::var("TEXT_GENERATION__API_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            model: env::var("TEXT_GENERATION__MODEL").unwrap_or(s.text_generation.model),
            ..s.text_generation
        },
    })
}

/// CORS compares origins verbatim, so the value is reduced to
/// `scheme://host[:port]` and anything else is refused.
fn parse_frontend_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("FRONTEND_URL: {}: {}", value, e))?;
    if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
        return Err(format!("FRONTEND_URL: {} is not an http(s) origin", value));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(format!("FRONTEND_URL: {} must not have a path", value));
    }
    Ok(url.origin().ascii_serialization())
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}
