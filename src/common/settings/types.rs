use serde::Deserialize;

#[derive(Deserialize, Clone, Default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub text_generation: TextGenerationSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                port: 5000,
                max_log_files: 14,
                ..Default::default()
            },
            text_generation: TextGenerationSettings {
                api_url: "https://api-inference.huggingface.co/models".to_string(),
                model: "gpt2".to_string(),
                max_new_tokens: 50,
                temperature: 0.7,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub base_url: String,
    pub frontend_url: String,
    pub protocol: String,
    pub max_log_files: usize,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DatabaseSettings {
    pub url: String,
}

/// Credentials for the inference API stay here, on the server.
#[derive(Deserialize, Clone, Default)]
pub struct TextGenerationSettings {
    pub api_url: String,
    pub api_token: Option<String>,
    pub model: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
}

pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
