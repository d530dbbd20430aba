use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub question_sets_collection: String,
    pub exam_results_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub generator_url: String,
    pub generator_timeout_secs: u64,
    pub cache_dir: PathBuf,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "examgen-local".to_string()),
            question_sets_collection: env::var("QUESTION_SETS_COLLECTION")
                .unwrap_or_else(|_| "question_sets".to_string()),
            exam_results_collection: env::var("EXAM_RESULTS_COLLECTION")
                .unwrap_or_else(|_| "exam_results".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_only_jwt_secret_change_me".to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            generator_url: env::var("GENERATOR_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            generator_timeout_secs: env::var("GENERATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            cache_dir: env::var("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./cache")),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]),
        }
    }

    /// Panics when secrets or endpoints still carry their development defaults.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == "dev_only_jwt_secret_change_me" {
            panic!(
                "FATAL: JWT_SECRET still has its development default. Set it to a random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is only {} characters. It must be at least 32.",
                jwt_secret.len()
            );
        }

        if self.generator_url == "http://localhost:8000" {
            panic!(
                "FATAL: GENERATOR_URL is using default value! Set GENERATOR_URL environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "examgen-test".to_string(),
            question_sets_collection: "question_sets".to_string(),
            exam_results_collection: "exam_results".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            generator_url: "http://localhost:8000".to_string(),
            generator_timeout_secs: 5,
            cache_dir: PathBuf::from("./cache-test"),
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}
