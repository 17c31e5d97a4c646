use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Process configuration, loaded from the environment (with `.env` support).
///
/// The vendor credentials are not consumed by this crate directly: they are
/// handed to the SDK implementations the embedding application injects at
/// bootstrap time.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub rust_log: String,
    pub app_env: String,
    pub kakao_native_app_key: String,
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub naver_client_name: String,
    pub google_server_client_id: String,
}

impl Config {
    pub fn init() -> Self {
        dotenv().ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Provider keys are optional in dev; a provider whose key is missing
        // simply fails at login time.
        let kakao_native_app_key =
            env::var("KAKAO_NATIVE_APP_KEY").unwrap_or_else(|_| "".to_string());
        let naver_client_id = env::var("NAVER_CLIENT_ID").unwrap_or_else(|_| "".to_string());
        let naver_client_secret =
            env::var("NAVER_CLIENT_SECRET").unwrap_or_else(|_| "".to_string());
        let naver_client_name =
            env::var("NAVER_CLIENT_NAME").unwrap_or_else(|_| "sociallogin".to_string());
        let google_server_client_id =
            env::var("GOOGLE_SERVER_CLIENT_ID").unwrap_or_else(|_| "".to_string());

        Self {
            rust_log,
            app_env,
            kakao_native_app_key,
            naver_client_id,
            naver_client_secret,
            naver_client_name,
            google_server_client_id,
        }
    }
}
