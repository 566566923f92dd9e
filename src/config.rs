use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `.env` (when present) and the process environment.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let uri = dotenvy::var("MONGO_URI").context("MONGO_URI must be set")?;
        let host = dotenvy::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match dotenvy::var("PORT") {
            Ok(port) if !port.is_empty() => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?,
            _ => DEFAULT_PORT,
        };
        Ok(Self {
            mongodb_uri: uri,
            host,
            port,
        })
    }

    pub fn new_mongodb_uri(mongodb_uri: String) -> Self {
        Self {
            mongodb_uri,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
