use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub portfolio_file: String,
    pub templates_dir: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            portfolio_file: env::var("PORTFOLIO_FILE")
                .unwrap_or_else(|_| "portfolio.yml".into()),
            templates_dir: env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".into()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),
        }
    }
}
