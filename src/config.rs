use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub share_base_url: String,
    pub export_filename: String,
    pub template_save_debounce_ms: u64,
    pub page_size: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://invitations.db".to_string(),
            port: 3000,
            share_base_url: "https://wa.me/".to_string(),
            export_filename: "hasil_template.xlsx".to_string(),
            template_save_debounce_ms: 1000,
            page_size: 12,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: parse_or("PORT", defaults.port),
            share_base_url: env::var("SHARE_BASE_URL").unwrap_or(defaults.share_base_url),
            export_filename: env::var("EXPORT_FILENAME").unwrap_or(defaults.export_filename),
            template_save_debounce_ms: parse_or("TEMPLATE_SAVE_DEBOUNCE_MS", defaults.template_save_debounce_ms),
            page_size: parse_or("PAGE_SIZE", defaults.page_size).max(1),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} must be a number, got {:?}; using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
