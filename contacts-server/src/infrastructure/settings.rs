use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) http_addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) http_request_body_limit_bytes: usize,
    pub(crate) http_concurrency_limit: usize,
    pub(crate) api_token: String,
    pub(crate) readonly_token: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = get_required(&lookup, "API_TOKEN").context("API_TOKEN is required")?;
        let readonly_token =
            get_required(&lookup, "READONLY_TOKEN").context("READONLY_TOKEN is required")?;
        if api_token == readonly_token {
            return Err(anyhow!("API_TOKEN and READONLY_TOKEN must differ"));
        }

        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let cors_origins = parse_cors_origins(
            &lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let http_request_body_limit_bytes =
            parse_positive(&lookup, "HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;
        let http_concurrency_limit = parse_positive(&lookup, "HTTP_CONCURRENCY_LIMIT", 256)?;

        Ok(Self {
            http_addr,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            api_token,
            readonly_token,
        })
    }
}

fn get_required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    let value = lookup(key).ok_or_else(|| anyhow!("{key} is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize> {
    let value = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?,
        None => default,
    };

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
