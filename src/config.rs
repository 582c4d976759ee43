use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Base URL used when neither the command line nor the config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "QRDESK_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `$QRDESK_CONFIG`, else `<config_dir>/qrdesk/config.json`.
pub fn config_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_PATH_ENV)
        && !p.is_empty()
    {
        return Ok(PathBuf::from(p));
    }
    let dir = dirs::config_dir().context("no config directory for this platform")?;
    Ok(dir.join("qrdesk").join("config.json"))
}

/// Reads the config file; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<ClientConfig> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ClientConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read {}", path.display()));
        }
    };
    let mut cfg: ClientConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    cfg.base_url = normalize_base_url(&cfg.base_url)
        .with_context(|| format!("invalid base_url in {}", path.display()))?;
    Ok(cfg)
}

pub fn save(path: &Path, cfg: &ClientConfig) -> Result<()> {
    let cfg = ClientConfig {
        base_url: normalize_base_url(&cfg.base_url)?,
    };
    let bytes = serde_json::to_vec_pretty(&cfg).context("serialize client config")?;
    write_atomic(path, &bytes)?;
    tracing::info!(event = "config.saved", path = %path.display(), base_url = %cfg.base_url);
    Ok(())
}

/// Picks the base URL: explicit override (flag or env), then the file, then
/// the default.
pub fn resolve(url_override: Option<&str>, path: &Path) -> Result<ClientConfig> {
    if let Some(url) = url_override {
        return Ok(ClientConfig {
            base_url: normalize_base_url(url)?,
        });
    }
    load(path)
}

pub(crate) fn parse_base_url(raw: &str) -> Result<reqwest::Url> {
    let url = reqwest::Url::parse(raw.trim()).with_context(|| format!("invalid url {}", raw))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(anyhow!("unsupported url scheme {} (use http or https)", other)),
    }
    if url.query().is_some() || url.fragment().is_some() {
        anyhow::bail!("base url must not carry a query or fragment: {}", raw);
    }
    Ok(url)
}

/// Validates `raw` and strips any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let url = parse_base_url(raw)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
