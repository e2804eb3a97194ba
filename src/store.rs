use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::model::{CONFIG_VERSION, CliConfig, Environment, Target};

pub const CONFIG_ENV: &str = "APICTL_CONFIG";
pub const DASHBOARD_URL_ENV: &str = "APICTL_DASHBOARD_URL";
pub const TOKEN_ENV: &str = "APICTL_TOKEN";

const CONFIG_DIR: &str = ".apictl";
const CONFIG_FILE: &str = "config.json";

/// Process environment values that override the stored config.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub env_name: Option<String>,
    pub dashboard_url: Option<String>,
    pub token: Option<String>,
}

impl Overrides {
    /// `env_name` comes from `--env`; the rest from `APICTL_*` variables.
    pub fn from_process(env_name: Option<String>) -> Self {
        let var = |k: &str| std::env::var(k).ok().filter(|v| !v.trim().is_empty());
        Self {
            env_name,
            dashboard_url: var(DASHBOARD_URL_ENV),
            token: var(TOKEN_ENV),
        }
    }
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// `--config` wins, then `$APICTL_CONFIG`, then `$HOME/.apictl/config.json`.
    pub fn default_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(p) = explicit {
            return Ok(p);
        }
        if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(p));
        }
        let home = std::env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .context("HOME is not set (pass --config or set APICTL_CONFIG)")?;
        Ok(PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<CliConfig> {
        if !self.path.exists() {
            return Ok(CliConfig::default());
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let cfg: CliConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        if cfg.version != CONFIG_VERSION {
            return Err(anyhow!(
                "unsupported config version {} in {}",
                cfg.version,
                self.path.display()
            ));
        }
        Ok(cfg)
    }

    pub fn write(&self, cfg: &CliConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), "config written");
        Ok(())
    }

    /// Add or replace an environment. The first environment added becomes current.
    pub fn add_env(&self, name: &str, dashboard_url: &str, token: &str) -> Result<()> {
        validate_env_name(name)?;
        let dashboard_url = normalize_url(dashboard_url)?;
        if token.trim().is_empty() {
            anyhow::bail!("token must not be empty");
        }
        let mut cfg = self.read()?;
        cfg.environments.insert(
            name.to_string(),
            Environment {
                dashboard_url,
                token: token.trim().to_string(),
            },
        );
        if cfg.current.is_none() {
            cfg.current = Some(name.to_string());
        }
        self.write(&cfg)
    }

    pub fn use_env(&self, name: &str) -> Result<()> {
        let mut cfg = self.read()?;
        if !cfg.environments.contains_key(name) {
            return Err(unknown_env(name, &cfg));
        }
        cfg.current = Some(name.to_string());
        self.write(&cfg)
    }

    pub fn remove_env(&self, name: &str) -> Result<()> {
        let mut cfg = self.read()?;
        if cfg.environments.remove(name).is_none() {
            return Err(unknown_env(name, &cfg));
        }
        if cfg.current.as_deref() == Some(name) {
            cfg.current = None;
        }
        self.write(&cfg)
    }

    /// Pick the dashboard for this invocation. An explicit `--env` beats the
    /// current environment; `APICTL_*` variables beat both, field by field.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Target> {
        let cfg = self.read()?;
        let env_name = overrides.env_name.clone().or(cfg.current.clone());

        let stored = match &env_name {
            Some(name) => match cfg.environments.get(name) {
                Some(env) => Some(env.clone()),
                None => return Err(unknown_env(name, &cfg)),
            },
            None => None,
        };

        let dashboard_url = match (&overrides.dashboard_url, &stored) {
            (Some(url), _) => normalize_url(url)?,
            (None, Some(env)) => env.dashboard_url.clone(),
            (None, None) => anyhow::bail!(
                "no environment selected (run `apictl config add-env NAME --url ... --token ...` or set {})",
                DASHBOARD_URL_ENV
            ),
        };
        let token = match (&overrides.token, &stored) {
            (Some(token), _) => token.clone(),
            (None, Some(env)) => env.token.clone(),
            (None, None) => anyhow::bail!("no dashboard token configured (set {})", TOKEN_ENV),
        };

        Ok(Target {
            env_name,
            dashboard_url,
            token,
        })
    }
}

fn unknown_env(name: &str, cfg: &CliConfig) -> anyhow::Error {
    let known: Vec<&str> = cfg.environments.keys().map(|k| k.as_str()).collect();
    if known.is_empty() {
        anyhow!("unknown environment {:?} (none configured)", name)
    } else {
        anyhow!("unknown environment {:?} (known: {})", name, known.join(", "))
    }
}

fn validate_env_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("environment name must not be empty");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!(
            "invalid environment name {:?} (use letters, digits, '-', '_' or '.')",
            name
        );
    }
    Ok(())
}

pub fn normalize_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| {
            anyhow!(
                "dashboard url must start with http:// or https:// (got {:?})",
                url
            )
        })?;
    if host.is_empty() {
        anyhow::bail!("dashboard url has no host (got {:?})", url);
    }
    Ok(trimmed.to_string())
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
#[path = "tests/store_tests.rs"]
mod tests;
