//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use eshop_auth::Session;
use eshop_client::AppContext;
use eshop_data::{FetchClient, HttpTransport};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ESHOP_API_URL";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_file: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Client state shared by the commands.
    pub app: AppContext,
    /// Backend origin in use after overrides.
    pub api_url: String,
    session_file: PathBuf,
}

impl Context {
    /// Load context from config file, then restore any saved session.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let api_url = api_url
            .map(str::to_string)
            .or_else(|| std::env::var(API_URL_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| config.api.base_url.clone());

        let transport = HttpTransport::with_timeout(Duration::from_secs(config.api.timeout_secs))
            .context("Failed to create HTTP client")?;
        let app = AppContext::new(FetchClient::new(transport).with_base_url(api_url.clone()));

        let session_file = config
            .session
            .file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs_path().join("eshop").join("session.json"));

        let ctx = Self {
            config,
            config_file,
            output,
            cwd,
            app,
            api_url,
            session_file,
        };
        ctx.restore_session();
        Ok(ctx)
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path of the saved session.
    pub fn session_file(&self) -> &Path {
        &self.session_file
    }

    /// Persist the live session for the next invocation.
    pub fn save_session(&self) -> Result<()> {
        let Some(session) = self.app.current_session() else {
            return self.forget_session();
        };
        if let Some(parent) = self.session_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.session_file, content)
            .with_context(|| format!("Failed to write session file: {}", self.session_file.display()))
    }

    /// Remove the saved session.
    pub fn forget_session(&self) -> Result<()> {
        if self.session_file.exists() {
            std::fs::remove_file(&self.session_file).with_context(|| {
                format!("Failed to remove session file: {}", self.session_file.display())
            })?;
        }
        Ok(())
    }

    fn restore_session(&self) {
        let Ok(content) = std::fs::read_to_string(&self.session_file) else {
            return;
        };
        let session: Session = match serde_json::from_str(&content) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, file = %self.session_file.display(), "ignoring unreadable session file");
                return;
            }
        };

        match self.app.session().restore(session) {
            Ok(()) => tracing::debug!("session restored"),
            Err(e) => {
                tracing::debug!(error = %e, "saved session not restored");
                if let Err(e) = self.forget_session() {
                    tracing::warn!(error = %e, "failed to remove stale session");
                }
            }
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
