//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing client
//! settings with automatic load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/chainview/config.json`
//! - macOS: `~/Library/Application Support/chainview/config.json`
//! - Windows: `%APPDATA%/chainview/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{PROGRESS_STEP, PROGRESS_TICK_MS};
use crate::domain::WatchedWallet;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "chainview";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default server base URL (local Django development server).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

// ============================================================================
// Stepper Configuration
// ============================================================================

/// Timing parameters for the simulated mining progress animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepperConfig {
    /// Milliseconds between progress steps.
    pub tick_ms: u64,
    /// Percentage added per step.
    pub step: u8,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            tick_ms: PROGRESS_TICK_MS,
            step: PROGRESS_STEP,
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Persistent client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the blockchain server.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Addresses whose balances are watched.
    #[serde(default)]
    pub wallets: Vec<WatchedWallet>,
    /// Whether live updates are enabled.
    pub show_live: bool,
    /// Simulated mining progress timing.
    #[serde(default)]
    pub progress: StepperConfig,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            wallets: Vec::new(),
            show_live: true,
            progress: StepperConfig::default(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!("Could not determine config directory")
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed, returns
    /// the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Add a wallet to the watch list if its address is not present yet.
    ///
    /// Returns `false` (and changes nothing) on a duplicate address.
    pub fn add_wallet(&mut self, wallet: WatchedWallet) -> bool {
        if self.wallets.iter().any(|w| w.address == wallet.address) {
            return false;
        }
        self.wallets.push(wallet);
        true
    }

    /// Remove the wallet at `index`, returning it if the index was valid.
    pub fn remove_wallet(&mut self, index: usize) -> Option<WatchedWallet> {
        if index < self.wallets.len() {
            Some(self.wallets.remove(index))
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert!(config.wallets.is_empty());
        assert!(config.show_live);
        assert_eq!(config.progress.tick_ms, 100);
        assert_eq!(config.progress.step, 2);
    }

    #[test]
    fn test_add_wallet_rejects_duplicate_address() {
        let mut config = AppConfig::default();

        assert!(config.add_wallet(WatchedWallet::new("addr-a", None)));
        assert!(!config.add_wallet(WatchedWallet::new("addr-a", Some("Other".into()))));
        assert_eq!(config.wallets.len(), 1);
    }

    #[test]
    fn test_remove_wallet_bounds() {
        let mut config = AppConfig::default();
        config.add_wallet(WatchedWallet::new("addr-a", None));

        assert!(config.remove_wallet(5).is_none());
        let removed = config.remove_wallet(0).unwrap();
        assert_eq!(removed.address, "addr-a");
        assert!(config.wallets.is_empty());
    }

    #[test]
    fn test_config_roundtrip_through_json() {
        let mut config = AppConfig::default();
        config.add_wallet(WatchedWallet::new("addr-a", Some("Main".into())));
        config.show_live = false;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"show_live": false}"#).unwrap();
        assert_eq!(parsed.server_url, DEFAULT_SERVER_URL);
        assert!(!parsed.show_live);
        assert_eq!(parsed.progress, StepperConfig::default());
    }
}
