//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.tourlog.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TOURLOG_REVIEWS_PATH`, `TOURLOG_HEADING`,
//!    `TOURLOG_TAGLINE`
//! 4. **Command-line arguments** – `--reviews-path`/`-f`, `--plain`/`-p`,
//!    and friends
//!
//! # Configuration File
//!
//! Place `.tourlog.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! reviews_path = "reviews.json"
//! heading = "Feedback & Insights"
//! plain = false
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal browser.
    Browse,
    /// Plain listing written to stdout.
    Listing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `TOURLOG_REVIEWS_PATH` or `--reviews-path`: Path to the reviews document
/// - `TOURLOG_HEADING` or `--heading`: Page header title override
/// - `TOURLOG_TAGLINE` or `--tagline`: Page header tagline override
///
/// # Example
///
/// ```no_run
/// use tourlog::TourlogConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = TourlogConfig::load().expect("failed to load configuration");
/// let path = config.require_reviews_path().expect("reviews path required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TOURLOG",
    discovery(
        dotfile_name = ".tourlog.toml",
        config_file_name = "tourlog.toml",
        app_name = "tourlog"
    )
)]
pub struct TourlogConfig {
    /// Path to the JSON reviews document to browse.
    ///
    /// Can be provided via:
    /// - CLI: `--reviews-path <PATH>` or `-f <PATH>`
    /// - Environment: `TOURLOG_REVIEWS_PATH`
    /// - Config file: `reviews_path = "..."`
    #[ortho_config(cli_short = 'f')]
    pub reviews_path: Option<String>,

    /// Page header title shown above the review list.
    ///
    /// Can be provided via:
    /// - CLI: `--heading <TEXT>`
    /// - Environment: `TOURLOG_HEADING`
    /// - Config file: `heading = "..."`
    #[ortho_config()]
    pub heading: Option<String>,

    /// Page header tagline shown below the title.
    ///
    /// Can be provided via:
    /// - CLI: `--tagline <TEXT>`
    /// - Environment: `TOURLOG_TAGLINE`
    /// - Config file: `tagline = "..."`
    #[ortho_config()]
    pub tagline: Option<String>,

    /// Writes a plain listing to stdout instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--plain` / `-p`
    /// - Config file: `plain = true`
    ///
    /// Note: Environment variable `TOURLOG_PLAIN` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'p')]
    pub plain: bool,

    /// Disables pointer (mouse) capture in the TUI.
    ///
    /// Dropdowns then open and close through the keyboard only. Useful on
    /// terminals whose mouse reporting conflicts with pane selection.
    ///
    /// Can be provided via:
    /// - CLI: `--no-pointer`
    /// - Config file: `no_pointer = true`
    #[ortho_config()]
    pub no_pointer: bool,
}

impl Default for TourlogConfig {
    fn default() -> Self {
        Self {
            reviews_path: None,
            heading: None,
            tagline: None,
            plain: false,
            no_pointer: false,
        }
    }
}

impl TourlogConfig {
    /// Returns the reviews document path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingReviewsPath`] when no path is
    /// configured.
    pub fn require_reviews_path(&self) -> Result<&str, CatalogError> {
        self.reviews_path
            .as_deref()
            .ok_or(CatalogError::MissingReviewsPath)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Listing` when `--plain` was requested and `Browse`
    /// otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.plain {
            OperationMode::Listing
        } else {
            OperationMode::Browse
        }
    }
}

#[cfg(test)]
mod tests;
