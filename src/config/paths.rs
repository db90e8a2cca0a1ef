//! Path resolution for sesh configuration and data files.
//!
//! All sesh data is stored in `~/.sesh/`:
//! - `config.yaml` - Main configuration file
//! - `token.json` - Stored task service tokens
//!
//! Reflection files live under the study root, which defaults to
//! `~/Desktop/study` and is overridable in the config file.

use std::path::PathBuf;

use crate::error::SeshError;

/// Paths to sesh configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.sesh/`
    pub root: PathBuf,
    /// Config file: `~/.sesh/config.yaml`
    pub config_file: PathBuf,
    /// Token file: `~/.sesh/token.json`
    pub token_file: PathBuf,
    /// Default study root: `~/Desktop/study`
    pub default_study_root: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SeshError> {
        let home = std::env::var("HOME")
            .map_err(|_| SeshError::Config("Could not determine home directory".to_string()))?;
        let home = PathBuf::from(home);
        let root = home.join(".sesh");

        Ok(Self {
            config_file: root.join("config.yaml"),
            token_file: root.join("token.json"),
            default_study_root: home.join("Desktop").join("study"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            token_file: root.join("token.json"),
            default_study_root: root.join("study"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SeshError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                SeshError::Config(format!(
                    "Failed to create directory {:?}: {e}",
                    self.root
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".sesh"))
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-sesh");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.token_file, root.join("token.json"));
        assert_eq!(paths.default_study_root, root.join("study"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("inner"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
