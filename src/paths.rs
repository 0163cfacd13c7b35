//! Typed paths into a scaffolded project.
//!
//! Every stage derives its targets from here instead of changing the process
//! working directory, so relative paths never depend on stage ordering.
use std::path::{Path, PathBuf};

/// Name of the frontend subdirectory generated by the Vite scaffolder.
pub const CLIENT_DIR: &str = "client";
/// Name of the backend subdirectory.
pub const SERVER_DIR: &str = "server";

/// Backend directories created empty (relative to the project root).
pub const SERVER_SUBDIRS: [&str; 5] = [
    "server/http/controllers",
    "server/http/middleware",
    "server/resources/views",
    "server/resources/routes",
    "server/config",
];

/// Convenience wrapper for locating project artifacts.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the project root for `name` under `base`.
    pub fn for_project(base: &Path, name: &str) -> Self {
        Self::new(base.join(name))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn server_dir(&self) -> PathBuf {
        self.root.join(SERVER_DIR)
    }

    /// Return the backend subdirectories in creation order.
    pub fn server_subdirs(&self) -> Vec<PathBuf> {
        SERVER_SUBDIRS.iter().map(|rel| self.root.join(rel)).collect()
    }

    /// Return the `server/index.js` path.
    pub fn server_entry_path(&self) -> PathBuf {
        self.server_dir().join("index.js")
    }

    /// Return the `server/config/index.js` path.
    pub fn server_config_path(&self) -> PathBuf {
        self.server_dir().join("config").join("index.js")
    }

    /// Return the `server/.env` path.
    pub fn server_env_path(&self) -> PathBuf {
        self.server_dir().join(".env")
    }

    pub fn client_dir(&self) -> PathBuf {
        self.root.join(CLIENT_DIR)
    }

    /// Return the `client/tailwind.config.js` path.
    pub fn tailwind_config_path(&self) -> PathBuf {
        self.client_dir().join("tailwind.config.js")
    }

    /// Return the `client/src/index.css` path.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.client_dir().join("src").join("index.css")
    }

    /// Return the `client/vite.config.js` path.
    pub fn vite_config_path(&self) -> PathBuf {
        self.client_dir().join("vite.config.js")
    }

    /// Return the top-level `README.md` path.
    pub fn readme_path(&self) -> PathBuf {
        self.root.join("README.md")
    }
}
