// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Transports for the index document.

use crate::error::LoadError;
#[cfg(feature = "fs")]
use std::path::{Path, PathBuf};

/// Retrieve the body of the resource at `path`.
///
/// Implementations map every failure to a [`LoadError`] variant: no
/// response at all is `Transport`, a non-success response is `Status`.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

/// Serves index paths from a directory on disk, the way a static file server
/// would serve the generated site. `/search.xml` resolves to `<root>/search.xml`.
#[cfg(feature = "fs")]
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

#[cfg(feature = "fs")]
impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[cfg(feature = "fs")]
impl Fetch for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let file = self.resolve(path);
        tokio::fs::read_to_string(&file).await.map_err(|e| LoadError::Transport {
            path: path.to_string(),
            reason: format!("{}: {}", file.display(), e),
        })
    }
}
