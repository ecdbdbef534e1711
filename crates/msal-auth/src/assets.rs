use std::{
    io,
    path::{Path, PathBuf},
};

/// Source of bundled application assets, used to fetch the Android MSAL
/// configuration document.
///
/// Loading is synchronous: payload assembly must complete before any
/// asynchronous work begins, so a load failure can never race with a pending
/// RPC.
pub trait AssetSource {
    /// Load the asset at `path` as UTF-8 text.
    fn load_text(&self, path: &str) -> io::Result<String>;
}

/// Asset source backed by the local filesystem, rooted at a base directory.
#[derive(Debug, Clone)]
pub struct FileAssetSource {
    base: PathBuf,
}

impl FileAssetSource {
    /// Creates a source that resolves asset paths relative to `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The directory asset paths are resolved against.
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl AssetSource for FileAssetSource {
    fn load_text(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.base.join(path))
    }
}
