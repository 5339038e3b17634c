use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::ports::TokenStore;

// Key the token is stored under in the client storage file.
pub const TOKEN_KEY: &str = "token";

// Client-side persistent storage backed by a TOML key/value file.
// The login flow writes the file; this adapter only reads it.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read client storage.");
                return None;
            }
        };

        let table = match toml::from_str::<toml::Table>(&content) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "client storage is not valid toml.");
                return None;
            }
        };

        table
            .get(TOKEN_KEY)
            .and_then(toml::Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}
