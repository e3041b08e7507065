use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::provider::Session;

pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("session file {path} is not valid: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Token cache: the active session as JSON in the data directory.
///
/// A store without a path keeps nothing between runs.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(SESSION_FILE))
    }

    pub fn ephemeral() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| SessionError::Json {
                path: path.clone(),
                source,
            })
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_error = |source| SessionError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let contents =
            serde_json::to_string_pretty(session).map_err(|source| SessionError::Json {
                path: path.clone(),
                source,
            })?;
        let mut file = open_private(path).map_err(io_error)?;
        file.write_all(contents.as_bytes()).map_err(io_error)
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Open `path` for writing, readable by the owner only.
fn open_private(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        options.mode(0o600);
        let file = options.open(path)?;
        // `mode` only applies when the file is created.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        Ok(file)
    }
    #[cfg(not(unix))]
    {
        options.open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provider::User;

    fn session() -> Session {
        Session {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            user: User {
                id: "u1".into(),
                email: Some("ada@example.com".into()),
                full_name: None,
            },
        }
    }

    #[test]
    fn saved_session_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(&dir.path().join("nested"));
        assert_eq!(store.load().unwrap(), None);

        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SessionStore::at(&path).load(),
            Err(SessionError::Json { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private_to_the_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = SessionStore::at(&path);
        store.save(&session()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().unwrap(), Some(session()));
    }

    #[test]
    fn ephemeral_store_keeps_nothing() {
        let store = SessionStore::ephemeral();
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
