use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::token::CredentialPair;

/// Credentials as currently held by a store. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl Session {
    /// Access token, treating an empty string as absent.
    pub fn access_token(&self) -> Option<&str> {
        self.access.as_deref().filter(|s| !s.is_empty())
    }

    /// Refresh token, treating an empty string as absent.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh.as_deref().filter(|s| !s.is_empty())
    }

    /// A session is considered live while a non-empty access token exists.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

/// Storage abstraction for the shared session credentials.
///
/// Writes are last-write-wins; implementations only need to keep each call
/// atomic with respect to the others.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Session, StoreError>;
    fn set_credentials(&self, credentials: &CredentialPair) -> Result<(), StoreError>;
    /// Replace the access token in place, keeping the refresh token.
    fn set_access(&self, access: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store. The default for embedders that manage persistence
/// themselves.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: &CredentialPair) -> Self {
        Self {
            session: RwLock::new(Session {
                access: Some(credentials.access.clone()),
                refresh: Some(credentials.refresh.clone()),
            }),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session, StoreError> {
        self.session
            .read()
            .map(|s| s.clone())
            .map_err(|_| StoreError::Poisoned)
    }

    fn set_credentials(&self, credentials: &CredentialPair) -> Result<(), StoreError> {
        let mut session = self.session.write().map_err(|_| StoreError::Poisoned)?;
        session.access = Some(credentials.access.clone());
        session.refresh = Some(credentials.refresh.clone());
        Ok(())
    }

    fn set_access(&self, access: &str) -> Result<(), StoreError> {
        let mut session = self.session.write().map_err(|_| StoreError::Poisoned)?;
        session.access = Some(access.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut session = self.session.write().map_err(|_| StoreError::Poisoned)?;
        *session = Session::default();
        Ok(())
    }
}

/// Configuration for file-backed session storage.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    pub base_dir: PathBuf,
}

impl SessionStoreConfig {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn default_dir() -> PathBuf {
        default_flexirota_dir()
    }
}

/// File-backed session store using a TOML file.
///
/// # Example
/// ```no_run
/// use flexirota::auth::{CredentialPair, FileSessionStore, SessionStore};
///
/// let store = FileSessionStore::new_default();
/// store.set_credentials(&CredentialPair::new("access", "refresh"))?;
/// # Ok::<(), flexirota::auth::StoreError>(())
/// ```
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serialises read-modify-write in `set_access`.
    write_lock: std::sync::Mutex<()>,
}

const SESSION_FILE_NAME: &str = "session.toml";
const SESSION_FILE_VERSION: u32 = 1;

impl FileSessionStore {
    pub fn new(config: SessionStoreConfig) -> Self {
        Self {
            path: config.base_dir.join(SESSION_FILE_NAME),
            write_lock: std::sync::Mutex::new(()),
        }
    }

    pub fn new_default() -> Self {
        Self::new(SessionStoreConfig::new(default_flexirota_dir()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Option<SessionFile>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        Ok(Some(toml::from_str(&raw)?))
    }

    fn write_file(&self, session: Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = SessionFile {
            version: SESSION_FILE_VERSION,
            session,
            saved_at: Utc::now(),
        };
        // Readers take no lock, so the file is replaced by rename and is
        // never observed half-written.
        let tmp = self.tmp_path();
        fs::write(&tmp, toml::to_string(&file)?)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        self.path
            .with_file_name(format!("{SESSION_FILE_NAME}.{}.tmp", std::process::id()))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session, StoreError> {
        Ok(self.read_file()?.map(|f| f.session).unwrap_or_default())
    }

    fn set_credentials(&self, credentials: &CredentialPair) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        self.write_file(Session {
            access: Some(credentials.access.clone()),
            refresh: Some(credentials.refresh.clone()),
        })
    }

    fn set_access(&self, access: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut session = self.read_file()?.map(|f| f.session).unwrap_or_default();
        session.access = Some(access.to_string());
        self.write_file(session)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    session: Session,
    saved_at: DateTime<Utc>,
}

fn default_flexirota_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".flexirota"))
        .unwrap_or_else(|| PathBuf::from(".flexirota"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileSessionStore) {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(SessionStoreConfig::new(dir.path().to_path_buf()));
        (dir, store)
    }

    #[test]
    fn memory_set_then_load_round_trips() {
        let store = MemorySessionStore::new();
        store
            .set_credentials(&CredentialPair::new("a", "r"))
            .unwrap();
        let session = store.load().unwrap();
        assert_eq!(session.access.as_deref(), Some("a"));
        assert_eq!(session.refresh.as_deref(), Some("r"));
    }

    #[test]
    fn memory_clear_leaves_nothing() {
        let store = MemorySessionStore::with_credentials(&CredentialPair::new("a", "r"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn set_access_keeps_refresh() {
        let store = MemorySessionStore::with_credentials(&CredentialPair::new("a1", "r1"));
        store.set_access("a2").unwrap();
        let session = store.load().unwrap();
        assert_eq!(session.access_token(), Some("a2"));
        assert_eq!(session.refresh_token(), Some("r1"));
    }

    #[test]
    fn empty_access_is_not_authenticated() {
        let session = Session {
            access: Some(String::new()),
            refresh: Some("r".into()),
        };
        assert!(!session.is_authenticated());
        assert_eq!(session.refresh_token(), Some("r"));
    }

    #[test]
    fn file_round_trip_works() {
        let (_dir, store) = temp_store();
        store
            .set_credentials(&CredentialPair::new("access", "refresh"))
            .unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.access.as_deref(), Some("access"));
        assert_eq!(loaded.refresh.as_deref(), Some("refresh"));
    }

    #[test]
    fn file_missing_loads_empty_session() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn file_set_access_without_file_creates_one() {
        let (_dir, store) = temp_store();
        store.set_access("only-access").unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.access_token(), Some("only-access"));
        assert!(loaded.refresh.is_none());
    }

    #[test]
    fn file_clear_removes_session_and_is_idempotent() {
        let (_dir, store) = temp_store();
        store
            .set_credentials(&CredentialPair::new("access", "refresh"))
            .unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn file_write_leaves_no_temp_file() {
        let (dir, store) = temp_store();
        store
            .set_credentials(&CredentialPair::new("access", "refresh"))
            .unwrap();
        store.set_access("access-2").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![SESSION_FILE_NAME.to_string()]);
    }

    #[test]
    fn file_reads_during_writes_never_see_partial_content() {
        let (_dir, store) = temp_store();
        let store = std::sync::Arc::new(store);
        store
            .set_credentials(&CredentialPair::new("access-0", "refresh"))
            .unwrap();

        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 1..200 {
                    store.set_access(&format!("access-{i}")).unwrap();
                }
            })
        };
        for _ in 0..200 {
            let session = store.load().expect("load during write");
            assert!(session.access_token().unwrap().starts_with("access-"));
            assert_eq!(session.refresh_token(), Some("refresh"));
        }
        writer.join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = temp_store();
        store
            .set_credentials(&CredentialPair::new("access", "refresh"))
            .unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
