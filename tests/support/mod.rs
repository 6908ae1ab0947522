#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use flexirota::auth::{
    CredentialPair, MemorySessionStore, Navigator, Session, SessionStore, StoreError,
};
use flexirota::client::ApiClient;
use flexirota::config::ClientConfig;
use wiremock::{Match, MockServer, Request};

/// Navigator that remembers every redirect.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("navigator lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths
            .lock()
            .expect("navigator lock poisoned")
            .push(path.to_string());
    }
}

/// Matches requests that carry no `Authorization` header.
pub struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Store whose reads always fail; writes succeed and are discarded.
pub struct UnreadableStore;

impl SessionStore for UnreadableStore {
    fn load(&self) -> Result<Session, StoreError> {
        Err(StoreError::Io("disk gone".to_string()))
    }

    fn set_credentials(&self, _credentials: &CredentialPair) -> Result<(), StoreError> {
        Ok(())
    }

    fn set_access(&self, _access: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct Harness {
    pub server: MockServer,
    pub store: Arc<MemorySessionStore>,
    pub navigator: RecordingNavigator,
    pub client: ApiClient,
}

impl Harness {
    pub fn session(&self) -> Session {
        self.store.load().expect("load session")
    }
}

/// Client pointed at a fresh mock backend, seeded with `access`/`refresh`.
pub async fn harness(access: Option<&str>, refresh: Option<&str>) -> Harness {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    match (access, refresh) {
        (Some(a), Some(r)) => store
            .set_credentials(&CredentialPair::new(a, r))
            .expect("seed credentials"),
        (Some(a), None) => store.set_access(a).expect("seed access"),
        (None, Some(r)) => {
            store
                .set_credentials(&CredentialPair::new("", r))
                .expect("seed refresh");
        }
        (None, None) => {}
    }
    let navigator = RecordingNavigator::default();
    let client = ApiClient::new(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_send_cookies(false),
        store.clone(),
        Arc::new(navigator.clone()),
    )
    .expect("build client");

    Harness {
        server,
        store,
        navigator,
        client,
    }
}
