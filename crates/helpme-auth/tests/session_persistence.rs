//! # Session lifecycle against a mock backend
//!
//! Login persists the user, a fresh session restored from the same store
//! sees the same record, logout erases it.

mod common;

use common::{MockServer, Reply, double_encoded};
use std::io;
use std::path::PathBuf;

use helpme_auth::{AuthSession, FileStore, MemoryStore, SessionStore, StoreError};
use helpme_core::{Credentials, RegistrationData};
use pretty_assertions::assert_eq;
use serde_json::json;

const KEY: &str = "helpme_user";

/// Store whose every operation fails, like an unmounted or read-only disk.
struct BrokenStore;

fn broken_path(key: &str) -> PathBuf {
    PathBuf::from("/unavailable").join(format!("{key}.json"))
}

impl SessionStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Read {
            path: broken_path(key),
            source: io::Error::other("device not ready"),
        })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            path: broken_path(key),
            source: io::Error::other("read-only file system"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::Remove {
            path: broken_path(key),
            source: io::Error::other("read-only file system"),
        })
    }
}

fn login_reply() -> Reply {
    Reply::ok(double_encoded(&json!([{
        "idUsuario": 42,
        "Token": "tok-42",
        "Nome": "Ana",
        "Email": "ana@example.com",
        "Companhia": "Auto Center Ana",
        "Login": "ana",
        "Roles": "oficina",
    }])))
}

#[tokio::test]
async fn login_survives_restart_until_logout() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let server = MockServer::start(vec![login_reply()]);
    let client = server.client();

    let mut session = AuthSession::restore(client.clone(), FileStore::new(tmp.path()), KEY);
    assert!(!session.is_authenticated());

    let result = session.login(&Credentials::new("ana", "secret")).await;
    assert!(result.success, "login failed: {:?}", result.message);
    let logged_in = session.user().cloned().expect("user after login");
    assert_eq!(logged_in.token, "tok-42");
    assert!(tmp.path().join("helpme_user.json").exists());
    server.finish();

    // Restart: a brand-new session over the same directory.
    let mut restored = AuthSession::restore(client.clone(), FileStore::new(tmp.path()), KEY);
    assert_eq!(restored.user(), Some(&logged_in));
    assert!(restored.is_authenticated());

    restored.logout().expect("logout");
    assert!(restored.user().is_none());

    let after_logout = AuthSession::restore(client, FileStore::new(tmp.path()), KEY);
    assert!(after_logout.user().is_none());
    assert!(!tmp.path().join("helpme_user.json").exists());
}

#[tokio::test]
async fn second_login_overwrites_first() {
    let second = Reply::ok(double_encoded(&json!([{"idUsuario": 9, "Token": "tok-9", "Nome": "Bia"}])));
    let server = MockServer::start(vec![login_reply(), second]);

    let mut session = AuthSession::restore(server.client(), MemoryStore::new(), KEY);
    session.login(&Credentials::new("ana", "secret")).await;
    session.login(&Credentials::new("bia", "secret")).await;
    server.finish();

    assert_eq!(session.user().map(|u| u.id.as_str()), Some("9"));
    let stored = session.store().get(KEY).expect("get").expect("persisted");
    assert!(stored.contains("tok-9"));
}

#[tokio::test]
async fn rejected_login_does_not_persist() {
    let server = MockServer::start(vec![Reply::ok(double_encoded(&json!([{"idUsuario": 1, "Token": "0"}])))]);

    let mut session = AuthSession::restore(server.client(), MemoryStore::new(), KEY);
    let result = session.login(&Credentials::new("ana", "wrong")).await;
    server.finish();

    assert!(!result.success);
    assert!(session.user().is_none());
    assert_eq!(session.store().get(KEY).expect("get"), None);
}

#[tokio::test]
async fn register_and_recovery_never_touch_session() {
    let server = MockServer::start(vec![
        Reply::json(&json!({"status": "sucesso"})),
        Reply::ok(""),
        Reply::json(&json!({"TokenValido": 1})),
        Reply::json(&json!({"Status": "Senha Alterada"})),
    ]);

    let session = AuthSession::restore(server.client(), MemoryStore::new(), KEY);
    let data = RegistrationData::new("Ana", "ana@example.com", "ana", "secret1", None);

    assert!(session.register(&data).await.success);
    assert!(session.request_password_reset("ana").await.success);
    assert!(session.validate_reset_token("ana", "123456").await.success);
    assert!(session.change_password("ana", "newpass", "123456").await.success);
    server.finish();

    assert!(session.user().is_none());
    assert_eq!(session.store().get(KEY).expect("get"), None);
}

#[test]
fn corrupt_file_is_discarded_on_restore() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(tmp.path().join("helpme_user.json"), "{\"id\": 7,").expect("write");

    let client = helpme_auth::AuthClient::new("http://127.0.0.1:1", std::time::Duration::from_secs(1));
    let session = AuthSession::restore(client, FileStore::new(tmp.path()), KEY);

    assert!(session.user().is_none());
    assert!(!tmp.path().join("helpme_user.json").exists());
}

#[test]
fn unreadable_store_starts_signed_out() {
    let client = helpme_auth::AuthClient::new("http://127.0.0.1:1", std::time::Duration::from_secs(1));
    let session = AuthSession::restore(client, BrokenStore, KEY);

    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn failed_save_keeps_login_in_memory() {
    let server = MockServer::start(vec![login_reply()]);

    let mut session = AuthSession::restore(server.client(), BrokenStore, KEY);
    let result = session.login(&Credentials::new("ana", "secret")).await;
    server.finish();

    assert!(result.success, "login failed: {:?}", result.message);
    assert_eq!(session.user().map(|u| u.token.as_str()), Some("tok-42"));
    assert!(session.is_authenticated());

    // Erasing the record fails too, but the in-memory user is still cleared.
    assert!(session.logout().is_err());
    assert!(session.user().is_none());
}
