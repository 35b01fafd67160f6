//! Use-case tests against an in-memory repository double.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::logout::LogoutUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::token;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// In-memory stand-in for both repositories
#[derive(Clone, Default)]
struct MemoryAuthRepository {
    users: Arc<Mutex<Vec<User>>>,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    next_user_id: Arc<AtomicI64>,
}

impl MemoryAuthRepository {
    fn new() -> Self {
        Self {
            next_user_id: Arc::new(AtomicI64::new(1)),
            ..Default::default()
        }
    }

    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn insert(
        &self,
        username: &UserName,
        password_hash: &HashedPassword,
    ) -> AuthResult<User> {
        let mut users = self.users.lock().unwrap();

        // Mirrors the unique constraint on usernames
        if users.iter().any(|u| u.username.as_str() == username.as_str()) {
            return Err(AuthError::UsernameTaken);
        }

        let user = User {
            id: UserId::from_i64(self.next_user_id.fetch_add(1, Ordering::SeqCst)),
            username: UserName::from_db(username.as_str()),
            password_hash: password_hash.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

impl SessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let now_ms = Utc::now().timestamp_millis();
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .get(&session_id)
            .filter(|s| s.expires_at_ms > now_ms)
            .cloned())
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at_ms > now_ms);
        Ok((before - sessions.len()) as u64)
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

async fn register_alice(repo: &Arc<MemoryAuthRepository>) {
    let use_case = RegisterUseCase::new(repo.clone());
    use_case
        .execute(RegisterInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn register_assigns_sequential_ids() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let use_case = RegisterUseCase::new(repo.clone());

    let alice = use_case
        .execute(RegisterInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();
    let bob = use_case
        .execute(RegisterInput {
            username: "bob".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(alice.user_id.as_i64(), 1);
    assert_eq!(bob.user_id.as_i64(), 2);
    assert_eq!(alice.username, "alice");
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let use_case = RegisterUseCase::new(repo.clone());
    let err = use_case
        .execute(RegisterInput {
            username: "alice".to_string(),
            password: "Zyxwvu98".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UsernameTaken));
}

#[tokio::test]
async fn register_rejects_weak_password() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let use_case = RegisterUseCase::new(repo.clone());

    for weak in ["abcdef12", "ABCDEF12", "Abcdefgh", "Abc123"] {
        let err = use_case
            .execute(RegisterInput {
                username: "carol".to_string(),
                password: weak.to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword), "password: {weak}");
    }

    assert!(repo.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn login_creates_session_bound_to_user() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let config = test_config();
    let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());

    let output = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.username, "alice");
    assert_eq!(repo.session_count(), 1);

    let session_id = token::verify(&config.session_secret, &output.session_token).unwrap();
    let session = repo.find_by_id(session_id).await.unwrap().unwrap();
    assert_eq!(session.user_id, output.user_id);
    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn login_wrong_password_creates_no_session() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let login = LoginUseCase::new(repo.clone(), repo.clone(), test_config());
    let err = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "Wrong999x".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidPassword));
    assert_eq!(repo.session_count(), 0);
}

#[tokio::test]
async fn login_unknown_user() {
    let repo = Arc::new(MemoryAuthRepository::new());

    let login = LoginUseCase::new(repo.clone(), repo.clone(), test_config());
    let err = login
        .execute(LoginInput {
            username: "nobody".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UserNotFound));
}

#[tokio::test]
async fn check_session_accepts_fresh_token() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let config = test_config();
    let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();

    let check = CheckSessionUseCase::new(repo.clone(), config.clone());
    let session = check.get_session(&output.session_token).await.unwrap();
    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn check_session_rejects_tampered_token() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let config = test_config();
    let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();

    let mut tampered = output.session_token.clone();
    tampered.push('x');

    let check = CheckSessionUseCase::new(repo.clone(), config.clone());
    let err = check.get_session(&tampered).await.unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));
}

#[tokio::test]
async fn check_session_rejects_expired_session() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let config = test_config();
    let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();

    // Force the session past its idle expiry
    let session_id = token::verify(&config.session_secret, &output.session_token).unwrap();
    {
        let mut sessions = repo.sessions.lock().unwrap();
        let session = sessions.get_mut(&session_id).unwrap();
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;
    }

    let check = CheckSessionUseCase::new(repo.clone(), config.clone());
    let err = check.get_session(&output.session_token).await.unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));
}

#[tokio::test]
async fn logout_deletes_session() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register_alice(&repo).await;

    let config = test_config();
    let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
    let output = login
        .execute(LoginInput {
            username: "alice".to_string(),
            password: "Abcdef12".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(repo.session_count(), 1);

    let logout = LogoutUseCase::new(repo.clone(), config.clone());
    logout.execute(&output.session_token).await.unwrap();
    assert_eq!(repo.session_count(), 0);

    // A second logout with the same token is a no-op, not an error
    logout.execute(&output.session_token).await.unwrap();
}

#[tokio::test]
async fn logout_with_garbage_token_is_ok() {
    let repo = Arc::new(MemoryAuthRepository::new());

    let logout = LogoutUseCase::new(repo.clone(), test_config());
    logout.execute("not-a-token").await.unwrap();
}

#[tokio::test]
async fn cleanup_expired_removes_only_stale_sessions() {
    let repo = Arc::new(MemoryAuthRepository::new());

    let live = Session::new(
        UserId::from_i64(1),
        "alice".to_string(),
        chrono::Duration::minutes(10),
    );
    let mut stale = Session::new(
        UserId::from_i64(2),
        "bob".to_string(),
        chrono::Duration::minutes(10),
    );
    stale.expires_at_ms = Utc::now().timestamp_millis() - 1_000;

    repo.create(&live).await.unwrap();
    repo.create(&stale).await.unwrap();

    let removed = SessionRepository::cleanup_expired(repo.as_ref()).await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(repo.session_count(), 1);
    assert!(repo.find_by_id(live.session_id).await.unwrap().is_some());
}
