//! # 인증 및 리프레시 토큰 회전 서비스
//!
//! 로그인/회원가입 시 액세스 토큰과 리프레시 토큰 쌍을 발급하고,
//! 리프레시 토큰을 한 번만 쓸 수 있도록 회전시킵니다.
//!
//! ## 회전 순서
//!
//! ```text
//! refresh(old)
//!   1. old 조회 → 없거나 비활성이면 InvalidToken
//!   2. new 발급 후 먼저 저장
//!   3. old 조건부 폐기 (revoked 없음 AND expires > now)
//!        └─ 조건 불일치/실패 → new 폐기 후 실패 반환
//!   4. 액세스 토큰 발급
//! ```
//!
//! 동시에 같은 토큰으로 두 요청이 들어와도 3단계의 조건부 쓰기는
//! 하나만 성공하므로 회전은 최대 한 번만 일어납니다.
//! 새 토큰 저장이 실패하면 old는 건드리지 않은 채로 남습니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};

use crate::config::AuthSettings;
use crate::domain::dto::tokens::{RefreshTokenResponse, TokenPairResponse};
use crate::domain::dto::users::{CreateUserRequest, LoginRequest, UserResponse};
use crate::domain::entities::tokens::RefreshToken;
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::tokens::RefreshTokenStore;
use crate::repositories::users::UserStore;
use crate::services::auth::credential_verifier::CredentialVerifier;
use crate::services::auth::token_service::TokenService;

pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<dyn RefreshTokenStore>,
    token_service: Arc<TokenService>,
    verifier: CredentialVerifier,
    settings: AuthSettings,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: Arc<dyn RefreshTokenStore>,
        token_service: Arc<TokenService>,
        settings: AuthSettings,
    ) -> Self {
        let verifier = CredentialVerifier::new(users.clone());
        Self {
            users,
            tokens,
            token_service,
            verifier,
            settings,
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<TokenPairResponse> {
        let user = self.verifier.verify(&request.email, &request.password).await?;
        let user_id = persisted_id(&user)?;

        let pair = self.issue_pair(user_id).await?;
        log::info!("🔑 로그인 성공: {}", user.email);
        Ok(pair)
    }

    /// 새 계정을 만들고 곧바로 토큰 쌍을 발급합니다.
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<TokenPairResponse> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(&request.password, self.settings.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            request.email,
            password_hash,
        );
        let created = self.users.create(user).await?;
        let user_id = persisted_id(&created)?;

        log::info!("✅ 사용자 등록: {}", created.email);
        self.issue_pair(user_id).await
    }

    pub async fn refresh(&self, old_token: &str) -> AppResult<TokenPairResponse> {
        let now = DateTime::now();
        let current = self.find_active(old_token, now).await?;

        let next = RefreshToken::issue(current.user, self.settings.refresh_token_days, now);
        self.tokens.insert(&next).await?;

        match self.tokens.revoke_if_active(old_token, now, Some(&next.token)).await {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("⚠️ 리프레시 토큰 재사용 또는 동시 회전 감지: user={}", current.user);
                self.discard(&next.token, now).await;
                return Err(AppError::InvalidToken);
            }
            Err(e) => {
                self.discard(&next.token, now).await;
                return Err(e);
            }
        }

        let access_token = self.token_service.generate_access_token(&current.user)?;
        log::debug!("🔄 리프레시 토큰 회전 완료: user={}", current.user);

        Ok(TokenPairResponse::bearer(
            access_token,
            next.token,
            self.token_service.access_token_seconds(),
        ))
    }

    /// 호출자 소유의 활성 토큰만 폐기할 수 있습니다.
    pub async fn revoke(&self, token: &str, caller: &ObjectId) -> AppResult<()> {
        let now = DateTime::now();
        let stored = self.find_active(token, now).await?;

        if !stored.is_owned_by(caller) {
            log::warn!("🚫 다른 사용자의 토큰 폐기 시도: caller={}", caller);
            return Err(AppError::InvalidToken);
        }

        if !self.tokens.revoke_if_active(token, now, None).await? {
            return Err(AppError::InvalidToken);
        }

        log::info!("🗑️ 리프레시 토큰 폐기: user={}", caller);
        Ok(())
    }

    pub async fn list_tokens(&self, caller: &ObjectId) -> AppResult<Vec<RefreshTokenResponse>> {
        let now = DateTime::now();
        let tokens = self.tokens.find_by_user(caller).await?;

        Ok(tokens
            .into_iter()
            .map(|t| RefreshTokenResponse::from_entity(t, now))
            .collect())
    }

    pub async fn current_user(&self, caller: &ObjectId) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(caller)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    async fn issue_pair(&self, user_id: ObjectId) -> AppResult<TokenPairResponse> {
        let refresh = RefreshToken::issue(user_id, self.settings.refresh_token_days, DateTime::now());
        self.tokens.insert(&refresh).await?;

        let access_token = self.token_service.generate_access_token(&user_id)?;

        Ok(TokenPairResponse::bearer(
            access_token,
            refresh.token,
            self.token_service.access_token_seconds(),
        ))
    }

    /// 존재 여부를 드러내지 않도록 모든 실패를 `InvalidToken`으로 통일합니다.
    async fn find_active(&self, token: &str, now: DateTime) -> AppResult<RefreshToken> {
        match self.tokens.find_by_token(token).await? {
            Some(stored) if stored.is_active(now) => Ok(stored),
            _ => Err(AppError::InvalidToken),
        }
    }

    /// 회전에 실패했을 때 방금 저장한 토큰을 폐기합니다.
    async fn discard(&self, token: &str, now: DateTime) {
        if let Err(e) = self.tokens.revoke_if_active(token, now, None).await {
            log::error!("❌ 보상 폐기 실패: {}", e);
        }
    }
}

fn persisted_id(user: &User) -> AppResult<ObjectId> {
    user.id
        .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tokens::mock::MockRefreshTokenStore;
    use crate::repositories::users::mock::MockUserStore;

    const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

    struct Fixture {
        service: AuthService,
        tokens: Arc<MockRefreshTokenStore>,
        token_service: Arc<TokenService>,
    }

    fn fixture() -> Fixture {
        let settings = AuthSettings::for_tests();
        let users = Arc::new(MockUserStore::new());
        let tokens = Arc::new(MockRefreshTokenStore::new());
        let token_service = Arc::new(TokenService::new(&settings));
        let service = AuthService::new(users, tokens.clone(), token_service.clone(), settings);

        Fixture {
            service,
            tokens,
            token_service,
        }
    }

    fn alice() -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Alice".to_string(),
            last_name: "Kim".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn user_of(f: &Fixture, pair: &TokenPairResponse) -> ObjectId {
        let claims = f.token_service.verify_access_token(&pair.access_token).unwrap();
        ObjectId::parse_str(&claims.sub).unwrap()
    }

    #[actix_web::test]
    async fn test_register_login_refresh_scenario() {
        let f = fixture();
        f.service.register(alice()).await.unwrap();

        let pair = f
            .service
            .login(&login("alice@example.com", "secret123"))
            .await
            .unwrap();
        assert_eq!(pair.token_type, "Bearer");

        let err = f
            .service
            .login(&login("alice@example.com", "wrong-password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));

        let rotated = f.service.refresh(&pair.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_token, pair.refresh_token);

        let replay = f.service.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(replay, AppError::InvalidToken));
    }

    #[actix_web::test]
    async fn test_login_issues_seven_day_token_and_valid_access_token() {
        let f = fixture();
        f.service.register(alice()).await.unwrap();

        let before = DateTime::now().timestamp_millis();
        let pair = f
            .service
            .login(&login("alice@example.com", "secret123"))
            .await
            .unwrap();
        let after = DateTime::now().timestamp_millis();

        let stored = f.tokens.get(&pair.refresh_token).unwrap();
        let expires = stored.expires.timestamp_millis();
        assert!(expires >= before + 7 * DAY_MILLIS);
        assert!(expires <= after + 7 * DAY_MILLIS);

        assert!(f.token_service.verify_access_token(&pair.access_token).is_ok());
        assert_eq!(pair.expires_in, 3600);
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_conflicts() {
        let f = fixture();
        f.service.register(alice()).await.unwrap();

        let mut again = alice();
        again.email = "ALICE@example.com".to_string();
        let err = f.service.register(again).await.unwrap_err();
        assert!(matches!(err, AppError::ConflictError(_)));
    }

    #[actix_web::test]
    async fn test_login_unknown_email_is_not_found() {
        let f = fixture();
        let err = f
            .service
            .login(&login("nobody@example.com", "secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_refresh_links_old_token_to_successor() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();

        let rotated = f.service.refresh(&pair.refresh_token).await.unwrap();

        let old = f.tokens.get(&pair.refresh_token).unwrap();
        assert!(old.revoked.is_some());
        assert_eq!(old.replaced_by_token.as_deref(), Some(rotated.refresh_token.as_str()));

        let new = f.tokens.get(&rotated.refresh_token).unwrap();
        assert!(new.is_active(DateTime::now()));
        assert_eq!(new.user, old.user);
    }

    #[actix_web::test]
    async fn test_expired_token_cannot_be_refreshed() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let user = user_of(&f, &pair);

        let eight_days_ago = DateTime::from_millis(DateTime::now().timestamp_millis() - 8 * DAY_MILLIS);
        let stale = RefreshToken::issue(user, 7, eight_days_ago);
        f.tokens.put(stale.clone());

        let err = f.service.refresh(&stale.token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
        assert!(f.tokens.get(&stale.token).unwrap().revoked.is_none());
    }

    #[actix_web::test]
    async fn test_failed_insert_leaves_old_token_usable() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let count = f.tokens.len();

        f.tokens.fail_inserts(true);
        let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
        assert_eq!(f.tokens.len(), count);
        assert!(f.tokens.get(&pair.refresh_token).unwrap().is_active(DateTime::now()));

        f.tokens.fail_inserts(false);
        assert!(f.service.refresh(&pair.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_lost_rotation_race_revokes_new_token() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let owner = user_of(&f, &pair);

        f.tokens.lose_next_rotation();
        let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));

        let old = f.tokens.get(&pair.refresh_token).unwrap();
        assert!(old.revoked.is_some());
        assert!(old.replaced_by_token.is_none());

        let orphans = f.tokens.others_of(&owner, &pair.refresh_token);
        assert_eq!(orphans.len(), 1);
        assert!(orphans[0].revoked.is_some());
        assert!(orphans[0].replaced_by_token.is_none());
    }

    #[actix_web::test]
    async fn test_failed_rotation_revokes_new_token_and_keeps_old() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let owner = user_of(&f, &pair);

        f.tokens.fail_rotations(true);
        let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));

        let old = f.tokens.get(&pair.refresh_token).unwrap();
        assert!(old.is_active(DateTime::now()));
        assert!(old.replaced_by_token.is_none());

        let orphans = f.tokens.others_of(&owner, &pair.refresh_token);
        assert_eq!(orphans.len(), 1);
        assert!(orphans[0].revoked.is_some());

        f.tokens.fail_rotations(false);
        assert!(f.service.refresh(&pair.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_revoke_rules() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let owner = user_of(&f, &pair);

        let stranger = ObjectId::new();
        let err = f.service.revoke(&pair.refresh_token, &stranger).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));

        f.service.revoke(&pair.refresh_token, &owner).await.unwrap();
        let stored = f.tokens.get(&pair.refresh_token).unwrap();
        assert!(stored.revoked.is_some());
        assert!(stored.replaced_by_token.is_none());

        let again = f.service.revoke(&pair.refresh_token, &owner).await.unwrap_err();
        assert!(matches!(again, AppError::InvalidToken));

        let unknown = f.service.revoke("no-such-token", &owner).await.unwrap_err();
        assert!(matches!(unknown, AppError::InvalidToken));

        let refresh = f.service.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(refresh, AppError::InvalidToken));
    }

    #[actix_web::test]
    async fn test_list_tokens_newest_first_with_flags() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let owner = user_of(&f, &pair);
        let rotated = f.service.refresh(&pair.refresh_token).await.unwrap();

        let listed = f.service.list_tokens(&owner).await.unwrap();
        assert_eq!(listed.len(), 2);

        let old = listed.iter().find(|t| t.token == pair.refresh_token).unwrap();
        assert!(!old.is_active);
        assert_eq!(old.replaced_by_token.as_deref(), Some(rotated.refresh_token.as_str()));

        let new = listed.iter().find(|t| t.token == rotated.refresh_token).unwrap();
        assert!(new.is_active);
        assert!(!new.is_expired);
    }

    #[actix_web::test]
    async fn test_current_user_hides_password_hash() {
        let f = fixture();
        let pair = f.service.register(alice()).await.unwrap();
        let owner = user_of(&f, &pair);

        let me = f.service.current_user(&owner).await.unwrap();
        assert_eq!(me.email, "alice@example.com");

        let json = serde_json::to_value(&me).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
