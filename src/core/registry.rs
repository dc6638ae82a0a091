//! # Service Registry
//!
//! 애플리케이션 시작 시 리포지토리와 서비스를 한 번만 생성하고,
//! `web::Data`로 감싸 모든 워커가 공유하도록 등록합니다.
//!
//! ```text
//! Arc<Database>
//!   ├── UserRepository ─────┬── AuthService (UserStore)
//!   ├── RefreshTokenRepository ┘   (RefreshTokenStore)
//!   ├── ProfileRepository ──── ProfileService, UserService
//!   ├── PostRepository ─────── PostService
//!   ├── GroupRepository ────── GroupService
//!   └── ConversationRepository ConversationService
//! ```
//!
//! 전역 로케이터 없이 의존성은 생성자 인자로만 전달됩니다.

use std::sync::Arc;

use actix_web::web;

use crate::config::AuthSettings;
use crate::db::Database;
use crate::errors::errors::AppResult;
use crate::repositories::{
    conversations::ConversationRepository, groups::GroupRepository, posts::PostRepository,
    profiles::ProfileRepository, tokens::RefreshTokenRepository, users::UserRepository,
};
use crate::services::{
    auth::{AuthService, TokenService},
    conversations::ConversationService,
    groups::GroupService,
    posts::PostService,
    profiles::ProfileService,
    users::UserService,
};

#[derive(Clone)]
pub struct ServiceRegistry {
    pub token_service: web::Data<TokenService>,
    pub auth_service: web::Data<AuthService>,
    pub user_service: web::Data<UserService>,
    pub profile_service: web::Data<ProfileService>,
    pub post_service: web::Data<PostService>,
    pub group_service: web::Data<GroupService>,
    pub conversation_service: web::Data<ConversationService>,
}

impl ServiceRegistry {
    /// 리포지토리 인덱스를 만들고 모든 서비스를 조립합니다.
    pub async fn initialize(db: Arc<Database>, settings: AuthSettings) -> AppResult<Self> {
        log::info!("🔧 서비스 초기화 시작 (database: {})", db.database_name());

        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let token_repo = Arc::new(RefreshTokenRepository::new(db.clone()));
        let profile_repo = Arc::new(ProfileRepository::new(db.clone()));
        let post_repo = Arc::new(PostRepository::new(db.clone()));
        let group_repo = Arc::new(GroupRepository::new(db.clone()));
        let conversation_repo = Arc::new(ConversationRepository::new(db));

        user_repo.create_indexes().await?;
        token_repo.create_indexes().await?;
        profile_repo.create_indexes().await?;
        post_repo.create_indexes().await?;
        group_repo.create_indexes().await?;
        conversation_repo.create_indexes().await?;
        log::info!("📇 컬렉션 인덱스 준비 완료");

        let token_service = Arc::new(TokenService::new(&settings));
        let bcrypt_cost = settings.bcrypt_cost;

        let auth_service = AuthService::new(
            user_repo.clone(),
            token_repo,
            token_service.clone(),
            settings,
        );

        let registry = Self {
            token_service: web::Data::from(token_service),
            auth_service: web::Data::new(auth_service),
            user_service: web::Data::new(UserService::new(
                user_repo.clone(),
                profile_repo.clone(),
                bcrypt_cost,
            )),
            profile_service: web::Data::new(ProfileService::new(profile_repo)),
            post_service: web::Data::new(PostService::new(post_repo, user_repo.clone())),
            group_service: web::Data::new(GroupService::new(group_repo)),
            conversation_service: web::Data::new(ConversationService::new(conversation_repo, user_repo)),
        };

        log::info!("✅ 모든 서비스가 초기화되었습니다");
        Ok(registry)
    }

    /// `App::configure`에 전달해 모든 서비스를 app data로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.token_service.clone())
            .app_data(self.auth_service.clone())
            .app_data(self.user_service.clone())
            .app_data(self.profile_service.clone())
            .app_data(self.post_service.clone())
            .app_data(self.group_service.clone())
            .app_data(self.conversation_service.clone());
    }
}
