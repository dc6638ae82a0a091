//! # 사용자 관리 서비스 구현
//!
//! 사용자 조회, 키워드 페이지 조회, 본인 정보 수정과 탈퇴를 담당합니다.
//! 회원가입과 로그인은 토큰 발급과 묶여 있으므로 [`AuthService`]에 있습니다.
//!
//! ## 권한 규칙
//!
//! | 작업 | 조건 |
//! |------|------|
//! | 조회, 목록, 페이지 | 인증 불필요 |
//! | 수정, 삭제 | 대상 ID == 인증된 사용자 ID |
//!
//! 탈퇴하면 해당 사용자의 프로필도 함께 삭제됩니다.
//!
//! [`AuthService`]: crate::services::auth::AuthService

use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId, DateTime};

use crate::domain::dto::pagination::{page_offset, Pagination, DEFAULT_PAGE_SIZE};
use crate::domain::dto::users::{UpdateUserRequest, UserResponse};
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::profiles::ProfileRepository;
use crate::repositories::users::{UserRepository, UserStore};
use crate::utils::string_utils::{gravatar_url, parse_object_id, validate_required_string};

pub struct UserService {
    user_repo: Arc<UserRepository>,
    profile_repo: Arc<ProfileRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        profile_repo: Arc<ProfileRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            bcrypt_cost,
        }
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user_id = parse_object_id(id, "user id")?;
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 1부터 시작하는 페이지 번호로 사용자를 조회합니다.
    pub async fn paginate_users(
        &self,
        page: u64,
        keyword: Option<&str>,
    ) -> AppResult<Pagination<UserResponse>> {
        let skip = page_offset(page, DEFAULT_PAGE_SIZE)?;
        let (users, total) = self
            .user_repo
            .find_page(keyword, skip, DEFAULT_PAGE_SIZE)
            .await?;

        Ok(Pagination::new(total, page, DEFAULT_PAGE_SIZE, users).map(UserResponse::from))
    }

    pub async fn update_user(
        &self,
        caller: &ObjectId,
        id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let user_id = parse_object_id(id, "user id")?;
        ensure_self(caller, &user_id)?;

        let email = request.email.trim().to_lowercase();
        if self.user_repo.email_taken_by_other(&email, &user_id).await? {
            return Err(AppError::ConflictError("Email is already in use".to_string()));
        }

        let mut update = doc! {
            "first_name": validate_required_string(&request.first_name, "First name")?,
            "last_name": validate_required_string(&request.last_name, "Last name")?,
            "avatar": gravatar_url(&email),
            "email": email,
            "updated_at": DateTime::now(),
        };

        if let Some(password) = request.password.as_deref() {
            let password_hash = bcrypt::hash(password, self.bcrypt_cost)
                .context("비밀번호 해싱 실패")?;
            update.insert("password_hash", password_hash);
        }

        let updated = self
            .user_repo
            .update(&user_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        log::info!("✏️ 사용자 정보 수정: {}", updated.email);
        Ok(UserResponse::from(updated))
    }

    pub async fn delete_user(&self, caller: &ObjectId, id: &str) -> AppResult<()> {
        let user_id = parse_object_id(id, "user id")?;
        ensure_self(caller, &user_id)?;

        if !self.user_repo.delete(&user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let profile_removed = self.profile_repo.delete_by_user(&user_id).await?;
        log::info!("🗑️ 사용자 삭제: {} (프로필 삭제: {})", user_id, profile_removed);
        Ok(())
    }
}

fn ensure_self(caller: &ObjectId, target: &ObjectId) -> AppResult<()> {
    if caller != target {
        return Err(AppError::AuthorizationError(
            "You can only modify your own account".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_self() {
        let me = ObjectId::new();
        assert!(ensure_self(&me, &me).is_ok());

        let err = ensure_self(&me, &ObjectId::new()).unwrap_err();
        assert!(matches!(err, AppError::AuthorizationError(_)));
    }
}
