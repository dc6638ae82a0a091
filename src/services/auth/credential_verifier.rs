//! 이메일/비밀번호 자격 증명 검증

use std::sync::Arc;

use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::UserStore;

pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 저장된 bcrypt 해시와 비밀번호를 비교합니다.
    ///
    /// - 이메일에 해당하는 사용자가 없으면 `NotFound`
    /// - 비밀번호가 다르면 `InvalidCredentials`
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash)
            .context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("🔒 비밀번호 불일치: {}", user.email);
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
