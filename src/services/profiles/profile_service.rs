//! # 프로필 서비스
//!
//! 프로필 CRUD, 경력/학력, 팔로우와 친구 관계를 다룹니다.
//!
//! 관계 작업은 양쪽 프로필을 모두 읽고, 엔티티 메서드로 규칙을 검증한 뒤
//! 두 문서를 각각 저장합니다.
//!
//! | 작업 | 호출자 프로필 | 대상 프로필 |
//! |------|---------------|-------------|
//! | follow | `followings` 추가 | `followers` 추가 |
//! | unfollow | `followings` 제거 | `followers` 제거 |
//! | 친구 요청 | - | `friend_requests` 추가 |
//! | 친구 수락 | 요청 제거 + `friends` 추가 | `friends` 추가 |
//! | unfriend | `friends` 제거 | `friends` 제거 |

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::dto::profiles::{
    AddEducationRequest, AddExperienceRequest, CreateProfileRequest, ProfileResponse,
};
use crate::domain::entities::profiles::{Education, Experience, Profile, Social};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::profiles::ProfileRepository;
use crate::utils::string_utils::{
    clean_optional_string, normalize_url, parse_object_id, split_skills, validate_required_string,
};

pub struct ProfileService {
    profile_repo: Arc<ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn list_profiles(&self) -> AppResult<Vec<ProfileResponse>> {
        let profiles = self.profile_repo.find_all().await?;
        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    pub async fn get_by_user(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let user = parse_object_id(user_id, "user id")?;
        self.load(&user).await.map(ProfileResponse::from)
    }

    pub async fn get_mine(&self, caller: &ObjectId) -> AppResult<ProfileResponse> {
        self.load(caller).await.map(ProfileResponse::from)
    }

    /// 프로필이 없으면 만들고, 있으면 요청 값으로 덮어씁니다.
    /// 관계 목록과 경력/학력은 유지됩니다.
    pub async fn upsert_mine(
        &self,
        caller: &ObjectId,
        request: CreateProfileRequest,
    ) -> AppResult<ProfileResponse> {
        let existing = self.profile_repo.find_by_user(caller).await?;
        let created = existing.is_none();
        let mut profile = existing.unwrap_or_else(|| Profile::new(*caller, String::new()));

        apply_request(&mut profile, request)?;
        self.profile_repo.save(&profile).await?;

        if created {
            log::info!("📝 프로필 생성: user={}", caller);
        }
        self.load(caller).await.map(ProfileResponse::from)
    }

    pub async fn delete_mine(&self, caller: &ObjectId) -> AppResult<()> {
        if !self.profile_repo.delete_by_user(caller).await? {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }
        log::info!("🗑️ 프로필 삭제: user={}", caller);
        Ok(())
    }

    pub async fn add_experience(
        &self,
        caller: &ObjectId,
        request: AddExperienceRequest,
    ) -> AppResult<ProfileResponse> {
        let mut profile = self.load(caller).await?;
        profile.add_experience(Experience {
            id: ObjectId::new(),
            title: validate_required_string(&request.title, "Title")?,
            company: validate_required_string(&request.company, "Company")?,
            location: clean_optional_string(request.location),
            from: request.from,
            to: if request.current { None } else { request.to },
            current: request.current,
            description: clean_optional_string(request.description),
        });

        self.profile_repo.save(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn remove_experience(&self, caller: &ObjectId, experience_id: &str) -> AppResult<ProfileResponse> {
        let id = parse_object_id(experience_id, "experience id")?;
        let mut profile = self.load(caller).await?;
        profile.remove_experience(&id)?;

        self.profile_repo.save(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn add_education(
        &self,
        caller: &ObjectId,
        request: AddEducationRequest,
    ) -> AppResult<ProfileResponse> {
        let mut profile = self.load(caller).await?;
        profile.add_education(Education {
            id: ObjectId::new(),
            school: validate_required_string(&request.school, "School")?,
            degree: validate_required_string(&request.degree, "Degree")?,
            fieldofstudy: validate_required_string(&request.fieldofstudy, "Field of study")?,
            from: request.from,
            to: if request.current { None } else { request.to },
            current: request.current,
            description: clean_optional_string(request.description),
        });

        self.profile_repo.save(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn remove_education(&self, caller: &ObjectId, education_id: &str) -> AppResult<ProfileResponse> {
        let id = parse_object_id(education_id, "education id")?;
        let mut profile = self.load(caller).await?;
        profile.remove_education(&id)?;

        self.profile_repo.save(&profile).await?;
        Ok(ProfileResponse::from(profile))
    }

    pub async fn follow(&self, caller: &ObjectId, target_id: &str) -> AppResult<ProfileResponse> {
        let target = parse_object_id(target_id, "user id")?;
        let now = DateTime::now();

        let mut mine = self.load(caller).await?;
        mine.follow(target, now)?;
        let mut theirs = self.load(&target).await?;
        theirs.add_follower(*caller, now);

        self.profile_repo.save(&theirs).await?;
        self.profile_repo.save(&mine).await?;
        log::debug!("👥 follow: {} → {}", caller, target);
        Ok(ProfileResponse::from(mine))
    }

    pub async fn unfollow(&self, caller: &ObjectId, target_id: &str) -> AppResult<ProfileResponse> {
        let target = parse_object_id(target_id, "user id")?;

        let mut mine = self.load(caller).await?;
        mine.unfollow(&target)?;

        if let Some(mut theirs) = self.profile_repo.find_by_user(&target).await? {
            theirs.remove_follower(caller);
            self.profile_repo.save(&theirs).await?;
        }
        self.profile_repo.save(&mine).await?;
        Ok(ProfileResponse::from(mine))
    }

    /// 대상 사용자의 프로필에 친구 요청을 남깁니다.
    pub async fn send_friend_request(&self, caller: &ObjectId, target_id: &str) -> AppResult<ProfileResponse> {
        let target = parse_object_id(target_id, "user id")?;

        let mine = self.load(caller).await?;
        if mine.is_friend(&target) {
            return Err(AppError::ConflictError("You are already friends".to_string()));
        }

        let mut theirs = self.load(&target).await?;
        theirs.receive_friend_request(*caller, DateTime::now())?;
        self.profile_repo.save(&theirs).await?;

        log::debug!("🤝 친구 요청: {} → {}", caller, target);
        Ok(ProfileResponse::from(mine))
    }

    pub async fn accept_friend_request(&self, caller: &ObjectId, from_id: &str) -> AppResult<ProfileResponse> {
        let from = parse_object_id(from_id, "user id")?;
        let now = DateTime::now();

        let mut mine = self.load(caller).await?;
        mine.accept_friend_request(&from, now)?;
        let mut theirs = self.load(&from).await?;
        theirs.add_friend(*caller, now);

        self.profile_repo.save(&theirs).await?;
        self.profile_repo.save(&mine).await?;
        Ok(ProfileResponse::from(mine))
    }

    pub async fn unfriend(&self, caller: &ObjectId, target_id: &str) -> AppResult<ProfileResponse> {
        let target = parse_object_id(target_id, "user id")?;

        let mut mine = self.load(caller).await?;
        mine.unfriend(&target)?;

        if let Some(mut theirs) = self.profile_repo.find_by_user(&target).await? {
            theirs.forget_friend(caller);
            self.profile_repo.save(&theirs).await?;
        }
        self.profile_repo.save(&mine).await?;
        Ok(ProfileResponse::from(mine))
    }

    async fn load(&self, user: &ObjectId) -> AppResult<Profile> {
        self.profile_repo
            .find_by_user(user)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }
}

/// 요청 값을 프로필 필드에 반영합니다. URL은 https로 정규화됩니다.
fn apply_request(profile: &mut Profile, request: CreateProfileRequest) -> AppResult<()> {
    let skills = split_skills(&request.skills);
    if skills.is_empty() {
        return Err(AppError::ValidationError("Skills is required".to_string()));
    }

    profile.status = validate_required_string(&request.status, "Status")?;
    profile.skills = skills;
    profile.company = request.company;
    profile.location = request.location;
    profile.bio = request.bio;
    profile.website = request.website.as_deref().map(normalize_url);
    profile.social = Social {
        youtube: request.youtube.as_deref().map(normalize_url),
        twitter: request.twitter.as_deref().map(normalize_url),
        linkedin: request.linkedin.as_deref().map(normalize_url),
        facebook: request.facebook.as_deref().map(normalize_url),
        instagram: request.instagram.as_deref().map(normalize_url),
    };
    Ok(())
}
