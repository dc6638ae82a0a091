//! # 그룹 서비스
//!
//! 권한 검사는 [`Group`] 엔티티 메서드가 수행하고,
//! 이 서비스는 조회, 이름/코드 중복 검사, 저장만 담당합니다.
//!
//! [`Group`]: crate::domain::entities::groups::Group

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::dto::groups::{AddManagerRequest, GroupRequest, GroupResponse, MemberResponse};
use crate::domain::entities::groups::Group;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::groups::GroupRepository;
use crate::utils::string_utils::{parse_object_id, validate_required_string};

pub struct GroupService {
    group_repo: Arc<GroupRepository>,
}

impl GroupService {
    pub fn new(group_repo: Arc<GroupRepository>) -> Self {
        Self { group_repo }
    }

    pub async fn create_group(&self, caller: &ObjectId, request: GroupRequest) -> AppResult<GroupResponse> {
        let name = validate_required_string(&request.name, "Name")?;
        let code = validate_required_string(&request.code, "Code")?;

        if self.group_repo.name_or_code_taken(&name, &code, None).await? {
            return Err(AppError::ConflictError("Group name or code already exists".to_string()));
        }

        let group = self
            .group_repo
            .insert(Group::new(name, code, request.description, *caller))
            .await?;

        log::info!("👥 그룹 생성: {} (creator={})", group.code, caller);
        Ok(GroupResponse::from(group))
    }

    pub async fn list_groups(&self) -> AppResult<Vec<GroupResponse>> {
        let groups = self.group_repo.find_all().await?;
        Ok(groups.into_iter().map(GroupResponse::from).collect())
    }

    pub async fn get_group(&self, group_id: &str) -> AppResult<GroupResponse> {
        self.load(group_id).await.map(GroupResponse::from)
    }

    pub async fn update_group(
        &self,
        caller: &ObjectId,
        group_id: &str,
        request: GroupRequest,
    ) -> AppResult<GroupResponse> {
        let mut group = self.load(group_id).await?;
        group.ensure_manager(caller)?;

        let name = validate_required_string(&request.name, "Name")?;
        let code = validate_required_string(&request.code, "Code")?;
        if self
            .group_repo
            .name_or_code_taken(&name, &code, group.id.as_ref())
            .await?
        {
            return Err(AppError::ConflictError("Group name or code already exists".to_string()));
        }

        group.name = name;
        group.code = code;
        group.description = request.description;

        self.group_repo.save(&group).await?;
        Ok(GroupResponse::from(group))
    }

    pub async fn delete_group(&self, caller: &ObjectId, group_id: &str) -> AppResult<()> {
        let group = self.load(group_id).await?;
        group.ensure_admin(caller)?;

        if let Some(id) = group.id {
            self.group_repo.delete(&id).await?;
        }
        log::info!("🗑️ 그룹 삭제: {} (by {})", group.code, caller);
        Ok(())
    }

    pub async fn request_join(&self, caller: &ObjectId, group_id: &str) -> AppResult<GroupResponse> {
        self.mutate(group_id, |group| group.request_join(*caller, DateTime::now()))
            .await
    }

    pub async fn approve_request(
        &self,
        caller: &ObjectId,
        group_id: &str,
        user_id: &str,
    ) -> AppResult<GroupResponse> {
        let user = parse_object_id(user_id, "user id")?;
        self.mutate(group_id, |group| group.approve_request(caller, &user, DateTime::now()))
            .await
    }

    pub async fn remove_member(
        &self,
        caller: &ObjectId,
        group_id: &str,
        user_id: &str,
    ) -> AppResult<GroupResponse> {
        let user = parse_object_id(user_id, "user id")?;
        self.mutate(group_id, |group| group.remove_member(caller, &user))
            .await
    }

    pub async fn list_members(&self, group_id: &str) -> AppResult<Vec<MemberResponse>> {
        let group = self.load(group_id).await?;
        Ok(group.members.into_iter().map(MemberResponse::from).collect())
    }

    pub async fn add_manager(
        &self,
        caller: &ObjectId,
        group_id: &str,
        request: AddManagerRequest,
    ) -> AppResult<GroupResponse> {
        let user = parse_object_id(&request.user_id, "user id")?;
        self.mutate(group_id, |group| group.add_manager(caller, user, request.role))
            .await
    }

    pub async fn remove_manager(
        &self,
        caller: &ObjectId,
        group_id: &str,
        user_id: &str,
    ) -> AppResult<GroupResponse> {
        let user = parse_object_id(user_id, "user id")?;
        self.mutate(group_id, |group| group.remove_manager(caller, &user))
            .await
    }

    async fn mutate<F>(&self, group_id: &str, change: F) -> AppResult<GroupResponse>
    where
        F: FnOnce(&mut Group) -> AppResult<()>,
    {
        let mut group = self.load(group_id).await?;
        change(&mut group)?;
        self.group_repo.save(&group).await?;
        Ok(GroupResponse::from(group))
    }

    async fn load(&self, group_id: &str) -> AppResult<Group> {
        let id = parse_object_id(group_id, "group id")?;
        self.group_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }
}
