//! Group Entity Implementation
//!
//! 그룹, 매니저 역할, 멤버 및 가입 요청 목록입니다.
//!
//! | 작업 | 필요한 권한 |
//! |------|-------------|
//! | 그룹 수정, 가입 승인, 멤버 제거 | 매니저 (admin 또는 mod) |
//! | 그룹 삭제, 매니저 추가/제거 | admin 매니저 |
//! | 그룹 탈퇴 | 본인 |

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::errors::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagerRole {
    Admin,
    Mod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manager {
    pub user: ObjectId,
    pub role: ManagerRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub user: ObjectId,
    pub date: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub managers: Vec<Manager>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub member_requests: Vec<Member>,
    pub creator: ObjectId,
    pub date: DateTime,
}

impl Group {
    /// 생성자는 admin 매니저이자 첫 멤버가 됩니다.
    pub fn new(name: String, code: String, description: Option<String>, creator: ObjectId) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            code,
            description,
            managers: vec![Manager { user: creator, role: ManagerRole::Admin }],
            members: vec![Member { user: creator, date: now }],
            member_requests: Vec::new(),
            creator,
            date: now,
        }
    }

    pub fn role_of(&self, user: &ObjectId) -> Option<ManagerRole> {
        self.managers.iter().find(|m| &m.user == user).map(|m| m.role)
    }

    pub fn is_manager(&self, user: &ObjectId) -> bool {
        self.role_of(user).is_some()
    }

    pub fn is_admin(&self, user: &ObjectId) -> bool {
        self.role_of(user) == Some(ManagerRole::Admin)
    }

    pub fn is_member(&self, user: &ObjectId) -> bool {
        self.members.iter().any(|m| &m.user == user)
    }

    pub fn has_request_from(&self, user: &ObjectId) -> bool {
        self.member_requests.iter().any(|m| &m.user == user)
    }

    pub fn ensure_manager(&self, user: &ObjectId) -> AppResult<()> {
        if !self.is_manager(user) {
            return Err(AppError::AuthorizationError("You are not a manager of this group".to_string()));
        }
        Ok(())
    }

    pub fn ensure_admin(&self, user: &ObjectId) -> AppResult<()> {
        if !self.is_admin(user) {
            return Err(AppError::AuthorizationError("Only group admins can do this".to_string()));
        }
        Ok(())
    }

    pub fn request_join(&mut self, user: ObjectId, now: DateTime) -> AppResult<()> {
        if self.is_member(&user) {
            return Err(AppError::ConflictError("You are already a member of this group".to_string()));
        }
        if self.has_request_from(&user) {
            return Err(AppError::ConflictError("You already requested to join this group".to_string()));
        }
        self.member_requests.insert(0, Member { user, date: now });
        Ok(())
    }

    pub fn approve_request(&mut self, approver: &ObjectId, user: &ObjectId, now: DateTime) -> AppResult<()> {
        self.ensure_manager(approver)?;

        let before = self.member_requests.len();
        self.member_requests.retain(|m| &m.user != user);
        if self.member_requests.len() == before {
            return Err(AppError::NotFound("Join request not found".to_string()));
        }

        if !self.is_member(user) {
            self.members.insert(0, Member { user: *user, date: now });
        }
        Ok(())
    }

    /// 매니저가 멤버를 내보내거나, 멤버가 스스로 탈퇴합니다.
    ///
    /// 마지막 admin은 제거할 수 없습니다.
    pub fn remove_member(&mut self, caller: &ObjectId, user: &ObjectId) -> AppResult<()> {
        if caller != user {
            self.ensure_manager(caller)?;
        }
        if !self.is_member(user) {
            return Err(AppError::NotFound("Member not found".to_string()));
        }
        if self.is_admin(user) && self.admin_count() == 1 {
            return Err(AppError::ConflictError("The last admin cannot leave the group".to_string()));
        }

        self.members.retain(|m| &m.user != user);
        self.managers.retain(|m| &m.user != user);
        Ok(())
    }

    pub fn add_manager(&mut self, caller: &ObjectId, user: ObjectId, role: ManagerRole) -> AppResult<()> {
        self.ensure_admin(caller)?;
        if !self.is_member(&user) {
            return Err(AppError::ValidationError("Managers must be members of the group".to_string()));
        }
        if self.is_manager(&user) {
            return Err(AppError::ConflictError("User is already a manager".to_string()));
        }
        self.managers.push(Manager { user, role });
        Ok(())
    }

    pub fn remove_manager(&mut self, caller: &ObjectId, user: &ObjectId) -> AppResult<()> {
        self.ensure_admin(caller)?;
        if !self.is_manager(user) {
            return Err(AppError::NotFound("Manager not found".to_string()));
        }
        if self.is_admin(user) && self.admin_count() == 1 {
            return Err(AppError::ConflictError("The last admin cannot be removed".to_string()));
        }
        self.managers.retain(|m| &m.user != user);
        Ok(())
    }

    fn admin_count(&self) -> usize {
        self.managers.iter().filter(|m| m.role == ManagerRole::Admin).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> (Group, ObjectId) {
        let creator = ObjectId::new();
        (
            Group::new("Rustaceans".to_string(), "rust".to_string(), None, creator),
            creator,
        )
    }

    #[test]
    fn test_creator_is_admin_and_member() {
        let (group, creator) = group();
        assert!(group.is_admin(&creator));
        assert!(group.is_member(&creator));
    }

    #[test]
    fn test_join_and_approve() {
        let (mut group, creator) = group();
        let user = ObjectId::new();
        let now = DateTime::now();

        group.request_join(user, now).unwrap();
        assert!(matches!(group.request_join(user, now), Err(AppError::ConflictError(_))));

        // 매니저가 아니면 승인할 수 없음
        assert!(matches!(
            group.approve_request(&user, &user, now),
            Err(AppError::AuthorizationError(_))
        ));

        group.approve_request(&creator, &user, now).unwrap();
        assert!(group.is_member(&user));
        assert!(!group.has_request_from(&user));

        // 요청이 없는 사용자 승인은 실패
        assert!(matches!(
            group.approve_request(&creator, &ObjectId::new(), now),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(group.request_join(user, now), Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_member_can_leave_but_not_remove_others() {
        let (mut group, creator) = group();
        let a = ObjectId::new();
        let b = ObjectId::new();
        let now = DateTime::now();
        for u in [a, b] {
            group.request_join(u, now).unwrap();
            group.approve_request(&creator, &u, now).unwrap();
        }

        assert!(matches!(group.remove_member(&a, &b), Err(AppError::AuthorizationError(_))));
        group.remove_member(&a, &a).unwrap();
        assert!(!group.is_member(&a));
        group.remove_member(&creator, &b).unwrap();
        assert!(!group.is_member(&b));
    }

    #[test]
    fn test_manager_management_requires_admin() {
        let (mut group, creator) = group();
        let member = ObjectId::new();
        let now = DateTime::now();
        group.request_join(member, now).unwrap();
        group.approve_request(&creator, &member, now).unwrap();

        assert!(matches!(
            group.add_manager(&creator, ObjectId::new(), ManagerRole::Mod),
            Err(AppError::ValidationError(_))
        ));

        group.add_manager(&creator, member, ManagerRole::Mod).unwrap();
        assert_eq!(group.role_of(&member), Some(ManagerRole::Mod));

        // mod는 매니저를 관리할 수 없음
        assert!(matches!(
            group.remove_manager(&member, &creator),
            Err(AppError::AuthorizationError(_))
        ));

        group.remove_manager(&creator, &member).unwrap();
        assert!(!group.is_manager(&member));
        assert!(matches!(
            group.remove_manager(&creator, &member),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_last_admin_cannot_be_removed() {
        let (mut group, creator) = group();
        assert!(matches!(
            group.remove_manager(&creator, &creator),
            Err(AppError::ConflictError(_))
        ));
        assert!(matches!(
            group.remove_member(&creator, &creator),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ManagerRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<ManagerRole>("\"mod\"").unwrap(),
            ManagerRole::Mod
        );
    }
}
