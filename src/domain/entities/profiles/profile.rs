//! Profile Entity Implementation
//!
//! 사용자 한 명당 하나씩 존재하는 프로필 문서입니다.
//! 경력/학력 같은 부속 문서와 팔로우, 친구 관계 목록을 함께 보관합니다.
//!
//! 관계 규칙은 순수 메서드로 두고, 저장은 서비스 계층이 담당합니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::errors::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub followers: Vec<Relation>,
    #[serde(default)]
    pub followings: Vec<Relation>,
    #[serde(default)]
    pub friends: Vec<Relation>,
    #[serde(default)]
    pub friend_requests: Vec<Relation>,
    pub date: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// 팔로우/친구 관계의 한쪽 끝
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub user: ObjectId,
    pub date: DateTime,
}

fn contains(list: &[Relation], user: &ObjectId) -> bool {
    list.iter().any(|r| &r.user == user)
}

fn remove(list: &mut Vec<Relation>, user: &ObjectId) -> bool {
    let before = list.len();
    list.retain(|r| &r.user != user);
    list.len() != before
}

impl Profile {
    pub fn new(user: ObjectId, status: String) -> Self {
        Self {
            id: None,
            user,
            company: None,
            website: None,
            location: None,
            status,
            skills: Vec::new(),
            bio: None,
            experience: Vec::new(),
            education: Vec::new(),
            social: Social::default(),
            followers: Vec::new(),
            followings: Vec::new(),
            friends: Vec::new(),
            friend_requests: Vec::new(),
            date: DateTime::now(),
        }
    }

    pub fn is_following(&self, user: &ObjectId) -> bool {
        contains(&self.followings, user)
    }

    pub fn is_friend(&self, user: &ObjectId) -> bool {
        contains(&self.friends, user)
    }

    pub fn has_friend_request_from(&self, user: &ObjectId) -> bool {
        contains(&self.friend_requests, user)
    }

    /// 새 경력을 맨 앞에 추가합니다.
    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    pub fn remove_experience(&mut self, id: &ObjectId) -> AppResult<()> {
        let before = self.experience.len();
        self.experience.retain(|e| &e.id != id);
        if self.experience.len() == before {
            return Err(AppError::NotFound("Experience not found".to_string()));
        }
        Ok(())
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    pub fn remove_education(&mut self, id: &ObjectId) -> AppResult<()> {
        let before = self.education.len();
        self.education.retain(|e| &e.id != id);
        if self.education.len() == before {
            return Err(AppError::NotFound("Education not found".to_string()));
        }
        Ok(())
    }

    pub fn follow(&mut self, target: ObjectId, now: DateTime) -> AppResult<()> {
        if target == self.user {
            return Err(AppError::ValidationError("You cannot follow yourself".to_string()));
        }
        if self.is_following(&target) {
            return Err(AppError::ConflictError("You already followed this user".to_string()));
        }
        self.followings.insert(0, Relation { user: target, date: now });
        Ok(())
    }

    pub fn unfollow(&mut self, target: &ObjectId) -> AppResult<()> {
        if !remove(&mut self.followings, target) {
            return Err(AppError::ValidationError("You have not followed this user".to_string()));
        }
        Ok(())
    }

    /// 상대방 프로필에 팔로워를 기록합니다. 이미 있으면 무시합니다.
    pub fn add_follower(&mut self, follower: ObjectId, now: DateTime) {
        if !contains(&self.followers, &follower) {
            self.followers.insert(0, Relation { user: follower, date: now });
        }
    }

    pub fn remove_follower(&mut self, follower: &ObjectId) {
        remove(&mut self.followers, follower);
    }

    /// `from` 사용자가 이 프로필 소유자에게 친구 요청을 보냅니다.
    pub fn receive_friend_request(&mut self, from: ObjectId, now: DateTime) -> AppResult<()> {
        if from == self.user {
            return Err(AppError::ValidationError("You cannot add yourself as a friend".to_string()));
        }
        if self.is_friend(&from) {
            return Err(AppError::ConflictError("You are already friends".to_string()));
        }
        if self.has_friend_request_from(&from) {
            return Err(AppError::ConflictError("Friend request already sent".to_string()));
        }
        self.friend_requests.insert(0, Relation { user: from, date: now });
        Ok(())
    }

    /// 대기 중인 요청을 수락하여 친구 목록으로 옮깁니다.
    pub fn accept_friend_request(&mut self, from: &ObjectId, now: DateTime) -> AppResult<()> {
        if !remove(&mut self.friend_requests, from) {
            return Err(AppError::ValidationError("There is no friend request from this user".to_string()));
        }
        self.add_friend(*from, now);
        Ok(())
    }

    pub fn add_friend(&mut self, user: ObjectId, now: DateTime) {
        remove(&mut self.friend_requests, &user);
        if !self.is_friend(&user) {
            self.friends.insert(0, Relation { user, date: now });
        }
    }

    pub fn unfriend(&mut self, user: &ObjectId) -> AppResult<()> {
        if !remove(&mut self.friends, user) {
            return Err(AppError::ValidationError("You are not friends with this user".to_string()));
        }
        Ok(())
    }

    /// 상대방 쪽 친구 목록 정리용. 없어도 실패하지 않습니다.
    pub fn forget_friend(&mut self, user: &ObjectId) {
        remove(&mut self.friends, user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new(ObjectId::new(), "Developer".to_string())
    }

    #[test]
    fn test_follow_and_unfollow() {
        let mut me = profile();
        let other = ObjectId::new();
        let now = DateTime::now();

        me.follow(other, now).unwrap();
        assert!(me.is_following(&other));
        assert!(matches!(me.follow(other, now), Err(AppError::ConflictError(_))));

        me.unfollow(&other).unwrap();
        assert!(!me.is_following(&other));
        assert!(matches!(me.unfollow(&other), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_cannot_follow_self() {
        let mut me = profile();
        let own_id = me.user;
        assert!(matches!(
            me.follow(own_id, DateTime::now()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_add_follower_is_idempotent() {
        let mut target = profile();
        let follower = ObjectId::new();
        target.add_follower(follower, DateTime::now());
        target.add_follower(follower, DateTime::now());
        assert_eq!(target.followers.len(), 1);

        target.remove_follower(&follower);
        assert!(target.followers.is_empty());
    }

    #[test]
    fn test_friend_request_flow() {
        let mut receiver = profile();
        let sender = ObjectId::new();
        let now = DateTime::now();

        receiver.receive_friend_request(sender, now).unwrap();
        assert!(receiver.has_friend_request_from(&sender));
        assert!(matches!(
            receiver.receive_friend_request(sender, now),
            Err(AppError::ConflictError(_))
        ));

        receiver.accept_friend_request(&sender, now).unwrap();
        assert!(receiver.is_friend(&sender));
        assert!(!receiver.has_friend_request_from(&sender));

        assert!(matches!(
            receiver.receive_friend_request(sender, now),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_accept_without_request_fails() {
        let mut receiver = profile();
        assert!(matches!(
            receiver.accept_friend_request(&ObjectId::new(), DateTime::now()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_unfriend_requires_friendship() {
        let mut me = profile();
        let friend = ObjectId::new();
        me.add_friend(friend, DateTime::now());

        me.unfriend(&friend).unwrap();
        assert!(!me.is_friend(&friend));
        assert!(me.unfriend(&friend).is_err());
    }

    #[test]
    fn test_remove_unknown_experience_is_not_found() {
        let mut me = profile();
        me.add_experience(Experience {
            id: ObjectId::new(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        });

        assert!(matches!(
            me.remove_experience(&ObjectId::new()),
            Err(AppError::NotFound(_))
        ));
        let id = me.experience[0].id;
        me.remove_experience(&id).unwrap();
        assert!(me.experience.is_empty());
    }
}
