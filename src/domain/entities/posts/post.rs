//! Post Entity Implementation
//!
//! 게시글과 좋아요, 댓글, 공유 부속 문서입니다.
//! 작성자 이름과 아바타는 작성 시점의 사용자 정보를 복사해 둡니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub shares: Vec<Share>,
    pub date: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub user: ObjectId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Share {
    pub user: ObjectId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime,
}

impl Post {
    pub fn new(author: &User, author_id: ObjectId, text: String) -> Self {
        Self {
            id: None,
            user: author_id,
            text,
            name: author.display_name(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            shares: Vec::new(),
            date: DateTime::now(),
        }
    }

    pub fn is_owned_by(&self, user: &ObjectId) -> bool {
        &self.user == user
    }

    pub fn is_liked_by(&self, user: &ObjectId) -> bool {
        self.likes.iter().any(|l| &l.user == user)
    }

    pub fn is_shared_by(&self, user: &ObjectId) -> bool {
        self.shares.iter().any(|s| &s.user == user)
    }

    pub fn like(&mut self, user: ObjectId) -> AppResult<()> {
        if self.is_liked_by(&user) {
            return Err(AppError::ConflictError("Post already liked".to_string()));
        }
        self.likes.insert(0, Like { user });
        Ok(())
    }

    pub fn unlike(&mut self, user: &ObjectId) -> AppResult<()> {
        if !self.is_liked_by(user) {
            return Err(AppError::ValidationError("Post has not yet been liked".to_string()));
        }
        self.likes.retain(|l| &l.user != user);
        Ok(())
    }

    pub fn share(&mut self, user: ObjectId) -> AppResult<()> {
        if self.is_shared_by(&user) {
            return Err(AppError::ConflictError("Post already shared".to_string()));
        }
        self.shares.insert(0, Share { user });
        Ok(())
    }

    pub fn unshare(&mut self, user: &ObjectId) -> AppResult<()> {
        if !self.is_shared_by(user) {
            return Err(AppError::ValidationError("Post has not yet been shared".to_string()));
        }
        self.shares.retain(|s| &s.user != user);
        Ok(())
    }

    pub fn add_comment(&mut self, author: &User, author_id: ObjectId, text: String) -> &Comment {
        self.comments.insert(
            0,
            Comment {
                id: ObjectId::new(),
                user: author_id,
                text,
                name: author.display_name(),
                avatar: author.avatar.clone(),
                date: DateTime::now(),
            },
        );
        &self.comments[0]
    }

    /// 댓글 작성자 또는 게시글 작성자만 댓글을 지울 수 있습니다.
    pub fn remove_comment(&mut self, comment_id: &ObjectId, caller: &ObjectId) -> AppResult<()> {
        let comment = self
            .comments
            .iter()
            .find(|c| &c.id == comment_id)
            .ok_or_else(|| AppError::NotFound("Comment does not exist".to_string()))?;

        if &comment.user != caller && !self.is_owned_by(caller) {
            return Err(AppError::AuthorizationError("User not authorized".to_string()));
        }

        self.comments.retain(|c| &c.id != comment_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> (User, ObjectId) {
        let mut user = User::new(
            "Alice".to_string(),
            "Kim".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        );
        let id = ObjectId::new();
        user.id = Some(id);
        (user, id)
    }

    #[test]
    fn test_new_post_copies_author_details() {
        let (user, id) = author();
        let post = Post::new(&user, id, "hello".to_string());

        assert_eq!(post.name, "Alice Kim");
        assert_eq!(post.avatar, user.avatar);
        assert!(post.is_owned_by(&id));
    }

    #[test]
    fn test_like_twice_conflicts_and_unlike_requires_like() {
        let (user, id) = author();
        let mut post = Post::new(&user, id, "hello".to_string());
        let fan = ObjectId::new();

        post.like(fan).unwrap();
        assert!(matches!(post.like(fan), Err(AppError::ConflictError(_))));

        post.unlike(&fan).unwrap();
        assert!(matches!(post.unlike(&fan), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_share_and_unshare() {
        let (user, id) = author();
        let mut post = Post::new(&user, id, "hello".to_string());
        let reader = ObjectId::new();

        post.share(reader).unwrap();
        assert!(post.is_shared_by(&reader));
        assert!(post.share(reader).is_err());
        post.unshare(&reader).unwrap();
        assert!(post.shares.is_empty());
    }

    #[test]
    fn test_comment_removal_permissions() {
        let (owner, owner_id) = author();
        let mut post = Post::new(&owner, owner_id, "hello".to_string());

        let (mut commenter, commenter_id) = author();
        commenter.first_name = "Bob".to_string();
        let comment_id = post.add_comment(&commenter, commenter_id, "nice".to_string()).id;
        assert_eq!(post.comments[0].name, "Bob Kim");

        let stranger = ObjectId::new();
        assert!(matches!(
            post.remove_comment(&comment_id, &stranger),
            Err(AppError::AuthorizationError(_))
        ));

        // 게시글 작성자는 다른 사람의 댓글도 지울 수 있음
        post.remove_comment(&comment_id, &owner_id).unwrap();
        assert!(post.comments.is_empty());

        assert!(matches!(
            post.remove_comment(&comment_id, &owner_id),
            Err(AppError::NotFound(_))
        ));
    }
}
