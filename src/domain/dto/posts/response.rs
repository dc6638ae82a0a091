use serde::Serialize;

use crate::domain::entities::posts::{Comment, Post};
use crate::utils::string_utils::format_datetime;

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id.to_hex(),
            user: c.user.to_hex(),
            text: c.text,
            name: c.name,
            avatar: c.avatar,
            date: format_datetime(&c.date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    /// 좋아요를 누른 사용자 ID
    pub likes: Vec<String>,
    pub comments: Vec<CommentResponse>,
    /// 공유한 사용자 ID
    pub shares: Vec<String>,
    pub date: String,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: p.user.to_hex(),
            text: p.text,
            name: p.name,
            avatar: p.avatar,
            likes: p.likes.iter().map(|l| l.user.to_hex()).collect(),
            comments: p.comments.into_iter().map(CommentResponse::from).collect(),
            shares: p.shares.iter().map(|s| s.user.to_hex()).collect(),
            date: format_datetime(&p.date),
        }
    }
}
