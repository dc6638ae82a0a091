//! # 게시글 서비스
//!
//! 작성, 수정, 삭제는 작성자 본인만 가능합니다.
//! 좋아요/공유는 사용자당 한 번, 댓글 삭제는 댓글 작성자나 게시글 작성자만 가능합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::pagination::{page_offset, Pagination, DEFAULT_PAGE_SIZE};
use crate::domain::dto::posts::{CommentResponse, PostResponse};
use crate::domain::entities::posts::Post;
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::posts::PostRepository;
use crate::repositories::users::{UserRepository, UserStore};
use crate::utils::string_utils::{parse_object_id, validate_required_string};

pub struct PostService {
    post_repo: Arc<PostRepository>,
    user_repo: Arc<UserRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<PostRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self { post_repo, user_repo }
    }

    /// 작성자의 이름과 아바타를 복사해 게시글을 만듭니다.
    pub async fn create_post(&self, caller: &ObjectId, text: &str) -> AppResult<PostResponse> {
        let text = validate_required_string(text, "Text")?;
        let author = self.load_user(caller).await?;

        let post = self.post_repo.insert(Post::new(&author, *caller, text)).await?;
        log::info!("📝 게시글 작성: user={}", caller);
        Ok(PostResponse::from(post))
    }

    pub async fn update_post(&self, caller: &ObjectId, post_id: &str, text: &str) -> AppResult<PostResponse> {
        let text = validate_required_string(text, "Text")?;
        let mut post = self.load(post_id).await?;
        ensure_owner(&post, caller)?;

        post.text = text;
        self.post_repo.save(&post).await?;
        Ok(PostResponse::from(post))
    }

    pub async fn delete_post(&self, caller: &ObjectId, post_id: &str) -> AppResult<()> {
        let post = self.load(post_id).await?;
        ensure_owner(&post, caller)?;

        if let Some(id) = post.id {
            self.post_repo.delete(&id).await?;
        }
        log::info!("🗑️ 게시글 삭제: {}", post_id);
        Ok(())
    }

    pub async fn list_posts(&self) -> AppResult<Vec<PostResponse>> {
        let posts = self.post_repo.find_all().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn get_post(&self, post_id: &str) -> AppResult<PostResponse> {
        self.load(post_id).await.map(PostResponse::from)
    }

    pub async fn paginate_posts(&self, page: u64) -> AppResult<Pagination<PostResponse>> {
        let skip = page_offset(page, DEFAULT_PAGE_SIZE)?;
        let (posts, total) = self.post_repo.find_page(skip, DEFAULT_PAGE_SIZE).await?;
        Ok(Pagination::new(total, page, DEFAULT_PAGE_SIZE, posts).map(PostResponse::from))
    }

    pub async fn like(&self, caller: &ObjectId, post_id: &str) -> AppResult<PostResponse> {
        self.mutate(post_id, |post| post.like(*caller)).await
    }

    pub async fn unlike(&self, caller: &ObjectId, post_id: &str) -> AppResult<PostResponse> {
        self.mutate(post_id, |post| post.unlike(caller)).await
    }

    pub async fn share(&self, caller: &ObjectId, post_id: &str) -> AppResult<PostResponse> {
        self.mutate(post_id, |post| post.share(*caller)).await
    }

    pub async fn unshare(&self, caller: &ObjectId, post_id: &str) -> AppResult<PostResponse> {
        self.mutate(post_id, |post| post.unshare(caller)).await
    }

    pub async fn add_comment(&self, caller: &ObjectId, post_id: &str, text: &str) -> AppResult<CommentResponse> {
        let text = validate_required_string(text, "Text")?;
        let author = self.load_user(caller).await?;
        let mut post = self.load(post_id).await?;

        let comment = post.add_comment(&author, *caller, text).clone();
        self.post_repo.save(&post).await?;
        Ok(CommentResponse::from(comment))
    }

    pub async fn remove_comment(
        &self,
        caller: &ObjectId,
        post_id: &str,
        comment_id: &str,
    ) -> AppResult<PostResponse> {
        let comment_id = parse_object_id(comment_id, "comment id")?;
        self.mutate(post_id, |post| post.remove_comment(&comment_id, caller)).await
    }

    async fn mutate<F>(&self, post_id: &str, change: F) -> AppResult<PostResponse>
    where
        F: FnOnce(&mut Post) -> AppResult<()>,
    {
        let mut post = self.load(post_id).await?;
        change(&mut post)?;
        self.post_repo.save(&post).await?;
        Ok(PostResponse::from(post))
    }

    async fn load(&self, post_id: &str) -> AppResult<Post> {
        let id = parse_object_id(post_id, "post id")?;
        self.post_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    async fn load_user(&self, id: &ObjectId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn ensure_owner(post: &Post, caller: &ObjectId) -> AppResult<()> {
    if !post.is_owned_by(caller) {
        return Err(AppError::AuthorizationError("User not authorized".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_author_owns_post() {
        let author_id = ObjectId::new();
        let author = User::new("Alice".into(), "Kim".into(), "alice@example.com".into(), "hash".into());
        let post = Post::new(&author, author_id, "hello".into());

        assert!(ensure_owner(&post, &author_id).is_ok());
        assert!(matches!(
            ensure_owner(&post, &ObjectId::new()),
            Err(AppError::AuthorizationError(_))
        ));
    }
}
