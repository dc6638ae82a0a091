use serde::Deserialize;
use validator::Validate;

/// 게시글 작성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostTextRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}
