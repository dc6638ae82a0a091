use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 메시지 전송 요청
///
/// `conversation_id`가 없으면 두 사용자 사이의 대화를 찾거나 새로 만듭니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub conversation_id: Option<String>,

    #[validate(length(min = 1, message = "Recipient is required"))]
    pub to: String,

    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_id_is_optional() {
        let req: SendMessageRequest =
            serde_json::from_str(r#"{ "to": "65f0c0ffee0000000000beef", "text": "hi" }"#).unwrap();
        assert!(req.conversation_id.is_none());
        assert!(req.validate().is_ok());
    }
}
