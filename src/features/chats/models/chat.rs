use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::features::chats::dtos::ChatResponseDto;

/// A chat that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewChat {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    pub point_id: Uuid,
}

/// A persisted chat anchored at one point
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: Uuid,
    pub title: String,
    pub point_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponseDto {
    fn from(c: Chat) -> Self {
        Self {
            id: c.id,
            title: c.title,
            point_id: c.point_id,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_requires_title() {
        let chat = NewChat {
            title: String::new(),
            point_id: Uuid::now_v7(),
        };
        let errors = chat.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_default_title_is_valid() {
        let chat = NewChat {
            title: crate::shared::constants::DEFAULT_CHAT_TITLE.to_string(),
            point_id: Uuid::now_v7(),
        };
        assert!(chat.validate().is_ok());
    }
}
