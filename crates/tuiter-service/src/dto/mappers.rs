//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tuiter_core::entities::{Group, GroupMessage, Message, Story, Tuit, TuitStats, User};

use super::responses::{
    GroupMessageResponse, GroupResponse, LocationResponse, MessageResponse, StatsResponse,
    StoryResponse, TuitResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            profile_photo: user.profile_photo.clone(),
            header_image: user.header_image.clone(),
            biography: user.biography.clone(),
            date_of_birth: user.date_of_birth,
            account_type: user.account_type.as_str().to_string(),
            marital_status: user.marital_status.as_str().to_string(),
            location: user.location.map(|l| LocationResponse {
                latitude: l.latitude,
                longitude: l.longitude,
            }),
            joined_at: user.joined_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Tuit Mappers
// ============================================================================

impl From<&TuitStats> for StatsResponse {
    fn from(stats: &TuitStats) -> Self {
        Self {
            replies: stats.replies,
            retuits: stats.retuits,
            likes: stats.likes,
            dislikes: stats.dislikes,
        }
    }
}

impl From<&Tuit> for TuitResponse {
    fn from(tuit: &Tuit) -> Self {
        Self {
            id: tuit.id.to_string(),
            posted_by: tuit.posted_by.to_string(),
            tuit: tuit.tuit.clone(),
            posted_on: tuit.posted_on,
            stats: StatsResponse::from(&tuit.stats),
        }
    }
}

impl From<Tuit> for TuitResponse {
    fn from(tuit: Tuit) -> Self {
        Self::from(&tuit)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender: message.sender.to_string(),
            recipient: message.recipient.to_string(),
            message: message.message.clone(),
            sent_on: message.sent_on,
            attachment_key: message.attachment_key.clone(),
            pinned: message.pinned,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Story Mappers
// ============================================================================

impl From<&Story> for StoryResponse {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id.to_string(),
            posted_by: story.posted_by.to_string(),
            image: story.image.clone(),
            description: story.description.clone(),
            posted_on: story.posted_on,
            viewers: story.viewers.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self::from(&story)
    }
}

// ============================================================================
// Group Mappers
// ============================================================================

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            owner: group.owner.to_string(),
            members: group.members.iter().map(ToString::to_string).collect(),
            created_on: group.created_on,
        }
    }
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self::from(&group)
    }
}

impl From<&GroupMessage> for GroupMessageResponse {
    fn from(message: &GroupMessage) -> Self {
        Self {
            id: message.id.to_string(),
            group_id: message.group_id.to_string(),
            sender: message.sender.to_string(),
            message: message.message.clone(),
            sent_on: message.sent_on,
            attachment_key: message.attachment_key.clone(),
        }
    }
}

impl From<GroupMessage> for GroupMessageResponse {
    fn from(message: GroupMessage) -> Self {
        Self::from(&message)
    }
}
