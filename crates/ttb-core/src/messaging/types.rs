use crate::domain::{MessageRef, UserId};

/// Kind of conversation a message was posted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    /// Groups and supergroups share settings and admin-only commands.
    pub fn is_group_like(self) -> bool {
        matches!(self, ChatKind::Group | ChatKind::Supergroup)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub user_id: UserId,
    pub username: Option<String>,
    pub is_bot: bool,
}

/// Where a forwarded message originally came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardOrigin {
    User,
    HiddenUser,
    Chat(ChatKind),
}

impl ForwardOrigin {
    pub fn is_channel(self) -> bool {
        matches!(self, ForwardOrigin::Chat(ChatKind::Channel))
    }
}

/// Transport-neutral view of an incoming message.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub message: MessageRef,
    pub chat_kind: ChatKind,
    /// `None` for channel posts and other messages without a user author.
    pub sender: Option<Sender>,
    pub text: Option<String>,
    pub forward_origin: Option<ForwardOrigin>,
    /// Set by the transport when the message starts with a bot command entity.
    pub is_command: bool,
}

/// Role of a user in a chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

impl MemberStatus {
    pub fn is_privileged(self) -> bool {
        matches!(self, MemberStatus::Creator | MemberStatus::Administrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_creator_and_admin_are_privileged() {
        assert!(MemberStatus::Creator.is_privileged());
        assert!(MemberStatus::Administrator.is_privileged());
        for s in [
            MemberStatus::Member,
            MemberStatus::Restricted,
            MemberStatus::Left,
            MemberStatus::Banned,
        ] {
            assert!(!s.is_privileged(), "{s:?} must not be privileged");
        }
    }

    #[test]
    fn channel_forward_detection() {
        assert!(ForwardOrigin::Chat(ChatKind::Channel).is_channel());
        assert!(!ForwardOrigin::Chat(ChatKind::Supergroup).is_channel());
        assert!(!ForwardOrigin::User.is_channel());
        assert!(!ForwardOrigin::HiddenUser.is_channel());
    }
}
