/// Title given to the chat created alongside every new point
pub const DEFAULT_CHAT_TITLE: &str = "No name";
