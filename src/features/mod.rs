pub mod chats;
pub mod geo;
