//! Chats anchored at geo points.
//!
//! Chats are created by the geo feature alongside each point; this feature
//! only exposes them for reading.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Name | Description |
//! |--------|----------|------|-------------|
//! | GET | `/chats/{chatID}` | `get-chat` | Get a chat by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ChatService;
