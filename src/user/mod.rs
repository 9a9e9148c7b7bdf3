mod playlist;
mod user;

pub use playlist::Playlist;
pub use user::{Following, User};
