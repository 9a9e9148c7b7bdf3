mod album;
mod artist;
mod category;
mod image;
mod track;

pub use album::{Album, AlbumType};
pub use artist::Artist;
pub use category::Category;
pub use image::Image;
pub use track::Track;
