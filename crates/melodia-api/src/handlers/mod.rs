//! HTTP handlers, one module per product area.

pub mod health;
pub mod history;
pub mod media;
pub mod playlists;
pub mod profile;
pub mod tracks;
