//! Melodia use-case layer
//!
//! One service per product area, sitting between the HTTP handlers and the
//! repositories. `MediaService` is the only one with real decision logic:
//! it coordinates the object store and the metadata store through injected
//! capability traits so tests can substitute fakes. The remaining services
//! are thin wrappers over their repositories.

pub mod catalog;
pub mod history;
pub mod library;
pub mod media;
pub mod user;

pub use catalog::CatalogService;
pub use history::HistoryService;
pub use library::LibraryService;
pub use media::{MediaService, MediaStore};
pub use user::UserService;
