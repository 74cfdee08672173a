pub mod scoring;
pub mod session;
pub mod word_list;
pub mod word_source;

// Re-export main components
pub use scoring::*;
pub use session::*;
pub use word_list::*;
pub use word_source::*;
