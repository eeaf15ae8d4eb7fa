pub mod autosave;
pub mod export;
pub mod import;
pub mod pagination;
pub mod renderer;
pub mod sent_tracker;
pub mod session;
pub mod share;
