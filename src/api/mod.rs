// API layer - HTTP endpoints
pub mod items;
pub mod root;

pub use items::ItemsApi;
pub use root::RootApi;
