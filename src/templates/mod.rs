pub mod components;
pub mod layouts;
pub mod pages;
pub mod views;

// Re-exports for convenience
pub use components::{card, error_page};
pub use layouts::desktop::desktop_layout;
