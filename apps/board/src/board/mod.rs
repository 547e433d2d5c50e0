pub mod chips;
pub mod filters;
pub mod handlers;
pub mod needs;
pub mod panel;
pub mod payload;
pub mod progress;
pub mod render;
pub mod selection;
pub mod taxonomy;
