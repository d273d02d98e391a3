pub mod app;
pub mod details;
pub mod events;
pub mod fetch_worker;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod picker;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod terminal_guard;
pub mod theme;
