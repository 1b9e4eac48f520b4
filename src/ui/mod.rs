//! UI layer: imgui manager, page scrolling, and the content panels.

pub mod manager;
pub mod page;
pub mod panels;

pub use manager::UiManager;
pub use page::Page;
pub use panels::{draw_page, hero_viewport_rect, UiActions};
