//! Policy adapters: the override behaviors installed per operation.
//!
//! Each adapter is a small strategy object implementing `OverrideBehavior`.
//! Adapters read shared idiom state and host surface topology but never
//! depend on another adapter's internals, and the dispatch path never
//! mutates them (the pointer binding's attach/detach calls are an
//! administrative surface, not part of dispatch).

mod idiom_query;
mod image_resize;
mod linebreak;
mod menu_style;
mod pointer_driver;
mod window_select;

pub use idiom_query::IdiomQuery;
pub use image_resize::ImageResize;
pub use linebreak::NonEditingLineBreak;
pub use menu_style::MenuPresentation;
pub use pointer_driver::PointerDriverBinding;
pub use window_select::WindowSelect;
