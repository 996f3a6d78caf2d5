pub mod common;
pub mod consultation;
pub mod context;
pub mod dom;
pub mod effects;
pub mod icon;
pub mod navigation;
pub mod notifications;
pub mod pages;
pub mod reveal;
pub mod transport;
pub mod typing;

pub use context::{PageContext, provide_page_context, use_page_context};
pub use icon::{Icon, icons};
