//! Helper functions shared by transforms, components and templates

mod asset;
mod format;
mod html;
pub mod rich_text;
mod url;

pub use asset::*;
pub use format::*;
pub use html::*;
pub use url::*;
