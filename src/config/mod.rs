//! Configuration module

pub mod env;
mod site;

pub use env::CmsCredentials;
pub use site::CmsConfig;
pub use site::ImageConfig;
pub use site::SiteConfig;
pub use site::WebhookConfig;
