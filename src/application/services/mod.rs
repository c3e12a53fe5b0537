//! Application services orchestrating store access.

mod link_service;
mod rate_limit_service;

pub use link_service::LinkService;
pub use rate_limit_service::RateLimitService;
