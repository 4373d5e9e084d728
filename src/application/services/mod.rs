//! Business logic services for the application layer.

pub mod greeting_service;
pub mod link_service;

pub use greeting_service::GreetingService;
pub use link_service::LinkService;
