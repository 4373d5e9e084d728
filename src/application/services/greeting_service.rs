//! Greeting service.

/// Message returned by the greeting endpoint.
pub const GREETING: &str = "Olá Fatec";

/// Stateless service answering the greeting endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }

    pub fn greet(&self) -> &'static str {
        GREETING
    }
}
