use crate::{Request, Response, Result};


pub mod reqwest;

/// The transport seam. A DAO executes every request through one of these;
/// the reqwest backend is the only production implementation.
pub trait HttpClient: Send + Sync {
    fn create(config: ClientConfig) -> Self
    where
        Self: Sized;

    fn execute(&self, request: &Request) -> Result<Response>;
}

/// Transport options. The only knob this layer exposes; timeout policy, if
/// any, belongs to the underlying client.
pub struct ClientConfig {
    pub ssl_check: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { ssl_check: true }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self { ssl_check }
    }
}
