// Interface adapters: HTTP protocol, handlers and routing.

pub mod handlers;
pub mod protocol;
pub mod rng;
pub mod routes;
pub mod state;
