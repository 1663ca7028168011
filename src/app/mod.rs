// Application layer: HTTP handlers, routing and the server loop.

pub mod handlers;
pub mod router;
pub mod server;

pub use router::{create_router, AppState, DIAGRAM_ROUTE};
pub use server::{serve, serve_with_shutdown};
