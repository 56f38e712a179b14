pub mod handlers;
mod routes;

pub use routes::build_router;
