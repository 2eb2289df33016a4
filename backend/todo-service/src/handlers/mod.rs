/// HTTP request handlers
pub mod todos;

pub use todos::register_routes;
