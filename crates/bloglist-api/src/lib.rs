pub mod blogs;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod users;
