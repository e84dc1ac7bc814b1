pub mod handlers;
pub mod middleware;
pub mod receiver;
pub mod routes;
