pub mod order_service;
pub mod user_service;

pub use order_service::*;
pub use user_service::*;
