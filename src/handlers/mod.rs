pub mod order;
pub mod user;

pub use order::order_config;
pub use user::user_config;
