pub mod orders;
pub mod users;

pub use orders as order_entity;
pub use orders::OrderStatus;
pub use users as user_entity;
