pub mod health;
pub mod set;
pub mod get;

pub use health::health_handler;
pub use set::set_handler;
pub use get::get_handler;
