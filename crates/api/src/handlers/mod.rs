pub mod check;
pub mod health;

pub use check::check_domain;
pub use health::health_check;
