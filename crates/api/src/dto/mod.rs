pub mod check;

pub use check::{CheckResponse, ErrorResponse};
