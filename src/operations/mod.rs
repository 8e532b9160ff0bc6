pub(crate) mod classify;
pub mod connection;
pub mod sort;

pub use classify::{ROLE_BACKWARD, ROLE_FORWARD};
