pub mod common;
pub mod get;
pub mod put;
pub mod put_get;
