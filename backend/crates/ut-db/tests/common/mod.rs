#![allow(dead_code)]

pub mod test_db;

pub use test_db::{at, create_test_pool, create_test_user};
