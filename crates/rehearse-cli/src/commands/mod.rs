pub mod batch;
pub mod compare;
pub mod evaluate;
pub mod init;
pub mod questions;
pub mod validate;
