pub mod balloons;
pub mod error;
pub mod flights;
