pub mod device;
pub mod movie;
