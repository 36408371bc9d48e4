//! Command implementations

pub mod init;
pub mod plans;
pub mod publish;
pub mod subscribe;
pub mod validate;
