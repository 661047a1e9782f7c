pub mod command;
pub mod config;
pub mod handler;
pub mod invocation;
pub mod member;
pub mod membership;
pub mod response;
