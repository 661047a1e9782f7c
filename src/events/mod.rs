pub mod command;
pub mod ready;
pub mod router;
