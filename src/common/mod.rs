pub mod colors;
pub mod mutation;
pub mod options;
pub mod permissions;
pub mod profile;
pub mod reply;
