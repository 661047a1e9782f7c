pub mod harness;

mod failures;
mod removal;
