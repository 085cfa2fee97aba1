pub mod server;
pub mod sweeper;
