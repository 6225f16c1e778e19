pub mod architecture;
pub mod engine;
pub mod results;
pub mod server;
pub mod strategy;
pub mod topic;
pub mod watcher;
