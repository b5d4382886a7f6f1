pub mod agent;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod interface;
pub mod model;
pub mod pathing;
pub mod planning;

#[cfg(test)]
mod testing;
