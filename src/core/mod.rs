pub mod bootstrap;
pub mod location;
pub mod metric;
pub mod stats;
