pub mod axis;
pub mod data;

// Flat access to the data types
pub use axis::*;
pub use data::*;
