//! I/O helpers for exporting sampled field data.

pub mod csv;
pub mod vtk;

pub use csv::*;
pub use vtk::*;
