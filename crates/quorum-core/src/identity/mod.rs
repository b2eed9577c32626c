//! Identity domain module.

mod model;

pub use model::Identity;
