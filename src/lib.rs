//! Nearest Recycling Point Library.
//! Ranks drop-off points ("ecopontos") by distance from the user and
//! keeps the map state that drives the point list.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod payload;
pub mod ranking;
pub mod session;
pub mod state;

pub mod types {
    pub mod location;
    pub mod point;
    pub mod ranked;
    pub mod waste;
}

pub mod utils {
    pub mod generator;
    pub mod haversine;
}

pub use error::Error;
pub use types::*;
pub use utils::*;
