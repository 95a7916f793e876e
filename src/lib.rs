#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod difficulty;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod orientation;
mod puzzle;
mod search;
mod words;

pub use common::*;
pub use config::*;
pub use difficulty::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::{OccupancyMask, SetBits};
pub use orientation::*;
pub use puzzle::*;
pub use search::*;
pub use words::*;
