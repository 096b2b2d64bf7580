#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
pub mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod parser;
mod player;
pub mod prelude;
mod report;

pub use board::*;
pub use common::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level};
pub use parser::*;
pub use player::*;
pub use report::*;
