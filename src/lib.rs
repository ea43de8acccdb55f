extern crate byteorder;

#[macro_use]
extern crate log;
extern crate env_logger;

#[macro_use]
extern crate more_asserts;

#[macro_use]
pub mod utils;

pub mod config;
pub mod error;

pub mod asm;
pub mod vm;

pub use crate::error::{Error, Result};
