#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

pub mod decode;
pub mod encode;
pub mod errors;
pub mod size;
pub(crate) mod varint;

// Re-export main types
pub use decode::Decoder;
pub use encode::Encoder;
pub use errors::Error;
