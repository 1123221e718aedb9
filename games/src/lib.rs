#![doc = include_str!("../README.md")]

pub mod board;
pub mod compactor;
pub mod error;
pub mod fifteen;
pub mod game;
pub mod game2048;
pub mod moves;

pub use error::GameError;
