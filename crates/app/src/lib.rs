#![warn(clippy::pedantic)]

pub mod generator;
pub mod log;
