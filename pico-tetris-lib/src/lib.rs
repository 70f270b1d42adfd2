#![cfg_attr(not(test), no_std)]

pub mod log;

pub mod audio;
pub mod board;
pub mod catalog;
pub mod collision;
pub mod common;
pub mod games;
pub mod hud;
pub mod input;
pub mod line_clear;
pub mod music;
pub mod palette;
pub mod piece;
pub mod scheduler;
pub mod session;
pub mod shape;
pub mod status;

#[cfg(test)]
mod testing;
