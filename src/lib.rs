//! A one-line terminal shooter: players, enemies and bullets living in a
//! fixed-capacity arena and drawn onto a single row of text every tick.

pub mod canvas;
pub mod compute;
pub mod config;
pub mod dice;
pub mod entities;
pub mod error;
pub mod input;
pub mod registry;
pub mod terminal;

pub use error::{GameError, Result};
