//! Interactive terminal front end
//!
//! Bridges console input with the service layer: the numbered menu loop
//! and the prompt abstraction it reads from.

pub mod menu;
pub mod prompt;

pub use menu::{Menu, MenuChoice};
pub use prompt::{Console, Prompter};
