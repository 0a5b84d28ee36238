//! Screens and the pieces the shell composes them from.

pub mod header;
pub mod home;
pub mod panel;
pub mod practice;
