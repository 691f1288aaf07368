//! Collaborator backends for the portfolio terminal: output rendering,
//! panel management, delayed downloads, and wall clocks.

pub mod clock;
pub mod download;
pub mod panel;
pub mod render;
