//! Client for a remote Hogwarts aspirant roster: fetch the list once,
//! filter it locally by name and house, hide individual rows, and render
//! the result as a terminal table.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;

pub use board::{
    render_table, Aspirant, AspirantBoard, AspirantSource, FetchError, HttpAspirantSource,
    RenderOptions, ViewStatus,
};
pub use error::AppError;
