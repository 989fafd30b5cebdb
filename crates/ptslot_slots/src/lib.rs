// --- File: crates/ptslot_slots/src/lib.rs ---
// Declare modules within this crate
pub mod context;
pub mod date;
#[cfg(test)]
mod date_test;
pub mod doc;
pub mod grid;
#[cfg(test)]
mod grid_test;
pub mod handlers;
pub mod loader;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;
pub mod selection;
pub mod service;
pub mod validation;

pub use context::VenueContext;
pub use grid::{classify_cell, is_slot_existing, is_slot_selected, CellState, GridConfig};
pub use logic::{merge_raw_slots, merge_time_slots};
