//! Core types for the SolarBot workspace
//!
//! Shared conversation message types and the savings calculator. This crate
//! is the single source of truth for the financial formulas.

pub mod message;
pub mod savings;

pub use message::{ChatMessage, ChatRole};
pub use savings::{
    compute_savings, SavingsError, SavingsEstimate, SavingsInput, StateIncentive, SystemSize,
};
