//! Employee payroll modelled two ways.
//!
//! [`inheritance`] shares holiday accounting through a trait and lets each
//! employee variant decide its pay. [`composition`] gives an employee an
//! owned pay contract and an optional commission instead. The two models do
//! not share state.

#![warn(missing_docs)]

pub mod composition;
pub mod config;
pub mod error;
pub mod inheritance;
