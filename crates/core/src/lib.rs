//! Core estimate logic for Smeta.
//!
//! This crate contains pure domain logic with ZERO database dependencies.
//! Entity types, hierarchy rules, budget rollups and the discount calculation
//! live here; `smeta-db` loads rows and feeds them through these functions.
//!
//! # Modules
//!
//! - `estimate` - Buildings, sections, expenditures and their aggregates

pub mod estimate;
