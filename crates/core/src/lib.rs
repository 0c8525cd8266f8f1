//! Core business logic for Folio.
//!
//! This crate contains pure logic with ZERO network or storage dependencies.
//! It takes an account list that some other layer fetched and turns it into
//! labelled display groups.
//!
//! # Modules
//!
//! - `grouping` - Generic first-occurrence grouping of any record type
//! - `accounts` - Account model, enumerations, label resolution and the
//!   account grouping service

pub mod accounts;
pub mod grouping;
