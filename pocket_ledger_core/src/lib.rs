//! Core data layer for a personal expense ledger.
//!
//! Owns the authoritative in-memory collection of expense records, keeps it
//! consistent with a durable key-value blob, and derives the grouped and
//! aggregated views a presentation layer renders. Everything visual (forms,
//! lists, charts, toasts) lives outside this crate and calls in through
//! [`store::LedgerStore`] and the functions in [`view`].

pub mod data;
pub mod store;
pub mod view;
