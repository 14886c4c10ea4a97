//! Domain logic for the blog, free of any I/O.
//!
//! Holds the shared error and id types, article validation rules, tag
//! normalization, and the two pieces of host-side behavior the web client
//! carries: the local draft slot and the read-count gate.

pub mod article;
pub mod draft;
pub mod error;
pub mod read_gate;
pub mod tags;
pub mod types;
