//! Core types and indices for mod resource dependency graphs.
//!
//! Provides the entity model ([`graph::Entity`]), lenient JSON-LD document
//! loading, the name-keyed entity store, and the immutable [`graph::ModGraph`]
//! that bundles the store with its derived reverse-dependency and type indices.

pub mod error;
pub mod graph;
pub mod index;
pub mod schema;
pub mod storage;
pub mod store;
