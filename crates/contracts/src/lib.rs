//! Wire contracts shared between the HSE console frontend and the REST backend.
//!
//! Every record here mirrors a backend DTO one-to-one and serializes with
//! camelCase field names. The backend owns the lifecycle of every entity;
//! this crate only adds client-side validation and pure derivation helpers
//! that the UI needs before/after a round trip.

pub mod domain;
