//! Jobs domain layer: entities and request schemas

pub mod entities;
