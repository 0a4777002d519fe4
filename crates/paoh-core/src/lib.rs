//! PAOH Core Types and Definitions
//!
//! This crate provides the foundational types shared by the PAOH timeline
//! crates. It includes:
//!
//! - **Identifiers**: String-interned actor identities ([`identifier::ActorId`])
//! - **Events**: Dated multi-actor events ([`event`] module) and the
//!   [`dataset::Dataset`] handed to each layout run
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG layering and stroke primitives ([`draw`] module)

pub mod color;
pub mod dataset;
pub mod draw;
pub mod event;
pub mod geometry;
pub mod identifier;
