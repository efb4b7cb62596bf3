//! hitvolume-core: Core types for detector event hit data.
//!
//! This crate provides the hit data model, the hit read interface used by
//! the volume queries, ordered hit collections and the shared error type.
//!
#![warn(missing_docs)]

pub mod collection;
pub mod error;
pub mod hit;

pub use collection::{Bounds, HitCollection, Summary};
pub use error::{Error, Result};
pub use hit::{is_determined, Hit, HitData, HitType, ParseHitTypeError, UNDETERMINED};

pub use nalgebra::{Point3, Vector3};
