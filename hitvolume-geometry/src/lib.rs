//! hitvolume-geometry: Volume containment queries for detector hits.
//!
//! This crate provides:
//! - **Cylinder** - finite right cylinder between two face centers
//! - **Prism** - finite rectangular prism with a rotated cross-section
//! - **Volume** - tagged union of the two, dispatched through [`Solid`]
//! - **Queries** - counts, energy sums, mean positions and boundary margins
//!   over the contained hits, sequentially or in parallel
//!
#![warn(missing_docs)]

pub mod batch;
mod cylinder;
mod event;
mod prism;
pub mod query;
mod solid;
mod summary;
mod volume;

pub use batch::{count_inside_each, summarize_collections, summarize_volumes};
pub use cylinder::{Cylinder, CylinderParams};
pub use event::EventVolumeQueries;
pub use prism::{LocalCoordinates, Prism, PrismParams};
pub use query::{
    all_inside, any_inside, closest_distance_to_bottom, closest_distance_to_top,
    closest_distance_to_wall, contains_point, count_inside, distance_or_sentinel, energy_inside,
    mean_position_inside, NO_HIT_INSIDE,
};
pub use solid::{Placement, Solid};
pub use summary::{summarize, VolumeSummary};
pub use volume::Volume;

// Re-export core types used in the query signatures
pub use hitvolume_core::{Error, Hit, HitCollection, HitData, HitType, Result};
