//! Geometry routines for mesh measurement.
//!
//! This module holds the measurement core: a single pure reduction over a
//! mesh's triangulated faces.

pub mod measure;
