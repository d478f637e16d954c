//! Turtle ontologies used by the end-to-end tests.
//!
//! Each constant holds a complete Turtle 1.1 document.

#![allow(dead_code)]

mod ordering;
mod person_car;
mod unlabelled;

pub use ordering::{GROUPED, UNGROUPED};
pub use person_car::PERSON_CAR;
pub use unlabelled::{UNLABELLED_CLASS, UNLABELLED_PROPERTY};
