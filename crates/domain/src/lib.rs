#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod plan;
pub mod prescription;
pub mod selection;

pub use catalog::{CATALOG, Catalog, MuscleGroup, Property, WorkoutType};
pub use plan::{PlanError, Workout, assemble_workout};
pub use prescription::{
    Intensity, Prescription, Reps, RepsError, Sets, SetsError, generate_sets_reps,
};
pub use selection::{ExerciseSelection, MAX_EXERCISES, select_exercises};
