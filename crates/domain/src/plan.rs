use log::debug;
use rand::Rng;

use crate::{
    Catalog, Intensity, MuscleGroup, Prescription, Property, WorkoutType, generate_sets_reps,
    select_exercises,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Workout {
    pub prescriptions: Vec<Prescription>,
}

impl Workout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prescriptions.is_empty()
    }
}

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum PlanError {
    #[error("Please select workout type, muscle group, and intensity.")]
    IncompleteSelection,
}

/// Assembles a randomized workout for the given selection.
///
/// All three selections must be present, otherwise the user-facing
/// [`PlanError::IncompleteSelection`] is returned. Exercises are drawn from
/// the catalog entry for the selection and each one gets an independently
/// drawn sets/reps pair. The catalog is never mutated and every invocation
/// draws fresh randomness.
pub fn assemble_workout<R: Rng + ?Sized>(
    catalog: &Catalog,
    workout_type: Option<WorkoutType>,
    muscle_group: Option<MuscleGroup>,
    intensity: Option<Intensity>,
    rng: &mut R,
) -> Result<Workout, PlanError> {
    let (Some(workout_type), Some(muscle_group), Some(intensity)) =
        (workout_type, muscle_group, intensity)
    else {
        return Err(PlanError::IncompleteSelection);
    };

    let candidates = catalog.exercises(workout_type, muscle_group);
    let prescriptions = select_exercises(candidates, rng)
        .into_iter()
        .map(|exercise| {
            let (sets, reps) = generate_sets_reps(intensity, rng);
            Prescription {
                exercise,
                sets,
                reps,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "assembled {} prescriptions for {} / {} at {} intensity",
        prescriptions.len(),
        workout_type.name(),
        muscle_group.name(),
        intensity.name()
    );

    Ok(Workout { prescriptions })
}
