use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use log::{debug, info, warn};
use rand::Rng;
use tokio::time::sleep;

use liftgen_domain::{
    Catalog, Intensity, MuscleGroup, PlanError, Workout, WorkoutType, assemble_workout,
};

/// Artificial delay of the generation task, standing in for a longer-running
/// computation or remote call.
pub const GENERATION_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub workout_type: Option<WorkoutType>,
    pub muscle_group: Option<MuscleGroup>,
    pub intensity: Option<Intensity>,
}

impl Selection {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.workout_type.is_some() && self.muscle_group.is_some() && self.intensity.is_some()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum State {
    #[default]
    Form,
    Generating,
    Result(Result<Workout, PlanError>),
}

/// Interaction state of the workout generator, independent of any UI.
///
/// The selection form is visible in [`State::Form`], the trigger control is
/// disabled in [`State::Generating`], and either the generated workout or the
/// validation message is shown in [`State::Result`].
#[derive(Debug, Default)]
pub struct Generator {
    selection: Selection,
    state: State,
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        matches!(self.state, State::Generating)
    }

    pub fn set_workout_type(&mut self, workout_type: Option<WorkoutType>) {
        if matches!(self.state, State::Form) {
            self.selection.workout_type = workout_type;
        } else {
            debug!("ignoring workout type change outside the selection form");
        }
    }

    pub fn set_muscle_group(&mut self, muscle_group: Option<MuscleGroup>) {
        if matches!(self.state, State::Form) {
            self.selection.muscle_group = muscle_group;
        } else {
            debug!("ignoring muscle group change outside the selection form");
        }
    }

    pub fn set_intensity(&mut self, intensity: Option<Intensity>) {
        if matches!(self.state, State::Form) {
            self.selection.intensity = intensity;
        } else {
            debug!("ignoring intensity change outside the selection form");
        }
    }

    /// Enters the generating state and returns whether the transition took
    /// place. A trigger while a generation is already running is rejected.
    pub fn begin(&mut self) -> bool {
        if self.is_generating() {
            return false;
        }
        debug!("generating workout");
        self.state = State::Generating;
        true
    }

    /// Records the outcome of a finished generation task.
    ///
    /// An outcome arriving in any other state is stale (the generator was
    /// reset while the task was running) and must not overwrite that state.
    pub fn finish(&mut self, outcome: Result<Workout, PlanError>) {
        if self.is_generating() {
            self.state = State::Result(outcome);
        } else {
            warn!("discarding workout generated after leaving the generating state");
        }
    }

    /// Returns to the empty selection form, clearing any result.
    pub fn start_over(&mut self) {
        self.selection = Selection::default();
        self.state = State::Form;
    }
}

#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs the delayed generation task.
///
/// Returns `None` if the token was cancelled during the delay, in which case
/// no workout is assembled and no state may be overwritten.
pub async fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    selection: Selection,
    rng: &mut R,
    token: &CancellationToken,
) -> Option<Result<Workout, PlanError>> {
    sleep(GENERATION_DELAY).await;

    if token.is_cancelled() {
        info!("workout generation cancelled");
        return None;
    }

    Some(assemble_workout(
        catalog,
        selection.workout_type,
        selection.muscle_group,
        selection.intensity,
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;
    use liftgen_domain::CATALOG;

    fn complete_selection() -> Selection {
        Selection {
            workout_type: Some(WorkoutType::Powerlifting),
            muscle_group: Some(MuscleGroup::Legs),
            intensity: Some(Intensity::Low),
        }
    }

    #[rstest]
    #[case(Selection::default(), false)]
    #[case(
        Selection {
            workout_type: Some(WorkoutType::Crossfit),
            muscle_group: None,
            intensity: Some(Intensity::High),
        },
        false
    )]
    #[case(complete_selection(), true)]
    fn test_selection_is_complete(#[case] selection: Selection, #[case] expected: bool) {
        assert_eq!(selection.is_complete(), expected);
    }

    #[test]
    fn test_generator_selection_form() {
        let mut generator = Generator::new();
        assert_eq!(*generator.state(), State::Form);

        generator.set_workout_type(Some(WorkoutType::Powerlifting));
        generator.set_muscle_group(Some(MuscleGroup::Legs));
        generator.set_intensity(Some(Intensity::Low));
        assert_eq!(generator.selection(), complete_selection());
    }

    #[test]
    fn test_generator_selection_ignored_outside_form() {
        let mut generator = Generator::new();
        assert!(generator.begin());

        generator.set_workout_type(Some(WorkoutType::Crossfit));
        generator.set_muscle_group(Some(MuscleGroup::Core));
        generator.set_intensity(Some(Intensity::High));
        assert_eq!(generator.selection(), Selection::default());
    }

    #[test]
    fn test_generator_begin_rejected_while_generating() {
        let mut generator = Generator::new();
        assert!(generator.begin());
        assert!(generator.is_generating());
        assert!(!generator.begin());
    }

    #[test]
    fn test_generator_finish() {
        let mut generator = Generator::new();
        assert!(generator.begin());

        generator.finish(Err(PlanError::IncompleteSelection));
        assert_eq!(
            *generator.state(),
            State::Result(Err(PlanError::IncompleteSelection))
        );
    }

    #[test]
    fn test_generator_generate_another() {
        let mut generator = Generator::new();
        generator.set_workout_type(Some(WorkoutType::Powerlifting));
        assert!(generator.begin());
        generator.finish(Ok(Workout::default()));

        assert!(generator.begin());
        assert!(generator.is_generating());
        assert_eq!(
            generator.selection().workout_type,
            Some(WorkoutType::Powerlifting)
        );
    }

    #[test]
    fn test_generator_stale_outcome_discarded() {
        let mut generator = Generator::new();
        assert!(generator.begin());
        generator.start_over();

        generator.finish(Ok(Workout::default()));
        assert_eq!(*generator.state(), State::Form);
    }

    #[test]
    fn test_generator_start_over_resets_selection() {
        let mut generator = Generator::new();
        generator.set_workout_type(Some(WorkoutType::Bodybuilding));
        generator.set_muscle_group(Some(MuscleGroup::Chest));
        generator.set_intensity(Some(Intensity::High));
        assert!(generator.begin());
        generator.finish(Ok(Workout::default()));

        generator.start_over();
        assert_eq!(*generator.state(), State::Form);
        assert_eq!(generator.selection(), Selection::default());
    }

    #[test]
    fn test_cancellation_token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());

        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_completes_after_delay() {
        let mut rng = StdRng::seed_from_u64(0);
        let token = CancellationToken::new();
        let outcome = generate(&CATALOG, complete_selection(), &mut rng, &token).await;

        let workout = outcome.unwrap().unwrap();
        assert!(!workout.is_empty());
        assert!(workout.prescriptions.len() <= liftgen_domain::MAX_EXERCISES);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_incomplete_selection() {
        let mut rng = StdRng::seed_from_u64(0);
        let token = CancellationToken::new();
        let outcome = generate(&CATALOG, Selection::default(), &mut rng, &token).await;

        assert_eq!(outcome, Some(Err(PlanError::IncompleteSelection)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_cancelled() {
        let mut rng = StdRng::seed_from_u64(0);
        let token = CancellationToken::new();
        token.cancel();
        let outcome = generate(&CATALOG, complete_selection(), &mut rng, &token).await;

        assert_eq!(outcome, None);
    }
}
