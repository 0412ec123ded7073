use std::fmt;

use rand::{Rng, seq::SliceRandom};

/// Maximum number of exercises in a generated workout.
pub const MAX_EXERCISES: usize = 4;

/// Number of attempts to attach a superset partner to the selection.
const SUPERSET_PICKS: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExerciseSelection {
    pub name: &'static str,
    pub superset: Option<&'static str>,
}

impl fmt::Display for ExerciseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.superset {
            Some(partner) => write!(f, "{} (Superset with {partner})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Draws up to [`MAX_EXERCISES`] exercises from the candidate list without
/// replacement and attaches superset partners to up to two random slots.
///
/// The candidate list is shuffled uniformly with the supplied randomness
/// source, so the result is reproducible for a fixed RNG. A list with fewer
/// than [`MAX_EXERCISES`] entries yields a shorter selection, an empty list an
/// empty one.
///
/// The superset partner is the first candidate in list order whose name is
/// not part of the base selection; if every candidate was selected the picked
/// slots stay unannotated. The picks are drawn with replacement, so both may
/// land on the same slot and simply overwrite it.
#[must_use]
pub fn select_exercises<R: Rng + ?Sized>(
    candidates: &[&'static str],
    rng: &mut R,
) -> Vec<ExerciseSelection> {
    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(MAX_EXERCISES);

    let mut selection = shuffled
        .into_iter()
        .map(|name| ExerciseSelection {
            name,
            superset: None,
        })
        .collect::<Vec<_>>();

    if selection.is_empty() {
        return selection;
    }

    // Both picks resolve to the same partner since the base selection is fixed.
    let partner = candidates
        .iter()
        .copied()
        .find(|candidate| !selection.iter().any(|s| s.name == *candidate));

    for _ in 0..SUPERSET_PICKS {
        let index = rng.gen_range(0..selection.len());
        selection[index].superset = partner;
    }

    selection
}
