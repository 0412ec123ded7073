use std::{collections::BTreeMap, slice::Iter, sync::LazyLock};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum WorkoutType {
    Powerlifting,
    Bodybuilding,
    Crossfit,
}

impl Property for WorkoutType {
    fn iter() -> Iter<'static, WorkoutType> {
        static WORKOUT_TYPES: [WorkoutType; 3] = [
            WorkoutType::Powerlifting,
            WorkoutType::Bodybuilding,
            WorkoutType::Crossfit,
        ];
        WORKOUT_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutType::Powerlifting => "Powerlifting",
            WorkoutType::Bodybuilding => "Bodybuilding",
            WorkoutType::Crossfit => "Crossfit",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MuscleGroup {
    Shoulders,
    Chest,
    Arms,
    Legs,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 5] = [
            MuscleGroup::Shoulders,
            MuscleGroup::Chest,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
        }
    }
}

/// Immutable table of candidate exercises per workout type and muscle group.
///
/// The entry order determines which exercise is picked as a superset partner,
/// so lists are ordered from most to least common.
pub struct Catalog {
    entries: BTreeMap<WorkoutType, BTreeMap<MuscleGroup, Vec<&'static str>>>,
}

impl Catalog {
    #[must_use]
    pub fn from_entries(entries: &[(WorkoutType, MuscleGroup, &[&'static str])]) -> Self {
        let mut result: BTreeMap<WorkoutType, BTreeMap<MuscleGroup, Vec<&'static str>>> =
            BTreeMap::new();
        for (workout_type, muscle_group, exercises) in entries {
            result
                .entry(*workout_type)
                .or_default()
                .insert(*muscle_group, exercises.to_vec());
        }
        Self { entries: result }
    }

    /// Candidate exercises for the given selection, in catalog order.
    ///
    /// An absent workout type or muscle group yields an empty slice.
    #[must_use]
    pub fn exercises(
        &self,
        workout_type: WorkoutType,
        muscle_group: MuscleGroup,
    ) -> &[&'static str] {
        self.entries
            .get(&workout_type)
            .and_then(|groups| groups.get(&muscle_group))
            .map_or(&[], Vec::as_slice)
    }
}

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_entries(ENTRIES));

const ENTRIES: &[(WorkoutType, MuscleGroup, &[&'static str])] = &[
    (
        WorkoutType::Powerlifting,
        MuscleGroup::Shoulders,
        &[
            "Barbell Shoulder Press",
            "Barbell Push Press",
            "Dumbbell Shoulder Press",
            "Barbell Rear Delt Row",
            "Dumbbell Lateral Raise",
            "Cable Rope Face Pull",
        ],
    ),
    (
        WorkoutType::Powerlifting,
        MuscleGroup::Chest,
        &[
            "Barbell Bench Press",
            "Barbell Incline Bench Press",
            "Barbell Decline Bench Press",
            "Barbell Floor Press",
            "Dumbbell Bench Press",
            "Dip",
        ],
    ),
    (
        WorkoutType::Powerlifting,
        MuscleGroup::Arms,
        &[
            "Barbell Curl",
            "Barbell Skull Crusher",
            "Barbell Overhead Triceps Extension",
            "Dumbbell Hammer Curl",
            "Dumbbell Wrist Curl",
            "Bench Dip",
        ],
    ),
    (
        WorkoutType::Powerlifting,
        MuscleGroup::Legs,
        &[
            "Barbell Squat",
            "Barbell Deadlift",
            "Barbell Romanian Deadlift",
            "Barbell Lunge",
            "Leg Press",
            "Barbell Standing Calf Raise",
        ],
    ),
    (
        WorkoutType::Powerlifting,
        MuscleGroup::Core,
        &[
            "Barbell Ab Rollout",
            "Back Extension",
            "Hanging Leg Raise",
            "Plank",
            "Cable Crunch",
        ],
    ),
    (
        WorkoutType::Bodybuilding,
        MuscleGroup::Shoulders,
        &[
            "Dumbbell Shoulder Press",
            "Arnold Press",
            "Dumbbell Lateral Raise",
            "Cable Lateral Raise",
            "Dumbbell Reverse Fly",
            "Machine Shoulder Press",
        ],
    ),
    (
        WorkoutType::Bodybuilding,
        MuscleGroup::Chest,
        &[
            "Dumbbell Bench Press",
            "Dumbbell Incline Bench Press",
            "Dumbbell Fly",
            "Cable Crossover",
            "Machine Chest Press",
            "Push Up",
        ],
    ),
    (
        WorkoutType::Bodybuilding,
        MuscleGroup::Arms,
        &[
            "Dumbbell Curl",
            "Dumbbell Preacher Curl",
            "Cable Curl",
            "Cable Rope Hammer Curl",
            "Dumbbell Skull Crusher",
            "Cable Overhead Triceps Extension",
        ],
    ),
    (
        WorkoutType::Bodybuilding,
        MuscleGroup::Legs,
        &[
            "Leg Press",
            "Machine Hack Squat",
            "Leg Extension",
            "Seated Leg Curl",
            "Dumbbell Lunge",
            "Machine Standing Calf Raise",
        ],
    ),
    (
        WorkoutType::Bodybuilding,
        MuscleGroup::Core,
        &[
            "Crunch",
            "Cable Crunch",
            "Machine Crunch",
            "Hanging Knee Raise",
            "Side Plank",
            "Dead Bug",
        ],
    ),
    (
        WorkoutType::Crossfit,
        MuscleGroup::Shoulders,
        &[
            "Push Press",
            "Handstand Push Up",
            "Dumbbell Snatch",
            "Wall Ball Shot",
            "Kettlebell Press",
        ],
    ),
    (
        WorkoutType::Crossfit,
        MuscleGroup::Chest,
        &[
            "Push Up",
            "Burpee",
            "Ring Dip",
            "Ring Push Up",
            "Decline Push Up",
        ],
    ),
    (
        WorkoutType::Crossfit,
        MuscleGroup::Arms,
        &[
            "Chin Up",
            "Ring Row",
            "Rope Climb",
            "Bench Dip",
            "Barbell Curl",
        ],
    ),
    (
        WorkoutType::Crossfit,
        MuscleGroup::Legs,
        &[
            "Squat",
            "Box Jump",
            "Walking Lunge",
            "Pistol Squat",
            "Goblet Squat",
            "Squat Jump",
        ],
    ),
    (
        WorkoutType::Crossfit,
        MuscleGroup::Core,
        &[
            "Sit Up",
            "Toes To Bar",
            "Plank",
            "V Up",
            "Hollow Hold",
            "Mountain Climber",
        ],
    ),
];
