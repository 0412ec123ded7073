#![warn(clippy::pedantic)]

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use liftgen_app::generator::{CancellationToken, Generator, State, generate};
use liftgen_domain::{CATALOG, Intensity, MuscleGroup, WorkoutType};

#[derive(Parser, Debug)]
#[command(version, about = "Random workout generator", long_about = None)]
struct Args {
    /// Workout type
    #[arg(long, value_enum)]
    workout_type: Option<WorkoutTypeArg>,

    /// Muscle group
    #[arg(long, value_enum)]
    muscle_group: Option<MuscleGroupArg>,

    /// Intensity level
    #[arg(long, value_enum)]
    intensity: Option<IntensityArg>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WorkoutTypeArg {
    Powerlifting,
    Bodybuilding,
    Crossfit,
}

impl From<WorkoutTypeArg> for WorkoutType {
    fn from(value: WorkoutTypeArg) -> Self {
        match value {
            WorkoutTypeArg::Powerlifting => WorkoutType::Powerlifting,
            WorkoutTypeArg::Bodybuilding => WorkoutType::Bodybuilding,
            WorkoutTypeArg::Crossfit => WorkoutType::Crossfit,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MuscleGroupArg {
    Shoulders,
    Chest,
    Arms,
    Legs,
    Core,
}

impl From<MuscleGroupArg> for MuscleGroup {
    fn from(value: MuscleGroupArg) -> Self {
        match value {
            MuscleGroupArg::Shoulders => MuscleGroup::Shoulders,
            MuscleGroupArg::Chest => MuscleGroup::Chest,
            MuscleGroupArg::Arms => MuscleGroup::Arms,
            MuscleGroupArg::Legs => MuscleGroup::Legs,
            MuscleGroupArg::Core => MuscleGroup::Core,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IntensityArg {
    Low,
    High,
}

impl From<IntensityArg> for Intensity {
    fn from(value: IntensityArg) -> Self {
        match value {
            IntensityArg::Low => Intensity::Low,
            IntensityArg::High => Intensity::High,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    liftgen_app::log::init()?;

    let args = Args::parse();

    let mut generator = Generator::new();
    generator.set_workout_type(args.workout_type.map(Into::into));
    generator.set_muscle_group(args.muscle_group.map(Into::into));
    generator.set_intensity(args.intensity.map(Into::into));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let selection = generator.selection();
    generator.begin();

    let token = CancellationToken::new();
    let outcome = tokio::select! {
        outcome = generate(&CATALOG, selection, &mut rng, &token) => outcome,
        _ = tokio::signal::ctrl_c() => {
            token.cancel();
            info!("workout generation cancelled");
            None
        }
    };

    let Some(outcome) = outcome else {
        return Ok(());
    };
    generator.finish(outcome);

    match generator.state() {
        State::Result(Ok(workout)) => {
            for prescription in &workout.prescriptions {
                println!("{prescription}");
            }
            Ok(())
        }
        State::Result(Err(error)) => bail!("{error}"),
        State::Form | State::Generating => Ok(()),
    }
}
