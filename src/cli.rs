use anyhow::{Context, Error as Anyhow};
use armnet::arm::{ArmGenerator, ArmPose, Normalizer, Point};
use armnet::{Network, NetworkShape, Sgd, TrainConfig};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::{cmp::min, io::stderr, path::PathBuf};
use tracing::{info, instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Trains a sigmoid network on the inverse kinematics of a two-segment arm.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long, default_value_t = Level::INFO)]
    verbosity: Level,

    /// Number of random arm configurations to train on.
    #[clap(long, default_value_t = 1000)]
    samples: usize,

    /// Number of epochs.
    #[clap(long, default_value_t = TrainConfig::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Hidden layer sizes, comma separated.
    #[clap(long, value_delimiter = ',', default_values_t = [10, 20, 20, 10])]
    hidden: Vec<usize>,

    /// JSON file describing the network shape; overrides `--hidden`.
    #[clap(long)]
    shape: Option<PathBuf>,

    /// Learning rate.
    #[clap(long, default_value_t = Sgd::DEFAULT_LEARNING_RATE)]
    eta: f64,

    /// Seed for weight initialisation and sampling.
    #[clap(long)]
    seed: Option<u64>,

    /// Length of each arm segment.
    #[clap(long, default_value_t = 200.0)]
    arm_length: f64,

    /// Position of the shoulder, as `x,y`.
    #[clap(long, value_parser = parse_point, default_value = "400,400")]
    center: Point,

    /// Point the trained arm should reach, as `x,y`; may be repeated.
    #[clap(long = "target", value_parser = parse_point)]
    targets: Vec<Point>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("armnet", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let shape = match &self.shape {
            Some(path) => NetworkShape::load_json(path)
                .with_context(|| format!("failed to load network shape from {}", path.display()))?,
            None => NetworkShape::new(2, &self.hidden, 2),
        };

        let generator = ArmGenerator::new(self.arm_length, self.center);
        let samples = generator.generate(self.samples, &mut rng);
        let normalizer = Normalizer::fit(&samples)?;
        let examples = normalizer.to_examples(&samples);

        let mut network = Network::with_optimizer(&shape, Sgd::new(self.eta), &mut rng)?;
        info!(?shape, samples = examples.len(), eta = self.eta, "training");
        network.train_with(&examples, &TrainConfig::new(self.iterations))?;

        let history = network.error_values();
        let stride = (history.len() / 10).max(1);
        for (epoch, error) in history.iter().enumerate().skip(stride - 1).step_by(stride) {
            println!("epoch {:>6}: error = {:.6}", epoch + 1, error);
        }

        for target in &self.targets {
            let output = network.forward(&normalizer.encode_point(*target))?;
            let angles = normalizer.decode_angles(&output)?;
            let pose = ArmPose::from_angles(self.center, angles, self.arm_length);
            println!(
                "target ({:.1}, {:.1}): alpha = {:.2}°, beta = {:.2}°",
                target.x,
                target.y,
                angles.alpha.to_degrees(),
                angles.beta.to_degrees(),
            );
            println!(
                "    elbow = ({:.1}, {:.1}), end = ({:.1}, {:.1}), miss = {:.2}",
                pose.elbow.x,
                pose.elbow.y,
                pose.end.x,
                pose.end.y,
                pose.end.distance(*target),
            );
        }

        Ok(())
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected `x,y`, found `{s}`"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}
