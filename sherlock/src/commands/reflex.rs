use std::path::PathBuf;

use color_eyre::eyre::Result;
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use rollit_minimax::{EvaluationFunction, ReflexAgent};

use crate::fixture::load_fixture;

#[derive(clap::Args, Debug)]
pub(crate) struct Reflex {
    /// Path to the JSON tree game fixture
    #[clap(short, long, value_parser)]
    fixture: PathBuf,

    /// Evaluation function whose gain is maximized: score or better
    #[clap(short, long, value_parser, default_value = "score")]
    evaluation: String,

    /// Seed for breaking ties, random if not specified
    #[clap(short, long, value_parser)]
    seed: Option<u64>,
}

impl Reflex {
    pub(crate) fn run(self) -> Result<()> {
        let evaluation: EvaluationFunction = self.evaluation.parse()?;
        let agent = ReflexAgent::new(evaluation);
        let game = load_fixture(&self.fixture)?;

        for (action, gain) in agent.score_actions(&game) {
            println!("  {action}: {gain:+}");
        }

        let action = match self.seed {
            Some(seed) => agent.choose_action_with_rng(&game, &mut StdRng::seed_from_u64(seed))?,
            None => agent.choose_action(&game)?,
        };

        println!("Reflex agent chose {}", action.green().bold());

        Ok(())
    }
}
