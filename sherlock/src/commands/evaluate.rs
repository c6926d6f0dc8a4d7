use std::path::PathBuf;

use color_eyre::eyre::Result;
use rollit_minimax::{score_evaluation, GameState, HeuristicBreakdown};

use crate::fixture::load_fixture;

#[derive(clap::Args, Debug)]
pub(crate) struct Evaluate {
    /// Path to the JSON tree game fixture
    #[clap(short, long, value_parser)]
    fixture: PathBuf,
}

impl Evaluate {
    pub(crate) fn run(self) -> Result<()> {
        let game = load_fixture(&self.fixture)?;
        let breakdown = HeuristicBreakdown::of(&game);

        println!("Agents:    {}", game.num_agents());
        println!("Score:     {}", score_evaluation(&game));
        println!("Parity:    {:.2}", breakdown.parity);
        println!("Corners:   {:.2}", breakdown.corners);
        println!("Mobility:  {:.2}", breakdown.mobility);
        println!("Composite: {:.2}", breakdown.composite());

        Ok(())
    }
}
