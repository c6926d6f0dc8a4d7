pub mod evaluate;
pub mod reflex;
pub mod solve;

use evaluate::Evaluate;
use reflex::Reflex;
use solve::Solve;

use clap::Subcommand;
use color_eyre::eyre::Result;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Run a search engine on a fixture and show the chosen action
    Solve(Solve),
    /// Show the heuristic breakdown of a fixture's root position
    Evaluate(Evaluate),
    /// Let the one move look-ahead agent pick an action
    Reflex(Reflex),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Solve(s) => s.run()?,
            Command::Evaluate(e) => e.run()?,
            Command::Reflex(r) => r.run()?,
        }

        Ok(())
    }
}
