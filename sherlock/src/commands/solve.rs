use std::path::PathBuf;

use color_eyre::eyre::Result;
use colored::Colorize;
use itertools::Itertools;
use rollit_minimax::{SearchReturn, Searcher, DEFAULT_DEPTH};

use crate::fixture::load_fixture;

#[derive(clap::Args, Debug)]
pub(crate) struct Solve {
    /// Path to the JSON tree game fixture
    #[clap(short, long, value_parser)]
    fixture: PathBuf,

    /// Search strategy: minimax, alphabeta or expectimax
    #[clap(short, long, value_parser, default_value = "minimax")]
    strategy: String,

    /// Number of full rounds to look ahead
    #[clap(short, long, value_parser, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Evaluation function used at the depth cutoff: score or better
    #[clap(short, long, value_parser, default_value = "better")]
    evaluation: String,

    /// Print the whole explored tree
    #[clap(short, long)]
    tree: bool,
}

impl Solve {
    pub(crate) fn run(self) -> Result<()> {
        let searcher = Searcher::from_names(&self.strategy, self.depth, &self.evaluation)?;
        let game = load_fixture(&self.fixture)?;

        let (action, result) = searcher.choose_action_with_tree(&game)?;

        println!(
            "{} with depth {} chose {} (value {})",
            searcher.strategy(),
            searcher.depth(),
            action.green().bold(),
            result.value()
        );
        println!("Explored {} nodes", result.node_count());
        print_root_options(&result);
        println!("Expected line: {}", describe_route(&result));

        if self.tree {
            println!();
            println!("{}", result.to_text_tree());
        }

        Ok(())
    }
}

fn print_root_options(result: &SearchReturn<String>) {
    if let SearchReturn::Node {
        options, chosen, ..
    } = result
    {
        for (index, (action, option)) in options.iter().enumerate() {
            let line = format!("  {action}: {}", option.value());
            if *chosen == Some(index) {
                println!("{}", line.green());
            } else {
                println!("{line}");
            }
        }
    }
}

fn describe_route(result: &SearchReturn<String>) -> String {
    result
        .chosen_route()
        .iter()
        .map(|(agent, action)| format!("{agent}:{action}"))
        .join(" -> ")
}
