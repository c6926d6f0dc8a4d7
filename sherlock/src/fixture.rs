use std::{fs::File, io::BufReader, path::Path};

use color_eyre::eyre::{eyre, Result, WrapErr};
use rollit_minimax::{tree_game::TreeGame, GameState};
use tracing::debug;

/// Load a tree game from a JSON fixture on disk
pub(crate) fn load_fixture(path: &Path) -> Result<TreeGame> {
    let file =
        File::open(path).wrap_err_with(|| format!("Couldn't open fixture {}", path.display()))?;

    let game = parse_fixture(BufReader::new(file))
        .wrap_err_with(|| format!("Couldn't parse fixture {}", path.display()))?;

    debug!(
        fixture = %path.display(),
        num_agents = game.num_agents(),
        "loaded fixture"
    );

    Ok(game)
}

pub(crate) fn parse_fixture(reader: impl std::io::Read) -> Result<TreeGame> {
    let game: TreeGame = serde_json::from_reader(reader)?;

    if game.num_agents() == 0 {
        return Err(eyre!("A fixture needs a score for at least one agent"));
    }

    Ok(game)
}
