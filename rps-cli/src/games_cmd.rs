//! Games command - list the built-in presets

use anyhow::Result;

use rps_core::{Game, PRESETS};

pub fn run() -> Result<()> {
    for line in preset_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn preset_lines() -> Vec<String> {
    PRESETS
        .iter()
        .filter_map(|key| Game::preset(key).map(|game| (key, game)))
        .map(|(key, game)| {
            format!(
                "{:<6} {} [{}]",
                key,
                game.name(),
                game.selection_set().selections().join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lines() {
        let lines = preset_lines();
        assert_eq!(lines.len(), PRESETS.len());
        assert_eq!(lines[0], "rps    Rock Paper Scissors [rock, paper, scissors]");
        assert!(lines[1].starts_with("rpsls  Rock Paper Scissors Lizard Spock"));
    }
}
