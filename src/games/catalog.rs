//! Built-in example games
//!
//! A small catalog of classic zero-sum games for the demo command, payoffs
//! given for the row player.

use crate::core::PayoffMatrix;

/// A named game with its payoff table for the row player
pub struct NamedGame {
    pub name: &'static str,
    pub description: &'static str,
    payoffs: &'static [&'static [f64]],
}

impl NamedGame {
    /// Build the payoff matrix for this game
    ///
    /// # Panics
    /// Will not panic - the catalog tables are rectangular and finite.
    #[must_use]
    pub fn matrix(&self) -> PayoffMatrix {
        let rows = self.payoffs.iter().map(|row| row.to_vec()).collect();
        PayoffMatrix::new(rows).expect("catalog tables are valid matrices")
    }
}

/// All built-in games
pub const GAMES: &[NamedGame] = &[
    NamedGame {
        name: "matching-pennies",
        description: "Both players show a coin; matched faces pay the row player",
        payoffs: &[&[1.0, -1.0], &[-1.0, 1.0]],
    },
    NamedGame {
        name: "rock-paper-scissors",
        description: "The classic three-way cycle, win 1 / lose 1 / draw 0",
        payoffs: &[
            &[0.0, -1.0, 1.0],
            &[1.0, 0.0, -1.0],
            &[-1.0, 1.0, 0.0],
        ],
    },
    NamedGame {
        name: "pricing-duel",
        description: "A stylized two-option pricing standoff with a deterministic outcome",
        payoffs: &[&[1.0, 2.0], &[0.0, 3.0]],
    },
    NamedGame {
        name: "patrol-duel",
        description: "A patrol/infiltration game over three routes, strictly determined",
        payoffs: &[
            &[4.0, 1.0, 3.0],
            &[2.0, 0.0, -1.0],
            &[5.0, 2.0, 4.0],
        ],
    },
];

/// Look up a built-in game by name
#[must_use]
pub fn find(name: &str) -> Option<&'static NamedGame> {
    GAMES.iter().find(|game| game.name == name)
}
