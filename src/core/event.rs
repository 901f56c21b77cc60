//! Typed log events.
//!
//! The session log is append-only and exists for the humans at the table,
//! not for game logic. Events are typed here so tests can assert on
//! structure; `Display` renders the exact line shown in the log.

/// One entry in the session log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A poke resolved. `probability` is the chance in effect at draw time,
    /// not the escalated value.
    Poked {
        name: String,
        probability: u8,
        woke: bool,
    },
    /// The chance escalated after a surviving poke.
    ChanceNow { probability: u8 },
    /// A flavor line from the restless-bear pool.
    Restless { line: &'static str },
    /// The current player ended their turn.
    TurnEnded { name: String },
    /// The current player sang their lullaby.
    Lullaby { name: String, probability: u8 },
    /// The bear woke and the game is over.
    Eaten { name: String },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Poked {
                name,
                probability,
                woke,
            } => {
                let outcome = if *woke {
                    "the bear woke up!"
                } else {
                    "survived."
                };
                write!(f, "{} poked: {} Chance was {}%", name, outcome, probability)
            }
            GameEvent::ChanceNow { probability } => {
                write!(f, "Chance now {}%", probability)
            }
            GameEvent::Restless { line } => f.write_str(line),
            GameEvent::TurnEnded { name } => write!(f, "{} ended turn.", name),
            GameEvent::Lullaby { name, probability } => {
                write!(f, "{} used Lullaby: chance now {}%", name, probability)
            }
            GameEvent::Eaten { name } => write!(f, "{} was eaten! Game Over.", name),
        }
    }
}
