//! Multi-round session over a fixed roster.

use rustc_hash::FxHashSet;
use tracing::info;

use crate::cards::DeckBuilder;
use crate::core::{ConfigError, ExpeditionConfig, GameRng, PlayerId, PlayerMap, RoundError, MAX_PLAYERS};
use crate::players::{Choice, ComputerSource, DecisionSource, HumanSource, Player};
use crate::round::{Round, RoundObserver, RoundResult, RoundSnapshot};

/// One player's standing at the end of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub total: u32,
    /// Banked per round, oldest first.
    pub per_round: Vec<u32>,
}

/// Outcome of a full session.
#[derive(Clone, Debug)]
pub struct GameSummary {
    pub seed: u64,
    pub rounds: Vec<RoundResult>,
    /// Ranked by total, ties in roster order.
    pub standings: Vec<Standing>,
    /// Everyone sharing the top total.
    pub winners: Vec<PlayerId>,
}

/// A game session.
pub struct Game {
    config: ExpeditionConfig,
    deck: DeckBuilder,
    players: PlayerMap<Player>,
    sources: PlayerMap<Box<dyn DecisionSource>>,
    rounds: Vec<Round>,
    current_round: Option<usize>,
    rng: GameRng,
}

/// Builder for creating a `Game`.
#[derive(Default)]
pub struct GameBuilder {
    config: ExpeditionConfig,
    /// Overrides the config's card counts when set.
    deck: Option<DeckBuilder>,
    seats: Vec<(String, Box<dyn DecisionSource>)>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole rule configuration.
    pub fn config(mut self, config: ExpeditionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.config.rounds = rounds;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use a prebuilt deck builder instead of the config's card counts.
    pub fn deck(mut self, deck: DeckBuilder) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Seat a player with any decision source.
    pub fn seat(mut self, name: impl Into<String>, source: Box<dyn DecisionSource>) -> Self {
        self.seats.push((name.into(), source));
        self
    }

    /// Seat a human answering through `prompt`.
    pub fn human<F>(self, name: impl Into<String>, prompt: F) -> Self
    where
        F: FnMut(&RoundSnapshot, PlayerId) -> Choice + 'static,
    {
        self.seat(name, Box::new(HumanSource::new(prompt)))
    }

    /// Seat a computer using the default heuristic.
    pub fn computer(self, name: impl Into<String>) -> Self {
        self.seat(name, Box::new(ComputerSource::default()))
    }

    /// Validate and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        if self.seats.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.seats.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.seats.len()));
        }
        let mut names = FxHashSet::default();
        for (name, _) in &self.seats {
            if !names.insert(name.as_str()) {
                return Err(ConfigError::DuplicatePlayerName(name.clone()));
            }
        }
        self.config.validate()?;
        let deck = match self.deck {
            Some(deck) => {
                deck.validate()?;
                deck
            }
            None => self.config.deck_builder(),
        };

        let rounds = (1..=self.config.rounds)
            .map(|n| Round::new(n, deck.hazard_kinds()))
            .collect();
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let (players, sources): (Vec<_>, Vec<_>) = self
            .seats
            .into_iter()
            .map(|(name, source)| (Player::new(name, source.kind()), source))
            .unzip();

        Ok(Game {
            config: self.config,
            deck,
            players: PlayerMap::from_vec(players),
            sources: PlayerMap::from_vec(sources),
            rounds,
            current_round: None,
            rng,
        })
    }
}

impl Game {
    #[must_use]
    pub fn config(&self) -> &ExpeditionConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The round in progress, or the last one played.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.map(|i| &self.rounds[i])
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Rounds not yet played.
    #[must_use]
    pub fn rounds_remaining(&self) -> usize {
        let played = self.current_round.map_or(0, |i| i + 1);
        self.rounds.len() - played
    }

    /// Play the next round. Returns `None` once every round has been played.
    pub fn play_round(
        &mut self,
        observer: &mut dyn RoundObserver,
    ) -> Result<Option<RoundResult>, RoundError> {
        let next = self.current_round.map_or(0, |i| i + 1);
        if next >= self.rounds.len() {
            return Ok(None);
        }
        self.current_round = Some(next);

        let deck = self.deck.build(&mut self.rng);
        let round = &mut self.rounds[next];
        round.setup(&mut self.players, deck);
        round
            .start(&mut self.players, &mut self.sources, &mut self.rng, observer)
            .map(Some)
    }

    /// Play every remaining round and rank the roster.
    pub fn play(&mut self, observer: &mut dyn RoundObserver) -> Result<GameSummary, RoundError> {
        info!(seed = self.seed(), players = self.players.player_count(), rounds = self.rounds.len(), "game start");

        let mut results = Vec::with_capacity(self.rounds_remaining());
        while let Some(result) = self.play_round(observer)? {
            results.push(result);
        }

        let standings = self.standings();
        let top = standings.first().map_or(0, |s| s.total);
        let winners = standings
            .iter()
            .filter(|s| s.total == top)
            .map(|s| s.player)
            .collect();
        info!(?winners, top, "game over");

        Ok(GameSummary {
            seed: self.seed(),
            rounds: results,
            standings,
            winners,
        })
    }

    /// Current ranking by banked total; ties keep roster order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<_> = self
            .players
            .iter()
            .map(|(id, p)| Standing {
                player: id,
                name: p.name().to_string(),
                total: p.stored_total(),
                per_round: p.stored_history().to_vec(),
            })
            .collect();
        // stable sort keeps roster order among equals
        standings.sort_by(|a, b| b.total.cmp(&a.total));
        standings
    }
}
