//! The match context a host holds for one game.
//!
//! `Match` owns the turn engine, the AI hand budget and the command
//! history. It runs the AI turn in table order:
//!
//! 1. the player's units attack
//! 2. queued AI units step forward
//! 3. the AI's units attack
//! 4. the scale is tallied
//! 5. if nobody has won, the AI stages new units for next turn
//!
//! An optional `MatchObserver` sees every step as it is resolved, in the
//! same order as the returned `TurnReport`.

use im::Vector;
use log::info;

use crate::cards::{AiDeck, CardId, CardRegistry, Unit};
use crate::core::error::Result;
use crate::core::{Command, CommandRecord, MatchConfig, Side};
use crate::engine::{
    Advance, AttackOutcome, MatchOutcome, MatchState, Spawn, TurnEngine, TurnReport,
};

/// Output collaborator hooks. All methods default to doing nothing.
pub trait MatchObserver {
    /// A lane's attack was resolved.
    fn on_attack(&mut self, _outcome: &AttackOutcome) {}

    /// A queued AI unit stepped into the active row.
    fn on_advance(&mut self, _advance: &Advance) {}

    /// The scale was tallied.
    fn on_tally(&mut self, _scale_value: i64, _outcome: MatchOutcome) {}

    /// The AI put a unit on the board.
    fn on_spawn(&mut self, _spawn: &Spawn) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// What applying a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResult {
    Begun(Vec<Spawn>),
    Placed(Unit),
    TurnEnded(TurnReport),
}

/// One match, from opening layout to resolution.
#[derive(Clone, Debug)]
pub struct Match<O: MatchObserver = NullObserver> {
    engine: TurnEngine,
    ai_hand: f64,
    history: Vector<CommandRecord>,
    sequence: u32,
    observer: O,
}

impl Match<NullObserver> {
    /// Create a match in the Setup phase.
    pub fn new(config: MatchConfig, registry: CardRegistry, deck: AiDeck) -> Result<Self> {
        Ok(Self {
            ai_hand: config.ai_max_hand,
            engine: TurnEngine::new(config, registry, deck)?,
            history: Vector::new(),
            sequence: 0,
            observer: NullObserver,
        })
    }

    /// Rebuild a match by applying a recorded command history.
    pub fn replay(
        config: MatchConfig,
        registry: CardRegistry,
        deck: AiDeck,
        log: &[CommandRecord],
    ) -> Result<Self> {
        let mut game = Self::new(config, registry, deck)?;
        for record in log {
            game.apply(record.command)?;
        }
        Ok(game)
    }
}

impl<O: MatchObserver> Match<O> {
    /// Attach an observer.
    pub fn with_observer<P: MatchObserver>(self, observer: P) -> Match<P> {
        Match {
            engine: self.engine,
            ai_hand: self.ai_hand,
            history: self.history,
            sequence: self.sequence,
            observer,
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        self.engine.state()
    }

    /// Remaining AI hand budget.
    #[must_use]
    pub fn ai_hand(&self) -> f64 {
        self.ai_hand
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Commands applied so far, in order.
    pub fn history(&self) -> impl Iterator<Item = &CommandRecord> {
        self.history.iter()
    }

    /// Spawn the AI opening layout and start the first player turn.
    pub fn begin(&mut self) -> Result<Vec<Spawn>> {
        let spawned = self.engine.spawn_opening()?;
        self.engine.begin()?;
        self.ai_hand = self.engine.config().ai_max_hand;
        for spawn in &spawned {
            self.observer.on_spawn(spawn);
        }
        info!("match begins with {} AI units on the board", spawned.len());
        self.record(Command::Begin);
        Ok(spawned)
    }

    /// Place a catalogue card for the player.
    pub fn place_card(&mut self, lane: usize, card: CardId) -> Result<Unit> {
        let unit = self.engine.unit_from_card(card, Side::Player)?;
        let placed = self.engine.place_card(lane, unit)?;
        self.record(Command::PlaceCard { lane, card });
        Ok(placed)
    }

    /// End the player's turn and resolve the AI turn.
    pub fn end_player_turn(&mut self) -> Result<TurnReport> {
        self.engine.end_player_turn()?;
        let turn = self.engine.state().turn_number;
        self.record(Command::EndTurn);

        let mut report = TurnReport::default();

        for outcome in self.engine.resolve_attack_phase(Side::Player)? {
            self.observer.on_attack(&outcome);
            report.player_attacks.push(outcome);
        }

        for advance in self.engine.advance_queue()? {
            self.observer.on_advance(&advance);
            report.advanced.push(advance);
        }

        for outcome in self.engine.resolve_attack_phase(Side::Ai)? {
            self.observer.on_attack(&outcome);
            report.ai_attacks.push(outcome);
        }

        report.outcome = self.engine.tally_and_check_win()?;
        report.scale_value = self.engine.state().scale_value;
        self.observer.on_tally(report.scale_value, report.outcome);

        if report.outcome == MatchOutcome::Ongoing {
            let rate = self.engine.config().ai_spawn_rate;
            let attempts = self.engine.config().max_queue_attempts;
            report.spawned = self.engine.schedule_ai_spawns(&mut self.ai_hand, rate, attempts)?;
            for spawn in &report.spawned {
                self.observer.on_spawn(spawn);
            }
        }

        info!(
            "turn {} resolved: scale {}, {} player hits, {} AI hits, {} spawns",
            turn,
            report.scale_value,
            report.player_attacks.len(),
            report.ai_attacks.len(),
            report.spawned.len()
        );
        Ok(report)
    }

    /// Apply a host command.
    pub fn apply(&mut self, command: Command) -> Result<CommandResult> {
        match command {
            Command::Begin => self.begin().map(CommandResult::Begun),
            Command::PlaceCard { lane, card } => {
                self.place_card(lane, card).map(CommandResult::Placed)
            }
            Command::EndTurn => self.end_player_turn().map(CommandResult::TurnEnded),
        }
    }

    fn record(&mut self, command: Command) {
        let turn = self.engine.state().turn_number;
        if self.history.last().map_or(false, |last| last.turn != turn) {
            self.sequence = 0;
        }
        self.history.push_back(CommandRecord::new(command, turn, self.sequence));
        self.sequence += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Row;
    use crate::cards::CardDefinition;
    use crate::core::EngineError;
    use crate::engine::Phase;

    fn registry() -> CardRegistry {
        CardRegistry::from_cards([
            CardDefinition::new(CardId::new(1), "Stoat", 1, 3),
            CardDefinition::new(CardId::new(2), "Wolf", 3, 2),
        ])
        .unwrap()
    }

    fn new_match(config: MatchConfig) -> Match {
        Match::new(config, registry(), AiDeck::new(vec![CardId::new(1)]).unwrap()).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        steps: Vec<String>,
    }

    impl MatchObserver for Recorder {
        fn on_attack(&mut self, outcome: &AttackOutcome) {
            self.steps.push(format!("attack {} lane {}", outcome.attacker(), outcome.lane()));
        }

        fn on_advance(&mut self, advance: &Advance) {
            self.steps.push(format!("advance lane {}", advance.lane));
        }

        fn on_tally(&mut self, scale_value: i64, _outcome: MatchOutcome) {
            self.steps.push(format!("tally {}", scale_value));
        }
    }

    #[test]
    fn test_begin_enters_player_turn() {
        let mut game = new_match(MatchConfig::default().with_starting_cards(1, 1));
        let spawned = game.begin().unwrap();
        assert_eq!(spawned.len(), 2);
        assert_eq!(game.state().phase, Phase::PlayerTurn);
        assert_eq!(
            game.begin(),
            Err(EngineError::InvalidPhase { expected: "Setup", actual: Phase::PlayerTurn })
        );
    }

    #[test]
    fn test_place_unknown_card() {
        let mut game = new_match(MatchConfig::default());
        game.begin().unwrap();
        assert_eq!(
            game.place_card(0, CardId::new(99)),
            Err(EngineError::UnknownCard(CardId::new(99)))
        );
        assert_eq!(game.history().count(), 1);
    }

    #[test]
    fn test_turn_order_reaches_observer() {
        let mut game = new_match(MatchConfig::default()).with_observer(Recorder::default());
        game.begin().unwrap();
        game.place_card(1, CardId::new(2)).unwrap();
        let report = game.end_player_turn().unwrap();

        assert_eq!(report.player_attacks.len(), 1);
        assert_eq!(report.scale_value, -3);
        assert_eq!(
            game.observer().steps,
            vec!["attack Player lane 1".to_string(), "tally -3".to_string()]
        );
        assert_eq!(game.state().phase, Phase::PlayerTurn);
        assert_eq!(game.state().turn_number, 2);
    }

    #[test]
    fn test_history_sequences_reset_per_turn() {
        let mut game = new_match(MatchConfig::default());
        game.apply(Command::Begin).unwrap();
        game.apply(Command::PlaceCard { lane: 0, card: CardId::new(1) }).unwrap();
        game.apply(Command::EndTurn).unwrap();
        game.apply(Command::PlaceCard { lane: 1, card: CardId::new(1) }).unwrap();

        let records: Vec<_> = game.history().map(|r| (r.turn, r.sequence)).collect();
        assert_eq!(records, vec![(1, 0), (1, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_spawns_follow_ongoing_tally() {
        let config = MatchConfig::default().with_ai_max_hand(2.0).with_ai_spawn_rate(1.0);
        let mut game = new_match(config);
        game.begin().unwrap();
        let report = game.end_player_turn().unwrap();

        assert_eq!(report.spawned.len(), 1);
        assert_eq!(game.ai_hand(), 1.0);
        assert_eq!(game.state().board.count(Row::AiQueue), 1);
    }
}
