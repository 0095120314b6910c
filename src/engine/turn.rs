//! The turn engine: the only code that mutates a `MatchState`.
//!
//! Phase machine:
//!
//! ```text
//! Setup -> PlayerTurn -> AiTurn -> PlayerTurn | Resolved
//! ```
//!
//! Every operation is synchronous and all-or-nothing. A host calls them one
//! at a time, animates the returned outcomes, then calls the next one.
//!
//! ## Example
//!
//! ```
//! use tooth_scale::cards::{AiDeck, CardDefinition, CardId, CardRegistry, Unit};
//! use tooth_scale::core::{MatchConfig, Side};
//! use tooth_scale::engine::{AttackOutcome, TurnEngine};
//!
//! let stoat = CardDefinition::new(CardId::new(1), "Stoat", 1, 3);
//! let registry = CardRegistry::from_cards([stoat]).unwrap();
//! let deck = AiDeck::new(vec![CardId::new(1)]).unwrap();
//! let mut engine = TurnEngine::new(MatchConfig::default(), registry, deck).unwrap();
//!
//! engine.begin().unwrap();
//! engine.place_card(0, Unit::new(CardId::new(1), "Stoat", 1, 3, Side::Player)).unwrap();
//! engine.end_player_turn().unwrap();
//!
//! let outcomes = engine.resolve_attack_phase(Side::Player).unwrap();
//! assert_eq!(
//!     outcomes[0],
//!     AttackOutcome::DirectDamage { attacker: Side::Player, lane: 0, amount: 1 }
//! );
//! ```

use log::{debug, info};

use super::outcome::{Advance, AttackOutcome, AttackOutcomes, MatchOutcome};
use super::state::{MatchState, Phase};
use crate::board::Row;
use crate::cards::{AiDeck, CardId, CardRegistry, Unit};
use crate::core::error::{EngineError, Result};
use crate::core::{GameRng, GameRngState, MatchConfig, Side};

/// What one attacker did to the slot across from it.
enum Hit {
    Direct,
    Absorbed,
    Wounded(Unit),
    Lethal,
}

/// Deterministic state-transition engine for one match.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    pub(crate) config: MatchConfig,
    pub(crate) registry: CardRegistry,
    pub(crate) deck: AiDeck,
    pub(crate) state: MatchState,
    pub(crate) rng: GameRng,
}

impl TurnEngine {
    /// Create an engine in the Setup phase.
    ///
    /// Every card in the AI deck must be registered.
    pub fn new(config: MatchConfig, registry: CardRegistry, deck: AiDeck) -> Result<Self> {
        config.validate()?;
        for &card in deck.cards() {
            registry.lookup(card)?;
        }

        let state = MatchState::new(config.lane_count, config.win_threshold);
        let rng = GameRng::new(config.seed);

        Ok(Self {
            config,
            registry,
            deck,
            state,
            rng,
        })
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the match state for a renderer.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Configuration the match runs with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Card catalogue.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Current RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Build a fresh unit for `owner` from a catalogue card.
    pub fn unit_from_card(&self, card: CardId, owner: Side) -> Result<Unit> {
        Ok(Unit::from_definition(self.registry.lookup(card)?, owner))
    }

    /// Lanes the player can still place a card in.
    #[must_use]
    pub fn open_player_lanes(&self) -> Vec<usize> {
        self.state.board.empty_lanes(Row::Player)
    }

    // === Phase control ===

    /// `MatchEnded` once resolved, `InvalidPhase` unless in one of `allowed`.
    pub(crate) fn require_phase(&self, allowed: &[Phase], expected: &'static str) -> Result<()> {
        let phase = self.state.phase;
        if phase == Phase::Resolved {
            return Err(EngineError::MatchEnded);
        }
        if !allowed.contains(&phase) {
            return Err(EngineError::InvalidPhase {
                expected,
                actual: phase,
            });
        }
        Ok(())
    }

    fn set_phase(&mut self, phase: Phase) {
        info!("phase {:?} -> {:?} (turn {})", self.state.phase, phase, self.state.turn_number);
        self.state.phase = phase;
    }

    /// Start the first turn.
    pub fn begin(&mut self) -> Result<()> {
        self.require_phase(&[Phase::Setup], "Setup")?;
        self.set_phase(Phase::PlayerTurn);
        Ok(())
    }

    /// The player is done placing cards.
    pub fn end_player_turn(&mut self) -> Result<()> {
        self.require_phase(&[Phase::PlayerTurn], "PlayerTurn")?;
        self.set_phase(Phase::AiTurn);
        Ok(())
    }

    // === Placement ===

    /// Put a player unit into the player slot of `lane`.
    ///
    /// Allowed during the player's turn and, for tutorial layouts, in Setup.
    /// Returns the placed unit with its engine-assigned id.
    pub fn place_card(&mut self, lane: usize, mut unit: Unit) -> Result<Unit> {
        self.require_phase(&[Phase::PlayerTurn, Phase::Setup], "PlayerTurn or Setup")?;
        self.state.board.check_lane(lane)?;
        if unit.owner != Side::Player {
            return Err(EngineError::InvalidUnit(format!("{} is not a player unit", unit.name)));
        }
        if !unit.is_alive() {
            return Err(EngineError::InvalidUnit(format!("{} has no health", unit.name)));
        }
        if !self.state.board.is_empty(lane, Row::Player)? {
            return Err(EngineError::SlotOccupied { lane, row: Row::Player });
        }

        unit.id = self.state.alloc_unit();
        self.state.board.occupy(lane, Row::Player, unit.clone())?;
        debug!("placed {} {} in lane {}", unit.id, unit.name, lane);
        Ok(unit)
    }

    /// Put an AI unit straight into an AI row during Setup.
    pub fn stage_ai_unit(&mut self, lane: usize, row: Row, mut unit: Unit) -> Result<Unit> {
        self.require_phase(&[Phase::Setup], "Setup")?;
        self.state.board.check_lane(lane)?;
        if row == Row::Player || unit.owner != Side::Ai {
            return Err(EngineError::InvalidUnit(format!(
                "{} cannot be staged in the {:?} row",
                unit.name, row
            )));
        }
        if !unit.is_alive() {
            return Err(EngineError::InvalidUnit(format!("{} has no health", unit.name)));
        }
        if !self.state.board.is_empty(lane, row)? {
            return Err(EngineError::SlotOccupied { lane, row });
        }

        unit.id = self.state.alloc_unit();
        self.state.board.occupy(lane, row, unit.clone())?;
        Ok(unit)
    }

    // === Combat ===

    /// Every active unit of `attacker` strikes the slot across from it.
    ///
    /// Lanes resolve in ascending order and outcomes come back in that
    /// order. A zero-attack unit facing a defender exchanges blows but
    /// produces no outcome.
    pub fn resolve_attack_phase(&mut self, attacker: Side) -> Result<AttackOutcomes> {
        self.require_phase(&[Phase::AiTurn], "AiTurn")?;

        let attack_row = Row::active(attacker);
        let defend_row = Row::active(attacker.opponent());
        let mut outcomes = AttackOutcomes::new();

        for lane in 0..self.state.board.lane_count() {
            let Some(attack) = self.state.board.get(lane, attack_row)?.map(|u| u.attack) else {
                continue;
            };

            let hit = match self.state.board.unit_mut(lane, defend_row)? {
                Some(defender) => {
                    defender.clashes += 1;
                    if attack == 0 {
                        Hit::Absorbed
                    } else if defender.receive_attack(attack) {
                        Hit::Lethal
                    } else {
                        Hit::Wounded(defender.clone())
                    }
                }
                None => Hit::Direct,
            };

            if !matches!(hit, Hit::Direct) {
                if let Some(unit) = self.state.board.unit_mut(lane, attack_row)? {
                    unit.clashes += 1;
                }
            }

            let outcome = match hit {
                Hit::Absorbed => continue,
                Hit::Direct => {
                    self.state.side_damage[attacker] += i64::from(attack);
                    AttackOutcome::DirectDamage {
                        attacker,
                        lane,
                        amount: attack,
                    }
                }
                Hit::Wounded(unit) => AttackOutcome::UnitDamaged {
                    attacker,
                    lane,
                    health: unit.health,
                    unit,
                },
                Hit::Lethal => match self.state.board.take(lane, defend_row)? {
                    Some(unit) => AttackOutcome::UnitKilled { attacker, lane, unit },
                    None => continue,
                },
            };

            debug!("{} attack: {:?}", attacker, outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Move queued AI units into empty active slots, lane by lane.
    pub fn advance_queue(&mut self) -> Result<Vec<Advance>> {
        self.require_phase(&[Phase::AiTurn], "AiTurn")?;

        let mut advanced = Vec::new();
        for lane in 0..self.state.board.lane_count() {
            if !self.state.board.is_empty(lane, Row::Ai)? {
                continue;
            }
            if let Some(unit) = self.state.board.take(lane, Row::AiQueue)? {
                self.state.board.occupy(lane, Row::Ai, unit.clone())?;
                debug!("{} {} advanced in lane {}", unit.id, unit.name, lane);
                advanced.push(Advance { lane, unit });
            }
        }

        Ok(advanced)
    }

    /// Recompute the scale and check for a winner.
    ///
    /// The player's lead is checked before the AI's. A win resolves the
    /// match; otherwise control returns to the player for the next turn.
    pub fn tally_and_check_win(&mut self) -> Result<MatchOutcome> {
        self.require_phase(&[Phase::AiTurn], "AiTurn")?;

        self.state.scale_value = self.state.compute_scale();
        let player = self.state.side_damage[Side::Player];
        let ai = self.state.side_damage[Side::Ai];
        let threshold = self.state.win_threshold;

        let outcome = if player - ai >= threshold {
            MatchOutcome::Won(Side::Player)
        } else if ai - player >= threshold {
            MatchOutcome::Won(Side::Ai)
        } else {
            MatchOutcome::Ongoing
        };

        match outcome {
            MatchOutcome::Won(side) => {
                info!(
                    "{} wins {} to {} on turn {}",
                    side,
                    player.max(ai),
                    player.min(ai),
                    self.state.turn_number
                );
                self.state.outcome = outcome;
                self.set_phase(Phase::Resolved);
            }
            MatchOutcome::Ongoing => {
                self.set_phase(Phase::PlayerTurn);
                self.state.turn_number += 1;
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn engine() -> TurnEngine {
        let registry = CardRegistry::from_cards([
            CardDefinition::new(CardId::new(1), "Stoat", 1, 3),
            CardDefinition::new(CardId::new(2), "Wolf", 3, 2),
        ])
        .unwrap();
        let deck = AiDeck::new(vec![CardId::new(1), CardId::new(2)]).unwrap();
        TurnEngine::new(MatchConfig::default(), registry, deck).unwrap()
    }

    fn player(attack: u32, health: u32) -> Unit {
        Unit::new(CardId::new(1), "P", attack, health, Side::Player)
    }

    fn ai(attack: u32, health: u32) -> Unit {
        Unit::new(CardId::new(2), "A", attack, health, Side::Ai)
    }

    #[test]
    fn test_unknown_deck_card_rejected() {
        let registry = CardRegistry::new();
        let deck = AiDeck::new(vec![CardId::new(7)]).unwrap();
        let err = TurnEngine::new(MatchConfig::default(), registry, deck).unwrap_err();
        assert_eq!(err, EngineError::UnknownCard(CardId::new(7)));
    }

    #[test]
    fn test_phase_flow() {
        let mut engine = engine();
        assert_eq!(engine.state().phase, Phase::Setup);
        assert!(matches!(engine.end_player_turn(), Err(EngineError::InvalidPhase { .. })));

        engine.begin().unwrap();
        assert_eq!(engine.state().phase, Phase::PlayerTurn);
        assert!(engine.begin().is_err());

        engine.end_player_turn().unwrap();
        assert_eq!(engine.state().phase, Phase::AiTurn);

        assert_eq!(engine.tally_and_check_win().unwrap(), MatchOutcome::Ongoing);
        assert_eq!(engine.state().phase, Phase::PlayerTurn);
        assert_eq!(engine.state().turn_number, 2);
    }

    #[test]
    fn test_place_card_assigns_ids() {
        let mut engine = engine();
        let a = engine.place_card(0, player(1, 1)).unwrap();
        let b = engine.place_card(1, player(1, 1)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(engine.state().board.get(1, Row::Player).unwrap(), Some(&b));
    }

    #[test]
    fn test_place_card_validation() {
        let mut engine = engine();
        engine.begin().unwrap();

        assert_eq!(
            engine.place_card(4, player(1, 1)),
            Err(EngineError::InvalidLaneIndex { lane: 4, lane_count: 4 })
        );
        assert!(matches!(engine.place_card(0, ai(1, 1)), Err(EngineError::InvalidUnit(_))));
        assert!(matches!(engine.place_card(0, player(1, 0)), Err(EngineError::InvalidUnit(_))));

        engine.end_player_turn().unwrap();
        assert!(matches!(
            engine.place_card(0, player(1, 1)),
            Err(EngineError::InvalidPhase { actual: Phase::AiTurn, .. })
        ));
    }

    #[test]
    fn test_stage_ai_unit_rules() {
        let mut engine = engine();
        assert!(engine.stage_ai_unit(0, Row::Player, ai(1, 1)).is_err());
        assert!(engine.stage_ai_unit(0, Row::Ai, player(1, 1)).is_err());
        engine.stage_ai_unit(0, Row::AiQueue, ai(1, 1)).unwrap();
        assert_eq!(
            engine.stage_ai_unit(0, Row::AiQueue, ai(1, 1)),
            Err(EngineError::SlotOccupied { lane: 0, row: Row::AiQueue })
        );

        engine.begin().unwrap();
        assert!(matches!(
            engine.stage_ai_unit(1, Row::Ai, ai(1, 1)),
            Err(EngineError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn test_zero_attack_exchanges_blows_silently() {
        let mut engine = engine();
        engine.place_card(0, player(0, 2)).unwrap();
        engine.stage_ai_unit(0, Row::Ai, ai(0, 2)).unwrap();
        engine.begin().unwrap();
        engine.end_player_turn().unwrap();

        let outcomes = engine.resolve_attack_phase(Side::Player).unwrap();
        assert!(outcomes.is_empty());

        let board = &engine.state().board;
        assert_eq!(board.get(0, Row::Ai).unwrap().map(|u| (u.health, u.clashes)), Some((2, 1)));
        assert_eq!(board.get(0, Row::Player).unwrap().map(|u| u.clashes), Some(1));
    }

    #[test]
    fn test_zero_attack_direct_hit_reports_zero() {
        let mut engine = engine();
        engine.place_card(2, player(0, 2)).unwrap();
        engine.begin().unwrap();
        engine.end_player_turn().unwrap();

        let outcomes = engine.resolve_attack_phase(Side::Player).unwrap();
        assert_eq!(
            outcomes.as_slice(),
            &[AttackOutcome::DirectDamage { attacker: Side::Player, lane: 2, amount: 0 }]
        );
        assert_eq!(engine.state().side_damage[Side::Player], 0);
    }

    #[test]
    fn test_advance_queue_respects_occupied_slots() {
        let mut engine = engine();
        engine.stage_ai_unit(0, Row::AiQueue, ai(1, 1)).unwrap();
        engine.stage_ai_unit(1, Row::Ai, ai(1, 1)).unwrap();
        engine.stage_ai_unit(1, Row::AiQueue, ai(1, 1)).unwrap();
        engine.begin().unwrap();
        engine.end_player_turn().unwrap();

        let advanced = engine.advance_queue().unwrap();
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].lane, 0);

        let board = &engine.state().board;
        assert!(board.is_empty(0, Row::AiQueue).unwrap());
        assert!(!board.is_empty(0, Row::Ai).unwrap());
        assert!(!board.is_empty(1, Row::AiQueue).unwrap());
    }

    #[test]
    fn test_player_lead_wins() {
        let mut engine = engine();
        engine.place_card(0, player(5, 1)).unwrap();
        engine.begin().unwrap();
        engine.end_player_turn().unwrap();
        engine.resolve_attack_phase(Side::Player).unwrap();

        assert_eq!(engine.tally_and_check_win().unwrap(), MatchOutcome::Won(Side::Player));
        assert_eq!(engine.state().scale_value, -5);
        assert_eq!(engine.state().outcome, MatchOutcome::Won(Side::Player));
        assert_eq!(engine.begin(), Err(EngineError::MatchEnded));
    }
}
