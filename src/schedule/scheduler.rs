//! Round-by-round session driver.
//!
//! ## Round structure
//!
//! 1. Both sides take a turn, in turn order.
//! 2. Even rounds: the sun advances one god.
//! 3. Every fourth round, the balance phase: turn order is decided, the
//!    action pyramid is reshuffled and a new pattern drawn.
//! 4. Every eighth round, the scoring phase.
//! 5. Round 16 adds endgame scoring and ends the session.
//! 6. Other even rounds: two dice on each shaded god, then polarity is
//!    resolved again.
//!
//! The scheduler owns the board and the dice pool for the whole session;
//! heuristics and collaborators borrow them for one call at a time.

use tracing::{debug, info, info_span};

use super::collaborators::{Collaborators, OpponentTurn};
use crate::actions::{perform_role_action, settle_statue_bonus, ActionPyramid, ActionSelector};
use crate::core::{
    BoardState, ConfigError, DestinyCard, DicePool, Difficulty, EngineError, GameEvent, GameRng,
    God, Material, RandomSource, RoleOrder, SessionConfig, Side,
};
use crate::lighting;
use crate::placement::{decide_resource_building, decide_statue, setup_pillar, Placement};
use crate::scoring::ScoringEngine;

/// Rounds in a session.
pub const ROUNDS: u8 = 16;
/// Rounds between sun moves.
pub const SUN_INTERVAL: u8 = 2;
/// Rounds between balance phases.
pub const BALANCE_INTERVAL: u8 = 4;
/// Rounds between scoring phases.
pub const SCORING_INTERVAL: u8 = 8;
/// Dice added to each shaded god when the sun moves.
pub const DICE_PER_SHADED_GOD: usize = 2;

/// Opponent balance at or above which the bot takes first turn order.
///
/// Starts at 3 and drops by one each balance phase, never below 1.
#[must_use]
pub fn balance_threshold(round: u8) -> u32 {
    u32::from(4u8.saturating_sub(round / BALANCE_INTERVAL)).max(1)
}

/// Runs a session for the bot.
pub struct PhaseScheduler<R: RandomSource = GameRng> {
    role_order: RoleOrder,
    board: BoardState,
    pool: DicePool,
    first_sunny: God,
    pyramid: ActionPyramid,
    player_order: [Side; 2],
    /// Last completed round; 0 before the first.
    round: u8,
    events: Vec<GameEvent>,
    rng: R,
}

impl PhaseScheduler<GameRng> {
    /// Create a session seeded from the configuration.
    pub fn from_config(config: SessionConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::new(config, rng)
    }
}

impl<R: RandomSource> PhaseScheduler<R> {
    /// Create a session and run the bot's setup.
    pub fn new(config: SessionConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut pool = DicePool::new();
        for god in God::CYCLE {
            for &die in config.starting_dice.get(&god).into_iter().flatten() {
                pool.add(god, die);
            }
        }
        lighting::refresh(&mut pool, config.first_sunny);

        let mut board = BoardState::new();
        board.resources[Side::Bot] = config.starting_resources;

        let mut scheduler = Self {
            role_order: config.role_order,
            board,
            pool,
            first_sunny: config.first_sunny,
            pyramid: ActionPyramid::new(&mut rng),
            player_order: [Side::Bot, Side::Opponent],
            round: 0,
            events: Vec::new(),
            rng,
        };
        scheduler.setup(config.difficulty);
        Ok(scheduler)
    }

    fn setup(&mut self, difficulty: Difficulty) {
        let _span = info_span!("setup", ?difficulty).entered();

        let statue = decide_statue(&self.board, &self.role_order, 1, Side::Bot, &mut self.rng);
        self.record_placement(statue);

        if difficulty == Difficulty::Medium {
            for material in [Material::Bread, Material::Granite] {
                let building = decide_resource_building(&self.board, 5, material, Side::Bot);
                self.record_placement(building);
            }
            self.record_placement(setup_pillar());
        }

        self.draw_destiny();
        info!(pattern = ?self.pyramid.pattern(), "action pyramid ready");
        self.events.push(GameEvent::PyramidRebuilt {
            tiles: self.pyramid.tiles().to_vec(),
            pattern: self.pyramid.pattern(),
        });
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &DicePool {
        &self.pool
    }

    #[must_use]
    pub fn role_order(&self) -> &RoleOrder {
        &self.role_order
    }

    /// First of the two sunny gods.
    #[must_use]
    pub fn first_sunny(&self) -> God {
        self.first_sunny
    }

    #[must_use]
    pub fn pyramid(&self) -> &ActionPyramid {
        &self.pyramid
    }

    /// Turn order, first mover first.
    #[must_use]
    pub fn player_order(&self) -> [Side; 2] {
        self.player_order
    }

    /// Last completed round; 0 before the first.
    #[must_use]
    pub fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.round >= ROUNDS
    }

    /// Bot victory points so far.
    #[must_use]
    pub fn vps(&self) -> u32 {
        self.board.resources[Side::Bot].vps
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Driving ===

    /// Play rounds until the session ends; returns the final bot score.
    pub fn run(&mut self, collaborators: &mut Collaborators<'_>) -> Result<u32, EngineError> {
        while !self.is_finished() {
            self.play_round(collaborators)?;
        }
        Ok(self.vps())
    }

    /// Play the next round, including its end-of-round phases.
    pub fn play_round(&mut self, collaborators: &mut Collaborators<'_>) -> Result<(), EngineError> {
        if self.is_finished() {
            return Err(EngineError::SessionOver);
        }
        let round = self.round + 1;
        let _span = info_span!("round", round).entered();

        for side in self.player_order {
            match side {
                Side::Bot => self.bot_turn(round)?,
                Side::Opponent => self.opponent_turn(round, collaborators)?,
            }
        }

        if round % SUN_INTERVAL == 0 {
            self.end_even_round(round, collaborators);
        }

        self.round = round;
        let vps = self.vps();
        info!(vps, "round over");
        self.events.push(GameEvent::RoundEnded { round, vps });
        if self.is_finished() {
            info!(vps, "session finished");
            self.events.push(GameEvent::SessionFinished { vps });
        }
        Ok(())
    }

    /// The bot's turn: tile, die, statue bonus, god action.
    pub fn bot_turn(&mut self, round: u8) -> Result<(), EngineError> {
        let tile = self.pyramid.tile_for_round(round);
        let choice = ActionSelector::select(
            tile,
            &self.pool,
            &self.board,
            &self.role_order,
            Side::Bot,
            &mut self.rng,
        )?;
        ActionSelector::consume(&mut self.pool, choice);
        info!(%tile, god = %choice.god, die = %choice.die, "bot takes die");
        self.events.push(GameEvent::ActionChosen { tile, god: choice.god });
        self.events.push(GameEvent::DieTaken {
            side: Side::Bot,
            god: choice.god,
            polarity: choice.polarity,
            die: choice.die,
        });

        self.events
            .extend(settle_statue_bonus(&mut self.board, &self.role_order, choice.god));
        let event =
            perform_role_action(&mut self.board, &self.role_order, choice, Side::Bot, &mut self.rng);
        self.events.push(event);
        Ok(())
    }

    fn opponent_turn(
        &mut self,
        round: u8,
        collaborators: &mut Collaborators<'_>,
    ) -> Result<(), EngineError> {
        let mut turn =
            OpponentTurn::new(&mut self.board, &mut self.pool, &self.role_order, &mut self.events);
        collaborators.opponent.play_turn(round, &mut turn);
        if turn.taken().is_none() {
            return Err(EngineError::OpponentSkippedDie { round });
        }
        Ok(())
    }

    fn end_even_round(&mut self, round: u8, collaborators: &mut Collaborators<'_>) {
        self.first_sunny = self.first_sunny.offset(1);
        info!(first_sunny = %self.first_sunny, "sun advances");
        self.events.push(GameEvent::SunAdvanced { first_sunny: self.first_sunny });

        if round % BALANCE_INTERVAL == 0 {
            let balance = collaborators.balance.opponent_balance(round);
            self.balance_phase(round, balance);
        }

        if round % SCORING_INTERVAL == 0 {
            let _span = info_span!("scoring").entered();
            let events = ScoringEngine::score_phase(&mut self.board, Side::Bot);
            self.events.extend(events);

            if round == ROUNDS {
                let first = self.player_order[0] == Side::Bot;
                let event = ScoringEngine::score_endgame(&mut self.board, Side::Bot, first);
                self.events.push(event);
                return;
            }
        }

        for god in lighting::shaded_gods(self.first_sunny) {
            for _ in 0..DICE_PER_SHADED_GOD {
                let die = collaborators.dice.next_die(god);
                debug!(%god, %die, "die added");
                self.pool.add(god, die);
                self.events.push(GameEvent::DiceAdded { god, die });
            }
        }
        lighting::refresh(&mut self.pool, self.first_sunny);
    }

    /// Decide turn order from the opponent's balance and rebuild the pyramid.
    pub fn balance_phase(&mut self, round: u8, opponent_balance: u32) {
        let threshold = balance_threshold(round);
        let first = if opponent_balance < threshold {
            Side::Opponent
        } else {
            Side::Bot
        };
        self.player_order = [first, first.other()];
        info!(%first, opponent_balance, threshold, "turn order");
        self.events.push(GameEvent::TurnOrder {
            first,
            opponent_balance,
            threshold,
        });
        if first == Side::Bot {
            self.draw_destiny();
        }

        self.pyramid.rebuild(&mut self.rng);
        info!(pattern = ?self.pyramid.pattern(), "action pyramid rebuilt");
        self.events.push(GameEvent::PyramidRebuilt {
            tiles: self.pyramid.tiles().to_vec(),
            pattern: self.pyramid.pattern(),
        });
    }

    fn draw_destiny(&mut self) {
        let card = [DestinyCard::Gold, DestinyCard::Scribe][self.rng.index(2)];
        info!(?card, "bot destiny card");
        self.events.push(GameEvent::Destiny { side: Side::Bot, card });
    }

    fn record_placement(&mut self, placement: Placement) {
        let event = placement.apply(&mut self.board, Side::Bot);
        self.events.push(event);
    }
}

impl<R: RandomSource> std::fmt::Debug for PhaseScheduler<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseScheduler")
            .field("round", &self.round)
            .field("first_sunny", &self.first_sunny)
            .field("player_order", &self.player_order)
            .field("vps", &self.vps())
            .finish_non_exhaustive()
    }
}
