//! Whole-session scenarios with scripted collaborators.

use tekhenu_bot::core::{
    BoardEdit, Die, Difficulty, EditError, EngineError, GameEvent, God, Material, Polarity,
    RoleOrder, SessionConfig, Side, TOTAL_BUILDINGS, TOTAL_PILLARS, TOTAL_STATUES,
};
use tekhenu_bot::schedule::{Collaborators, OpponentTurn, OpponentTurnProvider, PhaseScheduler, ROUNDS};

fn die(material: Material, value: u8) -> Die {
    Die::new(material, value).unwrap()
}

fn config(difficulty: Difficulty, seed: u64) -> SessionConfig {
    use Material::{Bread, Granite, Gray, Limestone, Papyrus};
    let dice = [
        (God::Horus, [(Granite, 5), (Limestone, 5), (Limestone, 3)]),
        (God::Ra, [(Gray, 1), (Granite, 2), (Papyrus, 3)]),
        (God::Hathor, [(Bread, 3), (Papyrus, 3), (Limestone, 5)]),
        (God::Bastet, [(Bread, 2), (Papyrus, 2), (Gray, 1)]),
        (God::Thoth, [(Limestone, 5), (Granite, 5), (Gray, 3)]),
        (God::Osiris, [(Gray, 3), (Gray, 6), (Granite, 5)]),
    ];
    let mut config = SessionConfig::new(RoleOrder::default(), God::Horus)
        .with_difficulty(difficulty)
        .with_seed(seed);
    for (god, faces) in dice {
        for (material, value) in faces {
            config = config.with_die(god, die(material, value));
        }
    }
    config
}

fn cycling_supply() -> impl FnMut(God) -> Die {
    let mut n = 0usize;
    move |_god| {
        n += 1;
        die(Material::RESOURCES[n % 4], u8::try_from(n % 6).unwrap() + 1)
    }
}

/// Take the first usable die, trying gods in `preference` order.
fn take_first_usable(turn: &mut OpponentTurn<'_>, preference: &[God]) -> Option<God> {
    let (god, polarity, die) = preference.iter().find_map(|&god| {
        turn.dice()
            .buckets(god)
            .and_then(|b| b.usable().next())
            .map(|(polarity, die)| (god, polarity, die))
    })?;
    turn.select_die(god, polarity, die).unwrap();
    Some(god)
}

/// Takes a die and nothing else.
struct Drafter {
    preference: Vec<God>,
}

impl Drafter {
    fn cycle() -> Self {
        Self { preference: God::CYCLE.to_vec() }
    }
}

impl OpponentTurnProvider for Drafter {
    fn play_turn(&mut self, _round: u8, turn: &mut OpponentTurn<'_>) {
        take_first_usable(turn, &self.preference);
    }
}

/// Builds a pillar every fourth round, always asking for the center first.
#[derive(Default)]
struct PillarBuilder {
    rejected: Vec<EditError>,
}

impl OpponentTurnProvider for PillarBuilder {
    fn play_turn(&mut self, round: u8, turn: &mut OpponentTurn<'_>) {
        take_first_usable(turn, &God::CYCLE);
        if round % 4 != 1 {
            return;
        }

        let center = std::iter::once((2, 2));
        let cells = (0..25).map(|cell| (cell / 5, cell % 5));
        for (row, col) in center.chain(cells) {
            match turn.apply_edit(BoardEdit::Pillar { row, col }) {
                Ok(()) => break,
                Err(err) => self.rejected.push(err),
            }
        }
    }
}

/// Names a die that is not on the board before taking a real one.
#[derive(Default)]
struct Clumsy {
    rejected: Vec<EditError>,
}

impl OpponentTurnProvider for Clumsy {
    fn play_turn(&mut self, _round: u8, turn: &mut OpponentTurn<'_>) {
        let missing = die(Material::Gray, 6);
        if let Err(err) = turn.select_die(God::Horus, Polarity::Pure, missing) {
            self.rejected.push(err);
        }
        take_first_usable(turn, &God::CYCLE);
        if let Err(err) = turn.select_die(God::Horus, Polarity::Pure, missing) {
            self.rejected.push(err);
        }
    }
}

/// Declares an edit but never takes a die.
struct EditsOnly;

impl OpponentTurnProvider for EditsOnly {
    fn play_turn(&mut self, _round: u8, turn: &mut OpponentTurn<'_>) {
        turn.apply_edit(BoardEdit::Pillar { row: 1, col: 1 }).unwrap();
    }
}

// =============================================================================
// Full sessions
// =============================================================================

#[test]
fn test_session_with_opponent_pillars() {
    let mut scheduler = PhaseScheduler::from_config(config(Difficulty::Medium, 11)).unwrap();
    let mut opponent = PillarBuilder::default();
    let (mut supply, mut balance) = (cycling_supply(), |_: u8| 5u32);
    let mut collaborators = Collaborators::new(&mut opponent, &mut supply, &mut balance);

    scheduler.run(&mut collaborators).unwrap();

    let board = scheduler.board();
    assert_eq!(board.pillars_built(Side::Opponent), 4);
    assert!(board.pillar(2, 2).is(Side::Bot));
    assert!(board.statues_built(Side::Bot) <= TOTAL_STATUES);
    assert!(board.buildings_built(Side::Bot) <= TOTAL_BUILDINGS);
    assert!(board.pillars_built(Side::Bot) <= TOTAL_PILLARS);

    let events = scheduler.drain_events();
    let edits = events
        .iter()
        .filter(|e| matches!(e, GameEvent::OpponentEdit { .. }))
        .count();
    assert_eq!(edits, 4);
    let rounds = events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundEnded { .. }))
        .count();
    assert_eq!(rounds, usize::from(ROUNDS));

    assert!(opponent.rejected.len() >= 4);
    assert!(opponent
        .rejected
        .iter()
        .all(|err| matches!(err, EditError::SlotOccupied { .. })));
}

#[test]
fn test_same_seed_replays_session() {
    let play = || {
        let mut scheduler = PhaseScheduler::from_config(config(Difficulty::Easy, 42)).unwrap();
        let mut opponent = Drafter::cycle();
        let (mut supply, mut balance) = (cycling_supply(), |r: u8| u32::from(r % 3));
        let mut collaborators = Collaborators::new(&mut opponent, &mut supply, &mut balance);
        let vps = scheduler.run(&mut collaborators).unwrap();
        (vps, scheduler.drain_events())
    };

    let (vps, events) = play();
    let (again_vps, again_events) = play();
    assert_eq!(vps, again_vps);
    assert_eq!(events, again_events);
}

#[test]
fn test_low_balance_gives_opponent_first_turn() {
    let mut scheduler = PhaseScheduler::from_config(config(Difficulty::Easy, 7)).unwrap();
    let (mut opponent, mut supply, mut balance) = (Drafter::cycle(), cycling_supply(), |_: u8| 0u32);
    let mut collaborators = Collaborators::new(&mut opponent, &mut supply, &mut balance);

    for _ in 0..4 {
        scheduler.play_round(&mut collaborators).unwrap();
    }
    assert_eq!(scheduler.player_order(), [Side::Opponent, Side::Bot]);
    let events = scheduler.drain_events();
    assert!(!events
        .iter()
        .skip_while(|e| !matches!(e, GameEvent::TurnOrder { .. }))
        .any(|e| matches!(e, GameEvent::Destiny { .. })));

    scheduler.play_round(&mut collaborators).unwrap();
    let first_taker = scheduler.drain_events().into_iter().find_map(|e| match e {
        GameEvent::DieTaken { side, .. } => Some(side),
        _ => None,
    });
    assert_eq!(first_taker, Some(Side::Opponent));

    scheduler.run(&mut collaborators).unwrap();
    assert!(scheduler
        .drain_events()
        .iter()
        .any(|e| matches!(e, GameEvent::EndgameScored { turn_order_vps: 0, .. })));
}

// =============================================================================
// Opponent turns
// =============================================================================

#[test]
fn test_opponent_pays_bot_setup_statue() {
    let mut scheduler = PhaseScheduler::from_config(config(Difficulty::Easy, 5)).unwrap();
    let mut opponent = Drafter { preference: vec![God::Horus] };
    let (mut supply, mut balance) = (cycling_supply(), |_: u8| 5u32);
    let mut collaborators = Collaborators::new(&mut opponent, &mut supply, &mut balance);
    scheduler.drain_events();

    scheduler.play_round(&mut collaborators).unwrap();

    let events = scheduler.drain_events();
    let taken = events
        .iter()
        .position(|e| matches!(e, GameEvent::DieTaken { side: Side::Opponent, god: God::Horus, .. }))
        .unwrap();
    assert_eq!(
        events[taken + 1],
        GameEvent::StatueBonus { owner: Side::Bot, god: God::Horus, scribes: 1, vps: 0 }
    );
}

#[test]
fn test_rejected_die_leaves_turn_open() {
    let mut scheduler = PhaseScheduler::from_config(config(Difficulty::Easy, 9)).unwrap();
    let mut opponent = Clumsy::default();
    let (mut supply, mut balance) = (cycling_supply(), |_: u8| 5u32);
    let mut collaborators = Collaborators::new(&mut opponent, &mut supply, &mut balance);

    scheduler.play_round(&mut collaborators).unwrap();
    assert_eq!(scheduler.dice().len(), 16);

    assert_eq!(opponent.rejected.len(), 2);
    assert!(matches!(opponent.rejected[0], EditError::DieNotAvailable { .. }));
    assert_eq!(opponent.rejected[1], EditError::DieAlreadySelected);
}

#[test]
fn test_skipped_die_stops_round() {
    let mut scheduler = PhaseScheduler::from_config(config(Difficulty::Easy, 1)).unwrap();
    let (mut opponent, mut supply, mut balance) = (EditsOnly, cycling_supply(), |_: u8| 5u32);
    let mut collaborators = Collaborators::new(&mut opponent, &mut supply, &mut balance);

    assert_eq!(
        scheduler.play_round(&mut collaborators),
        Err(EngineError::OpponentSkippedDie { round: 1 })
    );
    assert_eq!(scheduler.round(), 0);
    // Accepted edits stand.
    assert!(scheduler.board().pillar(1, 1).is(Side::Opponent));
}
