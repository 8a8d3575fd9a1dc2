//! Computer risk heuristic tests against real round snapshots.

use gem_expedition::{
    AlwaysContinue, Assessment, Card, Choice, ComputerSource, DecisionSource, GameRng, HazardKind,
    NoopObserver, Player, PlayerId, PlayerKind, PlayerMap, RiskHeuristic, RiskInputs, Round, RoundEnd,
    RoundSnapshot,
};

fn roster(n: usize) -> PlayerMap<Player> {
    PlayerMap::new(n, |p| Player::new(format!("Computer {}", p.0 + 1), PlayerKind::Computer))
}

fn computers(n: usize) -> PlayerMap<Box<dyn DecisionSource>> {
    PlayerMap::new(n, |_| Box::new(ComputerSource::default()) as Box<dyn DecisionSource>)
}

/// Reveal the whole deck with everyone exploring and return the snapshot
/// the next choice phase would see.
fn walk(number: u32, players: &mut PlayerMap<Player>, deck: Vec<Card>) -> RoundSnapshot {
    let n = players.player_count();
    let mut bold = PlayerMap::new(n, |_| Box::new(AlwaysContinue) as Box<dyn DecisionSource>);
    let mut rng = GameRng::new(0);
    let mut round = Round::new(number, &HazardKind::standard_set());
    round.setup(players, deck);

    while !round.stacked_cards().is_empty() {
        round.choice_phase(players, &mut bold, &mut rng).unwrap();
        assert_eq!(round.settlement_phase(players).unwrap(), None);
        assert_eq!(round.reveal_phase(players).unwrap(), None);
    }
    round.snapshot(players)
}

fn decisions(snapshot: &RoundSnapshot, me: PlayerId, seeds: std::ops::Range<u64>) -> Vec<Choice> {
    let mut source = ComputerSource::default();
    seeds
        .map(|seed| source.decide(snapshot, me, &mut GameRng::new(seed)))
        .collect()
}

// =============================================================================
// Forced Retreat
// =============================================================================

/// A hazard as the first card leaves nothing to gain.
#[test]
fn test_nothing_to_gain_always_retreats() {
    let mut players = roster(2);
    let snapshot = walk(1, &mut players, vec![Card::hazard("snake")]);

    assert_eq!(
        RiskHeuristic::default().assess(&snapshot, PlayerId::new(0)),
        Assessment::NothingToGain
    );
    assert!(decisions(&snapshot, PlayerId::new(0), 0..256)
        .iter()
        .all(|&c| c == Choice::Retreat));
}

/// With nothing revealed a computer always sets out.
#[test]
fn test_computer_sets_out_at_departure() {
    let mut players = roster(3);
    let snapshot = walk(2, &mut players, Vec::new());
    assert!(snapshot.opened_cards.is_empty());

    for seat in PlayerId::all(3) {
        assert!(decisions(&snapshot, seat, 0..128)
            .iter()
            .all(|&c| c == Choice::Continue));
    }
}

/// Two computers facing a lone hazard both go home empty-handed.
#[test]
fn test_computers_leave_after_opening_hazard() {
    for seed in 0..64 {
        let mut players = roster(2);
        let mut round = Round::new(1, &HazardKind::standard_set());
        round.setup(&mut players, vec![Card::hazard("snake"), Card::treasure(5)]);

        let result = round
            .start(&mut players, &mut computers(2), &mut GameRng::new(seed), &mut NoopObserver)
            .unwrap();

        assert_eq!(result.end, RoundEnd::AllRetreated);
        assert_eq!(result.cards_revealed, 1);
        assert!(result.banked.values().all(|&b| b == 0));
    }
}

// =============================================================================
// Score Bounds
// =============================================================================

/// Five distinct hazards push the score past 100.
#[test]
fn test_high_score_always_retreats() {
    let mut players = roster(1);
    let mut deck = vec![Card::treasure(1)];
    deck.extend(HazardKind::standard_set().iter().map(|k| Card::hazard(k.name())));
    let snapshot = walk(1, &mut players, deck);

    let inputs = RiskInputs::from_snapshot(&snapshot, PlayerId::new(0));
    assert_eq!(inputs.hazard_count, 5);
    assert_eq!(RiskHeuristic::default().score(&inputs), 125 + 1 - 10);

    assert!(decisions(&snapshot, PlayerId::new(0), 0..256)
        .iter()
        .all(|&c| c == Choice::Retreat));
}

/// A small haul with no hazards scores below zero.
#[test]
fn test_negative_score_always_continues() {
    let mut players = roster(2);
    let snapshot = walk(1, &mut players, vec![Card::treasure(2)]);

    assert_eq!(
        RiskHeuristic::default().assess(&snapshot, PlayerId::new(1)),
        Assessment::Score(1 - 10)
    );
    assert!(decisions(&snapshot, PlayerId::new(1), 0..256)
        .iter()
        .all(|&c| c == Choice::Continue));
}

/// A mid-range score retreats on roughly that share of rolls.
#[test]
fn test_score_is_retreat_probability() {
    let mut players = roster(1);
    // 3 hazards: 27 + 14 - 10 = 31
    let deck = vec![
        Card::treasure(14),
        Card::hazard("lava"),
        Card::hazard("snake"),
        Card::hazard("spider"),
    ];
    let snapshot = walk(1, &mut players, deck);
    assert_eq!(
        RiskHeuristic::default().assess(&snapshot, PlayerId::new(0)),
        Assessment::Score(31)
    );

    let retreats = decisions(&snapshot, PlayerId::new(0), 0..2000)
        .iter()
        .filter(|&&c| c == Choice::Retreat)
        .count();
    assert!((500..=750).contains(&retreats), "retreats={retreats}");
}

// =============================================================================
// Standings Pressure
// =============================================================================

/// Inputs come from the chooser's own ledger and the roster leader.
#[test]
fn test_inputs_from_trailing_position() {
    let mut players = roster(2);
    players[PlayerId::new(0)].credit(20);
    players[PlayerId::new(0)].bank();
    players[PlayerId::new(1)].bank();

    let snapshot = walk(3, &mut players, vec![Card::treasure(5)]);
    let inputs = RiskInputs::from_snapshot(&snapshot, PlayerId::new(1));

    assert_eq!(
        inputs,
        RiskInputs {
            hazard_count: 0,
            acquired: 2,
            surplus: 1,
            stored: 0,
            top_stored: 20,
            round_number: 3,
        }
    );
    // 2 + 3 - 10, trailing twice by round^2
    assert_eq!(RiskHeuristic::default().score(&inputs), 2 + 3 - 10 - 9 - 9);

    // the leader is not trailing anyone, itself included
    let leader = RiskInputs::from_snapshot(&snapshot, PlayerId::new(0));
    assert_eq!(leader.top_stored, 20);
    assert_eq!(RiskHeuristic::default().score(&leader), 2 + 3 - 10);
}

/// A custom heuristic plugs into the computer source.
#[test]
fn test_custom_heuristic_source() {
    let mut players = roster(1);
    let snapshot = walk(1, &mut players, vec![Card::treasure(4)]);

    // 4 + 0 - (-200): always retreat
    let cautious = RiskHeuristic { surplus_weight: 0, retreat_bias: -200 };
    let mut source = ComputerSource::new(cautious);
    assert_eq!(source.kind(), PlayerKind::Computer);
    for seed in 0..32 {
        assert_eq!(
            source.decide(&snapshot, PlayerId::new(0), &mut GameRng::new(seed)),
            Choice::Retreat
        );
    }
}
