use crate::domain::dice_source::ScriptedDice;
use crate::domain::history::TurnOutcome;
use crate::domain::state::{AiDifficulty, TurnPhase};
use crate::domain::test_state_helpers::{
    pve_session, rolled_session, scripted, two_player_session, with_totals,
};
use crate::domain::turn::{
    auto_select_scoring, begin_roll, complete_roll, end_turn, recompute_turn_score, roll,
    toggle_hold, Actor, RollOutcome, RollTicket,
};
use crate::errors::domain::{DomainError, RejectKind};

fn rejected(kind: RejectKind) -> DomainError {
    DomainError::Rejected(kind)
}

#[test]
fn first_roll_marks_scoring_dice_and_waits_for_selection() {
    let (session, _, outcome) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    assert_eq!(
        outcome,
        RollOutcome::Scored {
            scorable: vec![0, 1, 2]
        }
    );
    assert!(session.has_rolled_this_turn);
    assert!(!session.can_roll);
    assert!(!session.is_rolling);
    assert_eq!(session.phase(), TurnPhase::AwaitingSelection);
    let scoring: Vec<_> = session.dice.iter().map(|d| d.is_scoring).collect();
    assert_eq!(scoring, [true, true, true, false, false, false]);
    assert_eq!(session.current_player().turn_score, 0);
}

#[test]
fn holding_recomputes_turn_score_from_scratch() {
    let (mut session, _, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);

    assert_eq!(toggle_hold(&mut session, 0, Actor::Human), Ok(true));
    assert!(session.can_roll);
    assert_eq!(session.current_player().turn_score, 100);

    toggle_hold(&mut session, 1, Actor::Human).unwrap();
    toggle_hold(&mut session, 2, Actor::Human).unwrap();
    assert_eq!(session.current_player().turn_score, 1000);
    assert_eq!(session.phase(), TurnPhase::ReadyToRoll);

    assert_eq!(toggle_hold(&mut session, 1, Actor::Human), Ok(false));
    assert_eq!(session.current_player().turn_score, 200);

    for id in [0, 2] {
        toggle_hold(&mut session, id, Actor::Human).unwrap();
    }
    assert!(!session.can_roll);
    assert_eq!(session.current_player().turn_score, 0);
}

#[test]
fn holding_a_non_scoring_die_is_allowed() {
    let (mut session, _, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    toggle_hold(&mut session, 3, Actor::Human).unwrap();
    assert!(session.can_roll);
    assert_eq!(session.current_player().turn_score, 0);
}

#[test]
fn recompute_is_idempotent() {
    let (mut session, _, _) = rolled_session(10_000, [5, 5, 1, 2, 3, 4]);
    toggle_hold(&mut session, 0, Actor::Human).unwrap();
    toggle_hold(&mut session, 2, Actor::Human).unwrap();
    let first = recompute_turn_score(&mut session);
    let second = recompute_turn_score(&mut session);
    assert_eq!(first, 150);
    assert_eq!(first, second);
    assert_eq!(session.current_player().turn_score, 150);
}

#[test]
fn held_dice_lock_and_keep_their_faces() {
    let (mut session, mut dice, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    for id in [0, 1, 2] {
        toggle_hold(&mut session, id, Actor::Human).unwrap();
    }
    dice.push_front(&[5, 2, 3]);
    let outcome = roll(&mut session, &mut dice).unwrap();

    assert_eq!(outcome, RollOutcome::Scored { scorable: vec![3] });
    for d in &session.dice[..3] {
        assert!(d.is_locked);
        assert!(!d.is_held);
        assert_eq!(d.value, 1);
    }
    let faces: Vec<_> = session.dice[3..].iter().map(|d| d.value).collect();
    assert_eq!(faces, [5, 2, 3]);
    assert_eq!(session.current_player().turn_score, 1000);
    assert_eq!(
        toggle_hold(&mut session, 0, Actor::Human),
        Err(rejected(RejectKind::DieLocked(0)))
    );
}

#[test]
fn bust_forfeits_turn_score_and_only_end_turn_is_legal() {
    let (mut session, mut dice, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    for id in [0, 1, 2] {
        toggle_hold(&mut session, id, Actor::Human).unwrap();
    }
    dice.push_front(&[2, 3, 4]);
    assert_eq!(roll(&mut session, &mut dice), Ok(RollOutcome::Busted));

    assert!(session.is_busted);
    assert!(!session.can_roll);
    assert_eq!(session.phase(), TurnPhase::Busted);
    assert_eq!(session.current_player().turn_score, 0);
    assert_eq!(recompute_turn_score(&mut session), 0);
    assert_eq!(
        roll(&mut session, &mut dice),
        Err(rejected(RejectKind::Busted))
    );
    assert_eq!(
        toggle_hold(&mut session, 3, Actor::Human),
        Err(rejected(RejectKind::Busted))
    );

    let settlement = end_turn(&mut session, &mut dice).unwrap();
    assert!(settlement.busted);
    assert_eq!(settlement.banked, 0);
    assert_eq!(settlement.next_player_index, 1);
    let history = &session.players[0].score_history;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].outcome, TurnOutcome::Busted);
    assert_eq!(session.players[0].total_score, 0);
}

#[test]
fn first_roll_can_bust() {
    let (session, _, outcome) = rolled_session(10_000, [2, 3, 4, 6, 2, 3]);
    assert_eq!(outcome, RollOutcome::Busted);
    assert!(session.is_busted);
    assert!(session.has_rolled_this_turn);
}

#[test]
fn end_turn_banks_and_passes_the_dice() {
    let (mut session, mut dice, _) = rolled_session(10_000, [1, 5, 2, 3, 4, 4]);
    toggle_hold(&mut session, 0, Actor::Human).unwrap();
    toggle_hold(&mut session, 1, Actor::Human).unwrap();

    let settlement = end_turn(&mut session, &mut dice).unwrap();
    assert_eq!(settlement.banked, 150);
    assert_eq!(settlement.total_after, 150);
    assert!(!settlement.won);
    assert_eq!(session.current_player_index, 1);
    assert!(session.can_roll);
    assert!(!session.has_rolled_this_turn);
    assert_eq!(session.phase(), TurnPhase::AwaitingFirstRoll);
    assert!(session.dice.iter().all(|d| d.is_available() && !d.is_scoring));
    assert_eq!(session.players[0].turn_score, 0);

    let record = &session.players[0].score_history[0];
    assert_eq!(record.turn_number, 1);
    assert_eq!(record.points, 150);
    assert_eq!(record.outcome, TurnOutcome::Banked);
    assert_eq!(record.combinations.len(), 2);
}

#[test]
fn player_index_wraps() {
    let mut dice = scripted(&[2, 3, 4, 6, 2, 3]);
    let mut session = two_player_session(10_000, &mut dice);
    end_turn(&mut session, &mut dice).unwrap();
    end_turn(&mut session, &mut dice).unwrap();
    assert_eq!(session.current_player_index, 0);
}

#[test]
fn reaching_target_wins_and_freezes_the_session() {
    let mut dice = scripted(&[5, 5, 5, 2, 3, 4]);
    let session = two_player_session(10_000, &mut dice);
    let mut session = with_totals(session, &[9_600, 0]);
    roll(&mut session, &mut dice).unwrap();
    auto_select_scoring(&mut session, Actor::Human).unwrap();
    assert_eq!(session.current_player().turn_score, 500);

    let settlement = end_turn(&mut session, &mut dice).unwrap();
    assert!(settlement.won);
    assert_eq!(settlement.total_after, 10_100);
    assert_eq!(session.winner, Some(1));
    assert_eq!(session.phase(), TurnPhase::Won);
    assert_eq!(session.current_player_index, 0);
    assert!(!session.can_roll);

    assert_eq!(
        roll(&mut session, &mut dice),
        Err(rejected(RejectKind::GameOver))
    );
    assert_eq!(
        end_turn(&mut session, &mut dice).unwrap_err(),
        rejected(RejectKind::GameOver)
    );
    assert_eq!(
        toggle_hold(&mut session, 0, Actor::Human),
        Err(rejected(RejectKind::GameOver))
    );
}

#[test]
fn toggle_before_first_roll_is_rejected() {
    let mut dice = scripted(&[1, 1, 1, 1, 1, 1]);
    let mut session = two_player_session(10_000, &mut dice);
    assert_eq!(
        toggle_hold(&mut session, 0, Actor::Human),
        Err(rejected(RejectKind::NotRolledYet))
    );
    assert!(session.dice.iter().all(|d| !d.is_held));
}

#[test]
fn toggle_unknown_die_is_rejected() {
    let (mut session, _, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    assert_eq!(
        toggle_hold(&mut session, 6, Actor::Human),
        Err(rejected(RejectKind::UnknownDie(6)))
    );
}

#[test]
fn human_cannot_select_for_the_computer() {
    let mut dice = scripted(&[1, 2, 3, 4, 6, 6]);
    let mut session = pve_session(10_000, AiDifficulty::Easy, &mut dice);
    end_turn(&mut session, &mut dice).unwrap();
    roll(&mut session, &mut dice).unwrap();
    assert!(session.is_ai_turn());

    assert_eq!(
        toggle_hold(&mut session, 0, Actor::Human),
        Err(rejected(RejectKind::AiTurn))
    );
    assert_eq!(toggle_hold(&mut session, 0, Actor::Ai), Ok(true));
}

#[test]
fn rolling_blocks_other_operations() {
    let (mut session, mut dice, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    toggle_hold(&mut session, 0, Actor::Human).unwrap();
    let ticket = begin_roll(&mut session).unwrap();
    assert_eq!(session.phase(), TurnPhase::Rolling);

    assert_eq!(
        begin_roll(&mut session),
        Err(rejected(RejectKind::RollInProgress))
    );
    assert_eq!(
        end_turn(&mut session, &mut dice).unwrap_err(),
        rejected(RejectKind::RollInProgress)
    );
    assert_eq!(
        toggle_hold(&mut session, 1, Actor::Human),
        Err(rejected(RejectKind::RollInProgress))
    );

    assert!(complete_roll(&mut session, ticket, &mut dice).is_ok());
    assert!(!session.is_rolling);
}

#[test]
fn stale_ticket_is_dropped() {
    let (mut session, mut dice, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    toggle_hold(&mut session, 0, Actor::Human).unwrap();
    let ticket = begin_roll(&mut session).unwrap();
    let stale = RollTicket {
        generation: ticket.generation - 1,
        ..ticket
    };
    let before = session.dice;
    assert_eq!(
        complete_roll(&mut session, stale, &mut dice),
        Err(rejected(RejectKind::StaleRoll))
    );
    assert_eq!(session.dice, before);
    assert!(session.is_rolling);

    // A ticket from before a settlement can never apply afterwards.
    let mut other = ScriptedDice::new(vec![1, 5, 2, 3, 4, 6]).unwrap();
    let (mut fresh, _, _) = rolled_session(10_000, [1, 5, 2, 3, 4, 6]);
    toggle_hold(&mut fresh, 0, Actor::Human).unwrap();
    let old = begin_roll(&mut fresh).unwrap();
    complete_roll(&mut fresh, old, &mut other).unwrap();
    end_turn(&mut fresh, &mut other).unwrap();
    assert_eq!(
        complete_roll(&mut fresh, old, &mut other),
        Err(rejected(RejectKind::StaleRoll))
    );
}

#[test]
fn rejected_roll_changes_nothing() {
    let (mut session, mut dice, _) = rolled_session(10_000, [1, 1, 1, 2, 3, 4]);
    let before = session.clone();
    assert_eq!(
        roll(&mut session, &mut dice),
        Err(rejected(RejectKind::CannotRoll))
    );
    assert_eq!(session.dice, before.dice);
    assert_eq!(session.roll_generation, before.roll_generation);
}

#[test]
fn auto_select_holds_every_scoring_available_die() {
    let (mut session, _, _) = rolled_session(10_000, [4, 1, 4, 6, 4, 5]);
    let held = auto_select_scoring(&mut session, Actor::Human).unwrap();
    assert_eq!(held, vec![0, 1, 2, 4, 5]);
    assert_eq!(session.current_player().turn_score, 400 + 100 + 50);
    assert!(session.can_roll);
}

#[test]
fn end_turn_before_rolling_banks_nothing() {
    let mut dice = scripted(&[1, 1, 1, 1, 1, 1]);
    let mut session = two_player_session(10_000, &mut dice);
    let settlement = end_turn(&mut session, &mut dice).unwrap();
    assert_eq!(settlement.banked, 0);
    assert_eq!(session.current_player_index, 1);
}
