use advisor_engine::cards::{full_deck, Card};
use advisor_engine::errors::AdvisorError;
use advisor_engine::game::GameSession;
use advisor_engine::hand::{HandState, Street};
use rust_decimal_macros::dec;

fn fresh_hand() -> (HandState, Vec<Card>) {
    let session = GameSession::configure(2, dec!(1), dec!(2)).unwrap();
    let mut deck = full_deck();
    let hole: Vec<Card> = deck.drain(..2).collect();
    let hand = HandState::new_hand(&session, &hole, dec!(100), vec![dec!(2), dec!(2)]).unwrap();
    (hand, deck)
}

#[test]
fn only_zero_three_four_five_transitions_succeed() {
    let (mut hand, deck) = fresh_hand();
    let mut next_card = 0;
    for (street, expected_len) in [(Street::Flop, 3), (Street::Turn, 4), (Street::River, 5)] {
        for count in 0..=6 {
            let cards = &deck[next_card..next_card + count];
            let result = hand.advance_street(cards);
            if hand.board().len() + count == expected_len {
                let advanced = result.unwrap();
                assert_eq!(advanced.street(), street);
                assert_eq!(advanced.board().len(), expected_len);
            } else {
                assert!(
                    matches!(result, Err(AdvisorError::StreetOutOfOrder { .. })),
                    "{} card(s) on {:?} should be out of order",
                    count,
                    hand.street()
                );
            }
        }
        let count = expected_len - hand.board().len();
        hand = hand
            .advance_street(&deck[next_card..next_card + count])
            .unwrap();
        next_card += count;
    }
    assert!(hand.is_terminal());
    assert!(matches!(
        hand.advance_street(&deck[10..11]),
        Err(AdvisorError::StreetOutOfOrder {
            street: Street::River,
            board: 5,
            dealt: 1
        })
    ));
}

#[test]
fn board_never_shrinks_across_streets() {
    let (hand, deck) = fresh_hand();
    let flop = hand.advance_street(&deck[..3]).unwrap();
    let turn = flop.advance_street(&deck[3..4]).unwrap();
    let river = turn.advance_street(&deck[4..5]).unwrap();
    assert_eq!(&river.board()[..4], turn.board());
    assert_eq!(&turn.board()[..3], flop.board());
}

#[test]
fn new_hand_call_count_must_match_opponents() {
    let session = GameSession::configure(3, dec!(1), dec!(2)).unwrap();
    let hole: Vec<Card> = full_deck().into_iter().take(2).collect();
    for calls in [vec![], vec![dec!(1)], vec![dec!(1); 4]] {
        let actual = calls.len();
        assert_eq!(
            HandState::new_hand(&session, &hole, dec!(50), calls).unwrap_err(),
            AdvisorError::InvalidCallCount {
                expected: 3,
                actual
            }
        );
    }
    assert!(HandState::new_hand(&session, &hole, dec!(50), vec![dec!(1); 3]).is_ok());
}

#[test]
fn new_hand_requires_two_hole_cards() {
    let session = GameSession::configure(1, dec!(1), dec!(2)).unwrap();
    let deck = full_deck();
    for count in [0, 1, 3] {
        assert_eq!(
            HandState::new_hand(&session, &deck[..count], dec!(50), vec![dec!(0)]).unwrap_err(),
            AdvisorError::InvalidHandSize { count }
        );
    }
}
