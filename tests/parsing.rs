use poker_hands::cards::{parse_cards, Card, CardParseError, Rank, Suit};
use poker_hands::hand::{Hand, HandError};

#[test]
fn card_from_two_character_token() {
    let card: Card = "2h".parse().unwrap();
    assert_eq!(card.rank(), Rank::Two);
    assert_eq!(card.suit(), Suit::Hearts);
    assert_eq!(card.rank().value(), 2);
}

#[test]
fn card_with_invalid_rank_is_rejected() {
    assert!(matches!("21s".parse::<Card>(), Err(CardParseError::Rank(_))));
    assert!(matches!("1s".parse::<Card>(), Err(CardParseError::Rank(_))));
}

#[test]
fn card_with_invalid_suit_is_rejected() {
    let err = "2g".parse::<Card>().unwrap_err();
    assert!(matches!(err, CardParseError::Suit(_)));
    assert_eq!(err.to_string(), "invalid suit: 'g'");
}

#[test]
fn every_rank_and_suit_token_parses() {
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let token = format!("{}{}", rank.to_char(), suit.to_char());
            assert_eq!(token.parse::<Card>().unwrap(), Card::new(rank, suit));
        }
    }
}

#[test]
fn empty_hand_is_rejected() {
    let err = "".parse::<Hand>().unwrap_err();
    assert_eq!(err, HandError::CardCount(0));
    assert_eq!(err.to_string(), "hands must contain exactly five cards, got 0");
}

#[test]
fn four_card_hand_is_rejected() {
    let err = Hand::from_tokens(&["4s", "8h", "ac", "3d"]).unwrap_err();
    assert_eq!(err, HandError::CardCount(4));
}

#[test]
fn five_card_hand_is_accepted() {
    let hand = Hand::from_tokens(&["4s", "8h", "Ac", "3d", "Ts"]).unwrap();
    assert_eq!(hand.cards().len(), 5);
    assert_eq!(hand, "4s 8h Ac 3d Ts".parse().unwrap());
    assert_eq!(hand, Hand::try_new(parse_cards("4s,8h,Ac,3d,Ts").unwrap()).unwrap());
}

#[test]
fn hand_parse_error_names_the_token() {
    let err = "4s 8h Ac 3d Zs".parse::<Hand>().unwrap_err();
    assert!(matches!(err, HandError::CardParse(_)));
    assert_eq!(err.to_string(), "card parse error: invalid rank: 'Z'");
}
