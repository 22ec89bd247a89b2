use axum::http::StatusCode;
use serde_json::json;

use ofc_table::{
    api::{Endpoint, GameApi},
    ApiError, Card, Rank, Suit,
};

mod utils;

use utils::*;

#[tokio::test]
async fn test_start_parses_dealt_cards() {
    let server = FakeGameServerBuilder::new()
        .with_start_hand(vec!["10♠", "Q♦", "2♣"])
        .spawn()
        .await;

    let response = server.api().start().await.unwrap();

    assert_eq!(response.status.as_deref(), Some("Game started"));
    assert_eq!(
        response.hand,
        vec![
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Clubs),
        ]
    );
    assert_eq!(server.calls("start"), 1);
}

#[tokio::test]
async fn test_start_with_unknown_suit_is_rejected_at_boundary() {
    let server = FakeGameServerBuilder::new()
        .with_start_hand(vec!["A♠", "K★"])
        .spawn()
        .await;

    let result = server.api().start().await;

    match result {
        Err(ApiError::Decode { endpoint, message }) => {
            assert_eq!(endpoint, Endpoint::Start);
            assert!(message.contains("Unrecognized suit"), "{message}");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = FakeGameServerBuilder::new()
        .with_garbage_start()
        .spawn()
        .await;

    let result = server.api().start().await;

    assert!(matches!(
        result,
        Err(ApiError::Decode {
            endpoint: Endpoint::Start,
            ..
        })
    ));
}

#[tokio::test]
async fn test_next_game_over_keeps_scores() {
    let scores = json!({"player": {"top": 1, "middle": 0, "bottom": 1}});
    let server = FakeGameServerBuilder::new()
        .with_game_over(scores.clone())
        .spawn()
        .await;

    let response = server.api().next().await.unwrap();

    assert!(response.is_game_over());
    assert_eq!(response.scores, Some(scores));
    assert!(response.hand.is_none());
}

#[tokio::test]
async fn test_next_rejection_carries_detail() {
    let server = FakeGameServerBuilder::new()
        .with_next_reply(
            StatusCode::BAD_REQUEST,
            json!({"detail": "Invalid hand placement"}),
        )
        .spawn()
        .await;

    let result = server.api().next().await;

    match result {
        Err(ApiError::Rejected {
            endpoint,
            status,
            message,
        }) => {
            assert_eq!(endpoint, Endpoint::Next);
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid hand placement");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_routes_and_ai_move() {
    let server = FakeGameServerBuilder::new()
        .with_save_reply(json!({
            "status": "Error saving progress to GitHub",
            "error": "Bad credentials"
        }))
        .spawn()
        .await;
    let api = server.api();

    let remote = api.save_to_github().await.unwrap();
    assert_eq!(remote.error.as_deref(), Some("Bad credentials"));

    let local = api.save_local().await.unwrap();
    assert!(local.has_status("Progress saved locally"));

    let ai = api.ai_move().await.unwrap();
    assert_eq!(ai.status, "AI move completed");

    assert_eq!(server.calls("save_to_github"), 1);
    assert_eq!(server.calls("save"), 1);
    assert_eq!(server.calls("ai_move"), 1);
}
