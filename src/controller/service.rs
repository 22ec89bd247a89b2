use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::types::{
    error_alert, AdvanceOutcome, DragPayload, SaveOutcome, GAME_OVER_ALERT, PLACE_ALL_CARDS_ALERT,
    SAVED_LOCALLY_ALERT, SAVED_TO_GITHUB_ALERT,
};
use crate::api::{
    ApiError, Endpoint, GameApi, SaveResponse, LOCAL_SAVE_STATUS, REMOTE_SAVE_STATUS,
};
use crate::cards::Card;
use crate::render::TableView;
use crate::shared::ClientError;
use crate::table::{DropOutcome, Row, TableSession};

/// Event handlers of the table page.
///
/// Owns the session state and talks to the outside world only through the
/// `GameApi` and `TableView` ports, so it runs the same against a live server
/// and a terminal as against scripted fakes in tests.
pub struct TableController<V: TableView> {
    api: Arc<dyn GameApi>,
    view: V,
    session: TableSession,
}

impl<V: TableView> TableController<V> {
    pub fn new(api: Arc<dyn GameApi>, view: V) -> Self {
        Self {
            api,
            view,
            session: TableSession::new(),
        }
    }

    pub fn session(&self) -> &TableSession {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Redraws every container from the current session
    pub fn refresh(&mut self) {
        self.view.render_hand(self.session.hand());
        self.view.render_table(self.session.table());
    }

    #[instrument(skip(self))]
    pub async fn start_game(&mut self) -> Result<(), ClientError> {
        info!("Starting new game");

        let response = self.api.start().await?;
        self.session.start(response.hand);
        self.refresh();

        info!(
            cards = self.session.hand().len(),
            "Game started, opening hand dealt"
        );
        Ok(())
    }

    #[instrument(skip(self), fields(round = self.session.round()))]
    pub async fn advance_round(&mut self) -> Result<AdvanceOutcome, ClientError> {
        if !self.session.can_advance() {
            warn!(
                remaining = self.session.hand().len(),
                "Cannot advance with cards still in hand"
            );
            self.view.alert(PLACE_ALL_CARDS_ALERT);
            return Ok(AdvanceOutcome::Blocked);
        }

        let response = match self.api.next().await {
            Ok(response) => response,
            Err(ApiError::Rejected { message, .. }) => {
                warn!(message = %message, "Server refused to advance the round");
                self.view.alert(&error_alert(&message));
                return Ok(AdvanceOutcome::Rejected(message));
            }
            Err(error) => return Err(error.into()),
        };

        if response.is_game_over() {
            self.session.finish();
            self.view.alert(GAME_OVER_ALERT);
            let scores = response.scores.unwrap_or(serde_json::Value::Null);
            info!(scores = %scores, "Final scores");
            return Ok(AdvanceOutcome::GameOver(scores));
        }

        let Some(hand) = response.hand.clone() else {
            return Err(ApiError::UnexpectedResponse {
                endpoint: Endpoint::Next,
                body: serde_json::to_string(&response).unwrap_or_default(),
            }
            .into());
        };

        let cards = hand.len();
        self.session.deal(hand);
        self.view.render_hand(self.session.hand());

        let round = self.session.round();
        info!(cards, round, "Next hand dealt");
        Ok(AdvanceOutcome::Dealt { cards, round })
    }

    /// Starts dragging a card out of the hand
    pub fn drag_start(&self, card: &Card) -> DragPayload {
        DragPayload::for_card(card)
    }

    /// Whether `row` accepts the dragged payload
    pub fn drag_over(&self, _row: Row, payload: &DragPayload) -> bool {
        payload.is_text()
    }

    #[instrument(skip(self, payload), fields(card = %payload.data))]
    pub fn drop_card(
        &mut self,
        row: Row,
        payload: &DragPayload,
    ) -> Result<DropOutcome, ClientError> {
        let card = Card::from_string(&payload.data)?;
        let outcome = self.session.place(card, row);

        match outcome {
            DropOutcome::Placed => self.refresh(),
            DropOutcome::AlreadyInRow => {
                info!(row = %row, "Card already in row, ignoring drop")
            }
            DropOutcome::NotInHand => warn!(row = %row, "Dropped card is not in hand"),
        }

        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn save_progress(&mut self) -> Result<SaveOutcome, ClientError> {
        let response = self.api.save_to_github().await;
        self.report_save(response, REMOTE_SAVE_STATUS, SAVED_TO_GITHUB_ALERT)
    }

    #[instrument(skip(self))]
    pub async fn save_locally(&mut self) -> Result<SaveOutcome, ClientError> {
        let response = self.api.save_local().await;
        self.report_save(response, LOCAL_SAVE_STATUS, SAVED_LOCALLY_ALERT)
    }

    /// Asks the server to play the opponent's move
    #[instrument(skip(self))]
    pub async fn request_ai_move(&mut self) -> Result<String, ClientError> {
        let response = self.api.ai_move().await?;
        info!(status = %response.status, "AI move requested");
        Ok(response.status)
    }

    fn report_save(
        &mut self,
        response: Result<SaveResponse, ApiError>,
        expected_status: &str,
        success_alert: &str,
    ) -> Result<SaveOutcome, ClientError> {
        let response = match response {
            Ok(response) => response,
            Err(ApiError::Rejected { message, .. }) => SaveResponse {
                status: None,
                error: Some(message),
            },
            Err(error) => return Err(error.into()),
        };

        if response.has_status(expected_status) {
            info!("Progress saved");
            self.view.alert(success_alert);
            return Ok(SaveOutcome::Saved);
        }

        let message = response
            .error
            .or(response.status)
            .unwrap_or_else(|| "unknown error".to_string());
        warn!(message = %message, "Saving progress failed");
        self.view.alert(&error_alert(&message));
        Ok(SaveOutcome::Failed(message))
    }
}
