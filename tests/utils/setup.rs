use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use ofc_table::HttpGameApi;

// ============================================================================
// Fake Game Server
// ============================================================================

/// Scripted replies and call counts shared with the route handlers
#[derive(Default)]
struct FakeState {
    start_hand: Mutex<Vec<String>>,
    next_replies: Mutex<VecDeque<(StatusCode, Value)>>,
    save_reply: Mutex<Option<Value>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeState {
    fn record(&self, route: &str) {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(route.to_string())
            .or_default() += 1;
    }
}

async fn start(State(state): State<Arc<FakeState>>) -> Json<Value> {
    state.record("start");
    let hand = state.start_hand.lock().unwrap().clone();
    Json(json!({"status": "Game started", "hand": hand}))
}

async fn next(State(state): State<Arc<FakeState>>) -> (StatusCode, Json<Value>) {
    state.record("next");
    let reply = state.next_replies.lock().unwrap().pop_front();
    match reply {
        Some((status, body)) => (status, Json(body)),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "no reply scripted"})),
        ),
    }
}

async fn save_to_github(State(state): State<Arc<FakeState>>) -> Json<Value> {
    state.record("save_to_github");
    let reply = state.save_reply.lock().unwrap().clone();
    Json(reply.unwrap_or_else(|| json!({"status": "Progress successfully saved to GitHub"})))
}

async fn save(State(state): State<Arc<FakeState>>) -> Json<Value> {
    state.record("save");
    Json(json!({"status": "Progress saved locally"}))
}

async fn ai_move(State(state): State<Arc<FakeState>>) -> Json<Value> {
    state.record("ai_move");
    Json(json!({"status": "AI move completed"}))
}

async fn garbage(State(state): State<Arc<FakeState>>) -> &'static str {
    state.record("garbage");
    "<html>not json</html>"
}

pub struct FakeGameServer {
    pub base_url: String,
    state: Arc<FakeState>,
    _handle: JoinHandle<()>,
}

impl FakeGameServer {
    pub fn api(&self) -> Arc<HttpGameApi> {
        Arc::new(HttpGameApi::new(&self.base_url, Duration::from_secs(5)).unwrap())
    }

    pub fn calls(&self, route: &str) -> usize {
        self.state
            .calls
            .lock()
            .unwrap()
            .get(route)
            .copied()
            .unwrap_or(0)
    }

    /// Queues another `/next` reply after the server is running
    pub fn push_next_reply(&self, status: StatusCode, body: Value) {
        self.state
            .next_replies
            .lock()
            .unwrap()
            .push_back((status, body));
    }
}

pub struct FakeGameServerBuilder {
    start_hand: Vec<String>,
    next_replies: VecDeque<(StatusCode, Value)>,
    save_reply: Option<Value>,
    garbage_start: bool,
}

impl FakeGameServerBuilder {
    pub fn new() -> Self {
        Self {
            start_hand: vec![],
            next_replies: VecDeque::new(),
            save_reply: None,
            garbage_start: false,
        }
    }

    pub fn with_start_hand(mut self, hand: Vec<&str>) -> Self {
        self.start_hand = hand.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_next_hand(mut self, hand: Vec<&str>) -> Self {
        self.next_replies.push_back((
            StatusCode::OK,
            json!({"status": "Next round", "hand": hand}),
        ));
        self
    }

    pub fn with_game_over(mut self, scores: Value) -> Self {
        self.next_replies.push_back((
            StatusCode::OK,
            json!({"status": "Game over", "scores": scores}),
        ));
        self
    }

    pub fn with_next_reply(mut self, status: StatusCode, body: Value) -> Self {
        self.next_replies.push_back((status, body));
        self
    }

    pub fn with_save_reply(mut self, body: Value) -> Self {
        self.save_reply = Some(body);
        self
    }

    /// Makes `/start` answer with a non-JSON body
    pub fn with_garbage_start(mut self) -> Self {
        self.garbage_start = true;
        self
    }

    pub async fn spawn(self) -> FakeGameServer {
        let state = Arc::new(FakeState {
            start_hand: Mutex::new(self.start_hand),
            next_replies: Mutex::new(self.next_replies),
            save_reply: Mutex::new(self.save_reply),
            calls: Mutex::new(HashMap::new()),
        });

        let router = if self.garbage_start {
            Router::new().route("/start", post(garbage))
        } else {
            Router::new().route("/start", post(start))
        };
        let app = router
            .route("/next", post(next))
            .route("/save_to_github", post(save_to_github))
            .route("/save", post(save))
            .route("/ai_move", post(ai_move))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeGameServer {
            base_url: format!("http://{addr}"),
            state,
            _handle: handle,
        }
    }
}
