//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `footle_web::config` for the env overrides.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post,
    web::{self, Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{NaiveDate, Utc};
use footle_web::{
    pick_daily, pick_random, suggest, Config, GameError, GameMode, GameSession, GuessFeedback,
    PlayerDataset, PlayerId, PlayerSummary, SessionId, SessionStore, MAX_GUESSES,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Cookie entry holding the opaque session id.
const SESSION_ID_KEY: &str = "sid";

/// Autocomplete defaults.
const DEFAULT_SUGGESTIONS: usize = 8;
const MAX_SUGGESTIONS: usize = 25;

/// How often idle sessions are swept.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Shared state: the read-only dataset and all live game sessions.
struct AppState {
    dataset: PlayerDataset,
    sessions: SessionStore,
}

type State = Data<AppState>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    players: usize,
    sessions: usize,
}

#[derive(Deserialize)]
struct AutocompleteQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct NewGameBody {
    #[serde(default)]
    mode: GameMode,
}

#[derive(Serialize)]
struct NewGameResponse {
    status: &'static str,
    mode: GameMode,
    max_guesses: usize,
    date: Option<NaiveDate>,
}

/// Guess by name or by id (id wins when both are given).
#[derive(Deserialize)]
struct GuessBody {
    name: Option<String>,
    player_id: Option<PlayerId>,
}

#[derive(Serialize)]
struct GuessResponse {
    feedback: GuessFeedback,
    guess_number: usize,
    max_guesses: usize,
    game_over: bool,
    won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<PlayerSummary>,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

fn session_id(session: &Session) -> Option<SessionId> {
    match session.get::<Uuid>(SESSION_ID_KEY) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Unreadable session cookie: {}", e);
            None
        }
    }
}

#[get("/api/health")]
async fn api_health(state: State) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "footle-web",
        players: state.dataset.len(),
        sessions: state.sessions.len(),
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Fuzzy player search for the guess box.
#[get("/api/autocomplete")]
async fn api_autocomplete(state: State, query: Query<AutocompleteQuery>) -> HttpResponse {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SUGGESTIONS)
        .min(MAX_SUGGESTIONS);
    HttpResponse::Ok().json(suggest(&state.dataset, query.q.trim(), limit))
}

/// Start a new game (daily or random) for this browser session, replacing any current one.
#[post("/api/new_game")]
async fn api_new_game(state: State, session: Session, body: Option<Json<NewGameBody>>) -> HttpResponse {
    let mode = body.map(|b| b.mode).unwrap_or_default();
    let game = match mode {
        GameMode::Daily => {
            let today = Utc::now().date_naive();
            let target = pick_daily(&state.dataset, today).clone();
            GameSession::daily(target, today)
        }
        GameMode::Random => {
            let target = pick_random(&state.dataset, &mut rand::thread_rng()).clone();
            GameSession::new(target, GameMode::Random)
        }
    };
    let date = game.date();

    let id = session_id(&session).unwrap_or_else(Uuid::new_v4);
    if let Err(e) = session.insert(SESSION_ID_KEY, id) {
        log::error!("Could not set session cookie: {}", e);
        return HttpResponse::InternalServerError().json(error_json("session error"));
    }
    state.sessions.start(id, game);
    log::info!("New {} game for session {}", mode, id);

    HttpResponse::Ok().json(NewGameResponse {
        status: "ok",
        mode,
        max_guesses: MAX_GUESSES,
        date,
    })
}

/// Current game (guess history, feedback, status) for this browser session.
#[get("/api/game")]
async fn api_get_game(state: State, session: Session) -> HttpResponse {
    match session_id(&session).and_then(|id| state.sessions.view(&id)) {
        Some(view) => HttpResponse::Ok().json(view),
        None => HttpResponse::NotFound().json(error_json("No active game")),
    }
}

/// Submit a guess and receive the comparison feedback.
#[post("/api/guess")]
async fn api_guess(state: State, session: Session, body: Json<GuessBody>) -> HttpResponse {
    let no_game = || HttpResponse::BadRequest().json(error_json("No active game. Start a new game first."));
    let id = match session_id(&session) {
        Some(id) => id,
        None => return no_game(),
    };
    let body = body.into_inner();
    if body.player_id.is_none() && body.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        return HttpResponse::BadRequest().json(error_json("Missing player name"));
    }

    let dataset = &state.dataset;
    let response = state.sessions.with_session_mut(&id, |game| {
        let result = match body.player_id {
            Some(player_id) => game.submit_guess_by_id(dataset, player_id),
            None => game.submit_guess(dataset, body.name.as_deref().unwrap_or_default()),
        };
        let feedback = match result {
            Ok(entry) => entry.feedback.clone(),
            Err(e) => {
                log::debug!("Rejected guess for session {}: {}", id, e);
                return match e {
                    GameError::UnknownPlayerName(_) => HttpResponse::NotFound().json(error_json(e)),
                    GameError::GameAlreadyOver | GameError::GuessLimitReached => {
                        let view = game.view();
                        HttpResponse::BadRequest().json(serde_json::json!({
                            "error": e.to_string(),
                            "game_over": true,
                            "won": view.won,
                            "target": view.target,
                        }))
                    }
                    GameError::AlreadyGuessed(_) => HttpResponse::BadRequest().json(error_json(e)),
                };
            }
        };
        let view = game.view();
        HttpResponse::Ok().json(GuessResponse {
            feedback,
            guess_number: view.guess_number,
            max_guesses: MAX_GUESSES,
            game_over: view.game_over,
            won: view.won,
            target: view.target,
        })
    });
    response.unwrap_or_else(no_game)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let dataset = match PlayerDataset::load(&config.dataset_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    let key = match config.secret_key.as_deref().map(|k| Key::try_from(k.as_bytes())) {
        Some(Ok(key)) => key,
        Some(Err(e)) => {
            log::warn!("Unusable SECRET_KEY ({}); generating a per-process key", e);
            Key::generate()
        }
        None => {
            log::warn!("SECRET_KEY not set; sessions will not survive a restart");
            Key::generate()
        }
    };

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppState {
        dataset,
        sessions: SessionStore::new(),
    });

    // Background task: periodically remove sessions idle for longer than the timeout
    let state_cleanup = state.clone();
    let timeout = config.session_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = state_cleanup.sessions.purge_inactive(timeout);
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive session(s) (no activity for {}h)",
                    removed,
                    timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                    .cookie_name("footle".to_string())
                    .build(),
            )
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_autocomplete)
            .service(api_new_game)
            .service(api_get_game)
            .service(api_guess)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
