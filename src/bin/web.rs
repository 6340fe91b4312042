//! Single binary web server: REST API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080),
//! DATA_FILE (path of the JSON tournament store).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use football_tournament_web::{
    compute_standings, create_tournament, group_fixtures, group_participants,
    submit_match_result, top_scorers, JsonFileStore, ScorerEntry, Tournament, TournamentError,
    TournamentId, TournamentStore, TournamentType,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory view of the store, loaded once at startup. Every mutation
/// happens under the write lock and is persisted before the lock is
/// released, so one result submission is a single critical section
/// (persistence is last-writer-wins with no merge).
struct AppInner {
    store: JsonFileStore,
    tournaments: HashMap<TournamentId, Tournament>,
}

type AppState = Data<RwLock<AppInner>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(rename = "type")]
    kind: TournamentType,
    participants: Vec<String>,
    #[serde(default)]
    has_two_legs: bool,
}

#[derive(Deserialize)]
struct MatchResultBody {
    home_score: u32,
    away_score: u32,
    /// Optional per-participant goal breakdown for the scorer
    /// leaderboard; defaults to the two team totals.
    scorers: Option<Vec<ScorerEntry>>,
}

#[derive(Deserialize)]
struct StandingsQuery {
    /// Restrict the table to one group label, e.g. "A".
    group: Option<char>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: Uuid,
}

fn error_status(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-tournament-web",
    })
}

/// List all tournaments, newest first.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut list: Vec<&Tournament> = g.tournaments.values().collect();
    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    HttpResponse::Ok().json(list)
}

/// Create a tournament: fixtures are generated up front and the result
/// is persisted before responding.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament =
        match create_tournament(body.name.clone(), body.kind, &body.participants, body.has_two_legs) {
            Ok(t) => t,
            Err(e) => return error_status(&e),
        };
    g.store.save(&tournament);
    let id = tournament.id;
    g.tournaments.insert(id, tournament);
    HttpResponse::Ok().json(&g.tournaments[&id])
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournaments.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Delete a tournament.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.tournaments.remove(&path.id).is_none() {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    }
    g.store.delete(path.id);
    HttpResponse::NoContent().finish()
}

/// Submit a match result. Runs the full pipeline (progression, stage
/// transition, completion) and persists, then returns the updated
/// tournament.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_submit_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.tournaments.get(&path.id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };

    // Work on a copy; the shared state only sees a fully updated value.
    let mut updated = t.clone();
    if let Err(e) = submit_match_result(
        &mut updated,
        path.match_id,
        body.home_score,
        body.away_score,
        body.scorers.clone(),
    ) {
        return error_status(&e);
    }
    g.store.save(&updated);
    g.tournaments.insert(path.id, updated);
    HttpResponse::Ok().json(&g.tournaments[&path.id])
}

/// Ranked standings, optionally restricted to one group.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.tournaments.get(&path.id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };
    let table = match query.group {
        Some(label) => {
            let members = group_participants(t, label);
            let matches: Vec<_> = group_fixtures(t, label).into_iter().cloned().collect();
            compute_standings(&members, &matches)
        }
        None => compute_standings(&t.participants, &t.fixtures),
    };
    HttpResponse::Ok().json(table)
}

/// Top-scorer leaderboard.
#[get("/api/tournaments/{id}/scorers")]
async fn api_scorers(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.tournaments.get(&path.id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };
    HttpResponse::Ok().json(top_scorers(&t.participants, &t.fixtures))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "tournaments.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| default_data_file());
    let bind = (host.as_str(), port);

    let store = JsonFileStore::new(&data_file);
    let tournaments: HashMap<TournamentId, Tournament> = store
        .load_all()
        .into_iter()
        .map(|t| (t.id, t))
        .collect();
    log::info!(
        "Starting server at http://{}:{} ({} tournament(s) loaded from {})",
        bind.0,
        bind.1,
        tournaments.len(),
        data_file
    );

    let state = Data::new(RwLock::new(AppInner { store, tournaments }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_submit_result)
            .service(api_standings)
            .service(api_scorers)
    })
    .bind(bind)?
    .run()
    .await
}
