//! Single binary web server: JSON REST API over the bracket engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), RUST_LOG (e.g. debug).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use tournament_bracket_web::{
    execute, podium, sorted_standings, validate_tournament_start, MatchId, MemoryStore,
    Tournament, TournamentCommand, TournamentError, TournamentId, TournamentStore,
    TournamentType,
};

/// In-memory state shared by all workers.
type AppState = Data<RwLock<MemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type", default)]
    kind: TournamentType,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    #[serde(default)]
    members: Vec<String>,
}

#[derive(Deserialize)]
struct ScoreBody {
    team_1_score: u32,
    team_2_score: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id}/score)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn engine_error(e: &TournamentError) -> HttpResponse {
    match e {
        TournamentError::MatchNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        TournamentError::InvalidTransition { .. } | TournamentError::DownstreamAlreadyPlayed(_) => {
            HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }))
        }
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Load, apply one command, save. The stored tournament only changes if the command succeeds.
fn run_command(state: &AppState, id: TournamentId, command: TournamentCommand) -> HttpResponse {
    let mut store = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let tournament = match store.load_one(id) {
        Ok(Some(t)) => t,
        Ok(None) => return not_found(),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    let updated = match execute(&tournament, command, &mut rand::thread_rng()) {
        Ok(t) => t,
        Err(e) => {
            log::debug!("Command rejected for tournament {}: {}", id, e);
            return engine_error(&e);
        }
    };
    if updated.status != tournament.status {
        log::info!("Tournament {} is now {}", id, updated.status);
    }
    if let Err(e) = store.save(updated.clone()) {
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    HttpResponse::Ok().json(&updated)
}

/// Read a tournament and render something from it.
fn with_tournament(state: &AppState, id: TournamentId, f: impl FnOnce(&Tournament) -> HttpResponse) -> HttpResponse {
    let store = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match store.load_one(id) {
        Ok(Some(t)) => f(&t),
        Ok(None) => not_found(),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-bracket-web",
    })
}

/// List all tournaments in creation order.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let store = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match store.load_all() {
        Ok(all) => HttpResponse::Ok().json(all),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Create a new tournament in registration.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Tournament name is required" }));
    }
    let tournament = Tournament::new(name, body.description.trim(), body.kind);
    let mut store = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = store.save(tournament.clone()) {
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    log::info!("Created {} tournament {} ({})", tournament.kind, tournament.id, tournament.name);
    HttpResponse::Created().json(&tournament)
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut store = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match store.delete(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(_) => not_found(),
    }
}

/// Register a team (tournament must be in registration).
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<AddTeamBody>) -> HttpResponse {
    let AddTeamBody { name, members } = body.into_inner();
    run_command(&state, path.id, TournamentCommand::AddTeam { name, members })
}

/// Whether the tournament can start with its current teams.
#[get("/api/tournaments/{id}/validation")]
async fn api_validate_start(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(validate_tournament_start(t)))
}

/// Start the tournament (registration -> ongoing).
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    run_command(&state, path.id, TournamentCommand::Start)
}

/// Record a match score (tournament must be ongoing).
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_record_score(state: AppState, path: Path<TournamentMatchPath>, body: Json<ScoreBody>) -> HttpResponse {
    run_command(
        &state,
        path.id,
        TournamentCommand::RecordScore {
            match_id: path.match_id,
            team_1_score: body.team_1_score,
            team_2_score: body.team_2_score,
        },
    )
}

/// Wins/losses table, best first.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(sorted_standings(&t.teams, &t.matches))
    })
}

/// First to third place (empty until the tournament is completed).
#[get("/api/tournaments/{id}/podium")]
async fn api_podium(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(podium(t)))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(MemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_add_team)
            .service(api_validate_start)
            .service(api_start_tournament)
            .service(api_record_score)
            .service(api_standings)
            .service(api_podium)
    })
    .bind(bind)?
    .run()
    .await
}
