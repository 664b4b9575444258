//! HTTP API: actix-web handlers over a shared [`StatsStore`].
//! The binary adds the index page and static files on top of [`configure`].

use crate::{
    filter, options_with_all, to_csv, trend_series, Selection, Stat, StatCollection, StatInput,
    StatRecord, StatsStore, TrendSeries, STAT_COLUMNS,
};
use actix_web::{
    delete, get, post,
    web::{Data, Json, Query, ServiceConfig},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Store handle plus the collection loaded at startup. Every mutation goes
/// through the store first; the in-memory copy is replaced only on success.
pub struct StatsState {
    store: StatsStore,
    collection: RwLock<StatCollection>,
}

impl StatsState {
    /// Load the collection through `store` (empty if the file is missing or unreadable).
    pub fn new(store: StatsStore) -> Self {
        let collection = store.load();
        log::info!(
            "Loaded {} stat record(s) from {}",
            collection.len(),
            store.path().display()
        );
        Self {
            store,
            collection: RwLock::new(collection),
        }
    }
}

type AppState = Data<StatsState>;

/// Name offered for the filtered CSV download.
pub const EXPORT_FILE_NAME: &str = "filtered_stats.csv";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Query string: ?player=...&game=... (missing means "All").
#[derive(Deserialize)]
struct FilterQuery {
    #[serde(default)]
    player: Selection,
    #[serde(default)]
    game: Selection,
}

impl FilterQuery {
    fn apply(&self, collection: &StatCollection) -> StatCollection {
        filter(collection, &self.player, &self.game)
    }
}

#[derive(Deserialize)]
struct TrendQuery {
    stat: Option<String>,
    #[serde(flatten)]
    filter: FilterQuery,
}

#[derive(Serialize)]
struct StatsResponse {
    columns: [&'static str; 15],
    records: Vec<StatRecord>,
    players: Vec<String>,
    games: Vec<String>,
    /// Records stored, before filtering.
    total: usize,
}

#[derive(Serialize)]
struct AddStatsResponse {
    record: Option<StatRecord>,
    total: usize,
}

#[derive(Serialize)]
struct TrendResponse {
    title: String,
    stat: &'static str,
    stats: Vec<&'static str>,
    series: Vec<TrendSeries>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "ultimate-stats-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Filtered game log plus the choices for both filter dropdowns.
#[get("/api/stats")]
async fn api_list_stats(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let g = match state.collection.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let filtered = query.apply(&g);
    HttpResponse::Ok().json(StatsResponse {
        columns: STAT_COLUMNS,
        records: filtered.records().to_vec(),
        players: options_with_all(g.player_options()),
        games: options_with_all(g.game_options()),
        total: g.len(),
    })
}

/// Log one player's game. Empty player/game is a 400 and nothing is written.
#[post("/api/stats")]
async fn api_add_stats(state: AppState, body: Json<StatInput>) -> HttpResponse {
    let mut g = match state.collection.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match state.store.append(&g, &body) {
        Ok(next) => {
            *g = next;
            HttpResponse::Ok().json(AddStatsResponse {
                record: g.last().cloned(),
                total: g.len(),
            })
        }
        Err(e) if e.is_validation() => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Delete every record (the page asks for confirmation first).
#[delete("/api/stats")]
async fn api_delete_stats(state: AppState) -> HttpResponse {
    let mut g = match state.collection.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let deleted = g.len();
    match state.store.clear_all(&g) {
        Ok(empty) => {
            *g = empty;
            HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Download the filtered view as CSV.
#[get("/api/stats/export")]
async fn api_export_stats(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let g = match state.collection.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match to_csv(&query.apply(&g)) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ))
            .body(bytes),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Chart data for one stat over the filtered view.
#[get("/api/stats/trend")]
async fn api_trend(state: AppState, query: Query<TrendQuery>) -> HttpResponse {
    let stat = match query.stat.as_deref() {
        None => Stat::default(),
        Some(label) => match Stat::from_label(label) {
            Some(stat) => stat,
            None => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("Unknown stat: {}", label) }))
            }
        },
    };
    let g = match state.collection.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let filtered = query.filter.apply(&g);
    HttpResponse::Ok().json(TrendResponse {
        title: stat.title(),
        stat: stat.label(),
        stats: Stat::ALL.iter().map(|s| s.label()).collect(),
        series: trend_series(&filtered, stat),
    })
}

/// Register every API route. Expects `Data<StatsState>` in app data.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_export_stats)
        .service(api_trend)
        .service(api_list_stats)
        .service(api_add_stats)
        .service(api_delete_stats);
}
