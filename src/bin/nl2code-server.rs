use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc, time::Instant};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use anyhow::Context;
use nl2code::banner::{self, Surface};
use nl2code::config::ServerConfig;
use nl2code::engine::{self, CommandHelp, PLEASE_ENTER, SUPPORTED_COMMANDS};
use nl2code::session::SessionStore;

use tokio::sync::Mutex;

/* -------------------------- App state -------------------------- */

struct AppState {
    /// Optional API key for requests (NL2CODE_API_KEY).
    api_key: Option<String>,
    /// Last output per form session; the translator itself keeps nothing.
    sessions: Mutex<SessionStore>,
}

fn api_key_matches(headers: &HeaderMap, expected: &str) -> bool {
    if let Some(value) = headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
        if value.trim() == expected {
            return true;
        }
    }

    if let Some(auth) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        let auth = auth.trim();
        if let Some(token) = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
        {
            if token.trim() == expected {
                return true;
            }
        }
    }

    false
}

impl AppState {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        match &self.api_key {
            Some(expected) => api_key_matches(headers, expected),
            None => true,
        }
    }
}

/* -------------------------- Request/Response ------------------- */
/* WebUI may send 'command' or 'content'. */

#[derive(Deserialize, Debug)]
struct ConvertReq {
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    session: Option<String>,
}

#[derive(Serialize)]
struct ConvertResp {
    ok: bool,
    code: String,
    rule: Option<&'static str>,
    logs: Vec<String>,
}

#[derive(Serialize)]
struct SessionResp {
    ok: bool,
    code: String,
}

#[derive(Serialize)]
struct CommandsResp {
    commands: &'static [CommandHelp],
}

/* -------------------------- Server main ------------------------ */

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nl2code::init_logging("info");
    banner::print(Surface::Server);

    let cfg = ServerConfig::from_env().context("loading configuration")?;
    let addr: SocketAddr = cfg.addr()?;

    if cfg.api_key.is_some() {
        info!("API key required for /api requests");
    }

    let state = Arc::new(AppState {
        api_key: cfg.api_key.clone(),
        sessions: Mutex::new(SessionStore::new(cfg.session_ttl)),
    });

    let api = Router::new()
        .route("/convert", post(api_convert))
        .route("/session/:id", get(api_session))
        .route("/commands", get(api_commands))
        .with_state(state);

    // API under /api; the two-panel form and its assets come from the web dir.
    let app = Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(&cfg.web_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "bind failed; is the port already in use?");
            return Err(e).with_context(|| format!("binding {addr}"));
        }
    };
    info!(%addr, web_dir = %cfg.web_dir.display(), "nl2code API listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/* -------------------------- Handlers --------------------------- */

async fn api_convert(
    State(s): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ConvertReq>,
) -> impl IntoResponse {
    let mut logs: Vec<String> = Vec::new();

    if !s.authorized(&headers) {
        logs.push("auth: missing or invalid API key".into());
        return (
            StatusCode::UNAUTHORIZED,
            Json(ConvertResp {
                ok: false,
                code: "# ERROR: missing or invalid API key".into(),
                rule: None,
                logs,
            }),
        );
    }

    // command > content > empty
    let command = req.command.or(req.content).unwrap_or_default();

    let (ok, code, rule) = match engine::convert_detailed(&command) {
        None => {
            logs.push("warn: empty input".into());
            (false, PLEASE_ENTER.to_string(), None)
        }
        Some(t) => {
            let rule = t.rule().map(|r| r.as_str());
            match rule {
                Some(r) => logs.push(format!("rule={r}")),
                None => logs.push("unmatched: fallback returned".into()),
            }
            (t.is_matched(), t.into_code(), rule)
        }
    };

    if let Some(id) = req.session.as_deref().filter(|id| !id.is_empty()) {
        let mut sessions = s.sessions.lock().await;
        sessions.remember(id, code.clone(), Instant::now());
        logs.push(format!("session: stored output ({} active)", sessions.len()));
    }

    if !ok {
        warn!(rule = ?rule, "command not translated");
    }

    (
        StatusCode::OK,
        Json(ConvertResp {
            ok,
            code,
            rule,
            logs,
        }),
    )
}

async fn api_session(
    State(s): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if !s.authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SessionResp {
                ok: false,
                code: "# ERROR: missing or invalid API key".into(),
            }),
        );
    }

    let code = s.sessions.lock().await.display(&id, Instant::now());
    (StatusCode::OK, Json(SessionResp { ok: true, code }))
}

async fn api_commands() -> impl IntoResponse {
    Json(CommandsResp {
        commands: SUPPORTED_COMMANDS,
    })
}
