//! URL-bar RPC server: JSON-RPC over stdin/stdout for the browser shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"urlbar.input", "params":{"window_id":1,"tab_id":1,"input":"goo"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Events:   {"event":"suggestions_changed", "window_id":1, "suggestions":[...]}
//!
//! Logs go to stderr, filtered by `URLBAR_LOG` (default "info").

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use urlbar_suggest::app::App;
use urlbar_suggest::rpc_handler::handle_method;
use urlbar_suggest::suggestion::UrlBarEvent;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

/// Prefer URLBAR_DATA_DIR, fall back to the platform data dir.
fn data_dir() -> PathBuf {
    match std::env::var("URLBAR_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => urlbar_suggest::platform::get_data_dir(),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("URLBAR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    let db_path = dir.join("urlbar.db");
    let settings_path = std::env::var("URLBAR_DATA_DIR")
        .ok()
        .map(|d| PathBuf::from(d).join("settings.json").to_string_lossy().into_owned());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UrlBarEvent>();
    let app = Mutex::new(App::new(&db_path.to_string_lossy(), settings_path, Arc::new(event_tx))?);
    tracing::info!(db = %db_path.display(), "urlbar service started");

    // Single writer so responses and events never interleave mid-line.
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = out_rx.recv().await {
            if stdout.write_all(line.as_bytes()).await.is_err()
                || stdout.write_all(b"\n").await.is_err()
                || stdout.flush().await.is_err()
            {
                break;
            }
        }
    });

    let events_out = out_tx.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => {
                    if events_out.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::error!(error = %e, "failed to encode event"),
            }
        }
    });

    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    let _ = out_tx.send(ready.to_string());

    // Max 200 RPC requests per second.
    let mut rate_limiter = RateLimiter::new(200);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let _ = out_tx.send(json!({"id": null, "error": format!("parse error: {}", e)}).to_string());
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            tracing::warn!("rate limit exceeded");
            let _ = out_tx.send(json!({"id": id, "error": "rate limit exceeded"}).to_string());
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::debug!(method, error = %err, "request failed");
                json!({"id": id, "error": err})
            }
        };
        let _ = out_tx.send(response.to_string());
    }

    tracing::info!("stdin closed, shutting down");
    drop(out_tx);
    drop(app);
    let _ = writer.await;
    Ok(())
}
