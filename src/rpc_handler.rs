//! RPC method handler for the URL-bar JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. Locks on the
//! app and the database are released before anything is awaited.

use std::sync::{Mutex, MutexGuard};

use crate::app::App;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::suggestion::filter_suggestion_list_by_type;
use crate::suggestion::normalize::get_normalized_suggestion;
use crate::suggestion::url_util::is_http_or_https;
use crate::types::errors::TabError;
use crate::types::search::find_search_engine;

use serde_json::{json, Value};

fn lock(app: &Mutex<App>) -> Result<MutexGuard<'_, App>, String> {
    app.lock().map_err(|e| e.to_string())
}

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {key}"))
}

fn u32_param(params: &Value, key: &str) -> Result<u32, String> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| format!("missing {key}"))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Must run inside a Tokio runtime: `urlbar.input` spawns debounced tasks.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true, "version": env!("CARGO_PKG_VERSION")})),

        // ─── History ───
        "history.record" => {
            let url = str_param(params, "url")?;
            let title = params.get("title").and_then(|v| v.as_str()).unwrap_or("");
            if !is_http_or_https(url) {
                return Err("invalid url: must start with http:// or https://".to_string());
            }
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            let mut mgr = HistoryManager::new(db.connection());
            mgr.set_recording_enabled(a.history_recording);
            let id = mgr.record_visit(url, title).map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "history.search" => {
            let query = str_param(params, "query")?;
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            let entries = HistoryManager::new(db.connection())
                .search_history(query)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(entries).map_err(|e| e.to_string())
        }
        "history.recent" => {
            let limit = params.get("limit").and_then(|v| v.as_u64()).map(|l| l as usize);
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            let entries = HistoryManager::new(db.connection())
                .list_history(limit)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(entries).map_err(|e| e.to_string())
        }
        "history.delete" => {
            let id = str_param(params, "id")?;
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            HistoryManager::new(db.connection())
                .delete_entry(id)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.set_recording" => {
            let enabled = params
                .get("enabled")
                .and_then(|v| v.as_bool())
                .ok_or("missing enabled")?;
            let mut a = lock(app)?;
            a.history_recording = enabled;
            Ok(json!({"recording": enabled}))
        }
        "history.clear" => {
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            HistoryManager::new(db.connection())
                .clear_all()
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let url = str_param(params, "url")?;
            let title = str_param(params, "title")?;
            if !is_http_or_https(url) {
                return Err("invalid url: must start with http:// or https://".to_string());
            }
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(db.connection());
            let id = mgr.add_bookmark(url, title).map_err(|e| e.to_string())?;
            if let Some(tags) = params.get("tags").and_then(|v| v.as_array()) {
                for tag in tags.iter().filter_map(|t| t.as_str()) {
                    mgr.add_tag(&id, tag).map_err(|e| e.to_string())?;
                }
            }
            Ok(json!({"id": id, "url": url, "title": title}))
        }
        "bookmark.tag" => {
            let id = str_param(params, "id")?;
            let tag = str_param(params, "tag")?;
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            BookmarkManager::new(db.connection())
                .add_tag(id, tag)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.rename" => {
            let id = str_param(params, "id")?;
            let title = str_param(params, "title")?;
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            BookmarkManager::new(db.connection())
                .update_title(id, title)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.search" => {
            let query = str_param(params, "query")?;
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            let bookmarks = BookmarkManager::new(db.connection())
                .search_bookmarks(query)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmarks).map_err(|e| e.to_string())
        }
        "bookmark.list" => {
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            let bookmarks = BookmarkManager::new(db.connection())
                .list_bookmarks()
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmarks).map_err(|e| e.to_string())
        }
        "bookmark.delete" => {
            let id = str_param(params, "id")?;
            let a = lock(app)?;
            let db = a.db.lock().map_err(|e| e.to_string())?;
            BookmarkManager::new(db.connection())
                .remove_bookmark(id)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Tabs ───
        "tab.create" => {
            let window_id = u32_param(params, "window_id")?;
            let url = params.get("url").and_then(|v| v.as_str());
            let active = params.get("active").and_then(|v| v.as_bool()).unwrap_or(true);
            let mut a = lock(app)?;
            let id = a.tab_manager.create_tab(window_id, url, active);
            Ok(json!({"id": id}))
        }
        "tab.close" => {
            let id = u32_param(params, "id")?;
            let mut a = lock(app)?;
            let window_id = a
                .tab_manager
                .get_tab(id)
                .map(|t| t.window_id)
                .ok_or_else(|| TabError::NotFound(id).to_string())?;
            a.tab_manager.close_tab(id).map_err(|e| e.to_string())?;
            a.forget_tab(window_id, id);
            Ok(json!({"ok": true}))
        }
        "tab.activate" => {
            let id = u32_param(params, "id")?;
            let mut a = lock(app)?;
            a.tab_manager.switch_tab(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "tab.update" => {
            let id = u32_param(params, "id")?;
            let mut a = lock(app)?;
            if let Some(url) = params.get("url").and_then(|v| v.as_str()) {
                a.tab_manager.update_tab_url(id, url).map_err(|e| e.to_string())?;
            }
            if let Some(title) = params.get("title").and_then(|v| v.as_str()) {
                a.tab_manager.update_tab_title(id, title).map_err(|e| e.to_string())?;
            }
            Ok(json!({"ok": true}))
        }
        "tab.list" => {
            let window_id = u32_param(params, "window_id")?;
            let a = lock(app)?;
            let tabs = a.tab_manager.get_tabs_by_window_id(window_id);
            serde_json::to_value(tabs).map_err(|e| e.to_string())
        }
        "tab.set_search_engine" => {
            let id = u32_param(params, "id")?;
            let detail = match params.get("engine").and_then(|v| v.as_str()) {
                Some(name) => Some(find_search_engine(name).ok_or_else(|| format!("unknown search engine: {name}"))?),
                None => None,
            };
            let mut a = lock(app)?;
            if a.tab_manager.get_tab(id).is_none() {
                return Err(format!("Tab not found: {id}"));
            }
            a.set_frame_search_detail(id, detail);
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = lock(app)?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = lock(app)?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_debounce_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = lock(app)?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.apply_debounce_settings();
            Ok(json!({"ok": true}))
        }

        // ─── URL bar ───
        "urlbar.input" => {
            let window_id = u32_param(params, "window_id")?;
            let tab_id = u32_param(params, "tab_id")?;
            let input = params.get("input").and_then(|v| v.as_str()).unwrap_or("");
            let a = lock(app)?;
            a.on_url_input(window_id, tab_id, input);
            Ok(json!({"ok": true}))
        }
        "urlbar.suggest" => {
            let window_id = u32_param(params, "window_id")?;
            let input = params.get("input").and_then(|v| v.as_str()).unwrap_or("");
            let grouped = params.get("grouped").and_then(|v| v.as_bool()).unwrap_or(false);
            let (engine, ctx) = {
                let a = lock(app)?;
                (a.suggestion_engine.clone(), a.suggestion_context())
            };
            let suggestions = engine.suggest(&ctx, window_id, input).await;
            let normalized = get_normalized_suggestion(&suggestions, None);
            let list = if grouped {
                serde_json::to_value(filter_suggestion_list_by_type(&suggestions))
            } else {
                serde_json::to_value(&suggestions)
            }
            .map_err(|e| e.to_string())?;
            Ok(json!({"suggestions": list, "normalized": normalized}))
        }
        "urlbar.search_results" => {
            let a = lock(app)?;
            serde_json::to_value(a.search_results.snapshot()).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
