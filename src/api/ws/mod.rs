//! Web service actions
//!
//! Every action is served at `/api/{controller}/{action}` and declared once in
//! [`ACTIONS`]. Declaring an action POST-only installs the verb guard in front
//! of it; the handler then only sees POST requests.

pub mod licenses;
pub mod settings;
pub mod webservices;

use axum::{
    handler::Handler,
    middleware,
    routing::{any, MethodRouter},
    Router,
};
use serde::Serialize;

use super::middleware::verb_guard_middleware;
use super::state::AppState;

/// Declaration of a web service action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WsAction {
    controller: &'static str,
    key: &'static str,
    post: bool,
    internal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<&'static str>,
    description: &'static str,
}

impl WsAction {
    pub const fn new(controller: &'static str, key: &'static str) -> Self {
        Self {
            controller,
            key,
            post: false,
            internal: false,
            since: None,
            description: "",
        }
    }

    pub const fn post(mut self, post: bool) -> Self {
        self.post = post;
        self
    }

    pub const fn internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }

    pub const fn with_since(mut self, version: &'static str) -> Self {
        self.since = Some(version);
        self
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn controller(&self) -> &'static str {
        self.controller
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn is_post(&self) -> bool {
        self.post
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn since(&self) -> Option<&'static str> {
        self.since
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn path(&self) -> String {
        format!("/api/{}/{}", self.controller, self.key)
    }
}

pub const LIST_LICENSES: WsAction = WsAction::new("licenses", "list")
    .internal(true)
    .with_since("6.1")
    .with_description("List licenses settings. Requires 'Administer System' permission");

pub const SET_SETTING: WsAction = WsAction::new("settings", "set")
    .post(true)
    .with_since("6.1")
    .with_description("Update a setting value. Requires 'Administer System' permission");

pub const RESET_SETTINGS: WsAction = WsAction::new("settings", "reset")
    .post(true)
    .with_since("6.1")
    .with_description("Remove setting values. Requires 'Administer System' permission");

pub const LIST_WEBSERVICES: WsAction = WsAction::new("webservices", "list")
    .with_description("List web services and their actions");

/// Every action served by the API
pub const ACTIONS: [WsAction; 4] = [LIST_LICENSES, SET_SETTING, RESET_SETTINGS, LIST_WEBSERVICES];

/// Router with all web service actions
pub fn create_ws_router() -> Router<AppState> {
    Router::new()
        .route(&LIST_LICENSES.path(), action(LIST_LICENSES, licenses::list_licenses))
        .route(&SET_SETTING.path(), action(SET_SETTING, settings::set_setting))
        .route(&RESET_SETTINGS.path(), action(RESET_SETTINGS, settings::reset_settings))
        .route(
            &LIST_WEBSERVICES.path(),
            action(LIST_WEBSERVICES, webservices::list_webservices),
        )
}

/// Accepts every verb and lets the guard decide from the declaration
fn action<H, T>(declaration: WsAction, handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    any(handler).layer(middleware::from_fn_with_state(
        declaration,
        verb_guard_middleware,
    ))
}
