//! `webservices` controller - self-description of the API

use std::collections::BTreeMap;

use axum::extract::Query;
use serde::{Deserialize, Serialize};

use crate::api::types::Json;

use super::{WsAction, ACTIONS};

#[derive(Debug, Default, Deserialize)]
pub struct ListWebServicesParams {
    #[serde(default)]
    pub include_internals: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebServicesResponse {
    pub web_services: Vec<WebServiceDescription>,
}

#[derive(Debug, Serialize)]
pub struct WebServiceDescription {
    pub path: String,
    pub actions: Vec<WsAction>,
}

pub async fn list_webservices(
    Query(params): Query<ListWebServicesParams>,
) -> Json<WebServicesResponse> {
    Json(describe(&ACTIONS, params.include_internals))
}

fn describe(actions: &[WsAction], include_internals: bool) -> WebServicesResponse {
    let mut by_controller: BTreeMap<&str, Vec<WsAction>> = BTreeMap::new();

    for action in actions.iter().filter(|a| include_internals || !a.is_internal()) {
        by_controller.entry(action.controller()).or_default().push(*action);
    }

    WebServicesResponse {
        web_services: by_controller
            .into_iter()
            .map(|(controller, actions)| WebServiceDescription {
                path: format!("api/{}", controller),
                actions,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_actions_hidden_by_default() {
        let response = describe(&ACTIONS, false);
        let paths: Vec<_> = response.web_services.iter().map(|ws| ws.path.as_str()).collect();

        assert_eq!(paths, vec!["api/settings", "api/webservices"]);
    }

    #[test]
    fn test_include_internals() {
        let response = describe(&ACTIONS, true);
        let licenses = &response.web_services[0];

        assert_eq!(licenses.path, "api/licenses");
        assert_eq!(licenses.actions[0].key(), "list");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(describe(&ACTIONS, false)).unwrap();
        let set = &json["webServices"][0]["actions"][0];

        assert_eq!(set["key"], "set");
        assert_eq!(set["post"], true);
        assert_eq!(set["since"], "6.1");
    }
}
