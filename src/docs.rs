use axum::Json;
use serde::Serialize;

/// One entry in the route listing served at `/`.
#[derive(Debug, Serialize)]
pub struct RouteDoc {
    pub url: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<&'static str>,
}

pub fn route_docs() -> Vec<RouteDoc> {
    vec![
        RouteDoc {
            url: "/",
            method: "GET",
            description: "API documentation",
            payload: None,
        },
        RouteDoc {
            url: "/login",
            method: "POST",
            description: "login, returns access and refresh tokens",
            payload: Some("{id, password}"),
        },
        RouteDoc {
            url: "/signup",
            method: "POST",
            description: "create a user account",
            payload: Some("{id, password, provider?}"),
        },
        RouteDoc {
            url: "/update",
            method: "PUT",
            description: "update a user account",
            payload: Some("{id, password, provider}"),
        },
        RouteDoc {
            url: "/dropout/:id",
            method: "DELETE",
            description: "delete a user account",
            payload: None,
        },
    ]
}

pub async fn documentation() -> Json<Vec<RouteDoc>> {
    Json(route_docs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_route() {
        let docs = route_docs();
        let urls: Vec<&str> = docs.iter().map(|d| d.url).collect();
        assert_eq!(urls, ["/", "/login", "/signup", "/update", "/dropout/:id"]);
    }

    #[test]
    fn payload_field_omitted_when_absent() {
        let json = serde_json::to_string(&route_docs()).unwrap();
        assert!(json.contains(r#""url":"/login""#));
        assert!(!json.contains("null"));
    }
}
