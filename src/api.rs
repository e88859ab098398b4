use serde_json::Value;

/// Fire a JSON request against the remote Cubalink23 backend. Failures are
/// folded into an error payload instead of propagating; callers decide how
/// quietly to degrade.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
) -> Value {
    let url = format!("{}{}", api_base_url, endpoint);
    let mut req = match method {
        "GET" => client.get(&url),
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };

    if let Some(b) = body {
        req = req.json(&b);
    }

    match req.send().await {
        Ok(resp) => resp
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({"error": "Failed to parse response"})),
        Err(e) => serde_json::json!({"error": format!("Request failed: {}", e)}),
    }
}

/// Payload `/api/health` answers with when no remote backend is configured.
pub fn local_health() -> Value {
    serde_json::json!({
        "status": "OK",
        "message": "Cubalink23 Web Server Running",
    })
}

pub async fn load_health(client: &reqwest::Client, api_base_url: &str) -> Value {
    if api_base_url.trim().is_empty() {
        return local_health();
    }
    api_call(client, api_base_url, "GET", "/api/health", None).await
}
