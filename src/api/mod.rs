// API client for the Quillpad admin backend
use crate::types::{AdminUser, Envelope};
use leptos::use_context;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "ssr"))]
use gloo_net::http::Request;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct UsernamePayload<'a> {
    username: &'a str,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the admin user listing that backs the manage-users table.
    pub async fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get("/users/list").await
    }

    /// Request a new account. The username is forwarded verbatim; the server
    /// owns validation and reports the outcome in the reply envelope.
    pub async fn add_user(&self, username: &str) -> Result<Envelope, ApiError> {
        self.post("/add_user", UsernamePayload { username }).await
    }

    /// Toggle the suspension flag on an account. The response body is not
    /// inspected; callers reload the page to pick up the new state.
    pub async fn suspend_user(&self, username: &str) -> Result<(), ApiError> {
        self.post_discard("/suspend_user", UsernamePayload { username })
            .await
    }

    // Generic HTTP methods
    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(feature = "ssr")]
        {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(ApiError::Http(response.status().as_u16()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        }

        #[cfg(not(feature = "ssr"))]
        {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(ApiError::Http(response.status()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        }
    }

    async fn post<T, B>(&self, path: &str, body: B) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(feature = "ssr")]
        {
            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(ApiError::Http(response.status().as_u16()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        }

        #[cfg(not(feature = "ssr"))]
        {
            let response = Request::post(&url)
                .json(&body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(ApiError::Http(response.status()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        }
    }

    /// POST without decoding the response body, for endpoints whose reply the
    /// caller ignores.
    async fn post_discard<B>(&self, path: &str, body: B) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(feature = "ssr")]
        {
            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(ApiError::Http(response.status().as_u16()));
            }

            Ok(())
        }

        #[cfg(not(feature = "ssr"))]
        {
            let response = Request::post(&url)
                .json(&body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(ApiError::Http(response.status()));
            }

            Ok(())
        }
    }
}

/// Reactive accessor for the client provided at the application root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient must be provided")
}

// Error types
#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Http(u16),
    Serialization(String),
    Deserialization(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http(status) => write!(f, "HTTP error: {}", status),
            ApiError::Serialization(e) => write!(f, "Serialization error: {}", e),
            ApiError::Deserialization(e) => write!(f, "Deserialization error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_payload_shape() {
        let payload = serde_json::to_value(UsernamePayload { username: "ada" }).unwrap();
        assert_eq!(payload, serde_json::json!({ "username": "ada" }));

        // malformed or empty values are forwarded as-is
        let empty = serde_json::to_value(UsernamePayload { username: "" }).unwrap();
        assert_eq!(empty, serde_json::json!({ "username": "" }));
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::Http(502).to_string(),
            "HTTP error: 502"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
