use crate::config::AsanaConfig;
use crate::error::{AsanaError, Result};
use crate::models::{DataEnvelope, PageEnvelope, Project, TaskCounts, UserProfile, Workspace};
use crate::rate_limiter::RateLimiter;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER, USER_AGENT};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Page size for collection endpoints; Asana allows at most 100.
const PAGE_LIMIT: u32 = 100;

const PROJECT_OPT_FIELDS: &str =
    "name,color,archived,completed,current_status.color,current_status.title";
const TASK_COUNT_OPT_FIELDS: &str = "num_tasks,num_completed_tasks";

#[derive(Clone)]
pub struct AsanaClient {
    http: HttpClient,
    config: AsanaConfig,
    limiter: RateLimiter,
}

impl AsanaClient {
    pub fn new(config: AsanaConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        let limiter = RateLimiter::new(config.cooldown);
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    pub fn new_with_limiter(config: AsanaConfig, limiter: RateLimiter) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    pub fn config(&self) -> &AsanaConfig {
        &self.config
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Profile of the token's owner. Doubles as the connection check.
    pub async fn get_me(&self) -> Result<UserProfile> {
        self.get_one("users/me", &[]).await
    }

    /// Every workspace visible to the authenticated user.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        self.get_all("workspaces", Vec::new()).await
    }

    /// Projects in a workspace. When `include_archived` is false the
    /// `archived=false` filter is applied server-side; when true the
    /// parameter is omitted so both live and archived projects return.
    pub async fn list_projects(
        &self,
        workspace_gid: &str,
        include_archived: bool,
    ) -> Result<Vec<Project>> {
        let mut query = vec![
            ("workspace", workspace_gid.to_string()),
            ("opt_fields", PROJECT_OPT_FIELDS.to_string()),
        ];
        if !include_archived {
            query.push(("archived", "false".to_string()));
        }
        self.get_all("projects", query).await
    }

    /// Completed/total task counts for a project.
    pub async fn get_task_counts(&self, project_gid: &str) -> Result<TaskCounts> {
        let path = format!("projects/{}/task_counts", project_gid);
        self.get_one(&path, &[("opt_fields", TASK_COUNT_OPT_FIELDS)])
            .await
    }

    async fn get_one<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.limiter.hit().await;
        let mut request = self.http.get(self.url_for(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let envelope: DataEnvelope<T> = Self::parse_json(response).await?;
        Ok(envelope.data)
    }

    /// Fetches a collection endpoint, following `next_page` offsets until
    /// the server stops returning one.
    async fn get_all<T>(&self, path: &str, query: Vec<(&str, String)>) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut offset: Option<String> = None;
        loop {
            self.limiter.hit().await;
            let mut request = self
                .http
                .get(self.url_for(path))
                .query(&query)
                .query(&[("limit", PAGE_LIMIT.to_string())]);
            if let Some(token) = &offset {
                request = request.query(&[("offset", token.as_str())]);
            }
            let response = request.send().await?;
            let page: PageEnvelope<T> = Self::parse_json(response).await?;
            items.extend(page.data);

            match page.next_page.and_then(|next| next.offset) {
                Some(token) => {
                    debug!(path, "following pagination offset");
                    offset = Some(token);
                }
                None => break,
            }
        }
        Ok(items)
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(AsanaError::from);
        }
        let retry_after = parse_retry_after(&response);
        let body = response.text().await.unwrap_or_default();
        Err(build_http_error(status, retry_after, &body))
    }
}

fn build_http_client(config: &AsanaConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        header_value(format!("Bearer {}", config.token))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| AsanaError::Unknown(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| AsanaError::Unknown(err.to_string()))
}

fn parse_retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn build_http_error(status: StatusCode, retry_after: Option<Duration>, body: &str) -> AsanaError {
    let message = extract_error_message(body).unwrap_or_else(|| body.trim().to_string());
    AsanaError::http(status, retry_after, message)
}

/// Pulls the first `errors[].message` out of an Asana error body.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("errors")
            .and_then(|errors| errors.as_array())
            .and_then(|errors| errors.first())
            .and_then(|error| error.get("message"))
            .and_then(|message| message.as_str())
            .map(|message| message.to_string())
    })
}
