//! # GitHub HTTP Client
//!
//! The client handle: holds the transport, the API root, and the bearer
//! token, and turns each transport round trip into a response envelope.
//! Endpoint bindings live in [`crate::endpoints`] as `impl` blocks on
//! [`GhClient`], one module per REST resource.

use reqwest::{Client, Method, RequestBuilder, header};
use tracing::debug;

use crate::consts;
use crate::error::Error;
use crate::response::{ApiResponse, PageLinks, RateLimit};

/// A GitHub API client.
///
/// Cheap to clone — the underlying connection pool is shared and
/// thread-safe, so concurrent callers should clone the handle rather than
/// serialize behind a lock.
#[derive(Clone)]
pub struct GhClient {
  http: Client,
  pub(crate) base_url: String,
  token: String,
  user_agent: String,
}

impl GhClient {
  /// Create a client that authenticates with the given bearer token.
  pub fn new(token: impl Into<String>) -> Result<Self, Error> {
    let http = Client::builder().build()?;
    Ok(Self {
      http,
      base_url: consts::API_BASE_URL.to_string(),
      token: token.into(),
      user_agent: consts::USER_AGENT.to_string(),
    })
  }

  /// Point the client at a different API root (GitHub Enterprise, tests).
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the User-Agent reported to the API.
  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = user_agent.into();
    self
  }

  /// Retrieve the octocat with a saying.
  pub async fn octocat_says(&self) -> Result<ApiResponse, Error> {
    let url = format!("{}/octocat", self.base_url);
    self.get(&url).await
  }

  /// Start a request with the headers GitHub expects on every call.
  fn request(&self, method: Method, url: &str) -> RequestBuilder {
    self
      .http
      .request(method, url)
      .header(header::ACCEPT, consts::ACCEPT)
      .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
      .header(consts::API_VERSION_HEADER, consts::API_VERSION)
      .header(header::USER_AGENT, self.user_agent.as_str())
  }

  /// Perform one round trip and wrap the outcome in an envelope.
  ///
  /// Transport failures become [`Error::Transport`]; every received HTTP
  /// response, regardless of status, is a successful envelope.
  pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, Error> {
    let response = request.send().await?;

    let status = response.status();
    let rate_limit = RateLimit::from_headers(response.headers());
    let links = PageLinks::from_headers(response.headers());
    let body = response.text().await?;

    debug!(%status, remaining = rate_limit.remaining, "api call complete");

    Ok(ApiResponse {
      status,
      body,
      rate_limit,
      links,
    })
  }

  pub(crate) async fn get(&self, url: &str) -> Result<ApiResponse, Error> {
    self.execute(self.request(Method::GET, url)).await
  }

  /// GET for list endpoints: a set page URL is used verbatim, otherwise the
  /// constructed URL plus whatever query parameters the options emitted.
  pub(crate) async fn get_paged(
    &self,
    url: String,
    page_url: Option<&str>,
    query: Vec<(&'static str, String)>,
  ) -> Result<ApiResponse, Error> {
    let request = match page_url {
      Some(page) => self.request(Method::GET, page),
      None if query.is_empty() => self.request(Method::GET, &url),
      None => self.request(Method::GET, &url).query(&query),
    };
    self.execute(request).await
  }

  pub(crate) async fn post(&self, url: &str, data: &str) -> Result<ApiResponse, Error> {
    self.execute(self.request(Method::POST, url).body(data.to_string())).await
  }

  pub(crate) async fn patch(&self, url: &str, data: &str) -> Result<ApiResponse, Error> {
    self
      .execute(self.request(Method::PATCH, url).body(data.to_string()))
      .await
  }

  pub(crate) async fn put(&self, url: &str, data: Option<&str>) -> Result<ApiResponse, Error> {
    let request = match data {
      Some(data) => self.request(Method::PUT, url).body(data.to_string()),
      None => self.request(Method::PUT, url),
    };
    self.execute(request).await
  }

  pub(crate) async fn delete(&self, url: &str) -> Result<ApiResponse, Error> {
    self.execute(self.request(Method::DELETE, url)).await
  }
}
