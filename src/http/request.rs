//! Outgoing request construction.
//!
//! # Responsibilities
//! - Describe one logical API call (method, path, JSON body)
//! - Build the fixed header set (authorization, content type, user agent)
//! - Join the API base with a resource path

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;

use crate::config::BotMetadata;
use crate::http::auth::Token;
use crate::http::types::{HttpError, HttpResult};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP verbs used by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One logical API call, built fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body. Fails if `body` does not serialize.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> HttpResult<Self> {
        self.body = Some(serde_json::to_value(body).map_err(HttpError::Encode)?);
        Ok(self)
    }

    /// Serialized body text, if a body is attached.
    pub fn body_text(&self) -> HttpResult<Option<String>> {
        self.body
            .as_ref()
            .map(|body| serde_json::to_string(body).map_err(HttpError::Encode))
            .transpose()
    }
}

/// Join the API base and a resource path with exactly one `/` between them.
pub fn join_url(api_base: &str, path: &str) -> HttpResult<String> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return Err(HttpError::InvalidPath);
    }
    Ok(format!("{}/{}", api_base.trim_end_matches('/'), path))
}

/// Build the headers sent with every request.
pub fn build_headers(token: &Token, metadata: &BotMetadata) -> HttpResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&token.authorization())
        .map_err(|_| HttpError::InvalidHeader { name: "Authorization" })?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    let user_agent = HeaderValue::from_str(&metadata.user_agent())
        .map_err(|_| HttpError::InvalidHeader { name: "User-Agent" })?;
    headers.insert(USER_AGENT, user_agent);

    Ok(headers)
}
