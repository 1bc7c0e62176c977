use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{ClientConfig, HttpClient};
use crate::{Error, Method, Request, Response, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::RwLock;
use url::form_urlencoded;
use url::Url;


/// Header and form-value maps. A `BTreeMap` keeps name ordering stable
/// (lexicographic), which makes merged header order and form-body encoding
/// deterministic.
pub type Headers = BTreeMap<String, String>;

/// A reusable client configuration: a base URL plus a set of default headers,
/// bound to one blocking HTTP client. Every request issued through a DAO
/// targets `base_url + path` verbatim; no slash is inserted or removed, so
/// the base URL must not end with a slash when paths start with one.
///
/// Default headers are shared by every caller holding the same DAO and can be
/// mutated for the life of the process (for example to set an auth token).
/// Per-call headers are always merged over the defaults, the explicit value
/// winning on a name conflict.
pub struct HttpDao {
    base_url: String,
    default_headers: RwLock<Headers>,
    client: Box<dyn HttpClient>,
}

impl HttpDao {
    pub fn new(base_url: impl Into<String>, default_headers: Headers) -> Self {
        Self::with_client(
            base_url,
            default_headers,
            Box::new(ReqwestHttpClient::default()),
        )
    }

    /// Same as [`HttpDao::new`] but with explicit transport options.
    pub fn with_config(
        base_url: impl Into<String>,
        default_headers: Headers,
        config: ClientConfig,
    ) -> Self {
        Self::with_client(
            base_url,
            default_headers,
            Box::new(ReqwestHttpClient::create(config)),
        )
    }

    pub fn with_client(
        base_url: impl Into<String>,
        default_headers: Headers,
        client: Box<dyn HttpClient>,
    ) -> Self {
        HttpDao {
            base_url: base_url.into(),
            default_headers: RwLock::new(default_headers),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> Headers {
        self.default_headers.read().unwrap().clone()
    }

    /// Writes or replaces one default header in place. Visible to every
    /// caller sharing this DAO from the next request on.
    pub fn set_default_header(&self, name: impl Into<String>, value: impl Into<String>) {
        self.default_headers
            .write()
            .unwrap()
            .insert(name.into(), value.into());
    }

    /// Writes `Authorization: Bearer <token>` into the default headers.
    pub fn set_auth_token(&self, token: &str) {
        self.set_default_header("Authorization", format!("Bearer {}", token));
    }

    /// Builds a request for `base_url + path`. The concatenated target must
    /// parse as an absolute URL; the default headers are merged with
    /// `headers`, explicit values winning on conflicting names.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        headers: Option<&Headers>,
        body: Option<String>,
    ) -> Result<Request> {
        let target = format!("{}{}", self.base_url, path);
        Url::parse(&target).map_err(|source| Error::Build {
            target: target.clone(),
            source,
        })?;

        Ok(Request {
            method,
            target,
            headers: self.merge_headers(headers),
            body,
        })
    }

    /// Builds a POST whose body is the form pairs URL-encoded in key order,
    /// with `Content-Type` and `Content-Length` forced to match the encoded
    /// body regardless of what the caller supplied for those names.
    pub fn build_form_request(
        &self,
        path: &str,
        headers: Option<&Headers>,
        form: &Headers,
    ) -> Result<Request> {
        let body = encode_form(form);

        let mut headers = headers.cloned().unwrap_or_default();
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        headers.insert("Content-Length".to_string(), body.len().to_string());

        self.build_request(Method::Post, path, Some(&headers), Some(body))
    }

    pub fn get(&self, path: &str, headers: Option<&Headers>) -> Result<Response> {
        self.execute(self.build_request(Method::Get, path, headers, None)?)
    }

    pub fn delete(&self, path: &str, headers: Option<&Headers>) -> Result<Response> {
        self.execute(self.build_request(Method::Delete, path, headers, None)?)
    }

    pub fn post(
        &self,
        path: &str,
        headers: Option<&Headers>,
        body: impl Into<String>,
    ) -> Result<Response> {
        self.execute(self.build_request(Method::Post, path, headers, Some(body.into()))?)
    }

    pub fn put(
        &self,
        path: &str,
        headers: Option<&Headers>,
        body: impl Into<String>,
    ) -> Result<Response> {
        self.execute(self.build_request(Method::Put, path, headers, Some(body.into()))?)
    }

    pub fn post_form(
        &self,
        path: &str,
        headers: Option<&Headers>,
        form: &Headers,
    ) -> Result<Response> {
        self.execute(self.build_form_request(path, headers, form)?)
    }

    /// Executes a GET and decodes the response body as JSON. Decoding is only
    /// attempted once the request itself has succeeded; a transport failure
    /// surfaces as [`Error::Transport`], never as a decode error.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str, headers: Option<&Headers>) -> Result<T> {
        decode(self.get(path, headers)?)
    }

    pub fn delete_as<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&Headers>,
    ) -> Result<T> {
        decode(self.delete(path, headers)?)
    }

    pub fn post_as<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&Headers>,
        body: impl Into<String>,
    ) -> Result<T> {
        decode(self.post(path, headers, body)?)
    }

    pub fn put_as<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&Headers>,
        body: impl Into<String>,
    ) -> Result<T> {
        decode(self.put(path, headers, body)?)
    }

    fn execute(&self, request: Request) -> Result<Response> {
        self.client.execute(&request)
    }

    fn merge_headers(&self, explicit: Option<&Headers>) -> Vec<(String, String)> {
        let mut merged = self.default_headers.read().unwrap().clone();
        if let Some(explicit) = explicit {
            for (name, value) in explicit {
                merged.insert(name.clone(), value.clone());
            }
        }
        merged.into_iter().collect()
    }
}

/// Default headers for a JSON API: just `Content-Type: application/json`.
pub fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.body.unwrap_or_default();
    Ok(serde_json::from_str(&body)?)
}

fn encode_form(form: &Headers) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in form {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}
