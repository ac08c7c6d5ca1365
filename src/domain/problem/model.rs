use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::AppResult;

/// Default metadata type carried in the `extra` member: any JSON value keyed by string.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Metadata that can ride along in the `extra` member of a problem response.
///
/// Only emptiness matters here: an empty map is left out of the JSON body entirely.
pub trait ExtraFields {
    fn is_empty(&self) -> bool;
}

impl ExtraFields for Extra {
    fn is_empty(&self) -> bool {
        serde_json::Map::is_empty(self)
    }
}

impl<K, V, S: BuildHasher> ExtraFields for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V> ExtraFields for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

fn extra_is_absent<X: ExtraFields>(extra: &Option<X>) -> bool {
    extra.as_ref().map_or(true, ExtraFields::is_empty)
}

/// RFC 7807 problem details, rendered as `application/problem+json`.
///
/// Built once per failed request, emitted once, then dropped. Every field is fixed at
/// construction; there are no setters.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "X: Serialize + ExtraFields"))]
#[must_use]
pub struct ProblemResponse<X = Extra> {
    /// RFC 3339 instant at which the problem was created.
    timestamp: String,
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    type_uri: String,
    /// Short, human-readable summary of the problem type.
    title: String,
    /// HTTP status code this problem describes. Informational only; emission never applies it.
    status: u16,
    /// Explanation specific to this occurrence.
    #[serde(skip_serializing_if = "String::is_empty")]
    detail: String,
    /// URI reference identifying this occurrence.
    instance: String,
    /// Additional metadata.
    #[serde(skip_serializing_if = "extra_is_absent")]
    extra: Option<X>,
}

impl ProblemResponse {
    /// Create a problem response stamped with the current time.
    pub fn new(
        status: u16,
        type_uri: impl Into<String>,
        title: impl Into<String>,
        instance: impl Into<String>,
        extra: Option<Extra>,
        detail: Option<&str>,
    ) -> Self {
        Self::assemble(status, type_uri.into(), title.into(), instance.into(), extra, detail)
    }

    /// Like [`ProblemResponse::new`], taking any number of detail strings.
    ///
    /// Only the first one is used; the rest are dropped without error.
    pub fn with_details<I>(
        status: u16,
        type_uri: impl Into<String>,
        title: impl Into<String>,
        instance: impl Into<String>,
        extra: Option<Extra>,
        details: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::assemble(status, type_uri.into(), title.into(), instance.into(), extra, details)
    }
}

impl<X: ExtraFields> ProblemResponse<X> {
    /// Create a problem response whose metadata uses a caller-chosen map type.
    pub fn with_extra(
        status: u16,
        type_uri: impl Into<String>,
        title: impl Into<String>,
        instance: impl Into<String>,
        extra: X,
        detail: Option<&str>,
    ) -> Self {
        Self::assemble(
            status,
            type_uri.into(),
            title.into(),
            instance.into(),
            Some(extra),
            detail,
        )
    }

    fn assemble<I>(
        status: u16,
        type_uri: String,
        title: String,
        instance: String,
        extra: Option<X>,
        details: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut details = details.into_iter();
        let detail = details.next().map(Into::into).unwrap_or_default();

        let ignored = details.count();
        if ignored > 0 {
            tracing::debug!(ignored, title = %title, "Ignoring detail values past the first");
        }

        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            type_uri,
            title,
            status,
            detail,
            instance,
            extra,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn type_uri(&self) -> &str {
        &self.type_uri
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Empty when no detail was supplied.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn extra(&self) -> Option<&X> {
        self.extra.as_ref()
    }
}

impl<X: Serialize + ExtraFields> ProblemResponse<X> {
    /// Serialize to the canonical JSON body.
    pub fn to_json(&self) -> AppResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
