//! Request and response models for the downtime actions.
//!
//! Responsibilities:
//! - Build the JSON bodies for `schedule-downtime` and `remove-downtime`.
//! - Keep optional attributes absent from the body unless they carry a value.
//!
//! Does NOT handle:
//! - Validating parameter combinations (see the cli crate).
//! - Interpreting per-object result records beyond logging.
//!
//! Invariants:
//! - `false`, empty strings and empty maps are never serialized for optional fields;
//!   Icinga 2 treats an explicit value differently from an absent one.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::common::ObjectType;
use super::timestamp::Timestamp;

/// Body of `POST /v1/actions/schedule-downtime`.
///
/// Starts from the always-sent fields; optional attributes are added through
/// the chained setters, which ignore falsy input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleDowntimeRequest {
    #[serde(rename = "type")]
    object_type: ObjectType,
    #[serde(rename = "filter")]
    filters: String,
    author: String,
    comment: String,
    start_time: Timestamp,
    end_time: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_services: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_vars: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger_name: Option<String>,
}

impl ScheduleDowntimeRequest {
    pub fn new(
        object_type: ObjectType,
        filters: impl Into<String>,
        author: impl Into<String>,
        comment: impl Into<String>,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            object_type,
            filters: filters.into(),
            author: author.into(),
            comment: comment.into(),
            start_time,
            end_time,
            duration: None,
            fixed: None,
            all_services: None,
            filter_vars: None,
            trigger_name: None,
        }
    }

    /// Downtime length in seconds. Sent whenever supplied, including zero.
    pub fn duration(mut self, duration: Option<u64>) -> Self {
        self.duration = duration;
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed.then_some(true);
        self
    }

    pub fn all_services(mut self, all_services: bool) -> Self {
        self.all_services = all_services.then_some(true);
        self
    }

    pub fn filter_vars(mut self, filter_vars: Option<Map<String, Value>>) -> Self {
        self.filter_vars = filter_vars.filter(|vars| !vars.is_empty());
        self
    }

    pub fn trigger_name(mut self, trigger_name: Option<String>) -> Self {
        self.trigger_name = trigger_name.filter(|name| !name.is_empty());
        self
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn filters(&self) -> &str {
        &self.filters
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }
}

/// Body of `POST /v1/actions/remove-downtime`.
///
/// An exact name is sent under the lowercase object-type key, e.g.
/// `{"type": "Downtime", "downtime": "host!uuid"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveDowntimeRequest {
    object_type: ObjectType,
    name: Option<String>,
    filters: Option<String>,
    filter_vars: Option<Map<String, Value>>,
}

impl RemoveDowntimeRequest {
    pub fn new(object_type: ObjectType) -> Self {
        Self {
            object_type,
            name: None,
            filters: None,
            filter_vars: None,
        }
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name.filter(|n| !n.is_empty());
        self
    }

    pub fn filters(mut self, filters: Option<String>) -> Self {
        self.filters = filters.filter(|f| !f.is_empty());
        self
    }

    pub fn filter_vars(mut self, filter_vars: Option<Map<String, Value>>) -> Self {
        self.filter_vars = filter_vars.filter(|vars| !vars.is_empty());
        self
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn target_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Serialize for RemoveDowntimeRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.object_type)?;
        if let Some(name) = &self.name {
            map.serialize_entry(self.object_type.name_key(), name)?;
        }
        if let Some(filters) = &self.filters {
            map.serialize_entry("filter", filters)?;
        }
        if let Some(filter_vars) = &self.filter_vars {
            map.serialize_entry("filter_vars", filter_vars)?;
        }
        map.end()
    }
}

/// Successful action response: one record per matched object.
///
/// Records are kept as raw JSON so they can be forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub results: Vec<Value>,
}

/// Typed view of a single result record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionResult {
    pub code: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ActionResult {
    /// Read the `code`/`status` fields of a raw record, if it has them.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    pub fn is_success(&self) -> bool {
        (200.0..300.0).contains(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn window() -> (Timestamp, Timestamp) {
        (
            Timestamp::from_epoch_seconds(1769954400),
            Timestamp::from_epoch_seconds(1769958000),
        )
    }

    #[test]
    fn test_schedule_minimal_body() {
        let (start, end) = window();
        let request = ScheduleDowntimeRequest::new(
            ObjectType::Host,
            r#"host.name=="test-host.local""#,
            "icinga-downtime",
            "Downtime scheduled by icinga-downtime",
            start,
            end,
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "Host",
                "filter": "host.name==\"test-host.local\"",
                "author": "icinga-downtime",
                "comment": "Downtime scheduled by icinga-downtime",
                "start_time": 1769954400,
                "end_time": 1769958000,
            })
        );
    }

    #[test]
    fn test_schedule_falsy_optionals_are_omitted() {
        let (start, end) = window();
        let request = ScheduleDowntimeRequest::new(ObjectType::Host, "true", "a", "c", start, end)
            .fixed(false)
            .all_services(false)
            .filter_vars(Some(Map::new()))
            .trigger_name(Some(String::new()));

        let body = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        for absent in ["duration", "fixed", "all_services", "filter_vars", "trigger_name"] {
            assert!(!keys.iter().any(|k| *k == absent), "{absent} should be absent");
        }
    }

    #[test]
    fn test_schedule_all_optionals() {
        let (start, end) = window();
        let mut vars = Map::new();
        vars.insert("hostgroup".to_string(), json!("linux"));
        let request = ScheduleDowntimeRequest::new(
            ObjectType::Service,
            "match(hostgroup, service.groups)",
            "ops",
            "patching",
            start,
            end,
        )
        .duration(Some(0))
        .fixed(true)
        .all_services(true)
        .filter_vars(Some(vars))
        .trigger_name(Some("parent!downtime".to_string()));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["type"], "Service");
        assert_eq!(body["duration"], 0);
        assert_eq!(body["fixed"], true);
        assert_eq!(body["all_services"], true);
        assert_eq!(body["filter_vars"], json!({"hostgroup": "linux"}));
        assert_eq!(body["trigger_name"], "parent!downtime");
    }

    #[test]
    fn test_remove_by_name_uses_type_key() {
        let request = RemoveDowntimeRequest::new(ObjectType::Downtime)
            .name(Some("test-host.local!e19c705a".to_string()));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "Downtime", "downtime": "test-host.local!e19c705a"})
        );
    }

    #[test]
    fn test_remove_by_filter() {
        let request = RemoveDowntimeRequest::new(ObjectType::Host)
            .filters(Some("host.name==h".to_string()))
            .filter_vars(Some(Map::from_iter([("h".to_string(), json!("x"))])));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "Host", "filter": "host.name==h", "filter_vars": {"h": "x"}})
        );
    }

    #[test]
    fn test_remove_type_only() {
        let request = RemoveDowntimeRequest::new(ObjectType::Service)
            .name(Some(String::new()))
            .filters(None);

        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"type": "Service"}));
    }

    #[test]
    fn test_action_response_requires_results() {
        let parsed: ActionResponse =
            serde_json::from_value(json!({"results": [{"code": 200, "status": "ok"}]})).unwrap();
        assert_eq!(parsed.results.len(), 1);

        assert!(serde_json::from_value::<ActionResponse>(json!({"error": 404})).is_err());
    }

    #[test]
    fn test_action_result_view() {
        let ok = ActionResult::from_value(&json!({"code": 200.0, "status": "Successfully removed"}))
            .unwrap();
        assert!(ok.is_success());

        let failed = ActionResult::from_value(&json!({"code": 404, "status": "Not found"})).unwrap();
        assert!(!failed.is_success());

        assert!(ActionResult::from_value(&json!({"status": "no code"})).is_none());
    }
}
