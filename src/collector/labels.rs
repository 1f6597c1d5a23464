// Label construction and per-scrape schema reconciliation.

use crate::models::{CollectorResult, ContainerDescriptor, LabelSchema};
use std::collections::{BTreeMap, BTreeSet};

pub const NAME_LABEL: &str = "name";
pub const IMAGE_LABEL: &str = "image";
pub const CONTAINER_LABEL_PREFIX: &str = "container_label_";

/// Turn a raw container label key into a metric label key:
/// `com.example.Team-Name` becomes `container_label_com_example_team_name`.
pub fn normalize_label_key(raw: &str) -> String {
    let mut key = String::with_capacity(CONTAINER_LABEL_PREFIX.len() + raw.len());
    key.push_str(CONTAINER_LABEL_PREFIX);
    key.extend(raw.chars().map(|c| {
        if c.is_ascii_alphanumeric() {
            c.to_ascii_lowercase()
        } else {
            // '.', '-' and anything else Prometheus rejects in a label name
            '_'
        }
    }));
    key
}

/// Label mapping for one container: name, image and every container label.
pub fn container_labels(descriptor: &ContainerDescriptor) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    for (k, v) in &descriptor.labels {
        labels.insert(normalize_label_key(k), v.clone());
    }
    labels.insert(NAME_LABEL.to_string(), descriptor.canonical_name().to_string());
    labels.insert(IMAGE_LABEL.to_string(), descriptor.image.clone());
    labels
}

/// Label keys present on every result, sorted. Empty when `results` is empty.
pub fn reconcile_schema(results: &[CollectorResult]) -> LabelSchema {
    let mut iter = results.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    let mut common: BTreeSet<&str> = first.labels.keys().map(String::as_str).collect();
    for r in iter {
        common.retain(|k| r.labels.contains_key(*k));
        if common.is_empty() {
            break;
        }
    }
    common.into_iter().map(str::to_string).collect()
}

/// Values of `labels` in schema order. Missing keys project to an empty value,
/// which cannot happen for keys produced by `reconcile_schema` over the same results.
pub fn project(labels: &BTreeMap<String, String>, schema: &[String]) -> Vec<String> {
    schema
        .iter()
        .map(|k| labels.get(k).cloned().unwrap_or_default())
        .collect()
}
