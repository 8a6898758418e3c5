//! Core domain types for the charcycle tooltip library.
//!
//! The diagram viewer shows a poultry-waste-to-biochar flow in two system
//! views ("current practice" vs "proposed system"). Every icon on the diagram
//! may carry a tooltip record with per-view content variants; this crate owns
//! the data model for those records, the derivation of lookup keys from icon
//! asset paths, and the fallback rules that turn a record plus a requested
//! view into the single context payload the UI renders.
//!
//! Everything here is pure and synchronous. Loading the library from its
//! static source lives in `charcycle-tooltips`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context name shared between both system views.
const SHARED_CONTEXT: &str = "both";

/// File extension stripped when deriving icon keys.
const ICON_EXTENSION: &str = ".svg";

/// Named system view the diagram can display.
///
/// Resolution also accepts arbitrary context names as plain strings; this enum
/// only covers the views the viewer itself toggles between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewContext {
    /// Current practice: raw litter spread on fields.
    Current,
    /// Proposed system: pyrolysis into biochar.
    #[default]
    Proposed,
    /// Content shared by both views.
    Both,
}

impl ViewContext {
    /// Context name as it appears in the library document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewContext::Current => "current",
            ViewContext::Proposed => "proposed",
            ViewContext::Both => "both",
        }
    }
}

impl std::fmt::Display for ViewContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content shown for one specific system view of one icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipContext {
    /// Heading rendered at the top of the tooltip.
    pub title: String,
    /// Body text under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Named performance figures (yields, temperatures, retention rates).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<IndexMap<String, Value>>,
    /// Problems with this stage, rendered as an ordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
    /// Improvements the stage brings, rendered as an ordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub improvements: Vec<String>,
    /// Downstream benefits, rendered as an ordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    /// Headline value or metric for the stage (e.g. a revenue figure).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Forward-compatible extension fields the UI may render generically.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// All display variants for one icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipData {
    /// Fallback heading when no per-view context applies.
    pub title: String,
    /// Fallback body when no per-view context applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Per-view content variants, keyed by context name, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<IndexMap<String, TooltipContext>>,
}

impl TooltipData {
    /// Resolve the content to display for a requested context name.
    ///
    /// First match wins: the exact context, then the `"both"` entry, then the
    /// first entry in document order, and finally a minimal context
    /// synthesized from the record's own title and short description. Always
    /// yields something renderable; context misses are not errors.
    pub fn resolve_context(&self, context: &str) -> TooltipContext {
        if let Some(contexts) = &self.contexts {
            if let Some(exact) = contexts.get(context) {
                return exact.clone();
            }
            if let Some(shared) = contexts.get(SHARED_CONTEXT) {
                return shared.clone();
            }
            if let Some((_, first)) = contexts.first() {
                return first.clone();
            }
        }

        TooltipContext {
            title: self.title.clone(),
            description: self.short_description.clone(),
            ..TooltipContext::default()
        }
    }

    /// Resolve for a named system view.
    pub fn resolve_view(&self, view: ViewContext) -> TooltipContext {
        self.resolve_context(view.as_str())
    }
}

/// The full set of tooltip records for all icons on the diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipLibrary {
    /// Records keyed by icon key, in document order.
    #[serde(default)]
    pub tooltips: IndexMap<String, TooltipData>,
    /// Free-form descriptive metadata (authorship, revision). Never consumed
    /// by resolution logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl TooltipLibrary {
    /// Creates an empty library with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of records in the library.
    pub fn len(&self) -> usize {
        self.tooltips.len()
    }

    /// Returns true when the library holds no records.
    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty()
    }

    /// Look up the record for an icon asset path.
    ///
    /// Returns `None` for an empty or keyless path and for unknown keys; a
    /// miss suppresses the tooltip UI, it is not an error.
    pub fn get(&self, icon_path: &str) -> Option<&TooltipData> {
        let key = icon_key(icon_path)?;
        self.tooltips.get(&key)
    }
}

/// Derive the library lookup key from an icon asset path.
///
/// The key is the final path segment with a single trailing `.svg` stripped,
/// so two paths that differ only in directory resolve to the same record.
/// Empty paths and paths with no final segment yield `None`.
pub fn icon_key(icon_path: &str) -> Option<String> {
    if icon_path.is_empty() {
        return None;
    }

    // Asset manifests generated on Windows carry backslashes.
    let segment = icon_path.rsplit(['/', '\\']).next().unwrap_or("");
    if segment.is_empty() {
        return None;
    }

    let key = segment.strip_suffix(ICON_EXTENSION).unwrap_or(segment);
    if key.is_empty() {
        return None;
    }

    Some(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(title: &str) -> TooltipContext {
        TooltipContext {
            title: title.to_string(),
            ..TooltipContext::default()
        }
    }

    #[test]
    fn icon_key_ignores_directories() {
        assert_eq!(
            icon_key("/icons/current/chicken-house.svg"),
            Some("chicken-house".to_string())
        );
        assert_eq!(
            icon_key("assets\\proposed\\chicken-house.svg"),
            Some("chicken-house".to_string())
        );
        assert_eq!(icon_key("chicken-house.svg"), icon_key("chicken-house"));
    }

    #[test]
    fn icon_key_strips_only_svg_extension() {
        assert_eq!(icon_key("truck.svg"), Some("truck".to_string()));
        assert_eq!(icon_key("truck.png"), Some("truck.png".to_string()));
        assert_eq!(icon_key("truck.svg.svg"), Some("truck.svg".to_string()));
    }

    #[test]
    fn icon_key_rejects_empty_and_keyless_paths() {
        assert_eq!(icon_key(""), None);
        assert_eq!(icon_key("/icons/"), None);
        assert_eq!(icon_key(".svg"), None);
    }

    #[test]
    fn library_lookup_is_directory_independent() {
        let mut tooltips = IndexMap::new();
        tooltips.insert(
            "pyrolysis-unit".to_string(),
            TooltipData {
                title: "Pyrolysis Unit".to_string(),
                ..TooltipData::default()
            },
        );
        let library = TooltipLibrary {
            tooltips,
            metadata: None,
        };

        let a = library.get("/icons/pyrolysis-unit.svg");
        let b = library.get("other/dir/pyrolysis-unit.svg");
        assert_eq!(a, b);
        assert!(a.is_some());
        assert!(library.get("").is_none());
        assert!(library.get("unknown.svg").is_none());
    }

    #[test]
    fn exact_context_wins() {
        let mut contexts = IndexMap::new();
        contexts.insert("current".to_string(), context("Current"));
        contexts.insert("proposed".to_string(), context("Proposed"));
        let data = TooltipData {
            title: "Biochar Unit".to_string(),
            short_description: None,
            contexts: Some(contexts),
        };

        assert_eq!(data.resolve_context("proposed").title, "Proposed");
        assert_eq!(data.resolve_view(ViewContext::Current).title, "Current");
    }

    #[test]
    fn both_entry_beats_other_entries() {
        let mut contexts = IndexMap::new();
        contexts.insert("both".to_string(), context("Shared"));
        contexts.insert("current".to_string(), context("C"));
        let data = TooltipData {
            title: "X".to_string(),
            short_description: None,
            contexts: Some(contexts),
        };

        assert_eq!(data.resolve_context("proposed").title, "Shared");
    }

    #[test]
    fn falls_back_to_first_entry_in_document_order() {
        let mut contexts = IndexMap::new();
        contexts.insert("current".to_string(), context("Current"));
        let data = TooltipData {
            title: "Biochar Unit".to_string(),
            short_description: None,
            contexts: Some(contexts),
        };

        assert_eq!(data.resolve_context("proposed").title, "Current");
    }

    #[test]
    fn synthesizes_minimal_context_when_no_variant_applies() {
        let empty_map = TooltipData {
            title: "Biochar Unit".to_string(),
            short_description: Some("desc".to_string()),
            contexts: Some(IndexMap::new()),
        };
        let resolved = empty_map.resolve_context("proposed");
        assert_eq!(resolved.title, "Biochar Unit");
        assert_eq!(resolved.description.as_deref(), Some("desc"));
        assert!(resolved.problems.is_empty());

        let no_map = TooltipData {
            title: "Biochar Unit".to_string(),
            short_description: None,
            contexts: None,
        };
        assert_eq!(no_map.resolve_context("proposed").title, "Biochar Unit");
    }

    #[test]
    fn default_view_is_proposed() {
        assert_eq!(ViewContext::default(), ViewContext::Proposed);
        assert_eq!(ViewContext::default().to_string(), "proposed");
    }

    #[test]
    fn library_deserializes_upstream_document_shape() {
        let raw = json!({
            "metadata": { "revision": "2024-06" },
            "tooltips": {
                "chicken-house": {
                    "title": "Broiler House",
                    "short_description": "Source of poultry litter",
                    "contexts": {
                        "current": {
                            "title": "Broiler House (current)",
                            "problems": ["Litter stockpiled uncovered"],
                            "nutrient_runoff": "high"
                        },
                        "proposed": {
                            "title": "Broiler House (proposed)",
                            "improvements": ["Litter diverted to pyrolysis"],
                            "performance": { "collection_rate": "95%" },
                            "value": "$120/t"
                        }
                    }
                }
            }
        });

        let library: TooltipLibrary = serde_json::from_value(raw).unwrap();
        assert_eq!(library.len(), 1);

        let data = library.get("icons/chicken-house.svg").unwrap();
        let current = data.resolve_view(ViewContext::Current);
        assert_eq!(current.problems, vec!["Litter stockpiled uncovered"]);
        assert_eq!(
            current.extra.get("nutrient_runoff"),
            Some(&json!("high"))
        );

        let proposed = data.resolve_view(ViewContext::Proposed);
        assert_eq!(proposed.value.as_deref(), Some("$120/t"));
        assert_eq!(
            proposed
                .performance
                .as_ref()
                .and_then(|p| p.get("collection_rate")),
            Some(&json!("95%"))
        );
    }
}
