//! Record model and wire-value rules.
//!
//! Records are flat, insertion-ordered maps of field key to wire value,
//! mirroring the columnar table storage owned by the external collaborator.
//! Wire values are strings exactly as stored: either a bare numeric
//! (`420`, `0.25`, `-1`) or a double-quoted string (`"human"`). A field set
//! to one of the null markers is simply absent.

use crate::statics;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// The record kinds this editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Unit,
    Item,
    Ability,
}

impl ObjectKind {
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Unit => statics::EN_TAB_UNITS,
            ObjectKind::Item => statics::EN_TAB_ITEMS,
            ObjectKind::Ability => statics::EN_TAB_ABILITIES,
        }
    }
}

/// Strips one leading and one trailing double quote, independently.
pub fn trim_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

fn number_like_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Integers of any digit count (including none after the sign) and
    // decimals with digits on both sides of the point.
    RE.get_or_init(|| Regex::new(r"^-?(?:(?:\d*)|(?:\d+\.\d+))$").expect("static pattern"))
}

/// Whether a wire value is stored bare (numeric) rather than quoted.
pub fn is_number_like(s: &str) -> bool {
    number_like_regex().is_match(s)
}

/// Whether a wire value means "no value" to the table storage.
pub fn is_null_marker(s: &str) -> bool {
    statics::WIRE_NULL_MARKERS.contains(&s)
}

/// Applies the storage quoting rule: numeric values stay bare, everything
/// else is wrapped in double quotes unless already fully quoted. Idempotent.
pub fn quote_wire_value(s: &str) -> String {
    let fully_quoted = s.starts_with('"') && s.ends_with('"') && s.len() >= 2;
    if fully_quoted || is_number_like(s) {
        s.to_string()
    } else {
        format!("\"{s}\"")
    }
}

/// Combines the legacy split button-position columns into the canonical
/// `x,y` form. A valid combined value passes through; otherwise the split
/// coordinates are joined; otherwise the origin is used.
pub fn sanitize_button_pos(pos: Option<&str>, x: Option<&str>, y: Option<&str>) -> String {
    let invalid = |v: Option<&str>| matches!(v.map(trim_quotes), None | Some("" | "_" | "-"));

    if !invalid(pos) {
        return trim_quotes(pos.expect("checked above")).to_string();
    }
    if invalid(x) || invalid(y) {
        return "0,0".to_string();
    }
    format!(
        "{},{}",
        trim_quotes(x.expect("checked above")),
        trim_quotes(y.expect("checked above"))
    )
}

/// One stored record: field key -> wire value, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw wire value, if the field is present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Display form: quotes trimmed, absent fields empty.
    pub fn display(&self, field: &str) -> &str {
        self.get(field).map(trim_quotes).unwrap_or(statics::EN_EMPTY)
    }

    /// Display form for multiline text: line-break tokens become newlines.
    pub fn display_multiline(&self, field: &str) -> String {
        self.display(field)
            .replace(statics::MARKUP_LINE_BREAK, "\n")
    }

    /// Stores a wire value; null markers clear the field instead.
    pub fn set(&mut self, field: &str, value: &str) {
        if is_null_marker(value) {
            self.fields.shift_remove(field);
        } else {
            self.fields.insert(field.to_string(), value.to_string());
        }
    }

    /// Stores a wire value verbatim, keeping even null markers. Used by
    /// save-time finalization where filler columns are written explicitly.
    pub fn set_raw(&mut self, field: &str, value: &str) {
        self.fields.insert(field.to_string(), value.to_string());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field value parsed as an integer, quotes tolerated.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.display(field).parse().ok()
    }
}

/// The row shown in a record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub id: String,
    pub name: String,
    pub editor_suffix: String,
}

impl RecordSummary {
    fn haystack(&self) -> String {
        format!("{}{}{}", self.name, self.id, self.editor_suffix)
    }
}

/// Filters summaries against a query over name + id + suffix.
///
/// Plain mode is a case-sensitive substring match; regex mode compiles the
/// query case-insensitively, and an invalid pattern matches nothing.
pub fn filter_summaries(
    list: &[RecordSummary],
    query: &str,
    regex_mode: bool,
) -> Vec<RecordSummary> {
    if query.is_empty() {
        return list.to_vec();
    }

    if regex_mode {
        let Ok(re) = Regex::new(&format!("(?i){query}")) else {
            return Vec::new();
        };
        list.iter()
            .filter(|s| re.is_match(&s.haystack()))
            .cloned()
            .collect()
    } else {
        list.iter()
            .filter(|s| s.haystack().contains(query))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Id,
}

/// Three-state sort: unsorted keeps storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn cycle(self) -> SortOrder {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }
}

pub fn sort_summaries(list: &mut [RecordSummary], key: SortKey, order: SortOrder) {
    let cmp = |a: &RecordSummary, b: &RecordSummary| match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Id => a.id.cmp(&b.id),
    };
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => list.sort_by(cmp),
        SortOrder::Descending => list.sort_by(|a, b| cmp(b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Record, RecordSummary, SortKey, SortOrder, filter_summaries, is_number_like,
        is_null_marker, quote_wire_value, sanitize_button_pos, sort_summaries, trim_quotes,
    };

    #[test]
    fn trim_quotes_strips_each_side_independently() {
        assert_eq!(trim_quotes("\"human\""), "human");
        assert_eq!(trim_quotes("\"open"), "open");
        assert_eq!(trim_quotes("close\""), "close");
        assert_eq!(trim_quotes("bare"), "bare");
        assert_eq!(trim_quotes(""), "");
    }

    #[test]
    fn number_like_accepts_integers_and_decimals_with_optional_minus() {
        for ok in ["0", "420", "-1", "0.25", "-3.04", "", "-"] {
            assert!(is_number_like(ok), "{ok:?} should be number-like");
        }
        for bad in ["1.", ".5", "1e4", "z3", "0,0", "\"2\""] {
            assert!(!is_number_like(bad), "{bad:?} should not be number-like");
        }
    }

    #[test]
    fn quote_wire_value_quotes_once_and_only_when_needed() {
        assert_eq!(quote_wire_value("human"), "\"human\"");
        assert_eq!(quote_wire_value("\"human\""), "\"human\"");
        assert_eq!(quote_wire_value("420"), "420");
        assert_eq!(quote_wire_value("-3.04"), "-3.04");
        assert_eq!(quote_wire_value("1."), "\"1.\"");
        // A single quote character is not "fully quoted".
        assert_eq!(quote_wire_value("\""), "\"\"\"");
    }

    #[test]
    fn null_markers_cover_quoted_and_bare_forms() {
        for m in ["", "_", "\"_\"", "-", "\"-\""] {
            assert!(is_null_marker(m));
        }
        assert!(!is_null_marker("0"));
    }

    #[test]
    fn button_pos_prefers_combined_then_split_then_origin() {
        assert_eq!(sanitize_button_pos(Some("2,1"), Some("0"), Some("0")), "2,1");
        assert_eq!(sanitize_button_pos(Some("_"), Some("3"), Some("1")), "3,1");
        assert_eq!(sanitize_button_pos(None, Some("3"), None), "0,0");
        assert_eq!(sanitize_button_pos(Some("-"), Some("-"), Some("2")), "0,0");
        assert_eq!(sanitize_button_pos(Some("\"0,1\""), None, None), "0,1");
    }

    #[test]
    fn record_set_clears_on_null_markers() {
        let mut rec = Record::new();
        rec.set("Race", "\"human\"");
        assert_eq!(rec.display("Race"), "human");

        rec.set("Race", "\"_\"");
        assert!(!rec.contains("Race"));
        assert_eq!(rec.display("Race"), "");
    }

    #[test]
    fn display_multiline_expands_line_break_tokens() {
        let mut rec = Record::new();
        rec.set("Ubertip", "\"line one|nline two\"");
        assert_eq!(rec.display_multiline("Ubertip"), "line one\nline two");
    }

    fn summaries() -> Vec<RecordSummary> {
        vec![
            RecordSummary {
                id: "hfoo".to_string(),
                name: "Footman".to_string(),
                editor_suffix: "".to_string(),
            },
            RecordSummary {
                id: "hkni".to_string(),
                name: "Knight".to_string(),
                editor_suffix: "(melee)".to_string(),
            },
            RecordSummary {
                id: "ogru".to_string(),
                name: "Grunt".to_string(),
                editor_suffix: "".to_string(),
            },
        ]
    }

    #[test]
    fn plain_search_is_substring_over_name_id_and_suffix() {
        let list = summaries();
        assert_eq!(filter_summaries(&list, "Foot", false).len(), 1);
        assert_eq!(filter_summaries(&list, "hkni", false).len(), 1);
        assert_eq!(filter_summaries(&list, "melee", false).len(), 1);
        assert_eq!(filter_summaries(&list, "", false).len(), 3);
        assert!(filter_summaries(&list, "foot", false).is_empty());
    }

    #[test]
    fn regex_search_is_case_insensitive_and_invalid_patterns_match_nothing() {
        let list = summaries();
        assert_eq!(filter_summaries(&list, "^foot", true).len(), 1);
        assert_eq!(filter_summaries(&list, "h(foo|kni)", true).len(), 2);
        assert!(filter_summaries(&list, "h(foo", true).is_empty());
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut order = SortOrder::default();
        order = order.cycle();
        assert_eq!(order, SortOrder::Ascending);
        order = order.cycle();
        assert_eq!(order, SortOrder::Descending);
        order = order.cycle();
        assert_eq!(order, SortOrder::Unsorted);
    }

    #[test]
    fn sorting_by_id_descending_reverses_lexicographic_order() {
        let mut list = summaries();
        sort_summaries(&mut list, SortKey::Id, SortOrder::Descending);
        let ids: Vec<_> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ogru", "hkni", "hfoo"]);

        sort_summaries(&mut list, SortKey::Name, SortOrder::Ascending);
        let names: Vec<_> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Footman", "Grunt", "Knight"]);
    }
}
