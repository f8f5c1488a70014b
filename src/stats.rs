//! Statistics document normalization.
//!
//! The scraper writes a nested JSON document; the panels need flat integer
//! counters. Everything here is best-effort: a missing or malformed field
//! becomes 0 with a warning, and an unreadable document leaves every screen on
//! its built-in defaults. Nothing in this module aborts the run.
//!
//! # Document Shape
//!
//! ```text
//! {
//!   "tests": {
//!     "login-automatico": {
//!       "publicationTypes":            [{"name": .., "y": 3}, ..],
//!       "publicationsByJIFQuartiles":  [{"key": "Q1", "y": 20}, ..],
//!       "supervisedTheses": 5,
//!       "funding": {"totalProjects": 7, "totalMoney": "2,695,566.00"},
//!       "projectsByType": {"ipNacionales": 1, "ipRegionales": 2, "ipInnovacionDocente": 13, "otros": 90},
//!       "tfmSupervisadas": 11, "practicasSupervisadas": 89,
//!       "patentes": 5, "registrosDeUtilidad": 70,
//!       "cursosdocentesImpartidos": 21, "cursosdocentesRecibidos": 41
//!     },
//!     "recuperacion-tfg": [{"curso": "2023-24", "count": 4}, ..]
//!   }
//! }
//! ```
//!
//! # Money Parsing
//!
//! Funding totals arrive as formatted strings in either US (`2,695,566.00`)
//! or European (`2.695.566,00`) notation. [`parse_money`] tries an ordered
//! list of strategies and keeps the first that succeeds:
//!
//! 1. US: drop `,`, parse as decimal, round half to even
//! 2. EU: drop `.`, turn `,` into `.`, parse as decimal, round half to even
//! 3. Digits: keep only `0-9` and parse as an integer
//! 4. Otherwise 0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use serde_json::{Map, Value};

use crate::counters::Counter;

const ROOT: &str = "tests";
const LOGIN_SECTION: &str = "login-automatico";
const TFG_SECTION: &str = "recuperacion-tfg";

/// `projectsByType` keys in leadership-screen order (NAC, REG, INDO, OTRO).
const PROJECT_TYPES: [&str; 4] = ["ipNacionales", "ipRegionales", "ipInnovacionDocente", "otros"];

/// Flat counters for every stat screen, in catalog order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PanelStats {
    /// Publications by JIF quartile: Q1..Q4.
    pub quartiles: [Counter; 4],
    /// Supervised works: TFG, TFM, TESIS, PRAC.
    pub supervision: [Counter; 4],
    /// Projects led, by funding scope: NAC, REG, INDO, OTRO.
    pub leadership: [Counter; 4],
    /// Teaching courses: IMPARTIDOS, RECIBIDOS.
    pub teaching: [Counter; 2],
    /// Patents and utility registrations.
    pub registrations: [Counter; 2],
    /// Totals: PROYECTOS, PUBLICACIONES.
    pub summary: [Counter; 2],
    /// Officially funded projects: PROYECTOS, FINANCIACION.
    pub funding: [Counter; 2],
}

impl Default for PanelStats {
    /// Built-in values shown when no statistics document is available.
    fn default() -> Self {
        Self {
            quartiles: [
                Counter::new("Q1", 20),
                Counter::new("Q2", 12),
                Counter::new("Q3", 5),
                Counter::new("Q4", 8),
            ],
            supervision: [
                Counter::new("TFG", 20),
                Counter::new("TFM", 12),
                Counter::new("TESIS", 5),
                Counter::new("PRAC", 8),
            ],
            leadership: [
                Counter::new("NAC", 20),
                Counter::new("REG", 12),
                Counter::new("INDO", 5),
                Counter::new("OTRO", 8),
            ],
            teaching: [Counter::new("IMPARTIDOS", 31), Counter::new("RECIBIDOS", 40)],
            registrations: [Counter::new("PATENTES", 31), Counter::new("PROPIEDADES", 40)],
            summary: [Counter::new("PROYECTOS", 31), Counter::new("PUBLICACIONES", 40)],
            funding: [Counter::new("PROYECTOS", 0), Counter::new("FINANCIACION", 0)],
        }
    }
}

impl PanelStats {
    /// Read and normalize the document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let doc: Value = serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))?;
        Self::from_document(&doc)
    }

    /// Like [`load`](Self::load), falling back to the built-in defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(stats) => {
                info!("Statistics loaded from {}", path.display());
                stats
            }
            Err(e) => {
                warn!("Could not load statistics ({e:#}); using built-in defaults");
                Self::default()
            }
        }
    }

    /// Normalize a parsed document. Fails only if the root is not an object.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let Some(root) = doc.as_object() else {
            bail!("statistics document root must be an object");
        };
        let tests = object_at(root, ROOT);
        let la = tests.and_then(|t| object_at(t, LOGIN_SECTION));
        let field = |key: &str| la.and_then(|m| m.get(key));
        let defaults = Self::default();

        let quartiles = quartile_values(field("publicationsByJIFQuartiles"));

        let tfg = list_at(tests.and_then(|t| t.get(TFG_SECTION)), TFG_SECTION)
            .iter()
            .map(|item| to_int(item.get("count"), "recuperacion-tfg[].count"))
            .fold(0_i64, i64::saturating_add);
        let supervision = [
            tfg,
            to_int(field("tfmSupervisadas"), "tfmSupervisadas"),
            to_int(field("supervisedTheses"), "supervisedTheses"),
            to_int(field("practicasSupervisadas"), "practicasSupervisadas"),
        ];

        let by_type = field("projectsByType");
        let leadership = PROJECT_TYPES.map(|key| to_int(by_type.and_then(|p| p.get(key)), key));

        let teaching = [
            to_int(field("cursosdocentesImpartidos"), "cursosdocentesImpartidos"),
            to_int(field("cursosdocentesRecibidos"), "cursosdocentesRecibidos"),
        ];
        let registrations = [
            to_int(field("patentes"), "patentes"),
            to_int(field("registrosDeUtilidad"), "registrosDeUtilidad"),
        ];

        let publications = sum_y(field("publicationTypes"), "publicationTypes")
            .saturating_add(sum_y(field("publicationsByJIFQuartiles"), "publicationsByJIFQuartiles"));
        let projects = leadership.iter().copied().fold(0_i64, i64::saturating_add);
        let summary = [projects, publications];

        let funding = field("funding");
        let funding = [
            to_int(funding.and_then(|f| f.get("totalProjects")), "funding.totalProjects"),
            money_to_int(funding.and_then(|f| f.get("totalMoney"))),
        ];

        let stats = Self {
            quartiles: with_values(defaults.quartiles, quartiles),
            supervision: with_values(defaults.supervision, supervision),
            leadership: with_values(defaults.leadership, leadership),
            teaching: with_values(defaults.teaching, teaching),
            registrations: with_values(defaults.registrations, registrations),
            summary: with_values(defaults.summary, summary),
            funding: with_values(defaults.funding, funding),
        };
        debug!("Normalized statistics: {stats:?}");
        Ok(stats)
    }
}

fn with_values<const N: usize>(counters: [Counter; N], values: [i64; N]) -> [Counter; N] {
    let mut out = counters;
    for (counter, value) in out.iter_mut().zip(values) {
        *counter = counter.with_value(value);
    }
    out
}

fn object_at<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match map.get(key) {
        Some(Value::Object(inner)) => Some(inner),
        Some(Value::Null) | None => {
            warn!("Statistics section '{key}' is missing");
            None
        }
        Some(other) => {
            warn!("Statistics section '{key}' is not an object: {other}");
            None
        }
    }
}

fn list_at<'a>(value: Option<&'a Value>, what: &str) -> &'a [Value] {
    match value {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => &[],
        Some(other) => {
            warn!("Expected a list for '{what}', found {other}");
            &[]
        }
    }
}

/// Q1..Q4 values from a list of `{key|name, y}` items. Unknown keys are ignored.
fn quartile_values(list: Option<&Value>) -> [i64; 4] {
    let mut out = [0; 4];
    for item in list_at(list, "publicationsByJIFQuartiles") {
        let key = ["key", "name"]
            .iter()
            .filter_map(|k| item.get(*k).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .unwrap_or("")
            .trim()
            .to_ascii_uppercase();
        let slot = match key.as_str() {
            "Q1" => 0,
            "Q2" => 1,
            "Q3" => 2,
            "Q4" => 3,
            _ => continue,
        };
        out[slot] = to_int(item.get("y"), "publicationsByJIFQuartiles[].y");
    }
    out
}

fn sum_y(list: Option<&Value>, what: &str) -> i64 {
    list_at(list, what)
        .iter()
        .map(|item| to_int(item.get("y"), what))
        .fold(0_i64, i64::saturating_add)
}

/// Coerce a JSON value to an integer, 0 when missing or not numeric.
///
/// Integers pass through, floats truncate toward zero, numeric strings are
/// parsed and booleans count as 0/1.
pub fn to_int(value: Option<&Value>, what: &str) -> i64 {
    match value {
        None | Some(Value::Null) => {
            debug!("'{what}' missing, using 0");
            0
        }
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_else(|_| {
            warn!("'{what}' is not an integer ({s:?}), using 0");
            0
        }),
        Some(other) => {
            warn!("'{what}' is not numeric ({other}), using 0");
            0
        }
    }
}

/// Funding total as whole currency units.
pub fn money_to_int(value: Option<&Value>) -> i64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::String(s)) => parse_money(s),
        Some(other) => parse_money(&other.to_string()),
    }
}

type MoneyStrategy = fn(&str) -> Option<i64>;

/// Parse strategies in the order they are tried.
const MONEY_STRATEGIES: [(&str, MoneyStrategy); 3] = [("us", parse_us), ("eu", parse_eu), ("digits", parse_digits)];

/// Parse a formatted amount; see the module docs for the fallback order.
pub fn parse_money(raw: &str) -> i64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(*c, ',' | '.' | '-'))
        .collect();
    for (name, strategy) in MONEY_STRATEGIES {
        if let Some(v) = strategy(&cleaned) {
            debug!("Parsed amount {raw:?} as {v} ({name} notation)");
            return v;
        }
    }
    if !raw.trim().is_empty() {
        warn!("Could not parse amount {raw:?}, using 0");
    }
    0
}

fn parse_decimal(s: &str) -> Option<i64> {
    let f: f64 = s.parse().ok()?;
    f.is_finite().then(|| f.round_ties_even() as i64)
}

fn parse_us(s: &str) -> Option<i64> { parse_decimal(&s.replace(',', "")) }

fn parse_eu(s: &str) -> Option<i64> { parse_decimal(&s.replace('.', "").replace(',', ".")) }

fn parse_digits(s: &str) -> Option<i64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { digits.parse().ok() }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn values<const N: usize>(counters: &[Counter; N]) -> Vec<(&'static str, i64)> {
        counters.iter().map(|c| (c.label, c.value)).collect()
    }

    #[test]
    fn test_parse_money_us() {
        assert_eq!(parse_money("2,695,566.00"), 2_695_566);
        assert_eq!(parse_money("€ 1,234.50"), 1234, "Ties round to even");
        assert_eq!(parse_money("1,235.50"), 1236);
    }

    #[test]
    fn test_parse_money_eu() {
        assert_eq!(parse_money("2.695.566,00"), 2_695_566);
        assert_eq!(parse_money("12.345.678,49"), 12_345_678);
        // A single '.' also reads as a US decimal point, and US is tried first
        assert_eq!(parse_money("12.345,67 €"), 12);
    }

    #[test]
    fn test_parse_money_fallbacks() {
        assert_eq!(parse_money("abc123xyz"), 123);
        assert_eq!(parse_money(""), 0);
        assert_eq!(parse_money("no amount"), 0);
        assert_eq!(parse_money("1-2-3"), 123, "Neither notation parses, digits remain");
    }

    #[test]
    fn test_money_to_int_value_types() {
        assert_eq!(money_to_int(None), 0);
        assert_eq!(money_to_int(Some(&Value::Null)), 0);
        assert_eq!(money_to_int(Some(&json!("2,695,566.00"))), 2_695_566);
        assert_eq!(money_to_int(Some(&json!(1500.4))), 1500);
        assert_eq!(money_to_int(Some(&json!(42))), 42);
    }

    #[test_log::test]
    fn test_to_int_coercions() {
        assert_eq!(to_int(Some(&json!(7)), "x"), 7);
        assert_eq!(to_int(Some(&json!(7.9)), "x"), 7);
        assert_eq!(to_int(Some(&json!(-7.9)), "x"), -7);
        assert_eq!(to_int(Some(&json!(" 12 ")), "x"), 12);
        assert_eq!(to_int(Some(&json!("12.5")), "x"), 0);
        assert_eq!(to_int(Some(&json!(true)), "x"), 1);
        assert_eq!(to_int(Some(&json!([1, 2])), "x"), 0);
        assert_eq!(to_int(Some(&json!({"a": 1})), "x"), 0);
        assert_eq!(to_int(None, "x"), 0);
    }

    #[test_log::test]
    fn test_quartiles_scenario() {
        let doc = json!({"tests": {"login-automatico": {
            "publicationsByJIFQuartiles": [
                {"key": "Q1", "y": 20}, {"key": "Q2", "y": 12},
                {"key": "Q3", "y": 5}, {"key": "Q4", "y": 8}
            ]
        }}});
        let stats = PanelStats::from_document(&doc).expect("object root");
        assert_eq!(values(&stats.quartiles), vec![("Q1", 20), ("Q2", 12), ("Q3", 5), ("Q4", 8)]);
    }

    #[test_log::test]
    fn test_quartile_keys_normalized() {
        let doc = json!({"tests": {"login-automatico": {
            "publicationsByJIFQuartiles": [
                {"name": " q2 ", "y": "9"},
                {"key": "", "name": "Q3", "y": 4},
                {"key": "Q5", "y": 100},
                {"y": 1}
            ]
        }}});
        let stats = PanelStats::from_document(&doc).expect("object root");
        assert_eq!(values(&stats.quartiles), vec![("Q1", 0), ("Q2", 9), ("Q3", 4), ("Q4", 0)]);
    }

    #[test_log::test]
    fn test_funding_scenario() {
        let doc = json!({"tests": {"login-automatico": {
            "funding": {"totalProjects": 7, "totalMoney": "2,695,566.00"}
        }}});
        let stats = PanelStats::from_document(&doc).expect("object root");
        assert_eq!(stats.funding[0].value, 7);
        assert_eq!(stats.funding[1].value, 2_695_566);
        assert_eq!(stats.funding[1].format(stats.funding[1].value).as_str(), "2.695.566");
    }

    #[test_log::test]
    fn test_full_document() {
        let doc = json!({"tests": {
            "login-automatico": {
                "publicationTypes": [{"name": "Articles", "y": 30}, {"name": "Books", "y": 4}],
                "publicationsByJIFQuartiles": [{"key": "Q1", "y": 20}, {"key": "Q2", "y": 12}],
                "supervisedTheses": 10,
                "funding": {"totalProjects": 7, "totalMoney": "2.695.566,00"},
                "projectsByType": {"ipNacionales": 1, "ipRegionales": 2, "ipInnovacionDocente": 13, "otros": 90},
                "tfmSupervisadas": 11,
                "practicasSupervisadas": 89,
                "patentes": 5,
                "registrosDeUtilidad": 70,
                "cursosdocentesImpartidos": 21,
                "cursosdocentesRecibidos": 41
            },
            "recuperacion-tfg": [{"curso": "2022-23", "count": 3}, {"curso": "2023-24", "count": 4}]
        }});
        let stats = PanelStats::from_document(&doc).expect("object root");
        assert_eq!(values(&stats.supervision), vec![("TFG", 7), ("TFM", 11), ("TESIS", 10), ("PRAC", 89)]);
        assert_eq!(values(&stats.leadership), vec![("NAC", 1), ("REG", 2), ("INDO", 13), ("OTRO", 90)]);
        assert_eq!(values(&stats.teaching), vec![("IMPARTIDOS", 21), ("RECIBIDOS", 41)]);
        assert_eq!(values(&stats.registrations), vec![("PATENTES", 5), ("PROPIEDADES", 70)]);
        assert_eq!(values(&stats.summary), vec![("PROYECTOS", 106), ("PUBLICACIONES", 66)]);
        assert_eq!(values(&stats.funding), vec![("PROYECTOS", 7), ("FINANCIACION", 2_695_566)]);
    }

    #[test_log::test]
    fn test_empty_object_yields_zeros() {
        let stats = PanelStats::from_document(&json!({})).expect("object root");
        assert!(stats.quartiles.iter().all(|c| c.value == 0));
        assert!(stats.summary.iter().all(|c| c.value == 0));
        assert_eq!(stats.teaching[0].label, "IMPARTIDOS", "Labels survive normalization");
    }

    #[test_log::test]
    fn test_non_object_root_is_rejected() {
        assert!(PanelStats::from_document(&json!([1, 2, 3])).is_err());
        assert!(PanelStats::from_document(&Value::Null).is_err());
    }

    #[test_log::test]
    fn test_unreadable_source_uses_defaults() {
        let missing = Path::new("/nonexistent/dir/all-results.json");
        assert_eq!(PanelStats::load_or_default(missing), PanelStats::default());

        let dir = std::env::temp_dir().join(format!("pixoo-stats-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let empty = dir.join("empty.json");
        fs::write(&empty, "").expect("write");
        assert_eq!(PanelStats::load_or_default(&empty), PanelStats::default());
        fs::remove_dir_all(&dir).ok();
    }

    #[test_log::test]
    fn test_huge_counts_saturate() {
        let doc = json!({"tests": {
            "login-automatico": {
                "publicationTypes": [{"y": i64::MAX}],
                "publicationsByJIFQuartiles": [{"key": "Q1", "y": 5}],
                "projectsByType": {"ipNacionales": i64::MAX, "otros": 3}
            },
            "recuperacion-tfg": [{"count": i64::MAX}, {"count": 1}]
        }});
        let stats = PanelStats::from_document(&doc).unwrap();
        assert_eq!(stats.supervision[0].value, i64::MAX, "TFG total must saturate");
        assert_eq!(stats.summary[0].value, i64::MAX, "Project total must saturate");
        assert_eq!(stats.summary[1].value, i64::MAX, "Publication total must saturate");
    }
}
