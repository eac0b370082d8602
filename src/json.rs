use crate::record::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered view over a finalized event, rendered as a JSON object whose
/// keys appear in slice order.
struct Event<'a>(&'a [(String, FieldValue)]);

impl Serialize for Event<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Render an ordered field set as a single-line JSON object string.
///
/// Key order in the output matches the input order exactly; string escaping
/// follows standard JSON rules. Pure: no backend involvement, and identical
/// input yields byte-identical output.
pub fn render(fields: &[(String, FieldValue)]) -> String {
    serde_json::to_string(&Event(fields)).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn s(value: &str) -> FieldValue {
        FieldValue::Str(value.to_string())
    }

    #[test]
    fn renders_in_insertion_order() {
        let fields = vec![
            ("zulu".to_string(), s("1")),
            ("alpha".to_string(), s("2")),
            ("mike".to_string(), s("3")),
        ];
        assert_eq!(render(&fields), r#"{"zulu":"1","alpha":"2","mike":"3"}"#);
    }

    #[test]
    fn renders_lists_and_maps_one_level_deep() {
        let mut stats = BTreeMap::new();
        stats.insert("numberSold".to_string(), "0".to_string());

        let fields = vec![
            (
                "customers".to_string(),
                FieldValue::List(vec!["Acme".to_string(), "Sun".to_string()]),
            ),
            ("someStats".to_string(), FieldValue::Map(stats)),
        ];
        assert_eq!(
            render(&fields),
            r#"{"customers":["Acme","Sun"],"someStats":{"numberSold":"0"}}"#
        );
    }

    #[test]
    fn escapes_json_special_characters() {
        let fields = vec![
            ("quote".to_string(), s("say \"hi\"")),
            ("backslash".to_string(), s("a\\b")),
            ("control".to_string(), s("line1\nline2")),
        ];
        assert_eq!(
            render(&fields),
            r#"{"quote":"say \"hi\"","backslash":"a\\b","control":"line1\nline2"}"#
        );
    }

    #[test]
    fn empty_field_set_renders_empty_object() {
        assert_eq!(render(&[]), "{}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let fields = vec![
            ("message".to_string(), s("Report executed")),
            (
                "customers".to_string(),
                FieldValue::List(vec!["Acme".to_string(), "Sun".to_string()]),
            ),
        ];
        assert_eq!(render(&fields), render(&fields));
    }

    #[test]
    fn accepts_empty_and_reserved_names() {
        let fields = vec![
            ("".to_string(), s("")),
            ("level".to_string(), s("not validated here")),
        ];
        assert_eq!(render(&fields), r#"{"":"","level":"not validated here"}"#);
    }
}
