//! JSON output generation for degree plans.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::config::JSON_INDENT;
use crate::error::Result;
use crate::types::DegreePlan;

/// Generate the JSON document for a degree plan.
///
/// Course fields are declared in key order, so the object keys come out
/// sorted. Non-ASCII text is written as UTF-8, not escaped.
pub fn to_json(plan: &DegreePlan) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    plan.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the JSON document for a degree plan followed by a newline.
pub fn write_json<W: Write>(plan: &DegreePlan, mut writer: W) -> Result<()> {
    let json = to_json(plan)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Course, Mandate, Relations, Requirement};
    use pretty_assertions::assert_eq;

    fn sample_plan() -> DegreePlan {
        let mut prerequisites = Requirement::new();
        prerequisites.push(Mandate::new(vec!["CS 1337".to_string()]));
        let relations = Relations {
            prerequisites,
            ..Relations::default()
        };

        DegreePlan::new(vec![
            vec![Course::new("CS 2336").with_relations(relations)],
            vec![Course::new("Approved elective")],
        ])
    }

    #[test]
    fn test_to_json_layout() {
        let json = to_json(&sample_plan()).unwrap();
        let expected = r#"[
    [
        {
            "num": "CS 2336",
            "prereqs": [
                [
                    "CS 1337"
                ]
            ],
            "scoreqs": [],
            "sem": 0,
            "taken": false,
            "wcoreqs": []
        }
    ],
    [
        {
            "num": "Approved elective",
            "prereqs": [],
            "scoreqs": [],
            "sem": 0,
            "taken": false,
            "wcoreqs": []
        }
    ]
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_empty_plan() {
        assert_eq!(to_json(&DegreePlan::default()).unwrap(), "[]");
    }

    #[test]
    fn test_to_json_keeps_unicode() {
        let plan = DegreePlan::new(vec![vec![Course::new("Café course")]]);
        assert!(to_json(&plan).unwrap().contains("\"Café course\""));
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut out = Vec::new();
        write_json(&sample_plan(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n    [\n"));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_to_json_round_trips_through_value() {
        let json = to_json(&sample_plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0][0]["num"], "CS 2336");
        assert_eq!(value[1][0]["taken"], false);
    }
}
