use std::io::Write;

use super::Comparison;
use crate::error::Result;
use crate::types::DiffSummary;

/// Writes the diff as pretty-printed JSON and returns whether anything differed.
///
/// # Errors
/// Returns an error if serialization or writing to `out` fails.
pub fn render<W: Write + ?Sized>(out: &mut W, c: &Comparison<'_>) -> Result<bool> {
    let summary = DiffSummary::build(c.left_name, c.right_name, c.left, c.right, c.diff);
    let s = serde_json::to_string_pretty(&summary)?;
    writeln!(out, "{s}")?;
    Ok(summary.has_differences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::diff;
    use crate::parser::parse_str;

    #[test]
    fn emits_sorted_sections() {
        let left = parse_str("Z=1\nA=1\nSAME=x\nM=old\n");
        let right = parse_str("SAME=x\nM=new\nB=2\n");
        let d = diff(&left, &right);
        let c = Comparison {
            left_name: "a",
            right_name: "b",
            left: &left,
            right: &right,
            diff: &d,
        };
        let mut buf = Vec::new();
        assert!(render(&mut buf, &c).unwrap());
        let s = String::from_utf8(buf).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        let removed: Vec<_> = v["removed"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(removed, vec!["A", "Z"]);
        assert_eq!(v["changed"]["M"]["new"], "new");
        assert_eq!(v["added"]["B"], "2");
        assert_eq!(v["has_differences"], true);
        // ANSI codes never reach JSON
        assert!(!s.contains('\x1b'));
    }
}
