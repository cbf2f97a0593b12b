//! Operator-facing result emission.
//!
//! A presentation boundary over the already-computed identifier list.
//! Writes to a generic sink so tests can capture the output.

use std::io::{self, Write};

use crate::models::SearchCriteria;

/// Write one identifier per line in the exact order received. An empty
/// match set produces a single informational line naming both bounds;
/// it is not an error condition.
pub fn emit_results<W: Write>(
    out: &mut W,
    ids: &[i64],
    criteria: &SearchCriteria,
) -> io::Result<()> {
    if ids.is_empty() {
        writeln!(
            out,
            "No posts found between {} and {} containing the read-more embed.",
            criteria.after_display(),
            criteria.before_display()
        )?;
        return Ok(());
    }

    for id in ids {
        writeln!(out, "{id}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{READ_MORE_MARKER, TIMESTAMP_FORMAT};
    use chrono::NaiveDateTime;

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            after: NaiveDateTime::parse_from_str("2025-01-01 00:00:00", TIMESTAMP_FORMAT).unwrap(),
            before: NaiveDateTime::parse_from_str("2025-01-31 12:30:00", TIMESTAMP_FORMAT)
                .unwrap(),
            marker: READ_MORE_MARKER,
        }
    }

    #[test]
    fn empty_set_names_both_bounds() {
        let mut out = Vec::new();
        emit_results(&mut out, &[], &criteria()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No posts found between 2025-01-01 00:00:00 and 2025-01-31 12:30:00 containing the read-more embed.\n"
        );
    }

    #[test]
    fn ids_are_written_one_per_line_in_order() {
        let mut out = Vec::new();
        emit_results(&mut out, &[12, 10, 7], &criteria()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "12\n10\n7\n");
    }
}
