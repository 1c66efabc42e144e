//! Report rendering for the eval-only benchmark
//!
//! The output is exactly two lines: the summary and a fixed caveat.

use std::io::Write;

use crate::error::Result;
use crate::stats::summary::SampleSummary;

/// Second output line, printed verbatim on every run
pub const CAVEAT: &str = "It's very difficult to estimate the parse time in a fair way.  (Maybe 'time' the run of a PYC?  But that includes many proc startup costs...)";

/// Format the summary line, e.g. `python_eval_only_100x: 1000 ns  +/- 0`
pub fn summary_line(label: &str, summary: &SampleSummary) -> String {
    format!("{}: {} ns  +/- {}", label, summary.mean_ns(), summary.stdev_ns())
}

/// Write both report lines and flush
pub fn write_report<W: Write>(out: &mut W, label: &str, summary: &SampleSummary) -> Result<()> {
    writeln!(out, "{}", summary_line(label, summary))?;
    writeln!(out, "{}", CAVEAT)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::sample_set::SampleSet;

    fn summary_of(values: &[f64]) -> SampleSummary {
        let set = SampleSet::from_samples(values.iter().copied()).unwrap();
        SampleSummary::from_samples(&set).unwrap()
    }

    #[test]
    fn summary_line_truncates_both_values() {
        let summary = summary_of(&[1000.9, 1001.9]);
        assert_eq!(summary_line("bench", &summary), "bench: 1001 ns  +/- 0");
    }

    #[test]
    fn report_is_two_lines_ending_with_caveat() {
        let mut out = Vec::new();
        write_report(&mut out, "python_eval_only_100x", &summary_of(&[1000.0; 100])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("python_eval_only_100x: 1000 ns  +/- 0\n{}\n", CAVEAT)
        );
    }
}
