//! Plain-text rendering of lookup results for the CLI and console.

use crate::capitals::CapitalMatch;
use crate::enrich::EnrichedFact;

pub const WRAP_WIDTH: usize = 70;

/// CLI layout: headings on their own line, paragraphs wrapped to 70 columns.
pub fn render_wrapped(found: &CapitalMatch, enriched: &EnrichedFact) -> String {
    let mut out = format!("State/Region: {}\nCapital: {}\n", found.region, found.capital);
    out.push_str("\nFun fact:\n");
    out.push_str(&textwrap::fill(&enriched.fact, WRAP_WIDTH));
    out.push('\n');
    if !enriched.summary.is_empty() {
        out.push_str("\nMore info:\n");
        out.push_str(&textwrap::fill(&enriched.summary, WRAP_WIDTH));
        out.push('\n');
    }
    out
}

/// Console layout: one line per field.
pub fn render_inline(found: &CapitalMatch, enriched: &EnrichedFact) -> String {
    let mut out = format!("State/Region: {}\nCapital: {}\n", found.region, found.capital);
    out.push_str(&format!("\nFun fact: {}\n", enriched.fact));
    if !enriched.summary.is_empty() {
        out.push_str(&format!("\nMore info: {}\n", enriched.summary));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CapitalMatch {
        CapitalMatch {
            region: "Texas".into(),
            capital: "Austin".into(),
        }
    }

    #[test]
    fn test_wrapped_without_summary() {
        let e = EnrichedFact::new("Austin likes music.".into(), String::new());
        let out = render_wrapped(&sample(), &e);
        assert_eq!(out, "State/Region: Texas\nCapital: Austin\n\nFun fact:\nAustin likes music.\n");
    }

    #[test]
    fn test_wrapped_long_lines() {
        let summary = "word ".repeat(40);
        let e = EnrichedFact::new("Fact.".into(), summary.trim().to_string());
        let out = render_wrapped(&sample(), &e);
        assert!(out.contains("More info:\n"));
        assert!(out.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
    }

    #[test]
    fn test_inline_with_summary() {
        let e = EnrichedFact::new("Fact.".into(), "Summary.".into());
        let out = render_inline(&sample(), &e);
        assert!(out.contains("\nFun fact: Fact.\n"));
        assert!(out.ends_with("\nMore info: Summary.\n"));
    }
}
