//! Annotated sort report, printed as text or JSON.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::aggregate::Summary;
use crate::bubble::{bubble_sort_counted, bubble_sort_descending, SortStats};
use crate::config::SorterKind;

/// Result of sorting one sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub sorter: &'static str,
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
    pub descending: Vec<i32>,
    /// Work counters, only for the bubble sorters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SortStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Report {
    /// Sort copies of `values` both ways with `kind`, keeping the original
    /// alongside. Counters cover the ascending sort only.
    pub fn build(kind: SorterKind, values: Vec<i32>, with_summary: bool) -> Self {
        let sorter = kind.sorter();
        let mut sorted = values.clone();
        let mut descending = values.clone();

        let stats = match kind {
            SorterKind::Bubble | SorterKind::BubbleEarlyExit => {
                bubble_sort_descending(&mut descending);
                Some(bubble_sort_counted(
                    &mut sorted,
                    kind == SorterKind::BubbleEarlyExit,
                ))
            }
            SorterKind::Std => {
                descending.sort_by(|a, b| b.cmp(a));
                sorter.sort(&mut sorted);
                None
            }
            SorterKind::StdUnstable => {
                descending.sort_unstable_by(|a, b| b.cmp(a));
                sorter.sort(&mut sorted);
                None
            }
        };

        debug!(sorter = sorter.name(), len = values.len(), ?stats, "sorted sequence");

        let summary = with_summary.then(|| Summary::of(&values));

        Self {
            sorter: sorter.name(),
            original: values,
            sorted,
            descending,
            stats,
            summary,
        }
    }

    /// Playground-style printout.
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            format!("Sorting ({}):", self.sorter),
            format!("  Original: {}", join(&self.original)),
            format!("  Ascending: {}", join(&self.sorted)),
        ];
        if let Some(stats) = &self.stats {
            lines.push(format!(
                "  Scans: {}, Comparisons: {}, Exchanges: {}",
                stats.scans, stats.comparisons, stats.exchanges
            ));
        }
        lines.push(format!("  Descending: {}", join(&self.descending)));

        if let Some(s) = &self.summary {
            let average = s
                .average
                .map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.2}"));
            let product = s
                .product
                .map_or_else(|| "overflow".to_string(), |p| p.to_string());

            lines.push(String::new());
            lines.push(format!("Sum: {}", s.sum));
            lines.push(format!("Count: {}", s.count));
            lines.push(format!("Average: {average}"));
            lines.push(format!("Min: {}, Max: {}", or_na(s.min), or_na(s.max)));
            lines.push(format!("Even numbers: {}", join(&s.evens)));
            lines.push(format!("Odd numbers: {}", join(&s.odds)));
            lines.push(format!("Squares: {}", join(&s.squares)));
            lines.push(format!("Product: {product}"));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_na(value: Option<i32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEQUENCE;

    #[test]
    fn test_build_keeps_original() {
        let report = Report::build(SorterKind::Bubble, DEFAULT_SEQUENCE.to_vec(), false);
        assert_eq!(report.original, vec![3, 1, 4, 1, 5, 9, 2, 6, 5]);
        assert_eq!(report.sorted, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
        assert_eq!(report.sorter, "bubble");
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_stats_only_for_bubble() {
        let stats = Report::build(SorterKind::Bubble, DEFAULT_SEQUENCE.to_vec(), false)
            .stats
            .unwrap();
        assert_eq!(stats.scans, 8);
        assert_eq!(stats.comparisons, 36);
        assert_eq!(stats.exchanges, 10);

        let early = Report::build(SorterKind::BubbleEarlyExit, DEFAULT_SEQUENCE.to_vec(), false);
        assert_eq!(early.stats.unwrap().exchanges, 10);

        let std = Report::build(SorterKind::Std, DEFAULT_SEQUENCE.to_vec(), false);
        assert!(std.stats.is_none());
        assert_eq!(std.sorted, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn test_render_text() {
        let report = Report::build(SorterKind::Std, vec![0, -5, 3, -1], true);
        let text = report.render_text();
        assert!(text.starts_with("Sorting (std):\n"));
        assert!(text.contains("  Original: 0 -5 3 -1\n"));
        assert!(text.contains("  Ascending: -5 -1 0 3\n"));
        assert!(text.contains("  Descending: 3 0 -1 -5\n"));
        assert!(text.contains("Sum: -3\n"));
        assert!(text.contains("Count: 4\n"));
        assert!(text.contains("Average: -0.75\n"));
        assert!(text.contains("Min: -5, Max: 3\n"));
        assert!(text.contains("Even numbers: 0\n"));
        assert!(text.contains("Odd numbers: -5 3 -1\n"));
        assert!(text.contains("Squares: 0 25 9 1\n"));
        assert!(text.contains("Product: 0\n"));
    }

    #[test]
    fn test_descending_every_sorter() {
        for kind in [
            SorterKind::Bubble,
            SorterKind::BubbleEarlyExit,
            SorterKind::Std,
            SorterKind::StdUnstable,
        ] {
            let report = Report::build(kind, DEFAULT_SEQUENCE.to_vec(), false);
            assert_eq!(report.descending, vec![9, 6, 5, 5, 4, 3, 2, 1, 1]);
            assert_eq!(report.original, DEFAULT_SEQUENCE.to_vec());
        }
    }

    #[test]
    fn test_render_text_layout() {
        let report = Report::build(SorterKind::Bubble, DEFAULT_SEQUENCE.to_vec(), false);
        assert_eq!(
            report.render_text(),
            concat!(
                "Sorting (bubble):\n",
                "  Original: 3 1 4 1 5 9 2 6 5\n",
                "  Ascending: 1 1 2 3 4 5 5 6 9\n",
                "  Scans: 8, Comparisons: 36, Exchanges: 10\n",
                "  Descending: 9 6 5 5 4 3 2 1 1\n",
            )
        );
    }

    #[test]
    fn test_render_text_empty() {
        let report = Report::build(SorterKind::Bubble, vec![], true);
        let text = report.render_text();
        assert!(text.contains("Scans: 0, Comparisons: 0, Exchanges: 0"));
        assert!(text.contains("Average: n/a"));
        assert!(text.contains("Min: n/a, Max: n/a"));
    }

    #[test]
    fn test_render_json() {
        let report = Report::build(SorterKind::BubbleEarlyExit, vec![2, 1], true);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(value["sorter"], "bubble_early_exit");
        assert_eq!(value["original"], serde_json::json!([2, 1]));
        assert_eq!(value["sorted"], serde_json::json!([1, 2]));
        assert_eq!(value["descending"], serde_json::json!([2, 1]));
        assert_eq!(value["stats"]["exchanges"], 1);
        assert_eq!(value["summary"]["sum"], 3);

        let plain = Report::build(SorterKind::Std, vec![1], false);
        let value: serde_json::Value = serde_json::from_str(&plain.render_json().unwrap()).unwrap();
        assert!(value.get("stats").is_none());
        assert!(value.get("summary").is_none());
    }
}
