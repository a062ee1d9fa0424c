use std::fs;
use std::path::Path;

use log::warn;

use crate::row::{parse_number, Row, EMPTY};
use crate::ConllError;

/// Advisory findings of [`validate`], as 1-based line numbers per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub column_count: Vec<usize>,
    pub token_number: Vec<usize>,
    pub head: Vec<usize>,
    pub reserved_columns: Vec<usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.column_count.is_empty()
            && self.token_number.is_empty()
            && self.head.is_empty()
            && self.reserved_columns.is_empty()
    }

    /// Every defective line once, in file order.
    pub fn defective_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self
            .column_count
            .iter()
            .chain(&self.token_number)
            .chain(&self.head)
            .chain(&self.reserved_columns)
            .copied()
            .collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }
}

/// Heads seen in the current sentence, checked against its length once the
/// sentence ends.
#[derive(Default)]
struct PendingHeads {
    rows: usize,
    heads: Vec<(usize, usize)>,
}

impl PendingHeads {
    fn close(&mut self, report: &mut ValidationReport) {
        for &(line, head) in &self.heads {
            if head > self.rows {
                warn!("line {}: head {} beyond a {}-token sentence", line, head, self.rows);
                report.head.push(line);
            }
        }
        self.rows = 0;
        self.heads.clear();
    }
}

/// Checks column count, token numbering, head range and the two reserved
/// columns. Never fails; problems are collected in the report.
pub fn validate(input: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut pending = PendingHeads::default();

    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            pending.close(&mut report);
            continue;
        }
        pending.rows += 1;

        let row = match Row::split(text) {
            Ok(row) => row,
            Err(found) => {
                warn!("line {}: {} columns", line, found);
                report.column_count.push(line);
                continue;
            }
        };

        let number = match parse_number(row.id) {
            Some(number) if number == pending.rows => number,
            _ => {
                warn!("line {}: token number {:?}, expected {}", line, row.id, pending.rows);
                report.token_number.push(line);
                // The head check needs a trustworthy token number.
                continue;
            }
        };

        match parse_number(row.head) {
            Some(head) if head == number => {
                warn!("line {}: token {} is its own head", line, number);
                report.head.push(line);
            }
            Some(head) => pending.heads.push((line, head)),
            None => {
                warn!("line {}: head {:?} is not a number", line, row.head);
                report.head.push(line);
            }
        }

        if row.phead != EMPTY || row.pdeprel != EMPTY {
            warn!("line {}: reserved columns are not empty", line);
            report.reserved_columns.push(line);
        }
    }
    pending.close(&mut report);

    report
}

pub fn validate_file(path: impl AsRef<Path>) -> Result<ValidationReport, ConllError> {
    let input = fs::read_to_string(path)?;
    Ok(validate(&input))
}
