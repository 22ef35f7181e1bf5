// sentieval/src/ui/report.rs
//! Renders an `EvaluationReport` as metric lines, a confusion-matrix table or
//! JSON.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

use sentieval_core::{ConfusionMatrix, EvaluationReport, MetricSummary};

/// Writes the seven metric lines, three decimals each.
pub fn print_metrics<W: Write>(writer: &mut W, metrics: &MetricSummary) -> Result<()> {
    write!(writer, "{}", metrics).context("Failed to write metrics")?;
    Ok(())
}

/// Builds a table with one row per true class and one column per predicted
/// class. Classes seen on either axis appear on both.
pub fn matrix_table(matrix: &ConfusionMatrix<i64>) -> Table {
    let classes: Vec<i64> = matrix.classes().into_iter().collect();

    let mut header = vec![Cell::new("truth \\ predicted")];
    header.extend(classes.iter().map(|c| Cell::new(c).set_alignment(CellAlignment::Right)));
    header.push(Cell::new("total").set_alignment(CellAlignment::Right));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);

    for &truth in &classes {
        let mut row = vec![Cell::new(truth)];
        row.extend(
            classes
                .iter()
                .map(|&predicted| Cell::new(matrix.count(truth, predicted)).set_alignment(CellAlignment::Right)),
        );
        row.push(Cell::new(matrix.actual(truth)).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }

    table
}

pub fn print_matrix<W: Write>(writer: &mut W, matrix: &ConfusionMatrix<i64>) -> Result<()> {
    if matrix.is_empty() {
        writeln!(writer, "Confusion matrix: no records")?;
        return Ok(());
    }
    writeln!(writer, "{}", matrix_table(matrix)).context("Failed to write confusion matrix")?;
    Ok(())
}

/// Writes the whole report as pretty-printed JSON followed by a newline.
pub fn print_json<W: Write>(writer: &mut W, report: &EvaluationReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report).context("Failed to serialize report")?;
    writeln!(writer)?;
    Ok(())
}
