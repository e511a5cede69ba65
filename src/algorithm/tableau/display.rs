//! # Display
//!
//! Plain text rendering of a tableau, with the column names as a heading and optionally the row
//! labels in front of each row.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::tableau::Tableau;

/// A tableau together with the choice of whether to show row labels.
///
/// Created through `Tableau::render`.
pub struct Render<'a> {
    tableau: &'a Tableau,
    show_row_labels: bool,
}

impl Tableau {
    /// Display this tableau, with or without the `cons1, .., obj` row labels.
    pub fn render(&self, show_row_labels: bool) -> Render<'_> {
        Render { tableau: self, show_row_labels }
    }
}

impl Render<'_> {
    fn write_line(
        &self,
        f: &mut Formatter,
        column_width: &[usize],
        label_width: usize,
        label: &str,
        values: &[String],
    ) -> FormatResult {
        if self.show_row_labels {
            write!(f, "{0:<width$} │ ", label, width = label_width)?;
        }
        writeln!(f, "{}", values.iter().zip(column_width)
            .map(|(value, &width)| format!("{0:>width$}", value, width = width))
            .join("  "))
    }
}

impl Display for Render<'_> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let header = self.tableau.column_names();
        let cells = self.tableau.matrix().rows()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let labels = self.tableau.row_labels();

        let column_width = header.iter().enumerate()
            .map(|(j, name)| {
                cells.iter().map(|row| row[j].len()).fold(name.len(), max)
            })
            .collect::<Vec<_>>();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        self.write_line(f, &column_width, label_width, "", &header)?;
        let total_width = column_width.iter().sum::<usize>() + 2 * column_width.len().saturating_sub(1);
        if self.show_row_labels {
            writeln!(f, "{}┼{}", "─".repeat(label_width + 1), "─".repeat(total_width + 1))?;
        } else {
            writeln!(f, "{}", "─".repeat(total_width))?;
        }
        for (label, row) in labels.iter().zip(&cells) {
            self.write_line(f, &column_width, label_width, label, row)?;
        }

        Ok(())
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        Display::fmt(&self.render(false), f)
    }
}
