use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: usize = 3;
/// No column is squeezed below this many characters.
const MIN_COLUMN: usize = 12;

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    max_width: Option<usize>,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the width budget instead of asking the terminal.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    fn budget(&self) -> usize {
        self.max_width
            .unwrap_or_else(|| self.util.terminal_width())
    }

    /// Shorten the first column of every row so the table fits the width
    /// budget. Other columns are short and left alone.
    pub fn fit_rows<T: AsRef<str>>(&self, rows: &[Vec<T>]) -> Vec<Vec<String>> {
        let others = rows
            .iter()
            .flat_map(|r| r.iter().enumerate().skip(1))
            .fold(Vec::<usize>::new(), |mut acc, (i, cell)| {
                if acc.len() < i {
                    acc.resize(i, 0);
                }
                acc[i - 1] = acc[i - 1].max(self.util.visible_width(cell.as_ref()));
                acc
            });
        let reserved: usize = others.iter().sum::<usize>() + others.len() * COLUMN_GAP;
        let first_max = self.budget().saturating_sub(reserved).max(MIN_COLUMN);

        rows.iter()
            .map(|r| {
                r.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if i == 0 {
                            self.util.shorten_middle(cell.as_ref(), first_max)
                        } else {
                            cell.as_ref().to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// The rendered table, one entry per line.
    pub fn render_lines<T: AsRef<str>>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
    ) -> Vec<String> {
        let mut buf = Vec::new();
        if self.render_table(table_name, headers, rows, &mut buf).is_err() {
            return Vec::new();
        }
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Render into any writer.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.compute_col_widths(headers, rows);
        let total_width = self
            .table_natural_width(&col_widths)
            .max(self.util.visible_width(table_name));

        self.write_separator(out, total_width)?;
        writeln!(out, "{}", table_name.to_uppercase())?;
        self.write_separator(out, total_width)?;

        writeln!(out, "{}", self.build_row_line(headers, &col_widths))?;
        self.write_separator(out, total_width)?;

        for row in rows {
            writeln!(out, "{}", self.build_row_line(row, &col_widths))?;
        }
        self.write_separator(out, total_width)
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut col_widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for r in rows {
            for (i, cell) in r.iter().enumerate().take(col_widths.len()) {
                col_widths[i] = col_widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn table_natural_width(&self, col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().copied().sum::<usize>() + (col_widths.len() - 1) * COLUMN_GAP
        }
    }

    // The last cell is not padded, so lines carry no trailing spaces.
    fn build_row_line<T: AsRef<str>>(&self, row: &[T], col_widths: &[usize]) -> String {
        let last = col_widths.len().saturating_sub(1);
        row.iter()
            .enumerate()
            .take(col_widths.len())
            .map(|(i, cell)| {
                if i == last {
                    cell.as_ref().to_string()
                } else {
                    self.util.pad_visible(cell.as_ref(), col_widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
