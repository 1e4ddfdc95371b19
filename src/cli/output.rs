/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    /// Written verbatim, without adding a terminating newline.
    Report(String),
    /// Rows printed as left-aligned columns.
    Table(Vec<Vec<String>>),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Report(s) => write!(f, "{}", s),
            Output::Table(rows) => {
                if rows.is_empty() {
                    return writeln!(f, "No transactions.");
                }
                let mut widths = Vec::<usize>::new();
                for row in rows {
                    widths.resize(widths.len().max(row.len()), 0);
                    for (w, cell) in widths.iter_mut().zip(row) {
                        *w = (*w).max(cell.chars().count());
                    }
                }
                for row in rows {
                    let line = row
                        .iter()
                        .zip(&widths)
                        .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
                        .collect::<Vec<_>>()
                        .join("  ");
                    writeln!(f, "{}", line.trim_end())?;
                }
                Ok(())
            }
        }
    }
}
