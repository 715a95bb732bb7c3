use anyhow::Context;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

pub struct OutputConfig {
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputConfig {
    pub fn from_global(json: bool, verbose: bool, quiet: bool, no_color: bool) -> Self {
        let no_color = no_color || std::env::var("NO_COLOR").is_ok() || !io::stdout().is_terminal();
        Self {
            json,
            verbose,
            quiet,
            no_color,
        }
    }

    /// Default tracing filter for the chosen verbosity; `RUST_LOG` overrides it.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    fn aligned(&self) -> bool {
        io::stdout().is_terminal() && !self.no_color
    }

    /// Print a status/confirmation message (suppressed in quiet mode).
    pub fn status(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Print extra detail (only shown in verbose mode, suppressed in quiet mode).
    pub fn detail(&self, msg: &str) {
        if self.verbose && !self.quiet {
            println!("{msg}");
        }
    }

    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    /// Print `label: value` pairs with the values lined up.
    pub fn print_fields(&self, fields: &[(&str, String)]) {
        let width = fields.iter().map(|(k, _)| k.len() + 1).max().unwrap_or(0);
        for (key, value) in fields {
            let label = format!("{key}:");
            println!("{label:<width$} {value}");
        }
    }

    pub fn print_table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if rows.is_empty() {
            return;
        }

        if !self.aligned() {
            println!("{}", headers.join("\t"));
            for row in rows {
                println!("{}", row.join("\t"));
            }
            return;
        }

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        println!("{}", pad_row(headers.iter().copied(), &widths));
        let sep = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{sep}");
        for row in rows {
            println!("{}", pad_row(row.iter().map(String::as_str), &widths));
        }
    }

    /// Write `content` to `path`, or to stdout when no path is given.
    pub fn write_or_print(&self, path: Option<&Path>, content: &str) -> anyhow::Result<()> {
        match path {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                self.status(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = io::stdout();
                stdout.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    writeln!(stdout)?;
                }
            }
        }
        Ok(())
    }
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
