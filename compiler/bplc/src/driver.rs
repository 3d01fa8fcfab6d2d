//! Parse files in parallel, report them in input order.

use std::io::{self, Write};
use std::path::PathBuf;

use bpl_diagnostic::TerminalEmitter;
use bpl_parse::{parse_file, source_name, ParseOutput, SourceError};
use rayon::prelude::*;

use crate::DriverOptions;

pub struct FileResult {
    pub path: PathBuf,
    pub outcome: Result<ParseOutput, SourceError>,
}

/// Totals over one driver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub unreadable: usize,
    pub error_count: usize,
}

impl Summary {
    pub fn success(&self) -> bool {
        self.unreadable == 0 && self.error_count == 0
    }
}

/// Each file gets its own scanner, parser and collector, so the files
/// share nothing while they are parsed.
pub fn parse_all(options: &DriverOptions) -> Vec<FileResult> {
    options
        .files
        .par_iter()
        .map(|path| FileResult {
            path: path.clone(),
            outcome: parse_file(path, &options.parse),
        })
        .collect()
}

/// Write diagnostics for every file and, with `--print`, each program
/// that parsed cleanly.
pub fn report<D: Write, O: Write>(
    results: &[FileResult],
    options: &DriverOptions,
    diagnostics: &mut TerminalEmitter<D>,
    out: &mut O,
) -> io::Result<Summary> {
    let mut summary = Summary {
        files: results.len(),
        ..Summary::default()
    };

    for result in results {
        match &result.outcome {
            Ok(output) => {
                diagnostics.emit_all(&output.diagnostics)?;
                let name = source_name(&result.path, &options.parse);
                diagnostics.emit_summary(&name, output.error_count)?;
                summary.error_count += output.error_count;

                if let (true, Some(program)) = (options.print, output.program()) {
                    bpl_fmt::write_program(program, &mut *out)?;
                }
            }
            Err(err) => {
                tracing::debug!(path = %result.path.display(), "unreadable source");
                diagnostics.emit_failure(err)?;
                summary.unreadable += 1;
            }
        }
    }

    diagnostics.flush()?;
    out.flush()?;
    Ok(summary)
}
