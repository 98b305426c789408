use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use clean_names::{canonicalize_org_name, extract_first_name};

#[derive(Parser)]
#[command(
    name = "clean_names",
    about = "Normalize organization and first-name fields for display and deduplication"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Canonicalize organization names (arguments, or stdin lines if none)
    Org { names: Vec<String> },
    /// Extract canonical first names (arguments, or stdin lines if none)
    First { names: Vec<String> },
    /// Clean named columns of a CSV file
    Csv {
        /// Input CSV with a header row
        input: PathBuf,
        /// Output path (default: <input stem>_cleaned.csv next to the input)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Header of an organization-name column (repeatable)
        #[arg(long = "org-col")]
        org_cols: Vec<String>,
        /// Header of a first-name column (repeatable)
        #[arg(long = "first-col")]
        first_cols: Vec<String>,
        /// Print a JSON cleaning report to stdout
        #[arg(long)]
        report: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Org { names } => run_lines(&names, |s| canonicalize_org_name(Some(s))),
        Command::First { names } => run_lines(&names, |s| extract_first_name(Some(s))),
        Command::Csv {
            input,
            output,
            org_cols,
            first_cols,
            report,
        } => run_csv(&input, output, &org_cols, &first_cols, report),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  ORG / FIRST: one value per argument or stdin line
// ═══════════════════════════════════════════════════════════════════════

fn run_lines(names: &[String], clean: impl Fn(&str) -> String) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if names.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.unwrap_or_else(|e| {
                eprintln!("cannot read stdin: {e}");
                process::exit(1);
            });
            writeln!(out, "{}", clean(&line)).ok();
        }
    } else {
        for name in names {
            writeln!(out, "{}", clean(name)).ok();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  CSV: rewrite named columns through the matching transform
// ═══════════════════════════════════════════════════════════════════════

/// Which transform a configured column gets.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ColumnKind {
    Org,
    FirstName,
}

#[derive(Serialize)]
struct ColumnReport {
    header: String,
    kind: ColumnKind,
    /// Cells whose value changed
    changed: usize,
    /// Cells that came out empty despite non-blank input
    emptied: usize,
}

#[derive(Serialize)]
struct CleanReport {
    input: String,
    output: String,
    rows: usize,
    columns: Vec<ColumnReport>,
}

fn run_csv(
    input: &Path,
    output: Option<PathBuf>,
    org_cols: &[String],
    first_cols: &[String],
    report: bool,
) {
    if org_cols.is_empty() && first_cols.is_empty() {
        eprintln!("nothing to clean: pass at least one --org-col or --first-col");
        process::exit(1);
    }

    let mut reader = csv::Reader::from_path(input).unwrap_or_else(|e| {
        eprintln!("cannot read {}: {e}", input.display());
        process::exit(1);
    });
    let headers = reader
        .headers()
        .unwrap_or_else(|e| {
            eprintln!("cannot read headers of {}: {e}", input.display());
            process::exit(1);
        })
        .clone();

    // Map configured headers to (column index, transform kind).
    let mut targets: Vec<(usize, ColumnKind)> = Vec::new();
    for (cols, kind) in [(org_cols, ColumnKind::Org), (first_cols, ColumnKind::FirstName)] {
        for header in cols {
            match headers.iter().position(|h| h == header.as_str()) {
                Some(idx) => targets.push((idx, kind)),
                None => {
                    eprintln!("column {header:?} not found in {}", input.display());
                    eprintln!(
                        "available columns: {}",
                        headers.iter().collect::<Vec<_>>().join(", ")
                    );
                    process::exit(1);
                }
            }
        }
    }

    let output = output.unwrap_or_else(|| default_output_path(input));
    let mut writer = csv::Writer::from_path(&output).unwrap_or_else(|e| {
        eprintln!("cannot write {}: {e}", output.display());
        process::exit(1);
    });
    write_record(&mut writer, &headers, &output);

    let mut stats: Vec<ColumnReport> = targets
        .iter()
        .map(|&(idx, kind)| ColumnReport {
            header: headers.get(idx).unwrap_or("").to_string(),
            kind,
            changed: 0,
            emptied: 0,
        })
        .collect();

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.unwrap_or_else(|e| {
            eprintln!("cannot read {}: {e}", input.display());
            process::exit(1);
        });
        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        for (&(idx, kind), stat) in targets.iter().zip(stats.iter_mut()) {
            let Some(raw) = fields.get(idx) else { continue };
            let cleaned = match kind {
                ColumnKind::Org => canonicalize_org_name(Some(raw)),
                ColumnKind::FirstName => extract_first_name(Some(raw)),
            };
            if cleaned != *raw {
                stat.changed += 1;
            }
            if cleaned.is_empty() && !raw.trim().is_empty() {
                stat.emptied += 1;
            }
            fields[idx] = cleaned;
        }
        write_record(&mut writer, &fields, &output);
        rows += 1;
    }
    writer.flush().unwrap_or_else(|e| {
        eprintln!("cannot write {}: {e}", output.display());
        process::exit(1);
    });

    eprintln!("  {} ({rows} rows)", output.display());

    if report {
        let report = CleanReport {
            input: input.display().to_string(),
            output: output.display().to_string(),
            rows,
            columns: stats,
        };
        let json = serde_json::to_string_pretty(&report).expect("JSON serialization failed");
        println!("{json}");
    }
}

fn write_record<W: io::Write, R: IntoIterator>(writer: &mut csv::Writer<W>, record: R, path: &Path)
where
    R::Item: AsRef<[u8]>,
{
    writer.write_record(record).unwrap_or_else(|e| {
        eprintln!("cannot write {}: {e}", path.display());
        process::exit(1);
    });
}

/// "leads.csv" → "leads_cleaned.csv", next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_cleaned.csv"))
}
