// src/cli.rs
use std::{
    env, fs,
    io::{self, Read, Write},
    path::PathBuf,
    time::Duration,
};

use crate::{
    config::options::{AppOptions, ExportFormat},
    core::HttpClient,
    error::{Error, Result},
    file,
    progress::Progress,
    runner,
    store::PriceCache,
    table::PriceTable,
};

/// Parsed command line, on top of `AppOptions` defaults.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// CSV file; stdin when absent
    pub input: Option<PathBuf>,
    /// Also export the table here
    pub out: Option<String>,
    pub options: AppOptions,
}

pub fn run() -> Result<()> {
    let args = match parse_args(env::args().skip(1))? {
        Some(a) => a,
        None => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
    };

    let text = read_input(args.input.as_deref())?;
    let opts = &args.options;

    let client = HttpClient::new(&opts.fetch)?;
    let mut cache = PriceCache::new();
    let mut prog = CliProgress::default();

    let table = runner::run(&text, &mut cache, &client, &opts.fetch, Some(&mut prog));

    let stdout = io::stdout();
    print_table(stdout.lock(), &table)?;

    if args.out.is_some() {
        let path = file::write_export(&opts.export, &table)?;
        logf!("Export: OK {}", path.display());
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

/// `Ok(None)` means help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<CliArgs>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => out.input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-o" | "--out" => {
                let v = value(&mut args, &a)?;
                out.options.export.set_path(&v);
                out.out = Some(v);
            }
            "--format" => {
                let v = value(&mut args, &a)?;
                out.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| Error::Args(format!("Unknown format: {}", v)))?;
            }
            "--no-headers" => out.options.export.include_headers = false,
            "--search-url" => out.options.fetch.search_url = value(&mut args, &a)?,
            "--timeout" => {
                let v = value(&mut args, &a)?;
                let secs: u64 = v
                    .parse()
                    .map_err(|_| Error::Args(format!("Invalid timeout: {}", v)))?;
                out.options.fetch.timeout = Duration::from_secs(secs);
            }
            "-h" | "--help" => return Ok(None),
            _ => return Err(Error::Args(format!("Unknown arg: {}", a))),
        }
    }

    Ok(Some(out))
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::Args(format!("Missing value for {}", flag)))
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Aligned text table. Bargain rows get a leading `*`.
pub fn print_table<W: Write>(mut w: W, table: &PriceTable) -> io::Result<()> {
    if table.is_empty() {
        return writeln!(w, "No cards.");
    }

    let headers = PriceTable::headers();
    let rows = table.to_rows();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (ci, cell) in r.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let line = |cells: &[String], mark: &str| -> String {
        let last = cells.len().saturating_sub(1);
        let mut s = format!("{mark} ");
        for (ci, cell) in cells.iter().enumerate() {
            if ci == last {
                s.push_str(cell);
            } else {
                s.push_str(&format!("{:<w$}  ", cell, w = widths[ci]));
            }
        }
        s.trim_end().to_string()
    };

    writeln!(w, "{}", line(headers.as_slice(), " "))?;
    for (row, cells) in table.rows.iter().zip(&rows) {
        writeln!(w, "{}", line(cells.as_slice(), if row.bargain { "*" } else { " " }))?;
    }

    let bargains = table.bargain_count();
    if bargains > 0 {
        writeln!(w, "\n* {} potential bargain(s): lowest listing under 80% of average sold", bargains)?;
    }
    Ok(())
}

/// Progress on stderr so stdout stays a clean table.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize, label: &str, cached: bool) {
        let from = if cached { " (cached)" } else { "" };
        eprintln!("Fetched {}/{}: {}{}", index + 1, self.total, label, from);
    }
    fn notify_error(&mut self, msg: &str) {
        eprintln!("Error: {msg}");
    }
}
