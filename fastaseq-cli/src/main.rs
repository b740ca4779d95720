use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::info;

use fastaseq_core::io::fasta::{is_valid_fasta, FastaRecords};
use fastaseq_core::seq::DEFAULT_LINE_WIDTH;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input FASTA file
    path: PathBuf,

    /// Number of records to summarize
    #[arg(short, long, default_value_t = 30)]
    limit: usize,

    /// Residues per line when printing sequences (0 = no wrapping)
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    width: usize,

    /// Also print each record in FASTA form
    #[arg(long)]
    show_seq: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    if let Err(err) = run(&cli, &mut stdout.lock()) {
        eprintln!("error: {err}");
        exit(1);
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    writeln!(out, "File is valid: {}", is_valid_fasta(&cli.path))?;
    writeln!(out)?;

    let records = FastaRecords::from_path(&cli.path)?;
    writeln!(out, "=== Reading sequences ===")?;
    let shown = summarize(records, cli, out)?;
    info!("summarized {shown} records from {}", cli.path.display());
    Ok(())
}

fn summarize<R: BufRead, W: Write>(
    mut records: FastaRecords<R>,
    cli: &Cli,
    out: &mut W,
) -> Result<usize, Box<dyn Error>> {
    let mut shown = 0;
    for record in records.by_ref().take(cli.limit) {
        let record = record?;
        shown += 1;
        writeln!(out)?;
        writeln!(out, "Sequence {shown}:")?;
        writeln!(out, "  Header: {}", record.header())?;
        writeln!(out, "  Length: {}", record.len())?;
        writeln!(out, "  Type: {}", record.seq_type())?;
        if cli.show_seq {
            writeln!(out, "{}", record.to_fasta_string(cli.width))?;
        }
    }

    if records.next().transpose()?.is_some() {
        writeln!(out, "And so on...")?;
    }
    Ok(shown)
}
