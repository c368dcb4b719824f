use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use glossearch::information;
use glossearch::input::{Lang, DEFAULT_TRANSLATION_LANG};
use glossearch::output::{self, Match};
use glossearch::{Corpus, Query, SearchOptions};
use log::{error, info};
use std::io::Write;
use std::{fs, io, process};

const DEFAULT_WIDTH: usize = 70;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Search a corpus of annotated texts for glosses
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Corpus directory (one JSON document per text)
    corpus: String,
    /// Glosses to search for
    glosses: Vec<String>,
    /// Also match glosses inside dot-separated segments
    #[arg(long)]
    partial: bool,
    /// Treat glosses as plain text, not as patterns
    #[arg(long)]
    literal: bool,
    /// Language code of the translation to report
    #[arg(long, default_value_t = DEFAULT_TRANSLATION_LANG)]
    translation_lang: Lang,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Pretty print JSON
    #[arg(short, long)]
    pretty: bool,
    /// Line width of the text format
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Output file (default: standard output)
    #[arg(short, long)]
    outfile: Option<String>,
    /// List the gloss segments of the corpus with their frequencies
    #[arg(long)]
    stats: bool,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn open_output(args: &Args) -> Result<Box<dyn Write>> {
    Ok(match &args.outfile {
        None => Box::new(io::stdout().lock()),
        Some(f) => {
            info!("write: {f}");
            let file = fs::File::create(f).with_context(|| format!("cannot create {f}"))?;
            Box::new(io::BufWriter::new(file))
        }
    })
}

fn write_matches(args: &Args, matches: &[Match]) -> Result<()> {
    let mut writer = open_output(args)?;
    match args.format {
        Format::Json => output::write_json(&mut writer, matches, args.pretty)?,
        Format::Text => writeln!(writer, "{}", output::concordance(matches, args.width))?,
    }
    writer.flush()?;
    Ok(())
}

fn write_inventory(args: &Args, corpus: &Corpus) -> Result<()> {
    let mut writer = open_output(args)?;
    for (segment, count) in information::gloss_inventory(corpus) {
        writeln!(writer, "{count}\t{segment}")?;
    }
    writer.flush()?;
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    if args.glosses.is_empty() && !args.stats {
        bail!("no glosses to search for");
    }
    let options = SearchOptions {
        whole: !args.partial,
        literal: args.literal,
        translation_lang: args.translation_lang,
    };
    let query = Query::new(&args.glosses, &options).map_err(|e| anyhow!("{e}"))?;
    let corpus = Corpus::load(&args.corpus).map_err(|e| anyhow!("{e}"))?;
    information::log_statistics(&information::statistics(&corpus));
    if args.glosses.is_empty() {
        return write_inventory(args, &corpus);
    }
    let matches = corpus.search(&query);
    write_matches(args, &matches)
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}
