use clap::Parser;
use sequence_trie::{count_windows, SequenceTrie, WindowRange};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Count recurring windows in a file.
///
/// Usage: cargo run --example count_file -- <filename> [--min N] [--max N]
#[derive(Parser, Debug)]
#[command(about = "Count recurring contiguous windows in a file")]
struct Args {
    /// Input file
    path: PathBuf,

    /// Shortest window length to report
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// Longest window length to track
    #[arg(long, default_value_t = 8)]
    max: usize,

    /// Treat the file as whitespace-separated tokens instead of bytes
    #[arg(long)]
    tokens: bool,

    /// Number of most common windows to print
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Cross-check the result against brute-force counting
    #[arg(long)]
    verify: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run<T>(input: Vec<T>, range: WindowRange, args: &Args, show: impl Fn(&[T]) -> String)
where
    T: std::hash::Hash + Ord + Clone,
{
    let mut trie = SequenceTrie::with_range(range);
    for (count, symbol) in input.iter().cloned().enumerate() {
        trie.advance(symbol);

        // Print progress every 100,000 symbols
        if (count + 1) % 100_000 == 0 {
            println!("{}", count + 1);
        }
    }

    let report = trie.report();
    for (sequence, count) in report.most_common(args.top) {
        println!("{:>8}  {}", count, show(&sequence));
    }

    if args.verify {
        if report == count_windows(&input, range) {
            println!("\nVerified against brute-force counting.");
        } else {
            eprintln!("Mismatch against brute-force counting!");
            process::exit(1);
        }
    }

    let stats = trie.stats();
    println!("\n=== Statistics ===");
    println!("Symbols processed: {}", stats.input_length);
    println!("Distinct sequences: {}", stats.num_nodes);
    println!("Recurring in range: {}", report.len());
    for (depth, nodes) in stats.nodes_per_depth.iter().enumerate() {
        println!("  length {:>3}: {} nodes", depth + 1, nodes);
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    let range = WindowRange::new(args.min, args.max).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    });

    let bytes = fs::read(&args.path).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", args.path.display());
        process::exit(1);
    });

    if args.tokens {
        let text = String::from_utf8_lossy(&bytes);
        let tokens: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
        run(tokens, range, &args, |seq| seq.join(" "));
    } else {
        run(bytes, range, &args, |seq| {
            format!("{:?}", String::from_utf8_lossy(seq))
        });
    }
}
