use std::fmt::Write as _;
use std::io::{self, Read};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use generic_sorter::{
    Element, ElementKind, OrderingMode, SortAlgorithm, SortError, algorithm_name,
    all_algorithms, sort_elements,
};
use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AlgorithmChoice {
    One(SortAlgorithm),
    All,
}

impl AlgorithmChoice {
    fn algorithms(self) -> Vec<SortAlgorithm> {
        match self {
            Self::One(algo) => vec![algo],
            Self::All => all_algorithms().to_vec(),
        }
    }
}

impl FromStr for AlgorithmChoice {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}

/// Sorts integers, characters or words with quicksort and/or merge sort.
#[derive(Debug, Parser)]
#[command(name = "sorter", version, allow_negative_numbers = true)]
struct Cli {
    /// `quicksort`, `mergesort` or `all`.
    #[arg(short, long, default_value = "all")]
    algorithm: AlgorithmChoice,

    /// How each value is parsed: `int`, `char` or `text`.
    #[arg(short, long, default_value = "int")]
    kind: ElementKind,

    /// Ignore letter case when ordering text.
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Values to sort. Read whitespace-separated from stdin when omitted.
    values: Vec<String>,
}

impl Cli {
    fn ordering(&self) -> OrderingMode {
        if self.case_insensitive {
            OrderingMode::CaseInsensitive
        } else {
            OrderingMode::Natural
        }
    }
}

fn label(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Quicksort => "Quick Sort",
        SortAlgorithm::Mergesort => "Merge Sort",
    }
}

fn run(cli: &Cli, tokens: &[String]) -> Result<String> {
    let elements = tokens
        .iter()
        .map(|token| Element::parse(cli.kind, token))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("parsed {} {} values", elements.len(), cli.kind);

    let mut out = String::new();
    for algo in cli.algorithm.algorithms() {
        let mut data = elements.clone();
        sort_elements(algo, cli.ordering(), &mut data)
            .with_context(|| format!("{} could not sort the input", algorithm_name(algo)))?;

        let joined = data
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{}: {joined}", label(algo))?;
    }
    Ok(out)
}

fn read_stdin_tokens() -> Result<Vec<String>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read values from stdin")?;
    Ok(input.split_whitespace().map(str::to_owned).collect())
}

fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let tokens = if cli.values.is_empty() {
        read_stdin_tokens()?
    } else {
        cli.values.clone()
    };

    print!("{}", run(&cli, &tokens)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sorter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["3", "1"]);
        assert_eq!(cli.algorithm, AlgorithmChoice::All);
        assert_eq!(cli.kind, ElementKind::Int);
        assert_eq!(cli.ordering(), OrderingMode::Natural);
        assert_eq!(cli.values, ["3", "1"]);
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let args = ["sorter", "--algorithm", "bogosort", "1"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn integers_with_both_algorithms() {
        let cli = parse(&["9", "5", "7", "-4", "12"]);
        let out = run(&cli, &cli.values).unwrap();
        assert_eq!(out, "Quick Sort: -4, 5, 7, 9, 12\nMerge Sort: -4, 5, 7, 9, 12\n");
    }

    #[test]
    fn case_insensitive_merge_sort_of_words() {
        let cli = parse(&["-a", "merge", "-k", "text", "-i", "WoAh", "woah", "apple"]);
        let out = run(&cli, &cli.values).unwrap();
        assert_eq!(out, "Merge Sort: apple, WoAh, woah\n");
    }

    #[test]
    fn characters() {
        let cli = parse(&["--algorithm", "quicksort", "--kind", "char", "a", "c", "B", "1"]);
        let out = run(&cli, &cli.values).unwrap();
        assert_eq!(out, "Quick Sort: 1, B, a, c\n");
    }

    #[test]
    fn case_insensitive_integers_are_rejected() {
        let cli = parse(&["-i", "3", "1"]);
        let err = run(&cli, &cli.values).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SortError>(),
            Some(SortError::UnsupportedElement { index: 0, .. })
        ));
    }

    #[test]
    fn malformed_value_is_reported() {
        let cli = parse(&["1", "two"]);
        let err = run(&cli, &cli.values).unwrap_err();
        assert_eq!(err.to_string(), "`two` is not a valid int element");
    }

    #[test]
    fn empty_input_prints_empty_lists() {
        let cli = parse(&[]);
        let out = run(&cli, &[]).unwrap();
        assert_eq!(out, "Quick Sort: \nMerge Sort: \n");
    }
}
