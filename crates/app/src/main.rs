use std::fmt;
use std::io::{self, BufRead, Write};

use practice_core::model::{Concept, DifficultyTier, QuizSettings};
use practice_core::{SeededRandom, ThreadRandom};
use services::{
    Clock, PracticeLoop, QuizResult, QuizSession, SubmitOutcome, format_elapsed, session::MAX_STARS,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTier { raw: String },
    InvalidConcept { raw: String },
    InvalidProblems { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTier { raw } => write!(f, "invalid --tier value: {raw}"),
            ArgsError::InvalidConcept { raw } => write!(f, "invalid --concept value: {raw}"),
            ArgsError::InvalidProblems { raw } => write!(f, "invalid --problems value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--tier <tier>] [--concept <concept>]");
    eprintln!("                      [--problems <n>] [--seed <n>]");
    eprintln!();
    eprintln!("Tiers:    easy (1-10), medium (1-99), hard (0-999)");
    eprintln!("Concepts: numbers, patterns, counting, measurement, geometry");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --tier easy --concept numbers --problems 25");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATH_PRACTICE_TIER, MATH_PRACTICE_CONCEPT,");
    eprintln!("  MATH_PRACTICE_PROBLEMS, MATH_PRACTICE_SEED");
    eprintln!("  RUST_LOG controls log output (e.g. RUST_LOG=debug)");
}

struct Args {
    tier: DifficultyTier,
    concept: Concept,
    problems: u32,
    seed: Option<u64>,
}

impl Args {
    fn from_env() -> Self {
        // Unknown names from the environment degrade to the defaults.
        let tier = std::env::var("MATH_PRACTICE_TIER")
            .ok()
            .map_or_else(DifficultyTier::default, |raw| {
                DifficultyTier::parse_lenient(&raw)
            });
        let concept = std::env::var("MATH_PRACTICE_CONCEPT")
            .ok()
            .map_or_else(Concept::default, |raw| Concept::parse_lenient(&raw));
        let problems = std::env::var("MATH_PRACTICE_PROBLEMS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(QuizSettings::DEFAULT_PROBLEM_COUNT);
        let seed = std::env::var("MATH_PRACTICE_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        Self {
            tier,
            concept,
            problems,
            seed,
        }
    }

    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_from(Self::from_env(), args)
    }

    /// Applies command-line flags on top of `defaults`.
    fn parse_from(
        defaults: Self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = defaults;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tier" => {
                    let value = require_value(args, "--tier")?;
                    parsed.tier = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTier { raw: value.clone() })?;
                }
                "--concept" => {
                    let value = require_value(args, "--concept")?;
                    parsed.concept = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidConcept { raw: value.clone() })?;
                }
                "--problems" => {
                    let value = require_value(args, "--problems")?;
                    parsed.problems = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidProblems { raw: value.clone() })?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn stars(count: u32) -> String {
    (1..=MAX_STARS)
        .map(|i| if i <= count { '★' } else { '☆' })
        .collect()
}

fn render_feedback(out: &mut impl Write, outcome: &SubmitOutcome) -> io::Result<()> {
    if outcome.feedback.correct {
        writeln!(out, "✓ Correct! Well done!")?;
    } else {
        writeln!(
            out,
            "✗ Not quite. The answer is {}",
            outcome.feedback.correct_answer
        )?;
    }
    Ok(())
}

fn render_result(out: &mut impl Write, result: &QuizResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎉 Great Job! 🎉")?;
    writeln!(out, "{}%", result.percentage)?;
    writeln!(
        out,
        "You got {} out of {} questions correct!",
        result.score, result.total
    )?;
    writeln!(out, "Time taken: {}", format_elapsed(result.elapsed_secs))?;
    writeln!(out, "{}", stars(result.stars))?;
    writeln!(out, "{}", result.message())?;
    Ok(())
}

/// Runs attempts until the learner declines another one or input ends.
fn drive(
    practice: &mut PracticeLoop,
    args: &Args,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Math Practice: {} - {}", args.tier.label(), args.concept.title())?;
    writeln!(out, "Type your answer and press Enter. Type q to stop.")?;
    practice.on_start(args.tier, args.concept);

    let mut line = String::new();
    loop {
        while let Some(timer) = practice.on_tick() {
            let Some(problem) = practice.current_problem() else {
                break;
            };
            let progress = practice.session().progress();
            writeln!(out)?;
            writeln!(
                out,
                "[{timer}] Question {}/{} ({} left)  Score: {}",
                progress.index + 1,
                progress.total,
                progress.remaining(),
                progress.score
            )?;
            if let Some(visual) = problem.visual() {
                writeln!(out, "{}", visual.to_text())?;
            }
            write!(out, "{} > ", problem.prompt())?;
            out.flush()?;

            line.clear();
            let read = input.read_line(&mut line)?;
            if read == 0 || matches!(line.trim(), "q" | "quit") {
                practice.on_close();
                break;
            }
            match practice.on_submit_text(&line) {
                Ok(outcome) => render_feedback(out, &outcome)?,
                Err(err) => {
                    log::warn!("submission rejected: {err}");
                    break;
                }
            }
        }

        if let Some(result) = practice.session().result() {
            render_result(out, result)?;
        }

        write!(out, "Practice again? [y/N] ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        practice.on_restart();
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let session = QuizSession::new(QuizSettings::default(), Clock::default_clock())
        .with_problem_count(args.problems)?;
    let session = match args.seed {
        Some(seed) => session.with_random(SeededRandom::new(seed)),
        None => session.with_random(ThreadRandom),
    };
    log::info!(
        "starting practice: tier={} concept={} problems={} seeded={}",
        args.tier,
        args.concept,
        args.problems,
        args.seed.is_some()
    );

    let mut practice = PracticeLoop::new(session);
    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(&mut practice, &args, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Args {
        Args {
            tier: DifficultyTier::Easy,
            concept: Concept::Numbers,
            problems: QuizSettings::DEFAULT_PROBLEM_COUNT,
            seed: None,
        }
    }

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse_from(defaults(), &mut iter)
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--tier",
            "hard",
            "--concept",
            "geometry",
            "--problems",
            "5",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(args.tier, DifficultyTier::Hard);
        assert_eq!(args.concept, Concept::Geometry);
        assert_eq!(args.problems, 5);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn invalid_flags_are_reported() {
        assert!(matches!(
            parse(&["--tier", "expert"]),
            Err(ArgsError::InvalidTier { .. })
        ));
        assert!(matches!(
            parse(&["--problems"]),
            Err(ArgsError::MissingValue { flag: "--problems" })
        ));
        assert!(matches!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn flags_layer_over_given_defaults() {
        let base = Args {
            problems: 12,
            ..defaults()
        };
        let args = parse_over(base, &["--concept", "patterns"]);
        assert_eq!(args.tier, DifficultyTier::Easy);
        assert_eq!(args.concept, Concept::Patterns);
        assert_eq!(args.problems, 12);
        assert_eq!(args.seed, None);
    }

    fn parse_over(base: Args, args: &[&str]) -> Args {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse_from(base, &mut iter).unwrap()
    }

    #[test]
    fn star_line_fills_from_the_left() {
        assert_eq!(stars(3), "★★★☆☆");
    }

    #[test]
    fn scripted_input_plays_a_full_attempt() {
        let session = QuizSession::new(
            QuizSettings::new(2).unwrap(),
            practice_core::time::fixed_clock(),
        )
        .with_random(practice_core::ScriptedRandom::lowest());
        let mut practice = PracticeLoop::new(session);
        let args = Args {
            tier: DifficultyTier::Easy,
            concept: Concept::Numbers,
            problems: 2,
            seed: None,
        };
        let mut input = io::Cursor::new("2\nseven\nn\n");
        let mut out = Vec::new();

        drive(&mut practice, &args, &mut input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[00:00] Question 1/2 (2 left)  Score: 0"));
        assert!(text.contains("Question 2/2 (1 left)  Score: 1"));
        assert!(text.contains("1 + 1 = ? > "));
        assert!(text.contains("✓ Correct! Well done!"));
        assert!(text.contains("✗ Not quite. The answer is 2"));
        assert!(text.contains("You got 1 out of 2 questions correct!"));
        assert!(text.contains("50%"));
    }
}
