//! Command-line argument parsing.

use std::time::Duration;

use crate::error::CliError;

/// Default search depth for the minimax contender.
const DEFAULT_DEPTH: u8 = 4;

/// Default per-move thinking budget in seconds.
const DEFAULT_BUDGET_SECS: u64 = 300;

/// How a match participant is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContenderSpec {
    /// Depth-limited minimax engine.
    Minimax { depth: u8 },
    /// Uniform-random player; `None` draws a seed at startup.
    Random { seed: Option<u64> },
    /// A person entering cell names on stdin.
    Manual,
}

/// A fully parsed match setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSettings {
    /// Board width in columns.
    pub width: usize,
    /// Board height in rows.
    pub height: usize,
    /// Contender playing the dark discs.
    pub dark: ContenderSpec,
    /// Contender playing the light discs.
    pub light: ContenderSpec,
    /// Wall-clock budget for a single move.
    pub move_budget: Duration,
}

impl Default for MatchSettings {
    fn default() -> MatchSettings {
        MatchSettings {
            width: 8,
            height: 8,
            dark: ContenderSpec::Minimax {
                depth: DEFAULT_DEPTH,
            },
            light: ContenderSpec::Random { seed: None },
            move_budget: Duration::from_secs(DEFAULT_BUDGET_SECS),
        }
    }
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
usage: otello [options]

options:
  --dark SPEC    contender for the dark discs (default minimax:4)
  --light SPEC   contender for the light discs (default random)
  --size WxH     board size (default 8x8; even sides, at most 26 columns)
  --budget SECS  per-move budget in seconds (default 300)
  --help         print this message

contender specs: minimax[:DEPTH], random[:SEED], manual";

/// Parse command-line tokens (program name already stripped) into match
/// settings. Returns `Ok(None)` when `--help` was asked for.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Option<MatchSettings>, CliError> {
    let mut settings = MatchSettings::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_ref();
        match flag {
            "--help" | "-h" => return Ok(None),
            "--dark" => {
                settings.dark = parse_contender(value(args, i, flag)?)?;
                i += 2;
            }
            "--light" => {
                settings.light = parse_contender(value(args, i, flag)?)?;
                i += 2;
            }
            "--size" => {
                (settings.width, settings.height) = parse_size(value(args, i, flag)?)?;
                i += 2;
            }
            "--budget" => {
                settings.move_budget = parse_budget(value(args, i, flag)?)?;
                i += 2;
            }
            _ => {
                return Err(CliError::UnknownOption {
                    flag: flag.to_string(),
                });
            }
        }
    }

    Ok(Some(settings))
}

/// The value token following the flag at `i`.
fn value<'a, S: AsRef<str>>(args: &'a [S], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i + 1)
        .map(|s| s.as_ref())
        .ok_or_else(|| CliError::MissingValue {
            flag: flag.to_string(),
        })
}

/// Parse a contender spec: `minimax[:DEPTH]`, `random[:SEED]`, `manual`.
fn parse_contender(spec: &str) -> Result<ContenderSpec, CliError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };
    match (kind, arg) {
        ("minimax", None) => Ok(ContenderSpec::Minimax {
            depth: DEFAULT_DEPTH,
        }),
        ("minimax", Some(depth)) => {
            let depth = depth.parse().map_err(|_| CliError::InvalidDepth {
                value: depth.to_string(),
            })?;
            Ok(ContenderSpec::Minimax { depth })
        }
        ("random", None) => Ok(ContenderSpec::Random { seed: None }),
        ("random", Some(seed)) => {
            let seed = seed.parse().map_err(|_| CliError::InvalidSeed {
                value: seed.to_string(),
            })?;
            Ok(ContenderSpec::Random { seed: Some(seed) })
        }
        ("manual", None) => Ok(ContenderSpec::Manual),
        _ => Err(CliError::InvalidContender {
            spec: spec.to_string(),
        }),
    }
}

/// Parse a `WxH` board size into (width, height).
fn parse_size(size: &str) -> Result<(usize, usize), CliError> {
    let invalid = || CliError::InvalidSize {
        value: size.to_string(),
    };
    let (width, height) = size.split_once('x').ok_or_else(invalid)?;
    let width = width.parse().map_err(|_| invalid())?;
    let height = height.parse().map_err(|_| invalid())?;
    Ok((width, height))
}

/// Parse a whole number of seconds into a budget.
fn parse_budget(secs: &str) -> Result<Duration, CliError> {
    let secs: u64 = secs.parse().map_err(|_| CliError::InvalidBudget {
        value: secs.to_string(),
    })?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_the_default_match() {
        let settings = parse_args::<&str>(&[]).unwrap().unwrap();
        assert_eq!(settings, MatchSettings::default());
        assert_eq!(settings.width, 8);
        assert_eq!(settings.height, 8);
        assert_eq!(settings.dark, ContenderSpec::Minimax { depth: 4 });
        assert_eq!(settings.light, ContenderSpec::Random { seed: None });
        assert_eq!(settings.move_budget, Duration::from_secs(300));
    }

    #[test]
    fn help_returns_none() {
        assert_eq!(parse_args(&["--help"]).unwrap(), None);
        assert_eq!(parse_args(&["-h"]).unwrap(), None);
    }

    #[test]
    fn contender_spec_forms() {
        assert_eq!(
            parse_contender("minimax").unwrap(),
            ContenderSpec::Minimax { depth: 4 }
        );
        assert_eq!(
            parse_contender("minimax:6").unwrap(),
            ContenderSpec::Minimax { depth: 6 }
        );
        assert_eq!(
            parse_contender("random").unwrap(),
            ContenderSpec::Random { seed: None }
        );
        assert_eq!(
            parse_contender("random:99").unwrap(),
            ContenderSpec::Random { seed: Some(99) }
        );
        assert_eq!(parse_contender("manual").unwrap(), ContenderSpec::Manual);
    }

    #[test]
    fn bad_contender_specs_are_rejected() {
        assert!(matches!(
            parse_contender("alphabeta"),
            Err(CliError::InvalidContender { .. })
        ));
        assert!(matches!(
            parse_contender("minimax:deep"),
            Err(CliError::InvalidDepth { .. })
        ));
        assert!(matches!(
            parse_contender("random:yes"),
            Err(CliError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse_contender("manual:x"),
            Err(CliError::InvalidContender { .. })
        ));
    }

    #[test]
    fn size_and_budget_flags() {
        let settings = parse_args(&["--size", "10x6", "--budget", "5"])
            .unwrap()
            .unwrap();
        assert_eq!((settings.width, settings.height), (10, 6));
        assert_eq!(settings.move_budget, Duration::from_secs(5));
    }

    #[test]
    fn both_contenders_can_be_set() {
        let settings = parse_args(&["--dark", "random:3", "--light", "minimax:2"])
            .unwrap()
            .unwrap();
        assert_eq!(settings.dark, ContenderSpec::Random { seed: Some(3) });
        assert_eq!(settings.light, ContenderSpec::Minimax { depth: 2 });
    }

    #[test]
    fn malformed_sizes_are_rejected() {
        for size in ["8", "8x", "x8", "8by8", "wxh"] {
            assert!(
                matches!(parse_size(size), Err(CliError::InvalidSize { .. })),
                "{size}"
            );
        }
    }

    #[test]
    fn malformed_budget_is_rejected() {
        assert!(matches!(
            parse_budget("soon"),
            Err(CliError::InvalidBudget { .. })
        ));
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(matches!(
            parse_args(&["--colour", "blue"]),
            Err(CliError::UnknownOption { .. })
        ));
    }

    #[test]
    fn missing_value_is_rejected() {
        assert!(matches!(
            parse_args(&["--dark"]),
            Err(CliError::MissingValue { .. })
        ));
    }
}
