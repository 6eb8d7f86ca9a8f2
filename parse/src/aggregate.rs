//! Error aggregation and exclusive-set resolution.
//!
//! A read-only transformation run over a failed parse's error list before
//! rendering. Individual `SetViolation` errors are folded, in place, into
//! one [`SetConflict`] per offending set; everything else passes through in
//! discovery order. The authoritative error list is never altered.

use std::collections::HashSet;

use serde::Serialize;

use verbline_core::ParseError;

/// One synthesized cross-set incompatibility report.
///
/// `members` are the supplied options of the offending set; `incompatible`
/// are the supplied options of every other set. Both lists are
/// deduplicated and keep stable input order. Both are non-empty by
/// construction: a conflict is only synthesized when members of at least
/// two sets were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetConflict {
    pub set: String,
    pub members: Vec<String>,
    pub incompatible: Vec<String>,
}

/// An error list entry after aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatedError {
    Plain(ParseError),
    SetConflict(SetConflict),
}

/// Folds set violations into grouped conflicts, preserving discovery order.
///
/// Each set's conflict appears at the position of that set's first
/// violation. An option also reported as a [`ParseError::GroupAmbiguity`]
/// is suppressed from conflict synthesis; a set left with no members is
/// not reported at all.
///
/// # Examples
///
/// ```
/// use verbline_core::ParseError;
/// use verbline_parse::{AggregatedError, aggregate};
///
/// let errors = vec![
///     ParseError::SetViolation { name: "web".into(), set: "remote".into() },
///     ParseError::SetViolation { name: "disk".into(), set: "local".into() },
/// ];
/// let aggregated = aggregate(&errors);
/// assert_eq!(aggregated.len(), 2);
/// assert!(matches!(&aggregated[0], AggregatedError::SetConflict(c) if c.set == "remote"));
/// ```
pub fn aggregate(errors: &[ParseError]) -> Vec<AggregatedError> {
    let ambiguous: HashSet<&str> = errors
        .iter()
        .filter_map(|e| match e {
            ParseError::GroupAmbiguity { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();

    // set -> member names, first-appearance order, ambiguous options dropped
    let mut sets: Vec<(&str, Vec<&str>)> = Vec::new();
    for error in errors {
        let ParseError::SetViolation { name, set } = error else {
            continue;
        };
        if ambiguous.contains(name.as_str()) {
            continue;
        }
        match sets.iter_mut().find(|(s, _)| *s == set.as_str()) {
            Some((_, members)) => {
                if !members.contains(&name.as_str()) {
                    members.push(name.as_str());
                }
            }
            None => sets.push((set.as_str(), vec![name.as_str()])),
        }
    }

    let mut out: Vec<AggregatedError> = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();
    for error in errors {
        match error {
            ParseError::SetViolation { name, set } => {
                if ambiguous.contains(name.as_str()) || !emitted.insert(set.as_str()) {
                    continue;
                }
                let Some((_, members)) = sets.iter().find(|(s, _)| *s == set.as_str()) else {
                    continue;
                };
                let mut incompatible: Vec<String> = Vec::new();
                for (other, other_members) in &sets {
                    if *other == set.as_str() {
                        continue;
                    }
                    for member in other_members {
                        if !incompatible.iter().any(|m| m == member) {
                            incompatible.push((*member).to_string());
                        }
                    }
                }
                if incompatible.is_empty() {
                    continue;
                }
                out.push(AggregatedError::SetConflict(SetConflict {
                    set: set.clone(),
                    members: members.iter().map(|m| (*m).to_string()).collect(),
                    incompatible,
                }));
            }
            other => out.push(AggregatedError::Plain(other.clone())),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(name: &str, set: &str) -> ParseError {
        ParseError::SetViolation {
            name: name.to_string(),
            set: set.to_string(),
        }
    }

    #[test]
    fn test_passthrough_without_set_violations() {
        let errors = vec![
            ParseError::NoVerbSelected,
            ParseError::MissingRequired {
                name: Some("file".to_string()),
            },
        ];
        let aggregated = aggregate(&errors);
        assert_eq!(
            aggregated,
            vec![
                AggregatedError::Plain(ParseError::NoVerbSelected),
                AggregatedError::Plain(ParseError::MissingRequired {
                    name: Some("file".to_string())
                }),
            ]
        );
    }

    #[test]
    fn test_conflicts_replace_violations_in_place() {
        let errors = vec![
            ParseError::UnknownOption {
                token: "--x".to_string(),
            },
            violation("web", "remote"),
            violation("ftp", "remote"),
            violation("disk", "local"),
            ParseError::MissingRequired {
                name: Some("file".to_string()),
            },
        ];

        let aggregated = aggregate(&errors);
        assert_eq!(aggregated.len(), 4);
        assert!(matches!(&aggregated[0], AggregatedError::Plain(_)));
        match &aggregated[1] {
            AggregatedError::SetConflict(c) => {
                assert_eq!(c.set, "remote");
                assert_eq!(c.members, vec!["web", "ftp"]);
                assert_eq!(c.incompatible, vec!["disk"]);
            }
            other => panic!("unexpected entry: {other:?}"),
        }
        match &aggregated[2] {
            AggregatedError::SetConflict(c) => {
                assert_eq!(c.set, "local");
                assert_eq!(c.members, vec!["disk"]);
                assert_eq!(c.incompatible, vec!["web", "ftp"]);
            }
            other => panic!("unexpected entry: {other:?}"),
        }
        assert!(matches!(&aggregated[3], AggregatedError::Plain(_)));
    }

    #[test]
    fn test_members_are_deduplicated_with_stable_order() {
        let errors = vec![
            violation("web", "remote"),
            violation("web", "remote"),
            violation("disk", "local"),
        ];
        let aggregated = aggregate(&errors);
        match &aggregated[0] {
            AggregatedError::SetConflict(c) => assert_eq!(c.members, vec!["web"]),
            other => panic!("unexpected entry: {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_option_suppresses_its_conflict() {
        let errors = vec![
            violation("json", "output"),
            violation("disk", "local"),
            ParseError::GroupAmbiguity {
                name: "json".to_string(),
            },
        ];

        let aggregated = aggregate(&errors);
        // "output" loses its only member; "local" loses its only
        // incompatibility, so neither conflict survives.
        assert_eq!(
            aggregated,
            vec![AggregatedError::Plain(ParseError::GroupAmbiguity {
                name: "json".to_string()
            })]
        );
    }

    #[test]
    fn test_single_set_precondition_holds() {
        // The binder only emits violations when two or more sets are
        // involved; a lone set reaching the aggregator yields no conflict.
        let errors = vec![violation("web", "remote"), violation("ftp", "remote")];
        let aggregated = aggregate(&errors);
        assert!(aggregated.is_empty());
    }
}
