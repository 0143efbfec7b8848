use regex::Regex;
use serde::Serialize;

const HEADING_PREFIX: &str = "AI Can";
const DEFAULT_HEADING: &str = "AI Can Transform Your Business";
const MAX_USE_CASES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Turns one free-form model reply into at most three use-case records.
///
/// Blocks are blank-line-delimited. Each block ideally carries a `HEADING:`
/// line and a `DESCRIPTION:` line; when either marker is missing the block
/// degrades through first-line and whole-block fallbacks, so malformed input
/// still yields a record rather than an error.
pub fn parse_use_cases(content: &str) -> Vec<UseCase> {
    let block_split = Regex::new(r"\n\n+").unwrap();
    let heading_re = Regex::new(r"(?i)HEADING:\s*(AI Can[^\n]*)").unwrap();
    let desc_re = Regex::new(r"(?is)DESCRIPTION:\s*(.*?)(?:\n\n|\z)").unwrap();
    let desc_label_re = Regex::new(r"(?i)^DESCRIPTION:\s*").unwrap();
    let heading_line_re = Regex::new(r"(?im)^HEADING:.*").unwrap();

    block_split
        .split(content)
        .filter(|block| !block.trim().is_empty())
        .take(MAX_USE_CASES)
        .enumerate()
        .map(|(index, block)| {
            let mut heading = DEFAULT_HEADING.to_string();
            let mut description = block.to_string();

            if let Some(captures) = heading_re.captures(block) {
                heading = captures[1].trim().to_string();
            } else {
                let mut lines = block.lines();
                if let Some(first) = lines.next() {
                    if first.trim().starts_with(HEADING_PREFIX) {
                        heading = first.trim().to_string();
                        description = lines.collect::<Vec<_>>().join("\n").trim().to_string();
                    }
                }
            }

            if let Some(captures) = desc_re.captures(block) {
                if !captures[1].is_empty() {
                    description = captures[1].trim().to_string();
                }
            }

            if !heading.starts_with(HEADING_PREFIX) {
                heading = format!("{HEADING_PREFIX} {heading}");
            }

            let description = desc_label_re.replace(&description, "");
            let description = heading_line_re.replace(&description, "");

            UseCase {
                id: (index + 1) as u32,
                title: heading,
                description: description.trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_use_cases, UseCase};

    const WELL_FORMED: &str = "HEADING: AI Can Boost Sales\nDESCRIPTION: Personalizes offers.\n\nHEADING: AI Can Cut Costs\nDESCRIPTION: Automates support.\n\nHEADING: AI Can Predict Demand\nDESCRIPTION: Forecasts inventory.";

    #[test]
    fn parses_three_well_formed_blocks_in_order() {
        let parsed = parse_use_cases(WELL_FORMED);

        assert_eq!(
            parsed,
            vec![
                UseCase {
                    id: 1,
                    title: "AI Can Boost Sales".to_string(),
                    description: "Personalizes offers.".to_string(),
                },
                UseCase {
                    id: 2,
                    title: "AI Can Cut Costs".to_string(),
                    description: "Automates support.".to_string(),
                },
                UseCase {
                    id: 3,
                    title: "AI Can Predict Demand".to_string(),
                    description: "Forecasts inventory.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn drops_blocks_beyond_the_third() {
        let input = format!("{WELL_FORMED}\n\nHEADING: AI Can Do More\nDESCRIPTION: Ignored.");
        let parsed = parse_use_cases(&input);

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2].title, "AI Can Predict Demand");
    }

    #[test]
    fn fewer_blocks_yield_fewer_records() {
        let parsed = parse_use_cases("HEADING: AI Can Boost Sales\nDESCRIPTION: Personalizes offers.");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 1);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(parse_use_cases("").is_empty());
        assert!(parse_use_cases("   \n\n \n\n  ").is_empty());
    }

    #[test]
    fn unmarked_block_starting_with_prefix_uses_first_line_as_title() {
        let parsed = parse_use_cases("AI Can Streamline Onboarding\nNew hires get a guided setup.\nManagers get progress reports.");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "AI Can Streamline Onboarding");
        assert_eq!(
            parsed[0].description,
            "New hires get a guided setup.\nManagers get progress reports."
        );
    }

    #[test]
    fn unmarked_block_without_prefix_gets_default_title() {
        let parsed = parse_use_cases("Chatbots answer common questions around the clock.");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "AI Can Transform Your Business");
        assert_eq!(
            parsed[0].description,
            "Chatbots answer common questions around the clock."
        );
    }

    #[test]
    fn heading_marker_without_prefix_falls_back_to_default_title() {
        let parsed = parse_use_cases("HEADING: Boost Sales\nDESCRIPTION: Personalizes offers.");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "AI Can Transform Your Business");
        assert_eq!(parsed[0].description, "Personalizes offers.");
    }

    #[test]
    fn markers_match_case_insensitively() {
        let parsed = parse_use_cases("heading: AI Can Boost Sales\ndescription: Personalizes offers.");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "AI Can Boost Sales");
        assert_eq!(parsed[0].description, "Personalizes offers.");
    }

    #[test]
    fn description_marker_overrides_first_line_fallback() {
        let parsed = parse_use_cases("AI Can Boost Sales\nSome filler line.\nDESCRIPTION: Personalizes offers.");

        assert_eq!(parsed[0].title, "AI Can Boost Sales");
        assert_eq!(parsed[0].description, "Personalizes offers.");
    }

    #[test]
    fn description_without_marker_loses_heading_line() {
        let parsed = parse_use_cases("HEADING: AI Can Boost Sales\nPersonalizes offers for every visitor.");

        assert_eq!(parsed[0].title, "AI Can Boost Sales");
        assert_eq!(parsed[0].description, "Personalizes offers for every visitor.");
    }

    #[test]
    fn titles_always_carry_the_prefix() {
        let inputs = [
            "heading: ai can boost sales\ndescription: Lowercase markers.",
            "HEADING: Boost Sales\nDESCRIPTION: No prefix at all.",
            "Plain text without any structure.",
            WELL_FORMED,
        ];

        for input in inputs {
            for record in parse_use_cases(input) {
                assert!(
                    record.title.starts_with("AI Can"),
                    "title {:?} for input {:?}",
                    record.title,
                    input
                );
            }
        }
    }

    #[test]
    fn descriptions_never_retain_markers() {
        let inputs = [
            WELL_FORMED,
            "HEADING: AI Can Boost Sales\nDESCRIPTION: Personalizes offers.",
            "HEADING: AI Can Boost Sales\nPersonalizes offers.",
            "DESCRIPTION: Just a description block.",
        ];

        for input in inputs {
            for record in parse_use_cases(input) {
                assert!(!record.description.contains("HEADING:"), "input {input:?}");
                assert!(!record.description.starts_with("DESCRIPTION:"), "input {input:?}");
            }
        }
    }

    #[test]
    fn reparsing_reconstructed_markers_is_idempotent() {
        let first = parse_use_cases(WELL_FORMED);
        let reconstructed = first
            .iter()
            .map(|uc| format!("HEADING: {}\nDESCRIPTION: {}", uc.title, uc.description))
            .collect::<Vec<_>>()
            .join("\n\n");

        assert_eq!(parse_use_cases(&reconstructed), first);
    }

    #[test]
    fn extra_blank_lines_between_blocks_are_one_separator() {
        let parsed = parse_use_cases("HEADING: AI Can Boost Sales\nDESCRIPTION: Personalizes offers.\n\n\n\nHEADING: AI Can Cut Costs\nDESCRIPTION: Automates support.");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].id, 2);
        assert_eq!(parsed[1].title, "AI Can Cut Costs");
    }
}
