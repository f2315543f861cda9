//! Static content catalogs: slash commands, specialist agents and FAQs.
//!
//! The tables are compiled into the page. Display order is the order of the
//! table, and an optional field that is `None` (or empty) suppresses its
//! section in the detail modal entirely.
//!
//! # Example
//!
//! ```rust
//! use preclaude_landing::catalog::{self, DetailSection, Record};
//!
//! let commit = catalog::find_command("/commit").expect("shipped command");
//! let sections = Record::Command(commit).sections();
//! assert!(matches!(sections[0], DetailSection::Description(_)));
//! ```

mod agents;
mod commands;
mod faqs;

use std::collections::HashSet;
use thiserror::Error;

pub use agents::AGENTS;
pub use commands::COMMANDS;
pub use faqs::FAQS;

/// A slash command shipped with the add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Slash-prefixed identifier, e.g. `/commit`.
    pub name: &'static str,
    /// One-liner shown on the card.
    pub short_description: &'static str,
    pub long_description: Option<&'static str>,
    /// "When to Use" bullets.
    pub usage_contexts: Option<&'static [&'static str]>,
    /// "What It Does" numbered steps.
    pub steps: Option<&'static [&'static str]>,
    pub example: Option<&'static str>,
}

impl CommandEntry {
    pub const fn new(name: &'static str, short_description: &'static str) -> Self {
        Self {
            name,
            short_description,
            long_description: None,
            usage_contexts: None,
            steps: None,
            example: None,
        }
    }

    pub const fn long(mut self, text: &'static str) -> Self {
        self.long_description = Some(text);
        self
    }

    pub const fn when(mut self, contexts: &'static [&'static str]) -> Self {
        self.usage_contexts = Some(contexts);
        self
    }

    pub const fn steps(mut self, steps: &'static [&'static str]) -> Self {
        self.steps = Some(steps);
        self
    }

    pub const fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// A specialist agent shipped with the add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentEntry {
    /// `@`-prefixed identifier, e.g. `@code-reviewer`.
    pub name: &'static str,
    pub short_description: &'static str,
    pub long_description: Option<&'static str>,
    pub expertise: Option<&'static [&'static str]>,
    pub focus_areas: Option<&'static [&'static str]>,
    pub usage_examples: Option<&'static [&'static str]>,
}

impl AgentEntry {
    pub const fn new(name: &'static str, short_description: &'static str) -> Self {
        Self {
            name,
            short_description,
            long_description: None,
            expertise: None,
            focus_areas: None,
            usage_examples: None,
        }
    }

    pub const fn long(mut self, text: &'static str) -> Self {
        self.long_description = Some(text);
        self
    }

    pub const fn expertise(mut self, items: &'static [&'static str]) -> Self {
        self.expertise = Some(items);
        self
    }

    pub const fn focus(mut self, items: &'static [&'static str]) -> Self {
        self.focus_areas = Some(items);
        self
    }

    pub const fn usage(mut self, items: &'static [&'static str]) -> Self {
        self.usage_examples = Some(items);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Anything the detail modal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Command(&'static CommandEntry),
    Agent(&'static AgentEntry),
}

impl Record {
    pub fn name(&self) -> &'static str {
        match self {
            Record::Command(cmd) => cmd.name,
            Record::Agent(agent) => agent.name,
        }
    }

    pub fn short_description(&self) -> &'static str {
        match self {
            Record::Command(cmd) => cmd.short_description,
            Record::Agent(agent) => agent.short_description,
        }
    }

    /// Long description, falling back to the card one-liner.
    pub fn description(&self) -> &'static str {
        let (long, short) = match self {
            Record::Command(cmd) => (cmd.long_description, cmd.short_description),
            Record::Agent(agent) => (agent.long_description, agent.short_description),
        };
        long.filter(|text| !text.trim().is_empty()).unwrap_or(short)
    }

    /// Ordered sections the detail modal renders for this record.
    ///
    /// Absent or empty optional fields produce no section at all.
    pub fn sections(&self) -> Vec<DetailSection> {
        let mut sections = vec![DetailSection::Description(self.description())];

        match self {
            Record::Command(cmd) => {
                if let Some(items) = non_empty(cmd.usage_contexts) {
                    sections.push(DetailSection::Bullets {
                        heading: "When to Use",
                        items,
                    });
                }
                if let Some(items) = non_empty(cmd.steps) {
                    sections.push(DetailSection::Numbered {
                        heading: "What It Does",
                        items,
                    });
                }
                if let Some(code) = cmd.example.filter(|code| !code.trim().is_empty()) {
                    sections.push(DetailSection::Code {
                        heading: "Example",
                        code,
                    });
                }
            }
            Record::Agent(agent) => {
                if let Some(items) = non_empty(agent.expertise) {
                    sections.push(DetailSection::Bullets {
                        heading: "Expertise",
                        items,
                    });
                }
                if let Some(items) = non_empty(agent.focus_areas) {
                    sections.push(DetailSection::Bullets {
                        heading: "Focus Areas",
                        items,
                    });
                }
                if let Some(lines) = non_empty(agent.usage_examples) {
                    sections.push(DetailSection::CodeLines {
                        heading: "Example Usage",
                        lines,
                    });
                }
            }
        }

        sections
    }
}

fn non_empty(items: Option<&'static [&'static str]>) -> Option<&'static [&'static str]> {
    items.filter(|items| !items.is_empty())
}

/// One block of the detail modal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSection {
    Description(&'static str),
    Bullets {
        heading: &'static str,
        items: &'static [&'static str],
    },
    Numbered {
        heading: &'static str,
        items: &'static [&'static str],
    },
    Code {
        heading: &'static str,
        code: &'static str,
    },
    CodeLines {
        heading: &'static str,
        lines: &'static [&'static str],
    },
}

impl DetailSection {
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            DetailSection::Description(_) => None,
            DetailSection::Bullets { heading, .. }
            | DetailSection::Numbered { heading, .. }
            | DetailSection::Code { heading, .. }
            | DetailSection::CodeLines { heading, .. } => Some(heading),
        }
    }
}

pub fn find_command(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

pub fn find_agent(name: &str) -> Option<&'static AgentEntry> {
    AGENTS.iter().find(|agent| agent.name == name)
}

/// Hero subheadline. Counts come from the tables so copy cannot drift.
pub fn summary_line() -> String {
    format!(
        "{} slash commands, {} specialist agents, and Ralph autonomous builder — all pre-configured and ready to use.",
        COMMANDS.len(),
        AGENTS.len()
    )
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{catalog} catalog is empty")]
    Empty { catalog: &'static str },

    #[error("duplicate name `{name}` in {catalog} catalog")]
    DuplicateName { catalog: &'static str, name: String },

    #[error("`{name}` in {catalog} catalog must start with `{prefix}`")]
    BadPrefix {
        catalog: &'static str,
        name: String,
        prefix: char,
    },

    #[error("entry {index} in {catalog} catalog has a blank {field}")]
    BlankField {
        catalog: &'static str,
        index: usize,
        field: &'static str,
    },
}

pub fn validate_commands(commands: &[CommandEntry]) -> Result<(), CatalogError> {
    check_named(
        "commands",
        '/',
        commands.iter().map(|cmd| (cmd.name, cmd.short_description)),
    )
}

pub fn validate_agents(agents: &[AgentEntry]) -> Result<(), CatalogError> {
    check_named(
        "agents",
        '@',
        agents
            .iter()
            .map(|agent| (agent.name, agent.short_description)),
    )
}

pub fn validate_faqs(faqs: &[FaqEntry]) -> Result<(), CatalogError> {
    if faqs.is_empty() {
        return Err(CatalogError::Empty { catalog: "faqs" });
    }
    for (index, faq) in faqs.iter().enumerate() {
        if faq.question.trim().is_empty() {
            return Err(CatalogError::BlankField {
                catalog: "faqs",
                index,
                field: "question",
            });
        }
        if faq.answer.trim().is_empty() {
            return Err(CatalogError::BlankField {
                catalog: "faqs",
                index,
                field: "answer",
            });
        }
    }
    Ok(())
}

/// Validate every shipped table.
pub fn validate_all() -> Result<(), CatalogError> {
    validate_commands(COMMANDS)?;
    validate_agents(AGENTS)?;
    validate_faqs(FAQS)?;
    Ok(())
}

fn check_named<'a>(
    catalog: &'static str,
    prefix: char,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for (index, (name, short)) in entries.enumerate() {
        // The bare prefix alone is not a name either
        if !name.starts_with(prefix) || name.len() == prefix.len_utf8() {
            return Err(CatalogError::BadPrefix {
                catalog,
                name: name.to_string(),
                prefix,
            });
        }
        if short.trim().is_empty() {
            return Err(CatalogError::BlankField {
                catalog,
                index,
                field: "short description",
            });
        }
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                catalog,
                name: name.to_string(),
            });
        }
    }

    if seen.is_empty() {
        return Err(CatalogError::Empty { catalog });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_catalogs_are_valid() {
        assert_eq!(validate_all(), Ok(()));
    }

    #[test]
    fn commit_detail_omits_example() {
        let commit = find_command("/commit").expect("/commit ships");
        assert!(commit.example.is_none());

        let headings: Vec<_> = Record::Command(commit)
            .sections()
            .iter()
            .filter_map(DetailSection::heading)
            .collect();

        assert!(headings.contains(&"When to Use"));
        assert!(headings.contains(&"What It Does"));
        assert!(!headings.contains(&"Example"));
    }

    #[test]
    fn bare_command_renders_description_only() {
        static BARE: CommandEntry = CommandEntry::new("/bare", "Just a one-liner");
        assert_eq!(
            Record::Command(&BARE).sections(),
            vec![DetailSection::Description("Just a one-liner")]
        );
    }

    #[test]
    fn empty_optional_fields_are_suppressed() {
        static EMPTY: CommandEntry = CommandEntry::new("/empty", "short")
            .long("   ")
            .when(&[])
            .steps(&[])
            .example("");
        assert_eq!(
            Record::Command(&EMPTY).sections(),
            vec![DetailSection::Description("short")]
        );
    }

    #[test]
    fn full_command_sections_keep_order() {
        static FULL: CommandEntry = CommandEntry::new("/full", "short")
            .long("long")
            .when(&["a"])
            .steps(&["one", "two"])
            .example("/full now");
        assert_eq!(
            Record::Command(&FULL).sections(),
            vec![
                DetailSection::Description("long"),
                DetailSection::Bullets {
                    heading: "When to Use",
                    items: &["a"],
                },
                DetailSection::Numbered {
                    heading: "What It Does",
                    items: &["one", "two"],
                },
                DetailSection::Code {
                    heading: "Example",
                    code: "/full now",
                },
            ]
        );
    }

    #[test]
    fn agent_sections_follow_field_order() {
        static AGENT: AgentEntry = AgentEntry::new("@tester", "short")
            .expertise(&["x"])
            .usage(&["@tester do it"]);
        let headings: Vec<_> = Record::Agent(&AGENT)
            .sections()
            .iter()
            .filter_map(DetailSection::heading)
            .collect();
        assert_eq!(headings, vec!["Expertise", "Example Usage"]);
    }

    #[test]
    fn duplicate_command_is_rejected() {
        let commands = [
            CommandEntry::new("/a", "first"),
            CommandEntry::new("/a", "second"),
        ];
        assert_eq!(
            validate_commands(&commands),
            Err(CatalogError::DuplicateName {
                catalog: "commands",
                name: "/a".to_string(),
            })
        );
    }

    #[test]
    fn agent_without_at_sign_is_rejected() {
        let agents = [AgentEntry::new("reviewer", "reviews")];
        let err = validate_agents(&agents).unwrap_err();
        assert_eq!(err.to_string(), "`reviewer` in agents catalog must start with `@`");
    }

    #[test]
    fn bare_prefix_is_not_a_name() {
        let commands = [CommandEntry::new("/", "nothing")];
        assert!(matches!(
            validate_commands(&commands),
            Err(CatalogError::BadPrefix { .. })
        ));
    }

    #[test]
    fn empty_catalogs_are_rejected() {
        assert_eq!(
            validate_commands(&[]),
            Err(CatalogError::Empty {
                catalog: "commands"
            })
        );
        assert_eq!(validate_faqs(&[]), Err(CatalogError::Empty { catalog: "faqs" }));
    }

    #[test]
    fn blank_faq_answer_is_rejected() {
        let faqs = [FaqEntry {
            question: "Why?",
            answer: " ",
        }];
        assert_eq!(
            validate_faqs(&faqs),
            Err(CatalogError::BlankField {
                catalog: "faqs",
                index: 0,
                field: "answer",
            })
        );
    }

    #[test]
    fn summary_line_counts_tables() {
        let line = summary_line();
        assert!(line.starts_with(&format!("{} slash commands", COMMANDS.len())));
        assert!(line.contains(&format!("{} specialist agents", AGENTS.len())));
    }

    #[test]
    fn record_description_falls_back_to_short() {
        let agent = find_agent("@ios-developer").expect("ships");
        assert_eq!(Record::Agent(agent).description(), agent.short_description);
        assert_eq!(Record::Agent(agent).name(), "@ios-developer");
    }
}
