use super::FaqEntry;

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Preclaude?",
        answer: "A pre-configured set of slash commands, specialist agents and the Ralph \
                 autonomous builder that drops into your Claude Code setup with one command.",
    },
    FaqEntry {
        question: "How do I install it?",
        answer: "Run the install command below in your terminal. It copies the commands and \
                 agents into your Claude Code configuration directory.",
    },
    FaqEntry {
        question: "Does it work on Windows?",
        answer: "The installer supports macOS and Linux. On Windows, run it inside WSL.",
    },
    FaqEntry {
        question: "What is Ralph?",
        answer: "Ralph is an autonomous build loop. It reads prd.json, implements one user \
                 story at a time, runs typecheck, lint and tests, commits, and moves on.",
    },
    FaqEntry {
        question: "Can I customise the commands and agents?",
        answer: "Yes. Everything is plain markdown in your configuration directory, so you \
                 can edit, remove or add your own.",
    },
    FaqEntry {
        question: "Is it free?",
        answer: "Yes. Preclaude is open source under the MIT License.",
    },
];
