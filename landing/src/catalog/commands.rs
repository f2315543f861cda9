use super::CommandEntry;

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry::new(
        "/full-build",
        "Full workflow from idea to autonomous execution (PRD -> Ralph -> Build)",
    )
    .long(
        "Takes a one-line idea all the way to working code. Generates a PRD, converts it into \
         Ralph's story format and starts the autonomous build loop without further prompting.",
    )
    .when(&[
        "Starting a greenfield MVP from a rough idea",
        "You want the whole pipeline without running each step by hand",
    ])
    .steps(&[
        "Asks a few clarifying questions about the idea",
        "Writes a technical PRD with user stories",
        "Converts the PRD into prd.json",
        "Launches Ralph to build story by story",
    ])
    .example("/full-build A habit tracker with streaks and reminders"),
    CommandEntry::new(
        "/implement",
        "Execute full feature implementation from PRD through completion",
    )
    .long(
        "Implements a feature end to end from an existing PRD or spec: plans the change, \
         writes the code and tests, and verifies everything passes before handing back.",
    )
    .when(&[
        "A PRD or spec already exists for the feature",
        "The change spans several files or layers",
    ])
    .steps(&[
        "Reads the PRD and the relevant parts of the codebase",
        "Breaks the work into ordered tasks",
        "Implements each task with tests",
        "Runs typecheck, lint and tests",
    ])
    .example("/implement docs/prd/notifications.md"),
    CommandEntry::new(
        "/prd",
        "Generate a comprehensive technical PRD for a product or feature MVP",
    )
    .long(
        "Interviews you about the product, then writes a PRD covering goals, user stories, \
         acceptance criteria, data model and technical approach.",
    )
    .when(&[
        "Before building anything non-trivial",
        "You need a shared document for stakeholders",
    ])
    .steps(&[
        "Clarifies scope, users and constraints",
        "Drafts user stories with acceptance criteria",
        "Proposes architecture and data model",
        "Saves the PRD to the docs folder",
    ])
    .example("/prd Team retro board with anonymous voting"),
    CommandEntry::new(
        "/kickoff",
        "Initialize new project with full structure, CLAUDE.md, and tooling",
    )
    .when(&[
        "Creating a new repository",
        "Standardising an existing project's tooling",
    ])
    .steps(&[
        "Scaffolds the folder structure",
        "Writes CLAUDE.md with project conventions",
        "Sets up lint, format and test tooling",
    ]),
    CommandEntry::new(
        "/ralph",
        "Convert PRD to prd.json format for autonomous Ralph execution",
    )
    .long(
        "Turns a markdown PRD into the prd.json story list Ralph consumes. Each story gets \
         acceptance criteria and a pass flag Ralph flips as it completes work.",
    )
    .steps(&[
        "Parses user stories from the PRD",
        "Splits large stories into buildable chunks",
        "Writes prd.json next to the PRD",
    ])
    .example("/ralph docs/prd/habit-tracker.md"),
    CommandEntry::new("/build", "Run Ralph autonomous build loop on existing prd.json")
        .when(&[
            "prd.json is ready and reviewed",
            "Resuming a build after a pause",
        ])
        .steps(&[
            "Picks the next unfinished story",
            "Implements it and runs the checks",
            "Commits and marks the story as passing",
            "Repeats until the iteration budget runs out",
        ])
        .example("/build --iterations 20"),
    CommandEntry::new(
        "/research",
        "Deep research on competitors, market gaps, and idea validation",
    ),
    CommandEntry::new("/commit", "Create conventional commit from staged changes")
        .long(
            "Reads the staged diff and writes a Conventional Commits message that describes \
             what changed and why, then commits.",
        )
        .when(&[
            "You have staged changes ready to commit",
            "You want consistent commit history without writing messages by hand",
        ])
        .steps(&[
            "Inspects the staged diff",
            "Picks the commit type and scope",
            "Writes the subject and body",
            "Creates the commit",
        ]),
    CommandEntry::new("/pr", "Create pull request with auto-generated description")
        .steps(&[
            "Summarises the commits on the branch",
            "Writes a description with a test plan",
            "Opens the pull request",
        ]),
    CommandEntry::new("/review", "Comprehensive code review of staged or recent changes")
        .long(
            "Reviews the diff for correctness, security, performance and readability, and \
             reports findings grouped by severity with suggested fixes.",
        )
        .when(&[
            "Before opening a pull request",
            "After a large refactor",
        ])
        .example("/review --since main"),
    CommandEntry::new("/test", "Generate tests for existing code - unit, integration, or E2E")
        .when(&[
            "Coverage is thin around critical code",
            "Locking in behaviour before a refactor",
        ])
        .example("/test src/lib/pricing.ts"),
    CommandEntry::new("/debug", "Analyse error messages and suggest fixes")
        .steps(&[
            "Reads the error and stack trace",
            "Locates the failing code",
            "Explains the root cause",
            "Proposes and applies a fix",
        ])
        .example("/debug TypeError: Cannot read properties of undefined (reading 'map')"),
    CommandEntry::new("/status", "Quick health check - git, lint, types, tests in one view"),
    CommandEntry::new(
        "/polish",
        "Polish UI to match a design reference - URL, Figma, or screenshot",
    )
    .when(&[
        "The UI works but does not match the design",
        "You have a reference screenshot or Figma frame",
    ]),
    CommandEntry::new(
        "/refactor",
        "Refactor code - extract components, improve types, split files",
    ),
    CommandEntry::new(
        "/migrate",
        "Run migrations - database, Next.js upgrades, dependency updates",
    ),
    CommandEntry::new(
        "/deps",
        "Check dependencies - outdated packages, security, bundle size",
    ),
    CommandEntry::new("/seo", "Audit and fix SEO - meta tags, Open Graph, favicon, sitemap"),
    CommandEntry::new(
        "/analytics",
        "Check and setup analytics - PostHog, Google Analytics, Plausible",
    ),
    CommandEntry::new(
        "/learn",
        "Analyze session, score learnings, propose CLAUDE.md updates",
    )
    .long(
        "Looks back over the session, scores what was learned and proposes concrete \
         CLAUDE.md additions so the next session starts smarter.",
    ),
    CommandEntry::new("/marketing", "Generate marketing content from feature or release"),
    CommandEntry::new(
        "/stakeholder",
        "Generate stakeholder updates - daily, weekly, or full pack",
    ),
    CommandEntry::new(
        "/project-complete",
        "Generate end-of-project documentation suite",
    ),
    CommandEntry::new("/handoff", "Create session handoff notes for continuity")
        .when(&[
            "Ending a session mid-feature",
            "Passing work to another developer",
        ]),
    CommandEntry::new("/deploy-check", "Pre-deployment verification checklist")
        .steps(&[
            "Runs the production build",
            "Checks environment variables",
            "Verifies migrations and tests",
            "Reports go / no-go",
        ]),
];
