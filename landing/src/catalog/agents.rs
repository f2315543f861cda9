use super::AgentEntry;

pub const AGENTS: &[AgentEntry] = &[
    AgentEntry::new(
        "@frontend-developer",
        "React, Next.js, UI components, state management",
    )
    .long(
        "Builds accessible, responsive interfaces with modern React. Knows when to reach \
         for server components, when to keep state local and how to keep bundles small.",
    )
    .expertise(&[
        "React and Next.js App Router",
        "TypeScript",
        "Tailwind CSS",
        "State management",
    ])
    .focus(&[
        "Component architecture",
        "Accessibility",
        "Rendering performance",
    ])
    .usage(&[
        "@frontend-developer build a settings page with tabs",
        "@frontend-developer why does this component re-render?",
    ]),
    AgentEntry::new(
        "@backend-developer",
        "APIs, server-side logic, database operations",
    )
    .expertise(&["REST and RPC APIs", "Auth and sessions", "Background jobs"])
    .usage(&["@backend-developer add rate limiting to the public API"]),
    AgentEntry::new(
        "@database-architect",
        "Schema design, queries, migrations, indexing",
    )
    .long(
        "Designs schemas that survive growth: normalisation trade-offs, indexes for the \
         queries you actually run, and migrations that are safe to deploy.",
    )
    .expertise(&["PostgreSQL", "Query planning", "Migrations"])
    .focus(&["Data integrity", "Index strategy"])
    .usage(&["@database-architect review this schema for a multi-tenant app"]),
    AgentEntry::new(
        "@devops-engineer",
        "CI/CD, Docker, Kubernetes, infrastructure",
    )
    .focus(&["Reproducible builds", "Zero-downtime deploys"]),
    AgentEntry::new(
        "@security-auditor",
        "Security reviews, vulnerability analysis",
    )
    .long(
        "Audits code and configuration for common vulnerability classes and explains each \
         finding with its impact and a concrete fix.",
    )
    .expertise(&[
        "OWASP Top 10",
        "Authentication flows",
        "Secrets handling",
    ])
    .usage(&["@security-auditor audit the checkout flow"]),
    AgentEntry::new("@test-engineer", "Unit tests, integration tests, E2E tests")
        .expertise(&["Vitest and Jest", "Playwright", "Test doubles"]),
    AgentEntry::new("@code-reviewer", "Code review, best practices")
        .focus(&["Correctness", "Readability", "Maintainability"])
        .usage(&["@code-reviewer review my last three commits"]),
    AgentEntry::new("@technical-writer", "Documentation, guides, tutorials"),
    AgentEntry::new("@ui-designer", "Design systems, accessibility, animations")
        .expertise(&["Design tokens", "Motion design", "WCAG"]),
    AgentEntry::new("@ux-researcher", "User research, usability testing"),
    AgentEntry::new("@product-analyst", "PRDs, user stories, requirements")
        .usage(&["@product-analyst turn these interview notes into user stories"]),
    AgentEntry::new(
        "@performance-engineer",
        "Core Web Vitals, bundle analysis, optimisation",
    )
    .focus(&["LCP and INP", "Bundle size", "Caching"]),
    AgentEntry::new("@expo-developer", "React Native with Expo"),
    AgentEntry::new("@ios-developer", "Swift, iOS development"),
    AgentEntry::new("@android-developer", "Kotlin, Android development"),
];
