//! Embedded reference lists used by the suggestion engine and exposed to clients.

/// Well-known companies, in display order.
pub const POPULAR_COMPANIES: &[&str] = &[
    "Google",
    "Amazon",
    "Meta",
    "Apple",
    "Microsoft",
    "Netflix",
    "Stripe",
    "Uber",
    "Airbnb",
    "Datadog",
    "Salesforce",
    "Oracle",
    "Spotify",
    "Tesla",
    "Nvidia",
    "Adobe",
    "LinkedIn",
    "Twitter",
];

/// Well-known job titles, in display order.
pub const POPULAR_ROLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "Engineering Manager",
    "Frontend Engineer",
    "Backend Engineer",
    "Machine Learning Engineer",
    "Site Reliability Engineer",
    "Technical Program Manager",
    "System Administrator",
    "DevOps Engineer",
];

/// Round names offered as quick picks in the search UI.
pub const POPULAR_ROUNDS: &[&str] = &[
    "Technical",
    "Behavioral",
    "System Design",
    "Hiring Manager",
    "HR Screening",
    "Coding",
];

/// Suffixes appended to an exact company match, in suggestion order.
pub const COMBO_SUFFIXES: &[&str] = &["Software Engineer", "Product Manager", "System Design"];
