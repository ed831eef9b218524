//! Built-in guide content: the home buying journey and general resources.
//!
//! The tables are `'static` and never mutated. [`steps`] and [`resources`]
//! return fresh owned copies, so store mutations cannot leak back here.

use crate::model::{ChecklistItem, Resource, Step};

struct SeedStep {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    order: i64,
    description: &'static str,
    /// `(id, label)` pairs; every item starts incomplete.
    checklist: &'static [(&'static str, &'static str)],
}

const SEED_STEPS: &[SeedStep] = &[
    SeedStep {
        id: "budgeting",
        title: "Budgeting",
        summary: "Assess your finances and set a realistic budget.",
        order: 1,
        description: "Calculate your monthly income, expenses, and determine how much you can afford for a home.",
        checklist: &[
            ("analyze-income", "Analyze monthly income"),
            ("track-expenses", "Track monthly expenses"),
            ("set-budget", "Set a home buying budget"),
            ("emergency-fund", "Confirm emergency fund in place"),
        ],
    },
    SeedStep {
        id: "preapproval",
        title: "Pre-approval",
        summary: "Get pre-approved for a mortgage.",
        order: 2,
        description: "Gather financial documents and obtain a mortgage pre-approval letter from a lender.",
        checklist: &[
            ("check-credit", "Check credit score"),
            ("gather-docs", "Gather financial documents"),
            ("contact-lenders", "Contact lenders for rates"),
            ("get-letter", "Obtain pre-approval letter"),
        ],
    },
    SeedStep {
        id: "search",
        title: "Home Search",
        summary: "Find properties that match your needs.",
        order: 3,
        description: "Work with an agent or browse listings to find potential homes within your budget.",
        checklist: &[
            ("define-criteria", "Define must-haves and nice-to-haves"),
            ("set-alerts", "Set up listing alerts"),
            ("tour-homes", "Tour shortlisted homes"),
        ],
    },
    SeedStep {
        id: "offer",
        title: "Make an Offer",
        summary: "Submit a competitive offer for a home.",
        order: 4,
        description: "Work with your agent to craft an offer and negotiate terms.",
        checklist: &[
            ("review-comps", "Review comparable sales"),
            ("decide-terms", "Decide offer terms and contingencies"),
            ("submit-offer", "Submit offer"),
        ],
    },
    SeedStep {
        id: "inspection",
        title: "Inspection",
        summary: "Inspect the property for issues.",
        order: 5,
        description: "Hire a professional to inspect the home and review the results.",
        checklist: &[
            ("hire-inspector", "Hire a licensed inspector"),
            ("attend-inspection", "Attend inspection"),
            ("review-report", "Review the inspection report"),
        ],
    },
    SeedStep {
        id: "closing",
        title: "Closing",
        summary: "Finalize the purchase.",
        order: 6,
        description: "Complete final walkthrough, sign documents, and get the keys.",
        checklist: &[
            ("final-walkthrough", "Do final walkthrough"),
            ("review-closing", "Review closing disclosure"),
            ("sign-docs", "Sign closing documents"),
        ],
    },
    SeedStep {
        id: "move-in",
        title: "Move-In",
        summary: "Plan your move.",
        order: 7,
        description: "Arrange movers, utilities, and settle into your new home.",
        checklist: &[
            ("setup-utilities", "Set up utilities and internet"),
            ("hire-movers", "Hire movers or plan move"),
            ("address-change", "Update address with services"),
        ],
    },
];

/// `(id, title, url)`
const SEED_RESOURCES: &[(&str, &str, &str)] = &[
    (
        "calc",
        "Mortgage Calculator",
        "https://www.bankrate.com/calculators/mortgages/mortgage-calculator.aspx",
    ),
    (
        "cfpb",
        "CFPB Home Buying Resources",
        "https://www.consumerfinance.gov/owning-a-home/",
    ),
    (
        "va",
        "VA Loan Info",
        "https://www.va.gov/housing-assistance/home-loans/",
    ),
    (
        "hud",
        "HUD Resources",
        "https://www.hud.gov/topics/buying_a_home",
    ),
];

impl SeedStep {
    fn to_step(&self) -> Step {
        Step {
            id: self.id.to_string(),
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            order: self.order,
            description: self.description.to_string(),
            checklist: self
                .checklist
                .iter()
                .map(|(id, label)| ChecklistItem {
                    id: id.to_string(),
                    label: label.to_string(),
                    completed: false,
                })
                .collect(),
        }
    }
}

/// Fresh copy of the seed steps, in seed order.
pub fn steps() -> Vec<Step> {
    SEED_STEPS.iter().map(SeedStep::to_step).collect()
}

/// Fresh copy of the seed resources, in seed order.
pub fn resources() -> Vec<Resource> {
    SEED_RESOURCES
        .iter()
        .map(|(id, title, url)| Resource {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect()
}
