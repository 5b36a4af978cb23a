//! Team, synergy and counter explanations
//!
//! The generator turns component results into benefit and warning cards;
//! formatters render them as JSON or Markdown.

pub mod types;
pub mod fragments;
pub mod generator;
pub mod formatters;

pub use types::{
    BenefitCard, Explanation, MemberLine, MetricCard, MetricFragment, MetricsDisplay,
    OverallExplanation, Severity, WarningCard,
};

pub use fragments::{
    generate_c1_fragment, generate_c2_fragment, generate_c3_fragment, generate_c4_fragment,
    generate_c5_fragment, generate_c6_fragment,
};

pub use generator::ExplanationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
