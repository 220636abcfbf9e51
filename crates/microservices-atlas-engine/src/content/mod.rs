//! Stateless content: code snippets, cards and the blocks pages are built from.

pub mod block;
pub mod cards;
pub mod code;

pub use block::{Block, clamp_heading_level, markdown_to_html, markdown_to_plain};
pub use cards::{
    Accent, BenefitCard, Card, CardKind, ChallengeCard, ContentCard, FeatureCard, Level, StepCard,
};
pub use code::{CodeSnippet, CodeTabs, TabSelection};
