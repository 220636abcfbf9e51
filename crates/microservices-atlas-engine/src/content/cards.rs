use serde::{Deserialize, Serialize};
use std::fmt;

/// Accent colour of a feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Teal,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Red => "red",
            Accent::Teal => "teal",
        }
    }
}

/// Severity of a challenge card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => f.write_str("low"),
            Level::Medium => f.write_str("medium"),
            Level::High => f.write_str("high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Feature,
    Benefit,
    Step,
    Challenge,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Feature => "feature",
            CardKind::Benefit => "benefit",
            CardKind::Step => "step",
            CardKind::Challenge => "challenge",
        }
    }
}

/// Rendering contract shared by every card variant.
///
/// Renderers lay cards out from these accessors alone; missing optional
/// data comes back as empty strings, empty slices or `None`.
pub trait Card {
    fn kind(&self) -> CardKind;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn items(&self) -> &[String];
    fn icon(&self) -> Option<&str> {
        None
    }
    /// Short marker shown next to the title (step number, metric, level)
    fn badge(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCard {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BenefitCard {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "99.95% uptime"
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepCard {
    #[serde(default)]
    pub number: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChallengeCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub mitigations: Vec<String>,
}

/// Static display card; the closed set of variants pages compose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentCard {
    Feature(FeatureCard),
    Benefit(BenefitCard),
    Step(StepCard),
    Challenge(ChallengeCard),
}

impl Card for FeatureCard {
    fn kind(&self) -> CardKind {
        CardKind::Feature
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn items(&self) -> &[String] {
        &self.highlights
    }
    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl Card for BenefitCard {
    fn kind(&self) -> CardKind {
        CardKind::Benefit
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn items(&self) -> &[String] {
        &self.points
    }
    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
    fn badge(&self) -> Option<String> {
        self.metric.clone()
    }
}

impl Card for StepCard {
    fn kind(&self) -> CardKind {
        CardKind::Step
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn items(&self) -> &[String] {
        &self.details
    }
    fn badge(&self) -> Option<String> {
        self.number.map(|n| n.to_string())
    }
}

impl Card for ChallengeCard {
    fn kind(&self) -> CardKind {
        CardKind::Challenge
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn items(&self) -> &[String] {
        &self.mitigations
    }
    fn badge(&self) -> Option<String> {
        Some(self.level.to_string())
    }
}

impl ContentCard {
    pub fn as_card(&self) -> &dyn Card {
        match self {
            ContentCard::Feature(card) => card,
            ContentCard::Benefit(card) => card,
            ContentCard::Step(card) => card,
            ContentCard::Challenge(card) => card,
        }
    }
}

impl Card for ContentCard {
    fn kind(&self) -> CardKind {
        self.as_card().kind()
    }
    fn title(&self) -> &str {
        self.as_card().title()
    }
    fn description(&self) -> &str {
        self.as_card().description()
    }
    fn items(&self) -> &[String] {
        self.as_card().items()
    }
    fn icon(&self) -> Option<&str> {
        self.as_card().icon()
    }
    fn badge(&self) -> Option<String> {
        self.as_card().badge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Grid {
        cards: Vec<ContentCard>,
    }

    #[test]
    fn test_cards_deserialize_by_kind() {
        let grid: Grid = toml::from_str(
            r#"
[[cards]]
kind = "feature"
icon = "🔀"
title = "Routing"
description = "Path and header based routing"
highlights = ["Canary splits", "Blue/green"]
accent = "purple"

[[cards]]
kind = "step"
number = 2
title = "Extract the service"

[[cards]]
kind = "challenge"
title = "Distributed transactions"
level = "high"
mitigations = ["Sagas", "Outbox"]
"#,
        )
        .unwrap();

        let kinds: Vec<_> = grid.cards.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![CardKind::Feature, CardKind::Step, CardKind::Challenge]
        );
        assert_eq!(grid.cards[0].icon(), Some("🔀"));
        assert_eq!(grid.cards[1].badge(), Some("2".to_string()));
        assert_eq!(grid.cards[2].badge(), Some("high".to_string()));
        assert_eq!(grid.cards[2].items(), ["Sagas", "Outbox"]);
    }

    #[test]
    fn test_missing_optional_fields_render_empty() {
        let grid: Grid = toml::from_str(
            r#"
[[cards]]
kind = "benefit"
title = "Independent deploys"
"#,
        )
        .unwrap();

        let card = &grid.cards[0];
        assert_eq!(card.description(), "");
        assert!(card.items().is_empty());
        assert_eq!(card.badge(), None);
        assert_eq!(card.icon(), None);
    }

    #[test]
    fn test_challenge_level_defaults_to_medium() {
        let card = ChallengeCard {
            title: "Observability".to_string(),
            ..ChallengeCard::default()
        };
        assert_eq!(card.badge(), Some("medium".to_string()));
    }
}
