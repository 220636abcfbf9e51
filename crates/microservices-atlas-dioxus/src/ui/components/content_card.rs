use crate::ui::components::{BenefitCard, ChallengeCard, FeatureCard, StepCard};
use dioxus::prelude::*;
use microservices_atlas_engine::ContentCard as ContentCardData;

/// Dispatch a card to the component for its variant
#[component]
pub fn ContentCard(card: ContentCardData) -> Element {
    match card {
        ContentCardData::Feature(card) => rsx! { FeatureCard { card } },
        ContentCardData::Benefit(card) => rsx! { BenefitCard { card } },
        ContentCardData::Step(card) => rsx! { StepCard { card } },
        ContentCardData::Challenge(card) => rsx! { ChallengeCard { card } },
    }
}

/// Responsive grid of cards, in authored order
#[component]
pub fn CardGrid(cards: Vec<ContentCardData>) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for (index, card) in cards.iter().enumerate() {
                ContentCard { key: "{index}", card: card.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use microservices_atlas_engine::{
        Accent, BenefitCard as BenefitCardData, ChallengeCard as ChallengeCardData,
        FeatureCard as FeatureCardData, Level, StepCard as StepCardData,
    };

    fn render_cards(cards: Vec<ContentCardData>) -> String {
        let mut dom = VirtualDom::new_with_props(CardGrid, CardGridProps { cards });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_each_variant_renders_through_shared_layout() {
        let html = render_cards(vec![
            ContentCardData::Feature(FeatureCardData {
                icon: Some("🔀".to_string()),
                title: "Routing".to_string(),
                description: "Send requests to the right service".to_string(),
                highlights: vec!["Canary splits".to_string()],
                accent: Accent::Teal,
            }),
            ContentCardData::Benefit(BenefitCardData {
                title: "Independent deploys".to_string(),
                metric: Some("10x".to_string()),
                ..BenefitCardData::default()
            }),
            ContentCardData::Step(StepCardData {
                number: Some(1),
                title: "Containerise".to_string(),
                ..StepCardData::default()
            }),
            ContentCardData::Challenge(ChallengeCardData {
                title: "Data consistency".to_string(),
                level: Level::High,
                mitigations: vec!["Sagas".to_string()],
                ..ChallengeCardData::default()
            }),
        ]);

        assert_eq!(html.matches("card-header").count(), 4);
        assert!(html.contains("card card-feature accent-teal"));
        assert!(html.contains("card card-benefit"));
        assert!(html.contains("card card-step"));
        assert!(html.contains("card card-challenge level-high"));
        assert!(html.contains(">10x<"));
        assert!(html.contains("Canary splits"));
        assert!(html.contains("Sagas"));
    }

    #[test]
    fn test_missing_fields_render_as_absent_sections() {
        let html = render_cards(vec![ContentCardData::Step(StepCardData {
            title: "Only a title".to_string(),
            ..StepCardData::default()
        })]);

        assert!(html.contains("Only a title"));
        assert!(!html.contains("card-description"));
        assert!(!html.contains("card-items"));
        assert!(!html.contains("card-badge"));
        assert!(!html.contains("card-icon"));
    }
}
