use crate::ui::components::card_shell::CardShell;
use dioxus::prelude::*;
use microservices_atlas_engine::{Card, FeatureCard as FeatureCardData};

#[component]
pub fn FeatureCard(card: FeatureCardData) -> Element {
    rsx! {
        CardShell {
            kind: card.kind(),
            title: card.title.clone(),
            description: card.description.clone(),
            items: card.highlights.clone(),
            icon: card.icon.clone(),
            modifier: Some(format!("accent-{}", card.accent.as_str())),
        }
    }
}
