use crate::ui::components::card_shell::CardShell;
use dioxus::prelude::*;
use microservices_atlas_engine::{Card, ChallengeCard as ChallengeCardData};

#[component]
pub fn ChallengeCard(card: ChallengeCardData) -> Element {
    rsx! {
        CardShell {
            kind: card.kind(),
            title: card.title.clone(),
            description: card.description.clone(),
            items: card.mitigations.clone(),
            badge: card.badge(),
            modifier: Some(format!("level-{}", card.level)),
        }
    }
}
