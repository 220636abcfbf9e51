use crate::ui::components::card_shell::CardShell;
use dioxus::prelude::*;
use microservices_atlas_engine::{Card, StepCard as StepCardData};

#[component]
pub fn StepCard(card: StepCardData) -> Element {
    rsx! {
        CardShell {
            kind: card.kind(),
            title: card.title.clone(),
            description: card.description.clone(),
            items: card.details.clone(),
            badge: card.badge(),
        }
    }
}
