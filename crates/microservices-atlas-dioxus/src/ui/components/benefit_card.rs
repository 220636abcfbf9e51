use crate::ui::components::card_shell::CardShell;
use dioxus::prelude::*;
use microservices_atlas_engine::{BenefitCard as BenefitCardData, Card};

#[component]
pub fn BenefitCard(card: BenefitCardData) -> Element {
    rsx! {
        CardShell {
            kind: card.kind(),
            title: card.title.clone(),
            description: card.description.clone(),
            items: card.points.clone(),
            icon: card.icon.clone(),
            badge: card.badge(),
        }
    }
}
