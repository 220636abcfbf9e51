pub mod benefit_card;
pub mod block_view;
pub mod card_shell;
pub mod challenge_card;
pub mod code_block;
pub mod code_tabs;
pub mod content_card;
pub mod disclosure_group;
pub mod disclosure_item;
pub mod empty_library;
pub mod error_screen;
pub mod feature_card;
pub mod markdown_text;
pub mod page_nav;
pub mod page_nav_item;
pub mod page_view;
pub mod step_card;

pub use benefit_card::BenefitCard;
pub use block_view::BlockView;
pub use card_shell::CardShell;
pub use challenge_card::ChallengeCard;
pub use code_block::CodeBlock;
pub use code_tabs::CodeTabs;
pub use content_card::{CardGrid, ContentCard};
pub use disclosure_group::DisclosureGroup;
pub use disclosure_item::DisclosureItem;
pub use empty_library::EmptyLibrary;
pub use error_screen::ErrorScreen;
pub use feature_card::FeatureCard;
pub use markdown_text::MarkdownText;
pub use page_nav::PageNav;
pub use page_nav_item::{PageLink, PageNavItem};
pub use page_view::PageView;
pub use step_card::StepCard;
