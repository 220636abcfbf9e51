//! Desktop renderer for microservices-atlas.
//!
//! Each page is a [`ui::components::PageView`] composed from disclosure
//! groups, code blocks and cards; the page owns all selection state.

pub mod ui;
