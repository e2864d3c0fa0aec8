//! Presentation components
//!
//! Each component is a builder whose styling is resolved through a static
//! [`StyleVariants`] table and which renders to an HTML string.

mod badge;
mod button;
mod card;
mod container;
mod grid;
mod input;
pub mod variants;

use std::sync::Arc;

pub use badge::{Badge, BadgeVariant, BADGE};
pub use button::{Button, ButtonSize, ButtonVariant, BUTTON};
pub use card::{Card, CardPadding, CardVariant, CARD};
pub use container::{Container, ContainerSize, CONTAINER};
pub use grid::{Grid, GridGap, GRID};
pub use input::{Input, InputSize, InputState, INPUT};
pub use variants::{ClassList, StyleVariants, VariantAxis};

/// Caller-supplied click handler
pub type Callback = Arc<dyn Fn() + Send + Sync>;

pub trait Component {
    fn render(&self) -> String;
}

/// Style table of a component by name, for templates
pub fn styles_for(component: &str) -> Option<&'static StyleVariants> {
    match component {
        "button" => Some(&BUTTON),
        "card" => Some(&CARD),
        "input" => Some(&INPUT),
        "grid" => Some(&GRID),
        "container" => Some(&CONTAINER),
        "badge" => Some(&BADGE),
        _ => None,
    }
}
