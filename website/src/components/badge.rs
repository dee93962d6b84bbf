use dsa_core::Difficulty;
use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Green,
    Orange,
    Red,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Blue => "px-2 py-0.5 text-xs font-medium rounded border bg-blue-900/30 text-blue-300 border-blue-800",
            BadgeColor::Green => "px-2 py-0.5 text-xs font-medium rounded border bg-green-900/30 text-green-300 border-green-800",
            BadgeColor::Orange => "px-2 py-0.5 text-xs font-medium rounded border bg-orange-900/30 text-orange-300 border-orange-800",
            BadgeColor::Red => "px-2 py-0.5 text-xs font-medium rounded border bg-red-900/30 text-red-300 border-red-800",
        }
    }
}

impl From<Difficulty> for BadgeColor {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BadgeColor::Green,
            Difficulty::Medium => BadgeColor::Orange,
            Difficulty::Hard => BadgeColor::Red,
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> impl IntoView {
    view! {
        <Badge color=BadgeColor::from(difficulty)>{difficulty.label()}</Badge>
    }
}
