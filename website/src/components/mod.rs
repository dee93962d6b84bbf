pub mod badge;
pub mod block;
pub mod code_block;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod problem_card;
pub mod section_tabs;
