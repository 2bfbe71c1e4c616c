//! Reusable view components: landing sections, auth forms, and the chrome
//! shared by the protected trading pages.

pub mod about_section;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod how_it_works_section;
pub mod login_form;
pub mod prizes_section;
pub mod protected_route;
pub mod ranking_section;
pub mod register_form;
pub mod trading_layout;
