//! UI Components
//!
//! Reusable Leptos components.

mod cart_badge;
mod cart_panel;
mod confirm_button;
mod feature_toggles;
mod language_switch;
mod login_form;
mod nav_bar;
mod product_grid;
mod sections;
mod weather_card;

pub use cart_badge::CartBadge;
pub use cart_panel::CartPanel;
pub use confirm_button::ConfirmButton;
pub use feature_toggles::FeatureToggles;
pub use language_switch::LanguageSwitch;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use product_grid::ProductGrid;
pub use sections::{CategoriesSection, PromoBanner};
pub use weather_card::WeatherCard;
