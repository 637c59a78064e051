//! Presentation helpers. Nothing in here is visible to the projection engine.

mod currency;
mod locale;
mod table;

pub use currency::{Currency, format_amount, format_money};
pub use locale::{ColumnText, InputText, Labels, Language, ScenarioText};
pub use table::{render_ledger, render_report, render_summary};
