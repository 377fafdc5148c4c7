//! View Controller for shelfql
//!
//! Owns the transient UI state (loading flag, auto-expiring messages,
//! edit modal), drives the client library on user actions, and renders
//! the product grid as HTML. There is no ambient singleton: the
//! controller is constructed once and passed to event handlers.

mod controller;
mod render;
mod state;

pub use controller::{AddForm, EditForm, SortSelection, ViewController};
pub use render::{escape_html, format_price, render_grid, render_messages, render_product_card};
pub use state::{Message, MessageKind, ViewState, MESSAGE_TTL};
