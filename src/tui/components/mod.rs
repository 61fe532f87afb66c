//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: server URL, connection state and status text
//! - `MessageLog`: last sent record and received payloads
//! - `FormCard`: frame around the selected action's fields
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `ActionMenuState`: which action is selected
//! - `FieldInputs`: text drafts for one form, emits parsed values
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar { server_url: &app.server_url, connection: &app.connection, status_message: &app.status_message }
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── action_menu.rs   (Action list, Tab to switch)
//! ├── form_card.rs     (Selected action card)
//! ├── field_input.rs   (Schema-driven field editor)
//! └── message_log.rs   (Sent / received panel)
//! ```

pub mod action_menu;
pub mod field_input;
pub mod form_card;
pub mod message_log;
mod title_bar;

pub use action_menu::{ActionMenu, ActionMenuState, MenuEvent};
pub use field_input::{FieldEvent, FieldInputs};
pub use form_card::FormCard;
pub use message_log::MessageLog;
pub use title_bar::TitleBar;
