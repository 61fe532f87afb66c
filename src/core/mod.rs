//! # Core Application Logic
//!
//! This module contains the inspector's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Schemas + defaults   │
//!                    │  • Forms (ActionList)   │
//!                    │  • State / Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ Transport  │
//!     │  Adapter   │                          │ (websocket)│
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`]: param types, action schemas and default values
//! - [`form`]: `ActionForm`, one editable form per action
//! - [`action_list`]: `ActionList`, the forms built from a config
//! - [`message`]: the `{kind, content}` record that gets sent
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file, env and CLI resolution, actions file loading

pub mod action;
pub mod action_list;
pub mod config;
pub mod form;
pub mod message;
pub mod schema;
pub mod state;
