//! Folio - a server-rendered personal portfolio site
//!
//! The page shell (hero, about, projects, contact) is rendered on the server
//! from static catalogs. Decorative backgrounds are produced as SVG frames by
//! frame-driven effect state machines, and the contact form only simulates
//! delivery.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Development commands (`clean-dev`, `validate`, `config generate`)
//!
//! # Architecture
//! - `catalog`: Project / skill / experience catalogs and schema checks
//! - `site`: UI state (theme, navigation, filter, modal, form status)
//! - `effects`: Easing, smooth scroll, parallax, frame clock, noise, backgrounds
//! - `render`: HTML rendering of the page shell and widget demos
//! - `api`: HTTP services and middleware
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and panic handling

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod effects;
pub mod errors;
pub mod interfaces;
pub mod render;
pub mod runtime;
pub mod services;
pub mod site;
pub mod system;
pub mod utils;
pub mod validation;
