//! LessonFlow Rust Library
//!
//! Este crate actúa como la capa de aplicación del simulador:
//! - Expone `config` con la configuración inmutable del proceso (ritmo de
//!   auto-avance y revelados, analítica).
//! - Expone `units`, los catálogos de las cuatro unidades de química que
//!   componen sus secuencias guiadas sobre el motor `lesson-core`.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod units;
