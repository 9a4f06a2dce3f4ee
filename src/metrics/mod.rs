//! # Sistema de Métricas
//! src/metrics/mod.rs
//!
//! Este módulo implementa la recolección de estadísticas del servidor:
//! - Conexiones aceptadas / completadas
//! - Responses enviadas
//! - Handlers activos
//! - Uptime

pub mod collector;

pub use collector::ConnectionStats;
