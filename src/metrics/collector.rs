//! # Collector de Estadísticas de Conexiones
//! src/metrics/collector.rs
//!
//! Recolecta estadísticas del servidor en tiempo real. El loop de accept
//! registra cada conexión aceptada y cada handler registra su cierre, así
//! que los contadores se actualizan desde múltiples threads.

use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Collector de estadísticas thread-safe
#[derive(Clone)]
pub struct ConnectionStats {
    inner: Arc<Mutex<StatsData>>,
    start_time: Instant,
}

/// Datos internos de estadísticas
struct StatsData {
    /// Total de conexiones aceptadas
    accepted: u64,

    /// Conexiones ya manejadas hasta el final (con o sin response)
    completed: u64,

    /// Responses enviadas con éxito
    responses_sent: u64,

    /// Handlers corriendo en este momento
    active: u64,
}

impl ConnectionStats {
    /// Crea un nuevo collector de estadísticas
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StatsData {
                accepted: 0,
                completed: 0,
                responses_sent: 0,
                active: 0,
            })),
            start_time: Instant::now(),
        }
    }

    /// Registra una conexión aceptada (la llama el loop de accept)
    pub fn record_accepted(&self) {
        let mut data = self.inner.lock().unwrap();
        data.accepted += 1;
        data.active += 1;
    }

    /// Registra el fin de un handler (la llama cada handler al cerrar)
    pub fn record_closed(&self, response_sent: bool) {
        let mut data = self.inner.lock().unwrap();
        data.completed += 1;
        if response_sent {
            data.responses_sent += 1;
        }
        if data.active > 0 {
            data.active -= 1;
        }
    }

    /// Obtiene el número de handlers activos
    pub fn active_connections(&self) -> u64 {
        let data = self.inner.lock().unwrap();
        data.active
    }

    /// Obtiene el total de conexiones aceptadas
    pub fn total_accepted(&self) -> u64 {
        let data = self.inner.lock().unwrap();
        data.accepted
    }

    /// Obtiene las estadísticas actuales en formato JSON
    pub fn get_stats_json(&self) -> String {
        let data = self.inner.lock().unwrap();
        let uptime_secs = self.start_time.elapsed().as_secs();

        format!(
            r#"{{
  "uptime_seconds": {},
  "connections": {{
    "accepted": {},
    "completed": {},
    "active": {}
  }},
  "responses_sent": {}
}}"#,
            uptime_secs, data.accepted, data.completed, data.active, data.responses_sent
        )
    }
}

impl Default for ConnectionStats {
    fn default() -> Self {
        Self::new()
    }
}
