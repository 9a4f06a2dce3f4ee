//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto (socket no-bloqueante con SO_REUSEADDR)
//! 2. Acepta conexiones entrantes en un loop de polling
//! 3. Maneja cada conexión en su propio thread
//! 4. Responde con el echo de method+path y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
