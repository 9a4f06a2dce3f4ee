//! # Echo Server
//! src/lib.rs
//!
//! Servidor HTTP de diagnóstico implementado desde cero. Acepta conexiones
//! TCP, lee un request por conexión y responde con un body de texto plano
//! que contiene `method + path` concatenados, opcionalmente después de un
//! delay artificial.
//!
//! No es un servidor web de producción: es un fixture de pruebas para
//! ejercitar clientes HTTP, generadores de carga y proxies (por ejemplo,
//! para simular un backend lento con `--delay-ms`).
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Extracción de la request line y construcción de la response
//! - `server`: Loop de accept y manejo de conexiones (un thread por conexión)
//! - `config`: Configuración vía CLI y variables de entorno
//! - `metrics`: Estadísticas de conexiones
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use echo_server::config::Config;
//! use echo_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.start(); // bloquea hasta stop() o fallo fatal
//! ```

pub mod http;
pub mod config;
pub mod server;
pub mod metrics;
