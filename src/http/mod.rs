//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Este módulo implementa el subconjunto mínimo de HTTP que el servidor
//! de diagnóstico necesita, sin librerías de alto nivel:
//!
//! - Detección del fin de headers (`\r\n\r\n`)
//! - Extracción de la request line (method, target, version)
//! - Construcción de la response de echo
//!
//! El servidor ignora la semántica de los métodos, todos los headers y
//! cualquier body: solo la primera línea del request importa.
//!
//! ### Formato de Request aceptado
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response generado
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 8\r\n
//! Connection: close\r\n
//! \r\n
//! GET/path
//! ```

pub mod request;   // Extracción de la request line
pub mod response;  // Construcción de la response de echo

// Re-exportamos los tipos principales para facilitar su uso
pub use request::RequestLine;
pub use response::echo_response;
