//! # Construcción de la Response de Echo
//! src/http/response.rs
//!
//! Este módulo construye la única respuesta que el servidor genera:
//! un `200 OK` de texto plano cuyo body es `method + target`.
//!
//! ## Formato de la response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 7\r\n
//! Connection: close\r\n
//! \r\n
//! GET/foo
//! ```
//!
//! La forma es fija: siempre `200 OK`, siempre `Connection: close`
//! (el servidor cierra la conexión tras cada exchange, sin keep-alive).

/// Construye la response HTTP completa para el body dado
///
/// Función pura: el resultado depende solo del body. `Content-Length`
/// se calcula sobre la longitud en bytes exacta del body (que puede
/// ser vacío).
///
/// # Ejemplo
/// ```
/// use echo_server::http::echo_response;
///
/// let response = echo_response("GET/foo");
/// assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
/// assert!(response.contains("Content-Length: 7\r\n"));
/// assert!(response.ends_with("\r\n\r\nGET/foo"));
/// ```
pub fn echo_response(body: &str) -> String {
    let mut response = String::new();

    // 1. Status line
    response.push_str("HTTP/1.1 200 OK\r\n");

    // 2. Headers
    response.push_str("Content-Type: text/plain\r\n");
    response.push_str(&format!("Content-Length: {}\r\n", body.len()));
    response.push_str("Connection: close\r\n");

    // 3. Línea vacía que separa headers del body
    response.push_str("\r\n");

    // 4. Body
    response.push_str(body);

    response
}
