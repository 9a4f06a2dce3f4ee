//! # Extracción de la Request Line
//! src/http/request.rs
//!
//! Este módulo extrae lo único que el servidor de diagnóstico necesita de
//! un request HTTP: la primera línea. El resto (headers, body) se ignora
//! por completo.
//!
//! ## Formato de la request line
//!
//! ```text
//! GET /path?x=1 HTTP/1.1
//! ```
//!
//! El parsing es deliberadamente permisivo: una línea con menos de tres
//! tokens nunca produce un error, los tokens faltantes quedan vacíos.
//! Esto garantiza que un request malformado jamás tumbe un handler.

/// Secuencia de 4 bytes que marca el fin del bloque de headers
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Indica si el buffer acumulado ya contiene un bloque de headers completo
///
/// # Ejemplo
/// ```
/// use echo_server::http::request::headers_complete;
///
/// assert!(headers_complete(b"GET / HTTP/1.1\r\n\r\n"));
/// assert!(!headers_complete(b"GET / HTTP/1.1\r\n"));
/// ```
pub fn headers_complete(buffer: &[u8]) -> bool {
    buffer
        .windows(HEADER_TERMINATOR.len())
        .any(|w| w == HEADER_TERMINATOR)
}

/// Request line parseada (primera línea del request)
///
/// Solo se modelan los tres tokens de la primera línea. La versión se
/// parsea pero no se usa para nada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Método HTTP tal cual llegó (ej: "GET"); vacío si no había token
    pub method: String,

    /// Target del request (ej: "/foo"); vacío si no había token
    pub target: String,

    /// Versión del protocolo (ej: "HTTP/1.1"); parseada pero sin uso
    pub version: String,
}

impl RequestLine {
    /// Extrae la request line desde el buffer crudo acumulado
    ///
    /// Toma la primera línea (hasta el primer salto de línea) y la separa
    /// por whitespace en method, target y version. Nunca falla: los
    /// tokens que falten quedan como strings vacíos.
    ///
    /// # Ejemplo
    /// ```
    /// use echo_server::http::RequestLine;
    ///
    /// let line = RequestLine::parse(b"GET /foo HTTP/1.1\r\nHost: x\r\n\r\n");
    /// assert_eq!(line.method, "GET");
    /// assert_eq!(line.target, "/foo");
    /// assert_eq!(line.version, "HTTP/1.1");
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        // El request puede no ser UTF-8 válido: se convierte con pérdida,
        // lo que importa es no fallar
        let text = String::from_utf8_lossy(buffer);

        // Primera línea: hasta el primer '\n' (el '\r' lo absorbe el
        // split por whitespace)
        let first_line = text.lines().next().unwrap_or("");

        let mut tokens = first_line.split_whitespace();
        let method = tokens.next().unwrap_or("").to_string();
        let target = tokens.next().unwrap_or("").to_string();
        let version = tokens.next().unwrap_or("").to_string();

        Self {
            method,
            target,
            version,
        }
    }

    /// Construye el body de echo: method + target concatenados sin separador
    ///
    /// # Ejemplo
    /// ```
    /// use echo_server::http::RequestLine;
    ///
    /// let line = RequestLine::parse(b"GET /foo HTTP/1.1\r\n\r\n");
    /// assert_eq!(line.echo_body(), "GET/foo");
    /// ```
    pub fn echo_body(&self) -> String {
        format!("{}{}", self.method, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let line = RequestLine::parse(b"GET / HTTP/1.1\r\n\r\n");

        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "/");
        assert_eq!(line.version, "HTTP/1.1");
    }

    #[test]
    fn test_parse_with_path() {
        let line = RequestLine::parse(b"GET /fibonacci HTTP/1.1\r\n\r\n");

        assert_eq!(line.target, "/fibonacci");
        assert_eq!(line.echo_body(), "GET/fibonacci");
    }

    #[test]
    fn test_parse_post() {
        let line = RequestLine::parse(b"POST / HTTP/1.1\r\nHost: x\r\n\r\n");

        assert_eq!(line.method, "POST");
        assert_eq!(line.echo_body(), "POST/");
    }

    #[test]
    fn test_parse_ignores_headers() {
        let raw = b"GET /a HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\n\r\n";
        let line = RequestLine::parse(raw);

        assert_eq!(line.echo_body(), "GET/a");
    }

    #[test]
    fn test_parse_query_kept_in_target() {
        // El target se devuelve tal cual, query incluido
        let line = RequestLine::parse(b"GET /echo?x=1&y=2 HTTP/1.1\r\n\r\n");

        assert_eq!(line.target, "/echo?x=1&y=2");
    }

    // ==================== Líneas cortas / malformadas ====================

    #[test]
    fn test_parse_empty_buffer() {
        let line = RequestLine::parse(b"");

        assert_eq!(line.method, "");
        assert_eq!(line.target, "");
        assert_eq!(line.echo_body(), "");
    }

    #[test]
    fn test_parse_single_token() {
        // Un solo token: method lo recibe, target queda vacío
        let line = RequestLine::parse(b"GET\r\n\r\n");

        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "");
        assert_eq!(line.echo_body(), "GET");
    }

    #[test]
    fn test_parse_two_tokens() {
        let line = RequestLine::parse(b"GET /foo\r\n\r\n");

        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "/foo");
        assert_eq!(line.version, "");
    }

    #[test]
    fn test_parse_non_utf8_does_not_panic() {
        let line = RequestLine::parse(&[0xFF, 0xFE, 0x00, 0x01]);

        // No importa el contenido exacto, solo que no haya panic
        let _ = line.echo_body();
    }

    #[test]
    fn test_parse_only_uses_first_line() {
        let raw = b"GET /uno HTTP/1.1\r\nPOST /dos HTTP/1.1\r\n\r\n";
        let line = RequestLine::parse(raw);

        assert_eq!(line.echo_body(), "GET/uno");
    }

    // ==================== Fin de headers ====================

    #[test]
    fn test_headers_complete_true() {
        assert!(headers_complete(b"GET / HTTP/1.1\r\n\r\n"));
        assert!(headers_complete(b"GET / HTTP/1.1\r\nHost: x\r\n\r\nbody"));
    }

    #[test]
    fn test_headers_complete_false() {
        assert!(!headers_complete(b""));
        assert!(!headers_complete(b"GET / HTTP/1.1"));
        assert!(!headers_complete(b"GET / HTTP/1.1\r\nHost: x\r\n"));
    }

    #[test]
    fn test_headers_complete_split_terminator() {
        // El terminador puede llegar partido entre lecturas: la detección
        // opera sobre el buffer acumulado completo
        let mut buffer = Vec::new();
        buffer.extend_from_slice(b"GET / HTTP/1.1\r\n");
        assert!(!headers_complete(&buffer));
        buffer.extend_from_slice(b"\r");
        assert!(!headers_complete(&buffer));
        buffer.extend_from_slice(b"\n");
        assert!(headers_complete(&buffer));
    }
}
