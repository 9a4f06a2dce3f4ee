//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de diagnóstico con
//! soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./echo_server --host 0.0.0.0 --port 8080 --delay-ms 250
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=0.0.0.0 RESPONSE_DELAY_MS=250 ./echo_server
//! ```

use clap::Parser;

/// Configuración del servidor de diagnóstico
#[derive(Debug, Clone, Parser)]
#[command(name = "echo_server")]
#[command(about = "Servidor HTTP de diagnóstico: responde method+path con delay configurable")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Delay artificial en milisegundos antes de enviar cada response
    /// (0 = sin delay). Modifiable en runtime vía `Server::set_delay_ms`.
    #[arg(long = "delay-ms", default_value = "0", env = "RESPONSE_DELAY_MS")]
    pub delay_ms: u64,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use echo_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        // El host debe ser una IP válida: el bind la necesita tal cual,
        // no se hace resolución DNS
        if self.host.parse::<std::net::IpAddr>().is_err() {
            return Err(format!("Host must be a valid IP address: {}", self.host));
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════╗");
        println!("║       Echo Server Configuration          ║");
        println!("╚══════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!();
        println!("⏱️  Response:");
        if self.delay_ms > 0 {
            println!("   Delay:        {} ms", self.delay_ms);
        } else {
            println!("   Delay:        disabled");
        }
        println!();
        println!("════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            delay_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.delay_ms, 0);
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    // ==================== Host Validation ====================

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.host = "".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Host"));
    }

    #[test]
    fn test_validate_invalid_host() {
        let mut config = Config::default();
        config.host = "not-an-ip".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("valid IP"));
    }

    #[test]
    fn test_validate_ipv6_host() {
        let mut config = Config::default();
        config.host = "::1".to_string();
        assert!(config.validate().is_ok());
    }

    // ==================== Custom Values ====================

    #[test]
    fn test_config_custom_values() {
        let mut config = Config::default();
        config.port = 3000;
        config.host = "0.0.0.0".to_string();
        config.delay_ms = 500;

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_port_zero_is_valid() {
        // Puerto 0 pide un puerto efímero al sistema: útil en tests
        let mut config = Config::default();
        config.port = 0;
        assert!(config.validate().is_ok());
    }

    // ==================== Print Summary ====================

    #[test]
    fn test_config_print_summary() {
        let config = Config::default();
        // Should not panic
        config.print_summary();
    }

    #[test]
    fn test_config_print_summary_with_delay() {
        let mut config = Config::default();
        config.delay_ms = 250;
        // Should not panic
        config.print_summary();
    }
}
