//! # Echo Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de diagnóstico. Parsea la configuración
//! (CLI / env), la valida y corre el servidor en el thread principal
//! hasta que se detenga o falle.

use echo_server::config::Config;
use echo_server::server::tcp::EC_STOPPED;
use echo_server::server::Server;

fn main() {
    println!("=================================");
    println!("  Echo Server de Diagnóstico");
    println!("=================================\n");

    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    let server = Server::new(config);

    // Bloquea hasta stop() o fallo fatal
    server.start();

    println!("\n📊 Estadísticas finales:");
    println!("{}", server.stats_json());

    // EC_STOPPED es el código normal al terminar; cualquier otro valor
    // indica que algo falló en el setup o en el accept
    if server.error_code() != EC_STOPPED {
        eprintln!("💥 El servidor terminó con error (código {})", server.error_code());
        std::process::exit(1);
    }
}
