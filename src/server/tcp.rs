//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP de diagnóstico. Un thread corre el loop
//! de accept sobre un socket no-bloqueante; cada conexión aceptada se
//! procesa en su propio thread hasta completarse.
//!
//! El estado compartido entre el loop, los handlers y los llamadores
//! externos se reduce a tres escalares atómicos (running, error code,
//! delay) más el collector de estadísticas. `stop()` solo limpia el flag
//! de running: los handlers en vuelo siempre corren hasta el final.

use crate::config::Config;
use crate::http::request::headers_complete;
use crate::http::{echo_response, RequestLine};
use crate::metrics::ConnectionStats;
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Tamaño del buffer de lectura por conexión
const BUFFER_SIZE: usize = 2048;

/// Backlog del socket de escucha
const LISTEN_BACKLOG: i32 = 500;

/// Pausa del loop de accept cuando no hay conexiones pendientes
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(1);

// === Códigos de error del servidor ===
// El código se fija una sola vez por corrida; los valores concretos son
// un detalle interno, lo estable es 0 = sin error.

/// Sin error
pub const EC_NONE: i32 = 0;
/// La dirección host:port no se pudo parsear
pub const EC_BAD_ADDR: i32 = 1;
/// Falló la creación o configuración del socket
pub const EC_SOCKET: i32 = 2;
/// Falló el bind (ej: puerto en uso)
pub const EC_BIND: i32 = 3;
/// Falló el listen
pub const EC_LISTEN: i32 = 4;
/// Falló el accept con un error distinto de would-block
pub const EC_ACCEPT: i32 = 5;
/// El servidor terminó su corrida (ya no está escuchando)
pub const EC_STOPPED: i32 = 6;

/// Estado compartido entre el loop de accept, los handlers y los
/// llamadores externos (stop / set_delay_ms / queries)
struct Shared {
    /// Flag de running: true solo mientras el socket está escuchando
    running: AtomicBool,

    /// Código de error de la corrida actual (se fija una sola vez)
    error_code: AtomicI32,

    /// Delay de response en milisegundos; los handlers lo leen en vivo
    delay_ms: AtomicU64,

    /// Estadísticas de conexiones
    stats: ConnectionStats,
}

impl Shared {
    /// Fija el código de error si todavía no hay uno registrado
    fn set_error(&self, code: i32) {
        let _ = self.error_code.compare_exchange(
            EC_NONE,
            code,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }
}

/// Servidor HTTP de diagnóstico
///
/// `start()` bloquea al thread llamador hasta que `stop()` limpie el flag
/// de running o hasta un fallo fatal; el resto de la API es segura de
/// llamar desde cualquier thread mientras tanto.
///
/// # Ejemplo
/// ```no_run
/// use echo_server::config::Config;
/// use echo_server::server::Server;
/// use std::sync::Arc;
/// use std::thread;
///
/// let server = Arc::new(Server::new(Config::default()));
/// let runner = {
///     let server = Arc::clone(&server);
///     thread::spawn(move || server.start())
/// };
///
/// // ... desde otro thread ...
/// server.set_delay_ms(250);
/// server.stop();
/// runner.join().unwrap();
/// ```
pub struct Server {
    host: String,
    port: u16,
    shared: Arc<Shared>,
}

impl Server {
    /// Crea un servidor a partir de la configuración
    pub fn new(config: Config) -> Self {
        Self {
            host: config.host,
            port: config.port,
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                error_code: AtomicI32::new(EC_NONE),
                delay_ms: AtomicU64::new(config.delay_ms),
                stats: ConnectionStats::new(),
            }),
        }
    }

    /// Inicia el servidor y corre el loop de accept
    ///
    /// Bloquea hasta que `stop()` limpie el flag de running o hasta un
    /// error fatal de accept. No retorna errores: los fallos se reportan
    /// vía `error_code()` y en ese caso el servidor nunca llega a estar
    /// en running (verificable con `is_running()`).
    ///
    /// Al salir del loop espera a que terminen todos los handlers en
    /// vuelo antes de cerrar el socket de escucha y retornar.
    pub fn start(&self) {
        let address = format!("{}:{}", self.host, self.port);
        println!("[*] Iniciando servidor en {}", address);

        // Cada corrida arranca con el código de error limpio
        self.shared.error_code.store(EC_NONE, Ordering::SeqCst);

        let listener = match self.bind_listener() {
            Ok(listener) => listener,
            Err(code) => {
                self.shared.set_error(code);
                return;
            }
        };

        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexion\n");

        self.shared.running.store(true, Ordering::SeqCst);

        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();
        while self.shared.running.load(Ordering::SeqCst) {
            match listener.accept() {
                Ok((stream, peer_addr)) => {
                    println!("   ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);
                    self.shared.stats.record_accepted();

                    let shared = Arc::clone(&self.shared);
                    handles.push(thread::spawn(move || {
                        Self::handle_client(stream, shared);
                    }));
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    // No hay conexiones pendientes: ceder un momento y
                    // volver a chequear (también el flag de running)
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                    self.shared.set_error(EC_ACCEPT);
                    break;
                }
            }
        }

        // Drenaje: los handlers en vuelo corren hasta el final, sin
        // cancelación forzada
        for handle in handles {
            let _ = handle.join();
        }

        self.shared.running.store(false, Ordering::SeqCst);
        self.shared.set_error(EC_STOPPED);
        drop(listener);

        println!("[*] Servidor detenido");
    }

    /// Solicita detener el servidor (idempotente)
    ///
    /// Solo limpia el flag de running: el loop de accept lo observa en su
    /// próxima iteración. No cierra el socket de escucha ni las
    /// conexiones en vuelo.
    pub fn stop(&self) {
        self.shared.running.store(false, Ordering::SeqCst);
    }

    /// Indica si el servidor está escuchando
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    /// Obtiene el código de error de la corrida actual (0 = sin error)
    pub fn error_code(&self) -> i32 {
        self.shared.error_code.load(Ordering::SeqCst)
    }

    /// Actualiza el delay de response en milisegundos
    ///
    /// Visible para los handlers que todavía no llegaron a su paso de
    /// delay, además de los que se acepten después.
    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.shared.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Obtiene el delay de response actual en milisegundos
    pub fn delay_ms(&self) -> u64 {
        self.shared.delay_ms.load(Ordering::SeqCst)
    }

    /// Obtiene las estadísticas de conexiones en formato JSON
    pub fn stats_json(&self) -> String {
        self.shared.stats.get_stats_json()
    }

    /// Construye el socket de escucha: SO_REUSEADDR, no-bloqueante,
    /// backlog de 500
    ///
    /// Retorna el código de error correspondiente al paso que falló.
    fn bind_listener(&self) -> Result<TcpListener, i32> {
        let addr: SocketAddr = match format!("{}:{}", self.host, self.port).parse() {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("   ❌ Dirección inválida {}:{}: {}", self.host, self.port, e);
                return Err(EC_BAD_ADDR);
            }
        };

        let socket = match Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        {
            Ok(socket) => socket,
            Err(e) => {
                eprintln!("   ❌ Error creando el socket: {}", e);
                return Err(EC_SOCKET);
            }
        };

        if let Err(e) = socket.set_reuse_address(true) {
            eprintln!("   ❌ Error configurando SO_REUSEADDR: {}", e);
            return Err(EC_SOCKET);
        }

        if let Err(e) = socket.bind(&addr.into()) {
            eprintln!("   ❌ Error en bind a {}: {}", addr, e);
            return Err(EC_BIND);
        }

        // Quirk heredado del diseño original: si no se puede poner el
        // socket en modo no-bloqueante se avisa y se sigue igual (el
        // accept pasa a ser bloqueante y stop() pierde reactividad)
        if let Err(e) = socket.set_nonblocking(true) {
            eprintln!("   ⚠️  No se pudo activar el modo no-bloqueante: {}", e);
        }

        if let Err(e) = socket.listen(LISTEN_BACKLOG) {
            eprintln!("   ❌ Error en listen: {}", e);
            return Err(EC_LISTEN);
        }

        Ok(socket.into())
    }

    /// Maneja una conexión de principio a fin
    ///
    /// Lee hasta ver `\r\n\r\n` (o hasta que el peer cierre / falle la
    /// lectura), arma la response de echo, aplica el delay vigente y
    /// envía. La conexión se cierra siempre, haya o no response. Ningún
    /// fallo acá sale del handler: se loguea y se sigue al cierre.
    fn handle_client(mut stream: TcpStream, shared: Arc<Shared>) {
        // El stream aceptado debe ser bloqueante; en algunos sistemas
        // hereda el modo no-bloqueante del listener
        let _ = stream.set_nonblocking(false);

        let mut scratch = [0u8; BUFFER_SIZE];
        let mut raw: Vec<u8> = Vec::new();
        let mut response = String::new();

        loop {
            match stream.read(&mut scratch) {
                // El peer cerró sin completar los headers
                Ok(0) => break,
                Ok(n) => {
                    raw.extend_from_slice(&scratch[..n]);
                    if headers_complete(&raw) {
                        let line = RequestLine::parse(&raw);
                        response = echo_response(&line.echo_body());
                        break;
                    }
                }
                Err(e) => {
                    eprintln!("   ❌ Error leyendo del peer: {}", e);
                    break;
                }
            }
        }

        // El delay se lee acá (no al aceptar) para que set_delay_ms
        // aplique también a handlers que aún no llegaron a este punto
        let delay_ms = shared.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }

        let mut response_sent = false;
        if !response.is_empty() {
            match stream.write_all(response.as_bytes()) {
                Ok(()) => response_sent = true,
                Err(e) => eprintln!("   ❌ Error enviando response: {}", e),
            }
        }

        shared.stats.record_closed(response_sent);
        // La conexión se cierra al soltar `stream`
    }
}
