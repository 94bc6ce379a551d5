//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread: las esperas por bytes, por I/O de archivos o por la
//! compresión solo suspenden ese thread, nunca a las demás conexiones.
//!
//! Se atiende exactamente un request por conexión y se cierra el stream
//! después de escribir la respuesta, sin importar qué headers haya
//! mandado el cliente. No hay límite de conexiones concurrentes ni
//! timeouts por conexión: un cliente que nunca termina su request deja
//! su thread esperando indefinidamente.

use crate::config::Config;
use crate::http::{ParseError, Request, Response, StatusCode, StreamReader};
use crate::router::Router;
use std::fs;
use std::io::Write;
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    /// Crea el servidor a partir de la configuración
    ///
    /// El directorio de archivos viaja como valor explícito hacia el
    /// router.
    pub fn new(config: Config) -> Self {
        let router = Router::new(config.directory.clone());
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Inicia el servidor en la dirección configurada
    ///
    /// Bloquea el thread actual aceptando conexiones.
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        if let Err(e) = fs::create_dir_all(&self.config.directory) {
            eprintln!(
                "[!] No se pudo crear el directorio {}: {}",
                self.config.directory, e
            );
        }

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexión\n");

        self.serve(listener)
    }

    /// Bucle de accept sobre un listener ya creado
    ///
    /// Separado de `run` para que los tests puedan usar un listener en
    /// puerto efímero.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!("   ✅ Nueva conexión desde: {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router) {
                            eprintln!("   ❌ Error en conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Driver de una conexión: parse → handle → serialize → close
    fn handle_connection(mut stream: TcpStream, router: Arc<Router>) -> std::io::Result<()> {
        let mut reader = StreamReader::new(stream.try_clone()?);

        let response = match Request::read_from(&mut reader) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method().as_str(), request.path());
                router.handle(&request)
            }
            Err(ParseError::ConnectionClosed) => {
                // El cliente conectó y cerró sin mandar nada
                println!("   ✅ Conexión cerrada sin datos");
                return Ok(());
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                Response::new(Self::status_for(&e))
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        println!("   ✅ {}\n", response.status());

        // Un request por conexión: cierre inmediato
        let _ = stream.shutdown(Shutdown::Both);

        Ok(())
    }

    /// Mapea un error de parsing al status terminal de la conexión
    ///
    /// Método y versión se rechazan a nivel de transporte (405/505);
    /// todo lo demás es un request malformado (400).
    fn status_for(error: &ParseError) -> StatusCode {
        match error {
            ParseError::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
            ParseError::UnsupportedVersion(_) => StatusCode::VersionNotSupported,
            _ => StatusCode::BadRequest,
        }
    }
}
