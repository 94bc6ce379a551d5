//! # HTTP/1.1 Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero sobre TCP, sin
//! librerías de alto nivel para el protocolo. El objetivo es el framing:
//! reconstruir requests desde un stream de bytes fragmentado de forma
//! arbitraria y serializar responses de vuelta sobre el mismo stream.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: reader incremental de bytes, parser de requests (máquina de
//!   estados), construcción y serialización de responses
//! - `router`: despacho de requests a las rutas soportadas
//! - `server`: servidor TCP, un thread por conexión
//! - `config`: configuración vía CLI y variables de entorno
//!
//! ## Flujo de datos
//!
//! ```text
//! bytes crudos → Parser → Request → Router → Response → bytes crudos → close
//! ```
//!
//! Se atiende exactamente un request por conexión; el servidor cierra el
//! stream después de escribir la respuesta.
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http11_server::server::Server;
//! use http11_server::config::Config;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod http;
pub mod router;
pub mod server;
