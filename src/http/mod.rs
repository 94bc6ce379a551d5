//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que soporta el
//! servidor, desde cero y sin librerías de alto nivel. Incluye:
//!
//! - Buffering incremental del stream de bytes (`reader`)
//! - Parsing de requests como máquina de estados (`request`)
//! - Mapa ordenado de headers con semántica "último valor gana" (`headers`)
//! - Construcción y serialización de responses (`response`)
//! - Códigos de estado (`status`)
//!
//! ## Formato de Request
//!
//! ```text
//! POST /files/notas.txt HTTP/1.1\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hola!
//! ```
//!
//! ## Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! El framing del body es únicamente por `Content-Length`: no hay chunked
//! transfer-encoding ni conexiones persistentes.

pub mod headers;
pub mod reader;
pub mod request;
pub mod response;
pub mod status;

// Re-exportamos los tipos principales para facilitar su uso
pub use headers::Headers;
pub use reader::StreamReader;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
