//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1 de
//! forma programática y serializarlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta HTTP/1.1
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! La serialización completa los headers derivados: si la response no
//! trae `Content-Type` se emite `text/plain`, y si no trae
//! `Content-Length` se emite el largo real del body. Ambos están siempre
//! presentes en la salida serializada.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http11_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "application/octet-stream")
//!     .with_body("Hello");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::headers::Headers;
use super::status::StatusCode;

/// Versión del protocolo con la que se serializan todas las responses
const HTTP_VERSION: &str = "HTTP/1.1";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Reason phrase explícita; si es `None` se deriva del código
    reason: Option<String>,

    /// Headers en orden de inserción
    headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: None,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Encoding", "gzip");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name, value);
    }

    /// Establece una reason phrase explícita en lugar de la derivada
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para respuestas binarias (archivos, body comprimido, etc.)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Serializa la respuesta a bytes listos para enviar por el socket
    ///
    /// Emite en orden:
    /// 1. Status line: `HTTP/1.1 <código> <reason>\r\n` (la reason se
    ///    deriva de la tabla de [`StatusCode`] si no hay una explícita;
    ///    puede ser vacía)
    /// 2. Headers en orden de inserción, completando `Content-Type`
    ///    (`text/plain`) y `Content-Length` (largo del body) si faltan
    /// 3. Línea vacía
    /// 4. Body en crudo
    pub fn to_bytes(&self) -> Vec<u8> {
        let reason = match &self.reason {
            Some(explicit) => explicit.as_str(),
            None => self.status.reason_phrase(),
        };

        let mut headers = self.headers.clone();
        if !headers.contains("Content-Type") {
            headers.insert("Content-Type", "text/plain");
        }
        if !headers.contains("Content-Length") {
            headers.insert("Content-Length", &self.body.len().to_string());
        }

        let mut result = Vec::new();

        let status_line = format!("{} {} {}\r\n", HTTP_VERSION, self.status.as_u16(), reason);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in headers.iter() {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers seteados por el handler
    ///
    /// Los headers derivados (`Content-Type`, `Content-Length`) se
    /// completan recién al serializar.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
