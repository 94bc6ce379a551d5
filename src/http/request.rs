//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser HTTP/1.1 implementado como máquina de estados explícita sobre
//! las primitivas de [`StreamReader`](crate::http::reader::StreamReader):
//!
//! ```text
//! AwaitingRequestLine → AwaitingHeaders → AwaitingBody(len) → Complete
//! ```
//!
//! ## Formato de un Request HTTP/1.1
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! Inmediatamente después de la request line se valida método y versión;
//! un método fuera de {GET, POST, PUT, DELETE} o una versión distinta de
//! `HTTP/1.1` abortan el parsing antes de leer headers o body, así un
//! body malformado nunca bloquea un request que igual va a rechazarse.
//!
//! El único framing de body reconocido es `Content-Length`: sin ese
//! header el body es vacío.

use std::io::Read;

use super::headers::Headers;
use super::reader::StreamReader;

/// Métodos HTTP aceptados a nivel de transporte
///
/// PUT y DELETE pasan esta validación pero ninguna ruta los soporta: el
/// router los rechaza con 405 a nivel de aplicación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// PUT - Reemplazar un recurso
    PUT,

    /// DELETE - Eliminar un recurso
    DELETE,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es aceptado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// El cliente cerró la conexión sin enviar ningún byte
    ConnectionClosed,

    /// EOF a mitad de un request (línea sin terminar o body corto)
    IncompleteRequest,

    /// Request line con menos de tres tokens, o bytes que no son UTF-8
    InvalidRequestLine,

    /// Método HTTP fuera del conjunto aceptado (responde 405)
    UnsupportedMethod(String),

    /// Versión HTTP distinta de HTTP/1.1 (responde 505)
    UnsupportedVersion(String),

    /// Línea de header sin el delimitador ": "
    InvalidHeader(String),

    /// Content-Length no parseable como entero base 10
    InvalidContentLength(String),

    /// Error de I/O sobre el transporte
    Io(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::ConnectionClosed => write!(f, "Connection closed before any data"),
            ParseError::IncompleteRequest => write!(f, "Incomplete HTTP request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::UnsupportedVersion(v) => write!(f, "Unsupported HTTP version: {}", v),
            ParseError::InvalidHeader(h) => write!(f, "Invalid header: {}", h),
            ParseError::InvalidContentLength(v) => write!(f, "Invalid Content-Length: {}", v),
            ParseError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::InvalidData {
            // Bytes que no forman texto: la línea no es parseable
            ParseError::InvalidRequestLine
        } else {
            ParseError::Io(e.to_string())
        }
    }
}

/// Estados del parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Esperando la request line completa
    AwaitingRequestLine,

    /// Esperando líneas de header; la línea vacía cierra la sección
    AwaitingHeaders,

    /// Esperando exactamente `len` bytes de body
    AwaitingBody(usize),

    /// Request completo
    Complete,
}

/// Representa un request HTTP/1.1 parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST, PUT, DELETE)
    method: Method,

    /// Path de la petición (ej: "/echo/abc")
    path: String,

    /// Versión HTTP (siempre "HTTP/1.1" si el parsing terminó)
    version: String,

    /// Headers en orden de llegada, último valor gana
    headers: Headers,

    /// Body del request, framing por Content-Length
    body: Vec<u8>,
}

impl Request {
    /// Lee y parsea un request completo desde el reader
    ///
    /// Avanza la máquina de estados consumiendo líneas y bytes del
    /// reader; cada lectura bloquea hasta que el transporte entregue lo
    /// necesario.
    ///
    /// # Errores
    ///
    /// * `UnsupportedMethod` / `UnsupportedVersion`: detectados apenas se
    ///   lee la request line, sin tocar headers ni body
    /// * `ConnectionClosed`: EOF antes del primer byte
    /// * El resto de las variantes son requests malformados
    pub fn read_from<R: Read>(reader: &mut StreamReader<R>) -> Result<Self, ParseError> {
        let mut state = ParseState::AwaitingRequestLine;
        let mut method = Method::GET;
        let mut path = String::new();
        let mut version = String::new();
        let mut headers = Headers::new();
        let mut body = Vec::new();

        while state != ParseState::Complete {
            match state {
                ParseState::AwaitingRequestLine => {
                    let line = match reader.read_line()? {
                        Some(line) => line,
                        None if reader.total_read() == 0 => {
                            return Err(ParseError::ConnectionClosed)
                        }
                        None => return Err(ParseError::IncompleteRequest),
                    };
                    let (m, p, v) = parse_request_line(&line)?;
                    method = m;
                    path = p;
                    version = v;
                    state = ParseState::AwaitingHeaders;
                }
                ParseState::AwaitingHeaders => {
                    let line = reader
                        .read_line()?
                        .ok_or(ParseError::IncompleteRequest)?;
                    if line.is_empty() {
                        // Fin de headers: decidir el framing del body
                        let len = content_length(&headers)?;
                        state = if len == 0 {
                            ParseState::Complete
                        } else {
                            ParseState::AwaitingBody(len)
                        };
                    } else {
                        let (name, value) = parse_header_line(&line)?;
                        headers.insert(name, value);
                    }
                }
                ParseState::AwaitingBody(len) => {
                    body = reader
                        .read_exact_bytes(len)?
                        .ok_or(ParseError::IncompleteRequest)?;
                    state = ParseState::Complete;
                }
                ParseState::Complete => unreachable!("loop exits on Complete"),
            }
        }

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene un header específico (case-sensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Parsea la request line y valida método y versión
///
/// Formato: `GET /path HTTP/1.1`. Se separa por espacios simples; menos
/// de tres tokens es un request malformado (tokens extra se ignoran).
fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();

    if parts.len() < 3 {
        return Err(ParseError::InvalidRequestLine);
    }

    // Validaciones de transporte, antes de seguir parseando
    let method = Method::from_str(parts[0])?;

    let version = parts[2];
    if version != "HTTP/1.1" {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    Ok((method, parts[1].to_string(), version.to_string()))
}

/// Parsea una línea de header
///
/// El corte es en la *primera* ocurrencia de `": "`: un valor que
/// contiene el delimitador (ej: `X-Note: a: b`) se conserva entero.
fn parse_header_line(line: &str) -> Result<(&str, &str), ParseError> {
    line.split_once(": ")
        .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))
}

/// Obtiene el largo del body declarado en Content-Length (0 si no está)
fn content_length(headers: &Headers) -> Result<usize, ParseError> {
    match headers.get("Content-Length") {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidContentLength(value.to_string())),
        None => Ok(0),
    }
}
