//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Este módulo define los códigos de estado que emite el servidor.
//! El conjunto es cerrado: 200, 201, 400, 404, 405 y 505 — ningún otro.
//!
//! La tabla de reason phrases también es mínima: solo 200, 201 y 404
//! tienen frase derivada; el resto se serializa con frase vacía (salvo
//! que la response traiga una explícita).

/// Representa los códigos de estado HTTP que emite el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - Recurso creado (POST /files)
    Created = 201,

    /// 400 Bad Request - Request malformado (request line inválida, etc.)
    BadRequest = 400,

    /// 404 Not Found - Ruta o archivo no encontrado
    NotFound = 404,

    /// 405 Method Not Allowed - Método rechazado a nivel de transporte o de ruta
    MethodNotAllowed = 405,

    /// 505 HTTP Version Not Supported - Versión distinta de HTTP/1.1
    VersionNotSupported = 505,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) derivado del código
    ///
    /// Solo 200, 201 y 404 están en la tabla; el resto deriva a frase
    /// vacía.
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            _ => "",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código para logs
    ///
    /// Formato: "200 OK" (o solo "405" si no hay frase derivada)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = self.reason_phrase();
        if reason.is_empty() {
            write!(f, "{}", self.as_u16())
        } else {
            write!(f, "{} {}", self.as_u16(), reason)
        }
    }
}
