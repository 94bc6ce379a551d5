//! # Despacho de Rutas
//! src/router/mod.rs
//!
//! Este módulo implementa el despacho de requests a las rutas soportadas.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Response
//! ```
//!
//! Las rutas son fijas y se evalúan en orden de precedencia:
//!
//! 1. Método fuera de {GET, POST} → 405 (PUT/DELETE pasan el chequeo de
//!    transporte pero ninguna ruta los soporta)
//! 2. `GET /` → 200 vacío
//! 3. `GET /echo/<text>` → 200 con `text`; comprimido con gzip si el
//!    cliente manda exactamente `Accept-Encoding: gzip`
//! 4. `GET /user-agent` → 200 con el valor del header `User-Agent`
//! 5. `GET /files/<name>` → contenido del archivo o 404
//! 6. `POST /files/<name>` → escribe el body al archivo, 201
//! 7. Cualquier otra cosa → 404
//!
//! El directorio de archivos se recibe como valor explícito al construir
//! el router (nada de estado global), así cada test puede usar un
//! directorio propio.

use crate::http::{Method, Request, Response, StatusCode};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Router con las rutas fijas del servidor
pub struct Router {
    /// Directorio base para las rutas /files
    directory: PathBuf,
}

impl Router {
    /// Crea un router que sirve archivos desde `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Despacha un request a su handler y retorna la response
    pub fn handle(&self, request: &Request) -> Response {
        // Rechazo a nivel de aplicación: solo GET y POST tienen rutas
        match request.method() {
            Method::GET | Method::POST => {}
            Method::PUT | Method::DELETE => {
                return Response::new(StatusCode::MethodNotAllowed);
            }
        }

        let path = request.path();

        if request.method() == Method::GET {
            if path == "/" {
                return Response::new(StatusCode::Ok);
            }
            if let Some(text) = path.strip_prefix("/echo/") {
                return self.echo(request, text);
            }
            if path == "/user-agent" {
                return self.user_agent(request);
            }
            if let Some(name) = path.strip_prefix("/files/") {
                return self.read_file(name);
            }
        } else if let Some(name) = path.strip_prefix("/files/") {
            return self.write_file(name, request.body());
        }

        Response::new(StatusCode::NotFound)
    }

    /// Handler de `GET /echo/<text>`
    ///
    /// Devuelve `text` verbatim, o comprimido con gzip si el request trae
    /// exactamente `Accept-Encoding: gzip` (sin negociación multi-valor:
    /// `gzip, deflate` no cuenta).
    fn echo(&self, request: &Request, text: &str) -> Response {
        if request.header("Accept-Encoding") == Some("gzip") {
            match gzip_compress(text.as_bytes()) {
                Ok(compressed) => {
                    return Response::new(StatusCode::Ok)
                        .with_header("Content-Encoding", "gzip")
                        .with_body_bytes(compressed);
                }
                Err(e) => {
                    // Degradar a identidad antes que inventar un 5xx
                    eprintln!("   ❌ Error comprimiendo body: {}", e);
                }
            }
        }
        Response::new(StatusCode::Ok).with_body(text)
    }

    /// Handler de `GET /user-agent`
    ///
    /// Body = valor del header `User-Agent`, o vacío si no vino.
    fn user_agent(&self, request: &Request) -> Response {
        let agent = request.header("User-Agent").unwrap_or("");
        Response::new(StatusCode::Ok).with_body(agent)
    }

    /// Handler de `GET /files/<name>`
    fn read_file(&self, name: &str) -> Response {
        if has_path_separator(name) {
            // Intento de traversal: indistinguible de un archivo ausente
            return Response::new(StatusCode::NotFound);
        }
        match fs::read(self.directory.join(name)) {
            Ok(bytes) => Response::new(StatusCode::Ok)
                .with_header("Content-Type", "application/octet-stream")
                .with_body_bytes(bytes),
            Err(_) => Response::new(StatusCode::NotFound),
        }
    }

    /// Handler de `POST /files/<name>`
    ///
    /// Crea o sobrescribe el archivo sin locking: escrituras concurrentes
    /// al mismo nombre compiten y la última gana.
    fn write_file(&self, name: &str, body: &[u8]) -> Response {
        if has_path_separator(name) {
            return Response::new(StatusCode::NotFound);
        }
        match fs::write(self.directory.join(name), body) {
            Ok(()) => Response::new(StatusCode::Created),
            Err(e) => {
                eprintln!("   ❌ Error escribiendo {}: {}", name, e);
                Response::new(StatusCode::NotFound)
            }
        }
    }
}

/// Indica si un nombre contiene separadores de path (traversal)
fn has_path_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

/// Comprime bytes con gzip
fn gzip_compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StreamReader;
    use std::io::{Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn parse(raw: &[u8]) -> Request {
        let mut reader = StreamReader::new(Cursor::new(raw.to_vec()));
        Request::read_from(&mut reader).unwrap()
    }

    /// Crea un directorio temporal único para el test
    fn test_dir(tag: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "http11_router_test_{}_{}_{}",
            tag,
            std::process::id(),
            n
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn gzip_decompress(data: &[u8]) -> Vec<u8> {
        let mut decoder = flate2::read::GzDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_root_ok() {
        let router = Router::new(test_dir("root"));
        let response = router.handle(&parse(b"GET / HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_root_post_is_not_found() {
        let router = Router::new(test_dir("rootpost"));
        let response = router.handle(&parse(b"POST / HTTP/1.1\r\n\r\n"));
        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_echo_plain() {
        let router = Router::new(test_dir("echo"));
        let response = router.handle(&parse(b"GET /echo/hola-mundo HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"hola-mundo");
    }

    #[test]
    fn test_echo_gzip() {
        let router = Router::new(test_dir("echogzip"));
        let response = router.handle(&parse(
            b"GET /echo/foo HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n",
        ));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.headers().get("Content-Encoding"), Some("gzip"));
        assert_eq!(gzip_decompress(response.body()), b"foo");
    }

    #[test]
    fn test_echo_identity_encoding_ignored() {
        let router = Router::new(test_dir("echoident"));
        let response = router.handle(&parse(
            b"GET /echo/foo HTTP/1.1\r\nAccept-Encoding: identity\r\n\r\n",
        ));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.headers().get("Content-Encoding"), None);
        assert_eq!(response.body(), b"foo");
    }

    #[test]
    fn test_echo_multivalue_encoding_not_negotiated() {
        // Solo el literal exacto "gzip" activa la compresión
        let router = Router::new(test_dir("echomulti"));
        let response = router.handle(&parse(
            b"GET /echo/foo HTTP/1.1\r\nAccept-Encoding: gzip, deflate\r\n\r\n",
        ));

        assert_eq!(response.headers().get("Content-Encoding"), None);
        assert_eq!(response.body(), b"foo");
    }

    #[test]
    fn test_echo_empty_text() {
        let router = Router::new(test_dir("echoempty"));
        let response = router.handle(&parse(b"GET /echo/ HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_user_agent() {
        let router = Router::new(test_dir("ua"));
        let response = router.handle(&parse(
            b"GET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n",
        ));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"foobar/1.2.3");
    }

    #[test]
    fn test_user_agent_absent() {
        let router = Router::new(test_dir("uaabs"));
        let response = router.handle(&parse(b"GET /user-agent HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_files_post_then_get() {
        let dir = test_dir("roundtrip");
        let router = Router::new(dir);

        let post = router.handle(&parse(
            b"POST /files/test HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello",
        ));
        assert_eq!(post.status(), StatusCode::Created);
        assert!(post.body().is_empty());

        let get = router.handle(&parse(b"GET /files/test HTTP/1.1\r\n\r\n"));
        assert_eq!(get.status(), StatusCode::Ok);
        assert_eq!(get.body(), b"hello");
        assert_eq!(
            get.headers().get("Content-Type"),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_files_missing_is_not_found() {
        let router = Router::new(test_dir("missing"));
        let response = router.handle(&parse(b"GET /files/missing HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_files_traversal_is_not_found() {
        let dir = test_dir("traversal");
        // El archivo existe fuera del directorio configurado
        fs::write(dir.join("secret"), b"top").unwrap();
        let router = Router::new(dir.join("inner"));
        fs::create_dir_all(dir.join("inner")).unwrap();

        let get = router.handle(&parse(b"GET /files/../secret HTTP/1.1\r\n\r\n"));
        assert_eq!(get.status(), StatusCode::NotFound);

        let back = router.handle(&parse(b"GET /files/..\\secret HTTP/1.1\r\n\r\n"));
        assert_eq!(back.status(), StatusCode::NotFound);

        let post = router.handle(&parse(
            b"POST /files/../evil HTTP/1.1\r\nContent-Length: 1\r\n\r\nx",
        ));
        assert_eq!(post.status(), StatusCode::NotFound);
        assert!(!dir.join("evil").exists());
    }

    #[test]
    fn test_files_post_overwrites_last_write_wins() {
        let router = Router::new(test_dir("overwrite"));

        router.handle(&parse(
            b"POST /files/x HTTP/1.1\r\nContent-Length: 5\r\n\r\nfirst",
        ));
        router.handle(&parse(
            b"POST /files/x HTTP/1.1\r\nContent-Length: 6\r\n\r\nsecond",
        ));

        let get = router.handle(&parse(b"GET /files/x HTTP/1.1\r\n\r\n"));
        assert_eq!(get.body(), b"second");
    }

    #[test]
    fn test_delete_rejected_by_handler() {
        // DELETE pasa el transporte pero no tiene rutas
        let router = Router::new(test_dir("delete"));
        let response = router.handle(&parse(b"DELETE /files/test HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::MethodNotAllowed);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_put_rejected_by_handler() {
        let router = Router::new(test_dir("put"));
        let response = router.handle(&parse(b"PUT /echo/abc HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::MethodNotAllowed);
    }

    #[test]
    fn test_unknown_path_not_found() {
        let router = Router::new(test_dir("unknown"));
        let response = router.handle(&parse(b"GET /nonexistent HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_post_echo_not_routed() {
        let router = Router::new(test_dir("postecho"));
        let response = router.handle(&parse(b"POST /echo/abc HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_gzip_compress_roundtrip() {
        let compressed = gzip_compress(b"contenido de prueba").unwrap();
        assert_ne!(compressed, b"contenido de prueba");
        assert_eq!(gzip_decompress(&compressed), b"contenido de prueba");
    }
}
