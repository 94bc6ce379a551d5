//! # Reader Incremental del Stream
//! src/http/reader.rs
//!
//! Un request puede llegar fragmentado en cualquier cantidad de chunks
//! arbitrarios: el kernel no respeta los límites de línea ni de mensaje.
//! Este módulo acumula los bytes recibidos en un buffer interno y expone
//! dos primitivas de lectura sobre él:
//!
//! - `read_line()`: entrega la próxima línea terminada en `\r\n` completa
//! - `read_exact_bytes(n)`: entrega exactamente `n` bytes
//!
//! Ambas bloquean (sobre el `read` del stream subyacente) hasta tener los
//! bytes necesarios; el driver de conexión las ejecuta en el thread
//! dedicado a esa conexión, así que la espera no frena a otras conexiones.
//!
//! El buffer no tiene cota superior: un cliente que envía bytes sin
//! terminador puede hacerlo crecer sin límite. Es un riesgo aceptado en
//! esta capa; quien llama puede imponer límites.

use std::io::{self, Read};

/// Tamaño del chunk de lectura sobre el stream subyacente
const CHUNK_SIZE: usize = 4096;

/// Reader que acumula bytes y permite lecturas por línea o por longitud
pub struct StreamReader<R: Read> {
    inner: R,
    buffer: Vec<u8>,
    total_read: u64,
}

impl<R: Read> StreamReader<R> {
    /// Crea un reader sobre un stream de bytes
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            total_read: 0,
        }
    }

    /// Total de bytes consumidos del transporte hasta ahora
    ///
    /// Permite distinguir una conexión que cerró sin enviar nada de un
    /// request truncado a mitad de camino.
    pub fn total_read(&self) -> u64 {
        self.total_read
    }

    /// Lee un chunk más del stream subyacente hacia el buffer
    ///
    /// Retorna la cantidad de bytes leídos; 0 significa EOF.
    fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; CHUNK_SIZE];
        let n = self.inner.read(&mut chunk)?;
        self.buffer.extend_from_slice(&chunk[..n]);
        self.total_read += n as u64;
        Ok(n)
    }

    /// Lee la próxima línea terminada en `\r\n`
    ///
    /// Bloquea hasta que haya una línea completa en el buffer. El
    /// terminador se consume pero no se incluye en el resultado.
    ///
    /// Retorna `None` si el stream llegó a EOF antes de completar una
    /// línea. Bytes que no son UTF-8 válido producen un error de tipo
    /// `InvalidData`.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(pos) = find_crlf(&self.buffer) {
                let mut line: Vec<u8> = self.buffer.drain(..pos + 2).collect();
                line.truncate(pos);
                let text = String::from_utf8(line).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, "line is not valid UTF-8")
                })?;
                return Ok(Some(text));
            }
            if self.fill()? == 0 {
                return Ok(None);
            }
        }
    }

    /// Lee exactamente `n` bytes
    ///
    /// Bloquea hasta que haya `n` bytes acumulados a partir del punto de
    /// invocación. Retorna `None` si el stream llegó a EOF antes.
    pub fn read_exact_bytes(&mut self, n: usize) -> io::Result<Option<Vec<u8>>> {
        while self.buffer.len() < n {
            if self.fill()? == 0 {
                return Ok(None);
            }
        }
        Ok(Some(self.buffer.drain(..n).collect()))
    }
}

/// Busca la posición del primer `\r\n` en el buffer
fn find_crlf(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|w| w == b"\r\n")
}
