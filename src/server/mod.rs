//! # Módulo Server
//!
//! Servidor TCP y driver de conexiones: acepta conexiones, y en un
//! thread por conexión ejecuta el ciclo parse → handle → serialize →
//! close.

pub mod tcp;

pub use tcp::Server;
