//! # Headers HTTP
//! src/http/headers.rs
//!
//! Mapa ordenado de headers. Se usa tanto en requests como en responses.
//!
//! A diferencia de un `HashMap`, este mapa conserva el orden de inserción
//! (las responses se serializan con los headers en el orden en que se
//! setearon) y conserva las mayúsculas/minúsculas tal como llegaron. Las
//! búsquedas son case-sensitive contra el nombre canónico que escriben los
//! clientes (`User-Agent`, `Content-Length`, etc.).
//!
//! Un nombre duplicado sobrescribe el valor anterior en su posición
//! original: "último valor gana".

/// Mapa ordenado de headers (nombre, valor)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Crea un mapa de headers vacío
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserta un header
    ///
    /// Si el nombre ya existe (comparación exacta), sobrescribe el valor
    /// conservando la posición original.
    pub fn insert(&mut self, name: &str, value: &str) {
        for (existing, slot) in &mut self.entries {
            if existing == name {
                *slot = value.to_string();
                return;
            }
        }
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// Obtiene el valor de un header (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Indica si existe un header con ese nombre exacto
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Itera los headers en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Cantidad de headers almacenados
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indica si el mapa está vacío
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut headers = Headers::new();
        headers.insert("Host", "localhost:4221");
        headers.insert("User-Agent", "curl/7.68.0");

        assert_eq!(headers.get("Host"), Some("localhost:4221"));
        assert_eq!(headers.get("User-Agent"), Some("curl/7.68.0"));
        assert_eq!(headers.get("Accept"), None);
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_last_value_wins() {
        let mut headers = Headers::new();
        headers.insert("X-Custom", "first");
        headers.insert("X-Custom", "second");

        assert_eq!(headers.get("X-Custom"), Some("second"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut headers = Headers::new();
        headers.insert("A", "1");
        headers.insert("B", "2");
        headers.insert("A", "3");

        let order: Vec<(&str, &str)> = headers.iter().collect();
        assert_eq!(order, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut headers = Headers::new();
        headers.insert("User-Agent", "foobar/1.2.3");

        assert_eq!(headers.get("User-Agent"), Some("foobar/1.2.3"));
        assert_eq!(headers.get("user-agent"), None);
    }

    #[test]
    fn test_iteration_order() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");
        headers.insert("Content-Length", "4");
        headers.insert("Content-Encoding", "gzip");

        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["Content-Type", "Content-Length", "Content-Encoding"]
        );
    }

    #[test]
    fn test_empty() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert!(!headers.contains("Host"));
    }
}
