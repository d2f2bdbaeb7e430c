use serde::{Deserialize, Serialize};

/// Official display order of the program branches.
pub const RAMA_ORDER: [&str; 5] = ["Cachorros", "Manada", "Tropa", "Comunidad", "Clan"];

/// Sentinel used in the data for "not provided" social links.
pub const NOT_PROVIDED: &str = "N/A";

/// Position of a branch tag in the official order, or `None` for tags
/// outside the vocabulary.
pub fn rama_rank(rama: &str) -> Option<usize> {
    RAMA_ORDER.iter().position(|r| *r == rama)
}

pub fn is_canonical_rama(rama: &str) -> bool {
    rama_rank(rama).is_some()
}

/// Sort branch tags into official display order. Tags outside the
/// vocabulary sort after all recognized ones, keeping their relative
/// order.
pub fn sort_ramas(ramas: &[String]) -> Vec<String> {
    let mut sorted = ramas.to_vec();
    sorted.sort_by_key(|r| rama_rank(r).unwrap_or(RAMA_ORDER.len()));
    sorted
}

/// One scouting group's contact, location and program-offering data.
///
/// Loaded once from `grupos.json` and never mutated. Display fields
/// default to empty strings so a record with a missing field still
/// loads (it renders degraded instead of failing the whole array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: u32,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub horarios: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub ramas: Vec<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub sitio_web: Option<String>,
    pub latitud: f64,
    pub longitud: f64,
}

impl GroupRecord {
    /// Branch tags in official display order.
    pub fn ramas_sorted(&self) -> Vec<String> {
        sort_ramas(&self.ramas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rama_rank_official_order() {
        assert_eq!(rama_rank("Cachorros"), Some(0));
        assert_eq!(rama_rank("Manada"), Some(1));
        assert_eq!(rama_rank("Tropa"), Some(2));
        assert_eq!(rama_rank("Comunidad"), Some(3));
        assert_eq!(rama_rank("Clan"), Some(4));
    }

    #[test]
    fn test_rama_rank_unknown() {
        assert_eq!(rama_rank("Rovers"), None);
        assert_eq!(rama_rank("cachorros"), None); // case-sensitive vocabulary
        assert!(!is_canonical_rama(""));
    }

    #[test]
    fn test_sort_ramas_official_order() {
        let ramas = vec!["Clan".to_string(), "Cachorros".to_string()];
        assert_eq!(sort_ramas(&ramas), vec!["Cachorros", "Clan"]);
    }

    #[test]
    fn test_sort_ramas_unknown_after_known_stable() {
        let ramas = vec![
            "Zeta".to_string(),
            "Clan".to_string(),
            "Alfa".to_string(),
            "Manada".to_string(),
        ];
        // Known tags first in official order, unknown ones after in
        // their original relative order.
        assert_eq!(sort_ramas(&ramas), vec!["Manada", "Clan", "Zeta", "Alfa"]);
    }

    #[test]
    fn test_group_record_deserializes_camel_case() {
        let json = r#"{
            "id": 23,
            "nombre": "Grupo Scout 23 Antares",
            "ciudad": "Cali",
            "direccion": "Cra 56 #2-90",
            "horarios": "Sábados 2:00pm - 5:30pm",
            "telefono": "+57 315 000 0000",
            "email": "antares@example.org",
            "ramas": ["Manada", "Tropa"],
            "instagram": "instagram.com/gs23antares",
            "facebook": "N/A",
            "sitioWeb": "",
            "latitud": 3.4516,
            "longitud": -76.5320
        }"#;
        let group: GroupRecord = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, 23);
        assert_eq!(group.nombre, "Grupo Scout 23 Antares");
        assert_eq!(group.sitio_web.as_deref(), Some(""));
        assert_eq!(group.facebook.as_deref(), Some("N/A"));
        assert_eq!(group.ramas, vec!["Manada", "Tropa"]);
    }

    #[test]
    fn test_group_record_missing_fields_default() {
        // Only id and coordinates are required; everything else degrades.
        let json = r#"{"id": 7, "latitud": 3.9, "longitud": -76.3}"#;
        let group: GroupRecord = serde_json::from_str(json).unwrap();
        assert_eq!(group.nombre, "");
        assert!(group.ramas.is_empty());
        assert!(group.instagram.is_none());
        assert!(group.sitio_web.is_none());
    }

    #[test]
    fn test_group_record_array_load_order_preserved() {
        let json = r#"[
            {"id": 2, "nombre": "B", "latitud": 3.0, "longitud": -76.0},
            {"id": 1, "nombre": "A", "latitud": 3.1, "longitud": -76.1}
        ]"#;
        let groups: Vec<GroupRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(groups[0].id, 2);
        assert_eq!(groups[1].id, 1);
    }
}
