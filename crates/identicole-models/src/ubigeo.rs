//! Ubigeo location models.
//!
//! Peru's administrative hierarchy is department → province → district.
//! Departments are a fixed catalog; provinces and districts come from the
//! proxy. All codes are opaque fixed-width strings and are never parsed as
//! numbers.

use serde::{Deserialize, Serialize};

/// A department from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Department {
    pub code: &'static str,
    pub label: &'static str,
}

/// Every department, ordered by code.
pub const DEPARTMENTS: [Department; 25] = [
    Department { code: "01", label: "AMAZONAS" },
    Department { code: "02", label: "ÁNCASH" },
    Department { code: "03", label: "APURÍMAC" },
    Department { code: "04", label: "AREQUIPA" },
    Department { code: "05", label: "AYACUCHO" },
    Department { code: "06", label: "CAJAMARCA" },
    Department { code: "07", label: "CALLAO" },
    Department { code: "08", label: "CUSCO" },
    Department { code: "09", label: "HUANCAVELICA" },
    Department { code: "10", label: "HUÁNUCO" },
    Department { code: "11", label: "ICA" },
    Department { code: "12", label: "JUNÍN" },
    Department { code: "13", label: "LA LIBERTAD" },
    Department { code: "14", label: "LAMBAYEQUE" },
    Department { code: "15", label: "LIMA" },
    Department { code: "16", label: "LORETO" },
    Department { code: "17", label: "MADRE DE DIOS" },
    Department { code: "18", label: "MOQUEGUA" },
    Department { code: "19", label: "PASCO" },
    Department { code: "20", label: "PIURA" },
    Department { code: "21", label: "PUNO" },
    Department { code: "22", label: "SAN MARTÍN" },
    Department { code: "23", label: "TACNA" },
    Department { code: "24", label: "TUMBES" },
    Department { code: "25", label: "UCAYALI" },
];

/// Looks up a department's display label by code.
pub fn department_label(code: &str) -> Option<&'static str> {
    DEPARTMENTS
        .iter()
        .find(|d| d.code == code)
        .map(|d| d.label)
}

/// A province, as decoded from the proxy's envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "coddpto", default)]
    pub department_code: String,
    #[serde(rename = "codprov", default)]
    pub code: String,
    /// Present in some payloads; carries no meaning at province level.
    #[serde(rename = "coddist", default, skip_serializing_if = "Option::is_none")]
    pub district_code: Option<String>,
    #[serde(rename = "nombre", default)]
    pub name: String,
}

impl Province {
    pub fn belongs_to(&self, department_code: &str) -> bool {
        self.department_code == department_code
    }
}

/// A district, as decoded from the proxy's envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "coddpto", default)]
    pub department_code: String,
    #[serde(rename = "codprov", default)]
    pub province_code: String,
    #[serde(rename = "coddist", default)]
    pub code: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
}

impl District {
    pub fn belongs_to(&self, department_code: &str, province_code: &str) -> bool {
        self.department_code == department_code && self.province_code == province_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_codes_are_sequential() {
        for (i, department) in DEPARTMENTS.iter().enumerate() {
            assert_eq!(department.code, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_department_label() {
        assert_eq!(department_label("15"), Some("LIMA"));
        assert_eq!(department_label("13"), Some("LA LIBERTAD"));
        assert_eq!(department_label("26"), None);
        assert_eq!(department_label("1"), None);
    }

    #[test]
    fn test_province_deserialize() {
        let json = r#"{"coddpto":"15","codprov":"01","nombre":"LIMA"}"#;
        let province: Province = serde_json::from_str(json).unwrap();
        assert_eq!(province.department_code, "15");
        assert_eq!(province.code, "01");
        assert_eq!(province.name, "LIMA");
        assert_eq!(province.district_code, None);
        assert!(province.belongs_to("15"));
        assert!(!province.belongs_to("01"));
    }

    #[test]
    fn test_district_deserialize_missing_fields() {
        let json = r#"{"coddist":"04"}"#;
        let district: District = serde_json::from_str(json).unwrap();
        assert_eq!(district.code, "04");
        assert!(district.name.is_empty());
        assert!(!district.belongs_to("15", "01"));
    }

    #[test]
    fn test_district_belongs_to() {
        let district = District {
            department_code: "15".into(),
            province_code: "01".into(),
            code: "01".into(),
            name: "LIMA".into(),
        };
        assert!(district.belongs_to("15", "01"));
        assert!(!district.belongs_to("15", "02"));
    }
}
