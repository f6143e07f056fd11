use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub id: String,
    pub number: String,
    pub contractor_id: String,
    pub project_name: String,
}

/// Contractor and estimate lookup lists supplied by the external
/// contractor system. Lookups are by id and may miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub contractors: Vec<Contractor>,
    #[serde(default)]
    pub estimates: Vec<Estimate>,
}

impl ReferenceData {
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Fixture lists shipped with the tool
    pub fn builtin() -> Self {
        let contractor = |id: &str, name: &str, code: &str| Contractor {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
        };
        let estimate = |id: &str, number: &str, contractor_id: &str, project_name: &str| Estimate {
            id: id.to_string(),
            number: number.to_string(),
            contractor_id: contractor_id.to_string(),
            project_name: project_name.to_string(),
        };

        Self {
            contractors: vec![
                contractor("1", "株式会社建設太郎", "KT001"),
                contractor("2", "山田建設株式会社", "YK002"),
                contractor("3", "東京工業株式会社", "TK003"),
                contractor("4", "関東建築株式会社", "KK004"),
            ],
            estimates: vec![
                estimate("1", "EST-2024-001", "1", "オフィスビル改修工事"),
                estimate("2", "EST-2024-002", "2", "住宅基礎工事"),
                estimate("3", "EST-2024-003", "1", "道路舗装工事"),
                estimate("4", "EST-2024-004", "3", "橋梁補修工事"),
            ],
        }
    }

    pub fn contractor(&self, id: &str) -> Option<&Contractor> {
        self.contractors.iter().find(|c| c.id == id)
    }

    pub fn estimate(&self, id: &str) -> Option<&Estimate> {
        self.estimates.iter().find(|e| e.id == id)
    }

    /// Display name of a contractor, empty when unknown
    pub fn contractor_name(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.contractor(id))
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    /// Display code of an estimate, empty when unknown
    pub fn estimate_number(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.estimate(id))
            .map(|e| e.number.as_str())
            .unwrap_or("")
    }

    /// Case-insensitive search used by the registration form pickers
    pub fn search_contractors(&self, query: &str) -> Vec<&Contractor> {
        let needle = query.to_lowercase();
        self.contractors
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn search_estimates(&self, query: &str) -> Vec<&Estimate> {
        let needle = query.to_lowercase();
        self.estimates
            .iter()
            .filter(|e| {
                e.number.to_lowercase().contains(&needle)
                    || e.project_name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
