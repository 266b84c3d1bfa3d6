//! Plant domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::pagination::PageInfo;

use super::reading::LastConditions;
use super::watering::WateringHistoryEntry;

/// A plant owned by a user and monitored through a pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub user_id: i64,
    pub pot_id: i64,
    pub species_id: Option<i64>,
    pub name: String,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub planted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Values for a plant about to be created.
#[derive(Debug, Clone)]
pub struct NewPlant {
    pub user_id: i64,
    pub pot_id: i64,
    pub species_id: Option<i64>,
    pub name: String,
    pub image_url: Option<String>,
}

/// Plant as listed to its owner, with its latest conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantSummary {
    pub id: i64,
    pub name: String,
    pub species_id: Option<i64>,
    pub pot_id: i64,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub planted_at: Option<DateTime<Utc>>,
    pub last_conditions: LastConditions,
}

impl PlantSummary {
    pub fn new(plant: Plant, last_conditions: LastConditions) -> Self {
        Self {
            id: plant.id,
            name: plant.name,
            species_id: plant.species_id,
            pot_id: plant.pot_id,
            image_url: plant.image_url,
            notes: plant.notes,
            planted_at: plant.planted_at,
            last_conditions,
        }
    }
}

/// Plant detail with one page of watering history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantDetailResponse {
    #[serde(flatten)]
    pub plant: PlantSummary,
    pub watering_history: Vec<WateringHistoryEntry>,
    pub pagination: PageInfo,
}

/// Query parameters for the plant detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantDetailQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Form fields for registering a plant in a pot.
#[derive(Debug, Clone, Default)]
pub struct CreatePotPlantForm {
    pub name: Option<String>,
    pub species_name: Option<String>,
    pub pot_label: Option<String>,
}

impl CreatePotPlantForm {
    /// Returns `(name, species_name, pot_label)` when all are present and non-blank.
    pub fn required(&self) -> Option<(&str, &str, &str)> {
        fn non_blank(v: &Option<String>) -> Option<&str> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        Some((
            non_blank(&self.name)?,
            non_blank(&self.species_name)?,
            non_blank(&self.pot_label)?,
        ))
    }
}

/// Payload of a successful pot + plant registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePotPlantData {
    pub pot_id: i64,
    pub pot_created: bool,
    pub pot_label: String,
    pub plant_id: i64,
    pub plant_name: String,
    pub species_name: String,
    pub image_url: String,
}

/// Response envelope for a pot + plant registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePotPlantResponse {
    pub success: bool,
    pub message: String,
    pub data: CreatePotPlantData,
}

/// Partial update of a plant's editable fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlantRequest {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub planted_at: Option<DateTime<Utc>>,
}

/// Checked field changes for a plant. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantChanges {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub planted_at: Option<DateTime<Utc>>,
}

/// Longest accepted plant name.
pub const MAX_PLANT_NAME_LEN: usize = 100;

impl UpdatePlantRequest {
    /// Trims the name and rejects blank or overlong names.
    pub fn changes(self) -> Result<PlantChanges, &'static str> {
        let name = match self.name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err("name cannot be empty");
                }
                if name.chars().count() > MAX_PLANT_NAME_LEN {
                    return Err("name must be at most 100 characters");
                }
                Some(name.to_string())
            }
            None => None,
        };

        Ok(PlantChanges {
            name,
            notes: self.notes,
            planted_at: self.planted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::pagination::PageRequest;

    fn plant() -> Plant {
        Plant {
            id: 9,
            user_id: 1,
            pot_id: 4,
            species_id: Some(2),
            name: "Geranio del balcón".into(),
            image_url: Some("/plant_images/1700000000_geranio.jpg".into()),
            notes: None,
            planted_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_detail_response_is_flat() {
        let detail = PlantDetailResponse {
            plant: PlantSummary::new(plant(), LastConditions::default()),
            watering_history: vec![],
            pagination: PageInfo::new(PageRequest::default(), 0),
        };
        let json = serde_json::to_value(detail).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["pot_id"], 4);
        assert!(json["last_conditions"]["moisture_percent"].is_null());
        assert_eq!(json["pagination"]["pages"], 0);
        assert!(json.get("plant").is_none());
    }

    #[test]
    fn test_create_form_requires_all_fields() {
        let mut form = CreatePotPlantForm {
            name: Some("Menta".into()),
            species_name: Some("menta".into()),
            pot_label: Some("ESP32-001".into()),
        };
        assert_eq!(form.required(), Some(("Menta", "menta", "ESP32-001")));

        form.pot_label = Some("   ".into());
        assert_eq!(form.required(), None);

        form.pot_label = None;
        assert_eq!(form.required(), None);
    }

    #[test]
    fn test_update_request_trims_name() {
        let request: UpdatePlantRequest =
            serde_json::from_str(r#"{"name": "  Menta cocina ", "notes": "Riego los lunes"}"#)
                .unwrap();
        let changes = request.changes().unwrap();

        assert_eq!(changes.name.as_deref(), Some("Menta cocina"));
        assert_eq!(changes.notes.as_deref(), Some("Riego los lunes"));
        assert_eq!(changes.planted_at, None);
    }

    #[test]
    fn test_update_request_rejects_blank_name() {
        let request = UpdatePlantRequest {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(request.changes(), Err("name cannot be empty"));

        let request = UpdatePlantRequest {
            name: Some("x".repeat(101)),
            ..Default::default()
        };
        assert!(request.changes().is_err());
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let changes = UpdatePlantRequest::default().changes().unwrap();
        assert_eq!(changes, PlantChanges::default());
    }
}
