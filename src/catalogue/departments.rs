//! Department catalogue.

use crate::i18n::{MessageKey, Translator};
use crate::models::Department;

struct DepartmentEntry {
    id: &'static str,
    name: MessageKey,
    description: MessageKey,
    icon: &'static str,
    color: &'static str,
    pending_count: u32,
}

const DEPARTMENTS: [DepartmentEntry; 5] = [
    DepartmentEntry {
        id: "electricity",
        name: MessageKey::DepartmentsElectricity,
        description: MessageKey::DepartmentsElectricityDesc,
        icon: "bolt",
        color: "accent",
        pending_count: 12,
    },
    DepartmentEntry {
        id: "water_supply",
        name: MessageKey::DepartmentsWaterSupply,
        description: MessageKey::DepartmentsWaterSupplyDesc,
        icon: "droplet",
        color: "info",
        pending_count: 8,
    },
    DepartmentEntry {
        id: "roads_transport",
        name: MessageKey::DepartmentsRoadsTransport,
        description: MessageKey::DepartmentsRoadsTransportDesc,
        icon: "road",
        color: "secondary",
        pending_count: 15,
    },
    DepartmentEntry {
        id: "health_sanitation",
        name: MessageKey::DepartmentsHealthSanitation,
        description: MessageKey::DepartmentsHealthSanitationDesc,
        icon: "building-hospital",
        color: "primary",
        pending_count: 6,
    },
    DepartmentEntry {
        id: "sewage_drainage",
        name: MessageKey::DepartmentsSewageDrainage,
        description: MessageKey::DepartmentsSewageDrainageDesc,
        icon: "droplet-heart",
        color: "warning",
        pending_count: 4,
    },
];

impl DepartmentEntry {
    fn localize(&self, t: &Translator) -> Department {
        Department {
            id: self.id,
            name: t.t(self.name),
            description: t.t(self.description),
            icon: self.icon,
            color: self.color,
            pending_count: Some(self.pending_count),
        }
    }
}

/// All departments with names in the translator's locale.
pub fn departments(t: &Translator) -> Vec<Department> {
    DEPARTMENTS.iter().map(|entry| entry.localize(t)).collect()
}

/// Resolve a department id, `None` if it is not in the catalogue.
pub fn find_department(id: &str, t: &Translator) -> Option<Department> {
    DEPARTMENTS
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.localize(t))
}
