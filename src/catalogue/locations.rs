//! State and district lookup table.

use crate::models::LocationOption;

pub struct StateEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub districts: &'static [DistrictEntry],
}

pub struct DistrictEntry {
    pub id: &'static str,
    pub name: &'static str,
}

const fn district(id: &'static str, name: &'static str) -> DistrictEntry {
    DistrictEntry { id, name }
}

pub const STATES: &[StateEntry] = &[
    StateEntry {
        id: "MH",
        name: "Maharashtra",
        districts: &[
            district("MU", "Mumbai"),
            district("PU", "Pune"),
            district("NG", "Nagpur"),
            district("TH", "Thane"),
            district("AU", "Aurangabad"),
        ],
    },
    StateEntry {
        id: "TN",
        name: "Tamil Nadu",
        districts: &[
            district("CH", "Chennai"),
            district("CO", "Coimbatore"),
            district("MD", "Madurai"),
            district("TR", "Tiruchirappalli"),
            district("SL", "Salem"),
        ],
    },
    StateEntry {
        id: "KA",
        name: "Karnataka",
        districts: &[
            district("BG", "Bengaluru"),
            district("MY", "Mysuru"),
            district("MN", "Mangaluru"),
        ],
    },
    StateEntry {
        id: "TG",
        name: "Telangana",
        districts: &[
            district("HY", "Hyderabad"),
            district("WG", "Warangal"),
            district("NZ", "Nizamabad"),
        ],
    },
    StateEntry {
        id: "WB",
        name: "West Bengal",
        districts: &[
            district("KO", "Kolkata"),
            district("DA", "Darjeeling"),
            district("DU", "Durgapur"),
        ],
    },
];

pub fn find_state(id: &str) -> Option<&'static StateEntry> {
    STATES.iter().find(|state| state.id == id)
}

pub fn find_district(state_id: &str, district_id: &str) -> Option<&'static DistrictEntry> {
    find_state(state_id)?
        .districts
        .iter()
        .find(|district| district.id == district_id)
}

pub fn state_options() -> Vec<LocationOption> {
    STATES
        .iter()
        .map(|state| LocationOption {
            id: state.id,
            name: state.name,
        })
        .collect()
}

/// Districts of a state; empty when the state is unknown.
pub fn district_options(state_id: &str) -> Vec<LocationOption> {
    find_state(state_id)
        .map(|state| {
            state
                .districts
                .iter()
                .map(|district| LocationOption {
                    id: district.id,
                    name: district.name,
                })
                .collect()
        })
        .unwrap_or_default()
}
