//! Mock worklist shown on the staff dashboard.

use crate::models::{AssignedComplaint, AssignmentStatus, Priority, StaffStats};

pub const ASSIGNED_COMPLAINTS: &[AssignedComplaint] = &[
    AssignedComplaint {
        id: "ELE-123456",
        title: "Street light not working",
        citizen: "Rajesh Kumar",
        priority: Priority::Medium,
        status: AssignmentStatus::Pending,
        assigned_at: "2024-01-20 10:30",
        location: "MG Road, Pune",
    },
    AssignedComplaint {
        id: "ELE-123457",
        title: "Power outage in residential area",
        citizen: "Priya Sharma",
        priority: Priority::High,
        status: AssignmentStatus::InProgress,
        assigned_at: "2024-01-20 09:15",
        location: "Koregaon Park, Pune",
    },
    AssignedComplaint {
        id: "ELE-123458",
        title: "Damaged electrical pole",
        citizen: "Amit Patel",
        priority: Priority::High,
        status: AssignmentStatus::Pending,
        assigned_at: "2024-01-20 08:45",
        location: "FC Road, Pune",
    },
];

const TOTAL_ASSIGNED: u32 = 15;
const RESOLVED_TODAY: u32 = 3;

/// Display name and department of every staff login.
pub const MOCK_STAFF_NAME: &str = "Staff Member";
pub const MOCK_STAFF_DEPARTMENT: &str = "Electricity";

pub fn staff_stats() -> StaffStats {
    let count = |status: AssignmentStatus| {
        ASSIGNED_COMPLAINTS
            .iter()
            .filter(|complaint| complaint.status == status)
            .count() as u32
    };

    StaffStats {
        total_assigned: TOTAL_ASSIGNED,
        pending: count(AssignmentStatus::Pending),
        in_progress: count(AssignmentStatus::InProgress),
        resolved_today: RESOLVED_TODAY,
    }
}
