use std::collections::BTreeMap;

use crate::modules::activities::core::activity::ActivityRecord;

/// The activities the directory starts with on every boot.
pub fn seed_activities() -> BTreeMap<String, ActivityRecord> {
    [
        (
            "Chess Club",
            ActivityRecord::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            ActivityRecord::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            ActivityRecord::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            ActivityRecord::new(
                "Competitive basketball team for all skill levels",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            ),
        ),
        (
            "Tennis Club",
            ActivityRecord::new(
                "Learn tennis skills and compete in local matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
            ),
        ),
        (
            "Drama Club",
            ActivityRecord::new(
                "Act, direct, and produce school theater performances",
                "Wednesdays, 3:30 PM - 5:30 PM",
                25,
            ),
        ),
        (
            "Art Studio",
            ActivityRecord::new(
                "Explore painting, drawing, and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            ),
        ),
        (
            "Robotics Club",
            ActivityRecord::new(
                "Design, build, and program robots for competitions",
                "Fridays, 3:30 PM - 5:30 PM",
                16,
            ),
        ),
        (
            "Math Olympiad",
            ActivityRecord::new(
                "Prepare for math competitions and solve challenging problems",
                "Mondays, 3:30 PM - 4:30 PM",
                12,
            ),
        ),
    ]
    .into_iter()
    .map(|(name, record)| (name.to_string(), record))
    .collect()
}
