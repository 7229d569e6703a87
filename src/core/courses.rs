use crate::domain::model::{Course, Field};

/// Course chosen for each ordered (major, minor) pair. The mapping is not
/// derivable from the elective lists, so every pair is spelled out.
pub const MINOR_COURSE_PAIRINGS: [((Field, Field), Course); 6] = [
    (
        (Field::ArtificialIntelligence, Field::InformationSystems),
        Course::DecisionSupportSystems,
    ),
    (
        (Field::NetworkComputing, Field::InformationSystems),
        Course::Cryptography,
    ),
    (
        (Field::ArtificialIntelligence, Field::NetworkComputing),
        Course::NetworkSecurity,
    ),
    (
        (Field::NetworkComputing, Field::ArtificialIntelligence),
        Course::Robotics,
    ),
    (
        (Field::InformationSystems, Field::ArtificialIntelligence),
        Course::GraphicsComputing,
    ),
    (
        (Field::InformationSystems, Field::NetworkComputing),
        Course::DistributedSystems,
    ),
];

/// Electives associated with each field, in listing order.
pub fn electives(field: Field) -> [Course; 2] {
    match field {
        Field::ArtificialIntelligence => [Course::GraphicsComputing, Course::Robotics],
        Field::InformationSystems => [Course::DecisionSupportSystems, Course::Cryptography],
        Field::NetworkComputing => [Course::NetworkSecurity, Course::DistributedSystems],
    }
}

pub fn minor_course(major: Field, minor: Field) -> Course {
    if let Some((_, course)) = MINOR_COURSE_PAIRINGS
        .iter()
        .find(|(pair, _)| *pair == (major, minor))
    {
        return *course;
    }

    tracing::warn!(
        "⚠️ Major and minor are both {}; falling back to its first elective",
        minor
    );
    electives(minor)[0]
}
