use std::fmt;

/// Observation window, in weeks. Every series in the run has this length.
pub const WEEK_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptionCategory {
    Adopted,
    Performative,
    Burnout,
    Dormant,
}

impl fmt::Display for AdoptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdoptionCategory::Adopted => "adopted",
            AdoptionCategory::Performative => "performative",
            AdoptionCategory::Burnout => "burnout",
            AdoptionCategory::Dormant => "dormant",
        })
    }
}

/// Tracked fashion/beauty trends and their adoption profile. Fixed at
/// process start; each trend appears exactly once.
pub const TREND_CATALOG: [(&str, AdoptionCategory); 10] = [
    ("coquette", AdoptionCategory::Performative),
    ("mobwife", AdoptionCategory::Burnout),
    ("balletcore", AdoptionCategory::Performative),
    ("cleanlook", AdoptionCategory::Adopted),
    ("oversizedblazer", AdoptionCategory::Adopted),
    ("sneakers", AdoptionCategory::Adopted),
    ("skincare", AdoptionCategory::Adopted),
    ("hairtutorial", AdoptionCategory::Performative),
    ("minimalistmakeup", AdoptionCategory::Dormant),
    ("neutralpalette", AdoptionCategory::Dormant),
];

pub fn trends() -> impl Iterator<Item = &'static str> {
    TREND_CATALOG.iter().map(|(trend, _)| *trend)
}
