use serde::{Deserialize, Serialize};

/// One meat entry as kept in the store. `fat` is the fat content by weight
/// in percent, domain [0, 100]. Records without an `active` entry count as
/// active, so older store files keep working.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Meat {
    pub name: String,
    pub fat: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Meat {
    pub fn new(name: impl Into<String>, fat: f64) -> Self {
        Meat {
            name: name.into(),
            fat,
            active: true,
        }
    }
}

/// The meats that take part in a calculation, in list order. Inactive
/// entries are dropped here so the allocator never sees them.
pub fn active_meats(meats: &[Meat]) -> Vec<Meat> {
    meats.iter().filter(|m| m.active).cloned().collect()
}
