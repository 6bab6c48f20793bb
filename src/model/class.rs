use strum::IntoEnumIterator;

/// The fixed set of CTF classes (kits), in leaderboard order.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum CtfClass {
    Archer,
    Assassin,
    Chemist,
    Dwarf,
    Elf,
    Engineer,
    Fashionista,
    Heavy,
    Mage,
    Medic,
    Pyro,
    Ninja,
    Scout,
    Soldier,
    Necro,
}

impl CtfClass {
    /// All classes in their fixed order.
    pub fn all() -> impl Iterator<Item = CtfClass> {
        CtfClass::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Value of the `kit_type` column in competitive exports, e.g. `ARCHER`.
    pub fn kit_type(self) -> String {
        self.name().to_uppercase()
    }

    /// Id of this class's stat block on a profile page, e.g. `ctf-archer`.
    pub fn element_id(self) -> String {
        format!("ctf-{}", self.name().to_lowercase())
    }
}
