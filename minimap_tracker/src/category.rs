//! Display categories for tracked entities
//!
//! `Category` is the closed set of classifications an icon can carry.
//! `CategorySet` is a bitmask over that set, used by configuration sources
//! to enable or disable whole categories at once.

use bitflags::bitflags;

/// Closed set of display classifications for minimap icons.
///
/// Resolved once per tracked entity by the sorter chain and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Chest,
    LunarPod,
    Shrine,
    Utility,
    Teleporter,
    Drone,
    Barrel,
    Printer,
    Shop,
    Equipment,
    Portal,
    Totem,
    Special,
    Item,
    EnemyMonster,
    EnemyLunar,
    EnemyVoid,
    Minion,
    Player,
    Neutral,
}

impl Category {
    /// Every category, in declaration order.
    ///
    /// Configuration sources iterate this to bind per-category settings.
    pub const ALL: [Category; 20] = [
        Category::Chest,
        Category::LunarPod,
        Category::Shrine,
        Category::Utility,
        Category::Teleporter,
        Category::Drone,
        Category::Barrel,
        Category::Printer,
        Category::Shop,
        Category::Equipment,
        Category::Portal,
        Category::Totem,
        Category::Special,
        Category::Item,
        Category::EnemyMonster,
        Category::EnemyLunar,
        Category::EnemyVoid,
        Category::Minion,
        Category::Player,
        Category::Neutral,
    ];

    /// Human-readable name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::LunarPod => "LunarPod",
            Category::Shrine => "Shrine",
            Category::Utility => "Utility",
            Category::Teleporter => "Teleporter",
            Category::Drone => "Drone",
            Category::Barrel => "Barrel",
            Category::Printer => "Printer",
            Category::Shop => "Shop",
            Category::Equipment => "Equipment",
            Category::Portal => "Portal",
            Category::Totem => "Totem",
            Category::Special => "Special",
            Category::Item => "Item",
            Category::EnemyMonster => "EnemyMonster",
            Category::EnemyLunar => "EnemyLunar",
            Category::EnemyVoid => "EnemyVoid",
            Category::Minion => "Minion",
            Category::Player => "Player",
            Category::Neutral => "Neutral",
        }
    }
}

bitflags! {
    /// Bitmask over categories.
    ///
    /// One bit per `Category` variant, in the same order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategorySet: u32 {
        const CHEST         = 1 << 0;
        const LUNAR_POD     = 1 << 1;
        const SHRINE        = 1 << 2;
        const UTILITY       = 1 << 3;
        const TELEPORTER    = 1 << 4;
        const DRONE         = 1 << 5;
        const BARREL        = 1 << 6;
        const PRINTER       = 1 << 7;
        const SHOP          = 1 << 8;
        const EQUIPMENT     = 1 << 9;
        const PORTAL        = 1 << 10;
        const TOTEM         = 1 << 11;
        const SPECIAL       = 1 << 12;
        const ITEM          = 1 << 13;
        const ENEMY_MONSTER = 1 << 14;
        const ENEMY_LUNAR   = 1 << 15;
        const ENEMY_VOID    = 1 << 16;
        const MINION        = 1 << 17;
        const PLAYER        = 1 << 18;
        const NEUTRAL       = 1 << 19;
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        match category {
            Category::Chest => CategorySet::CHEST,
            Category::LunarPod => CategorySet::LUNAR_POD,
            Category::Shrine => CategorySet::SHRINE,
            Category::Utility => CategorySet::UTILITY,
            Category::Teleporter => CategorySet::TELEPORTER,
            Category::Drone => CategorySet::DRONE,
            Category::Barrel => CategorySet::BARREL,
            Category::Printer => CategorySet::PRINTER,
            Category::Shop => CategorySet::SHOP,
            Category::Equipment => CategorySet::EQUIPMENT,
            Category::Portal => CategorySet::PORTAL,
            Category::Totem => CategorySet::TOTEM,
            Category::Special => CategorySet::SPECIAL,
            Category::Item => CategorySet::ITEM,
            Category::EnemyMonster => CategorySet::ENEMY_MONSTER,
            Category::EnemyLunar => CategorySet::ENEMY_LUNAR,
            Category::EnemyVoid => CategorySet::ENEMY_VOID,
            Category::Minion => CategorySet::MINION,
            Category::Player => CategorySet::PLAYER,
            Category::Neutral => CategorySet::NEUTRAL,
        }
    }
}

impl CategorySet {
    /// Test whether a single category's bit is set.
    pub fn contains_category(&self, category: Category) -> bool {
        self.contains(CategorySet::from(category))
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
