use crate::model::{UpgradeEffect, UpgradeKind};

pub struct UpgradeDef {
    pub kind: UpgradeKind,
    pub cost: i64,
    pub effect: UpgradeEffect,
}

pub const UPGRADES: &[UpgradeDef] = &[
    UpgradeDef {
        kind: UpgradeKind::Renovation,
        cost: 10_000,
        effect: UpgradeEffect {
            reputation_bonus: 10,
            capacity_bonus: 0,
            efficiency_bonus: 0.0,
            revenue_multiplier: 1.2,
        },
    },
    UpgradeDef {
        kind: UpgradeKind::Expansion,
        cost: 25_000,
        effect: UpgradeEffect {
            reputation_bonus: 0,
            capacity_bonus: 50,
            efficiency_bonus: 0.0,
            revenue_multiplier: 1.5,
        },
    },
    UpgradeDef {
        kind: UpgradeKind::Technology,
        cost: 15_000,
        effect: UpgradeEffect {
            reputation_bonus: 0,
            capacity_bonus: 0,
            efficiency_bonus: 0.2,
            revenue_multiplier: 1.3,
        },
    },
];

pub fn upgrade_def(kind: UpgradeKind) -> &'static UpgradeDef {
    match kind {
        UpgradeKind::Renovation => &UPGRADES[0],
        UpgradeKind::Expansion => &UPGRADES[1],
        UpgradeKind::Technology => &UPGRADES[2],
    }
}
