pub const OPEN: i32 = 0;
pub const WALL: i32 = 1;
pub const GOAL: i32 = 3;
pub const PERCEPTION_BOOST: i32 = 4;
pub const SPEED_BOOST: i32 = 5;
pub const FOG: i32 = 6;
pub const SLOW_POTION: i32 = 7;

/// Parameter change triggered by stepping onto a special cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Goggles: perception radius grows by one.
    PerceptionBoost,
    /// Speed potion: step width grows by one, capped.
    SpeedBoost,
    /// Fog: perception radius shrinks by one, floored.
    Fog,
    /// Slowpoke potion: step width shrinks by one, floored.
    SlowPotion,
}

/// Classification of a raw cell code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Open,
    Wall,
    Goal,
    Effect(Effect),
    Unknown(i32),
}

impl CellKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            OPEN => CellKind::Open,
            WALL => CellKind::Wall,
            GOAL => CellKind::Goal,
            PERCEPTION_BOOST => CellKind::Effect(Effect::PerceptionBoost),
            SPEED_BOOST => CellKind::Effect(Effect::SpeedBoost),
            FOG => CellKind::Effect(Effect::Fog),
            SLOW_POTION => CellKind::Effect(Effect::SlowPotion),
            other => CellKind::Unknown(other),
        }
    }

    pub fn is_goal(self) -> bool {
        self == CellKind::Goal
    }
}

/// Which cell kinds the agent may step onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidityRule {
    /// Only cells with the open code are enterable. Goal and effect cells
    /// are rejected unless the agent starts on them.
    #[default]
    OpenOnly,
    /// Open, goal and effect cells are enterable. Walls and unrecognised
    /// codes are not.
    Passable,
}

impl ValidityRule {
    pub fn allows(self, kind: CellKind) -> bool {
        match self {
            ValidityRule::OpenOnly => kind == CellKind::Open,
            ValidityRule::Passable => matches!(
                kind,
                CellKind::Open | CellKind::Goal | CellKind::Effect(_)
            ),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" | "open-only" | "literal" => Some(ValidityRule::OpenOnly),
            "passable" | "not-wall" => Some(ValidityRule::Passable),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_covers_special_cells() {
        assert_eq!(CellKind::from_code(0), CellKind::Open);
        assert_eq!(CellKind::from_code(1), CellKind::Wall);
        assert_eq!(CellKind::from_code(3), CellKind::Goal);
        assert_eq!(CellKind::from_code(4), CellKind::Effect(Effect::PerceptionBoost));
        assert_eq!(CellKind::from_code(5), CellKind::Effect(Effect::SpeedBoost));
        assert_eq!(CellKind::from_code(6), CellKind::Effect(Effect::Fog));
        assert_eq!(CellKind::from_code(7), CellKind::Effect(Effect::SlowPotion));
        assert_eq!(CellKind::from_code(2), CellKind::Unknown(2));
        assert_eq!(CellKind::from_code(-1), CellKind::Unknown(-1));
    }

    #[test]
    fn test_open_only_rejects_special_cells() {
        let rule = ValidityRule::OpenOnly;
        assert!(rule.allows(CellKind::Open));
        assert!(!rule.allows(CellKind::Wall));
        assert!(!rule.allows(CellKind::Goal));
        assert!(!rule.allows(CellKind::Effect(Effect::Fog)));
        assert!(!rule.allows(CellKind::Unknown(9)));
    }

    #[test]
    fn test_passable_admits_goal_and_effects() {
        let rule = ValidityRule::Passable;
        assert!(rule.allows(CellKind::Open));
        assert!(rule.allows(CellKind::Goal));
        assert!(rule.allows(CellKind::Effect(Effect::SpeedBoost)));
        assert!(!rule.allows(CellKind::Wall));
        assert!(!rule.allows(CellKind::Unknown(2)));
    }

    #[test]
    fn test_parse_rule() {
        assert_eq!(ValidityRule::parse("open"), Some(ValidityRule::OpenOnly));
        assert_eq!(ValidityRule::parse(" Passable "), Some(ValidityRule::Passable));
        assert_eq!(ValidityRule::parse("diagonal"), None);
        assert_eq!(ValidityRule::default(), ValidityRule::OpenOnly);
    }
}
