use std::fmt;

/// The decision procedures a player can follow to pick the final door.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Strategy {
    /// Open a random door and keep it.
    Direct = 0,
    /// After a goat is shown, pick again among every door but the shown one.
    SwitchRandom = 1,
    /// After a goat is shown, pick among the doors that are neither shown nor first chosen.
    SwitchOther = 2,
}

impl Strategy {
    /// Number of strategies.
    pub const COUNT: usize = 3;

    /// Every strategy, in the order a trial plays them.
    pub const ALL: [Strategy; Strategy::COUNT] = [
        Strategy::Direct,
        Strategy::SwitchRandom,
        Strategy::SwitchOther,
    ];

    /// Position of the strategy in [`Strategy::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable upper-case name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Direct => "OPEN_DIRECTLY",
            Strategy::SwitchRandom => "OPEN_AFTER_SHOWING_A_GOAT",
            Strategy::SwitchOther => "OPEN_THE_OTHER_DOOR_AFTER_SHOWING_A_GOAT",
        }
    }

    /// Human readable description of how the final door is chosen.
    pub const fn description(self) -> &'static str {
        match self {
            Strategy::Direct => "Open a random door directly",
            Strategy::SwitchRandom => {
                "Choose a door, a goat is shown behind another door, \
                 then choose a random door among all doors except the shown one"
            }
            Strategy::SwitchOther => {
                "Choose a door, a goat is shown behind another door, \
                 then choose a door that is neither the shown one nor the first choice"
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::strategy::Strategy;

    #[test]
    fn indexes_follow_play_order() {
        for (position, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), position);
        }
    }

    #[test]
    fn displays_report_name() {
        assert_eq!(Strategy::SwitchOther.to_string(), "OPEN_THE_OTHER_DOOR_AFTER_SHOWING_A_GOAT");
    }
}
