use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub entries: i64,
    pub initial_capacity: i64,
}

const fn scenario(entries: i64, initial_capacity: i64) -> Scenario {
    Scenario {
        entries,
        initial_capacity,
    }
}

// Hints below, equal to, and above the entry count: growth vs pre-sized allocation.
pub const SCENARIOS: [Scenario; 8] = [
    scenario(7, 0),
    scenario(8, 0),
    scenario(9, 0),
    scenario(16, 16),
    scenario(16, 32),
    scenario(16, 100),
    scenario(100, 0),
    scenario(100, 128),
];

impl Scenario {
    pub fn parse(entries: &str, initial_capacity: &str) -> Result<Scenario, String> {
        let Ok(entries) = entries.parse::<i64>() else {
            return Err(format!("Invalid entry count: {entries}"));
        };
        let Ok(initial_capacity) = initial_capacity.parse::<i64>() else {
            return Err(format!("Invalid initial capacity: {initial_capacity}"));
        };
        Ok(Scenario {
            entries,
            initial_capacity,
        })
    }

    /// Parses the `<entries> <capacity>` argument pair. No arguments selects the whole table.
    pub fn from_args(args: &[String]) -> Result<Vec<Scenario>, String> {
        match args {
            [] => Ok(SCENARIOS.to_vec()),
            [entries, capacity] => Ok(vec![Scenario::parse(entries, capacity)?]),
            _ => Err(format!(
                "Expected <entries> <capacity>, got {} arguments",
                args.len()
            )),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entries: {:3}, InitialCapacity: {:3}",
            self.entries, self.initial_capacity
        )
    }
}
