use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the chart a field drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// The six numeric columns that can drive an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Poverty,
    Income,
    Age,
    Healthcare,
    Obesity,
    Smokes,
}

impl Field {
    pub const X_FIELDS: [Field; 3] = [Field::Poverty, Field::Income, Field::Age];
    pub const Y_FIELDS: [Field; 3] = [Field::Healthcare, Field::Obesity, Field::Smokes];

    pub fn axis(self) -> Axis {
        match self {
            Field::Poverty | Field::Income | Field::Age => Axis::X,
            Field::Healthcare | Field::Obesity | Field::Smokes => Axis::Y,
        }
    }

    /// Candidate fields for an axis, in label order.
    pub fn for_axis(axis: Axis) -> &'static [Field; 3] {
        match axis {
            Axis::X => &Self::X_FIELDS,
            Axis::Y => &Self::Y_FIELDS,
        }
    }

    /// Column name in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            Field::Poverty => "poverty",
            Field::Income => "income",
            Field::Age => "age",
            Field::Healthcare => "healthcare",
            Field::Obesity => "obesity",
            Field::Smokes => "smokes",
        }
    }

    /// Human readable label shown on the axis and in tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Field::Poverty => "In Poverty (%)",
            Field::Income => "Household Income (Median $)",
            Field::Age => "Age (Median)",
            Field::Healthcare => "Lacks Healthcare (%)",
            Field::Obesity => "Obesity (%)",
            Field::Smokes => "Smokes (%)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// The currently chosen X and Y fields.
///
/// Both fields always sit on their own axis; the constructor and
/// [`AxisSelection::select`] refuse anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct AxisSelection {
    x: Field,
    y: Field,
}

impl AxisSelection {
    pub fn new(x: Field, y: Field) -> Option<Self> {
        (x.axis() == Axis::X && y.axis() == Axis::Y).then_some(Self { x, y })
    }

    pub fn x(&self) -> Field {
        self.x
    }

    pub fn y(&self) -> Field {
        self.y
    }

    pub fn get(&self, axis: Axis) -> Field {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Makes `field` the active field of its axis.
    /// Returns `false` if it was already active.
    pub fn select(&mut self, field: Field) -> bool {
        let slot = match field.axis() {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        if *slot == field {
            return false;
        }
        *slot = field;
        true
    }
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            x: Field::Poverty,
            y: Field::Healthcare,
        }
    }
}

#[derive(Deserialize)]
struct RawSelection {
    x: Field,
    y: Field,
}

impl TryFrom<RawSelection> for AxisSelection {
    type Error = String;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        AxisSelection::new(raw.x, raw.y)
            .ok_or_else(|| format!("`{}` / `{}` is not an x / y field pair", raw.x, raw.y))
    }
}
