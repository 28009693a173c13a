use super::axis::Field;
use std::ops::Index;

/// One row of the census dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub abbr: String,
    pub state: String,
    pub poverty: f64,
    pub income: f64,
    pub age: f64,
    pub healthcare: f64,
    pub obesity: f64,
    pub smokes: f64,
}

impl Record {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Poverty => self.poverty,
            Field::Income => self.income,
            Field::Age => self.age,
            Field::Healthcare => self.healthcare,
            Field::Obesity => self.obesity,
            Field::Smokes => self.smokes,
        }
    }
}

/// Ordered, load-once collection of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Min and max of `field`, skipping NaN. `None` when no finite value exists.
    pub fn extent(&self, field: Field) -> Option<(f64, f64)> {
        let (min, max) = self
            .records
            .iter()
            .map(|r| r.value(field))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        (min.is_finite() && max.is_finite()).then_some((min, max))
    }
}

impl Index<usize> for Dataset {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
