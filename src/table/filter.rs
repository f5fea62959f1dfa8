use std::collections::HashSet;

use super::TableError;

/// Sentinel value meaning "do not filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    All,
    Value(String),
}

impl FilterValue {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Value(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL,
            FilterValue::Value(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

type Predicate<T> = Box<dyn Fn(&T, &str) -> bool>;

/// A categorical filter shown as a dropdown in the table toolbar.
///
/// The table applies the predicate itself; callers only learn about value
/// changes through `Action::FilterChanged`.
pub struct FilterDescriptor<T> {
    pub key: &'static str,
    pub label: String,
    options: Vec<FilterOption>,
    current: FilterValue,
    predicate: Predicate<T>,
}

impl<T> FilterDescriptor<T> {
    pub fn new(
        key: &'static str,
        label: impl Into<String>,
        options: Vec<FilterOption>,
        predicate: impl Fn(&T, &str) -> bool + 'static,
    ) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for opt in &options {
            if opt.value == ALL {
                return Err(TableError::ReservedFilterValue {
                    filter: key.to_string(),
                    value: opt.value.clone(),
                });
            }
            if !seen.insert(opt.value.as_str()) {
                return Err(TableError::DuplicateFilterOption {
                    filter: key.to_string(),
                    value: opt.value.clone(),
                });
            }
        }

        Ok(Self {
            key,
            label: label.into(),
            options,
            current: FilterValue::All,
            predicate: Box::new(predicate),
        })
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn current(&self) -> &FilterValue {
        &self.current
    }

    /// Label of the current selection ("All" for the sentinel).
    pub fn current_label(&self) -> &str {
        match &self.current {
            FilterValue::All => "All",
            FilterValue::Value(v) => self
                .options
                .iter()
                .find(|o| &o.value == v)
                .map_or(v.as_str(), |o| o.label.as_str()),
        }
    }

    /// Select a value by its string form. Returns whether the selection changed.
    pub fn set_value(&mut self, value: &str) -> Result<bool, TableError> {
        let next = FilterValue::parse(value);
        if let FilterValue::Value(v) = &next {
            if !self.options.iter().any(|o| &o.value == v) {
                return Err(TableError::UnknownFilterValue {
                    filter: self.key.to_string(),
                    value: v.clone(),
                });
            }
        }
        let changed = next != self.current;
        self.current = next;
        Ok(changed)
    }

    /// Advance the dropdown: all → first option → ... → last option → all.
    pub fn cycle(&mut self) -> &FilterValue {
        let next_idx = match &self.current {
            FilterValue::All => 0,
            FilterValue::Value(v) => self
                .options
                .iter()
                .position(|o| &o.value == v)
                .map_or(self.options.len(), |i| i + 1),
        };
        self.current = match self.options.get(next_idx) {
            Some(opt) => FilterValue::Value(opt.value.clone()),
            None => FilterValue::All,
        };
        &self.current
    }

    pub fn is_active(&self) -> bool {
        self.current != FilterValue::All
    }

    pub fn accepts(&self, item: &T) -> bool {
        match &self.current {
            FilterValue::All => true,
            FilterValue::Value(v) => (self.predicate)(item, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_filter() -> FilterDescriptor<&'static str> {
        FilterDescriptor::new(
            "status",
            "Status",
            vec![
                FilterOption::new("Paid", "paid"),
                FilterOption::new("Overdue", "overdue"),
            ],
            |item, value| *item == value,
        )
        .unwrap()
    }

    #[test]
    fn starts_at_all_and_accepts_everything() {
        let f = status_filter();
        assert_eq!(f.current(), &FilterValue::All);
        assert_eq!(f.current_label(), "All");
        assert!(f.accepts(&"paid"));
        assert!(f.accepts(&"draft"));
    }

    #[test]
    fn rejects_duplicate_option_values() {
        let err = FilterDescriptor::new(
            "status",
            "Status",
            vec![FilterOption::new("A", "x"), FilterOption::new("B", "x")],
            |_: &u8, _| true,
        )
        .err();
        assert_eq!(
            err,
            Some(TableError::DuplicateFilterOption {
                filter: "status".into(),
                value: "x".into()
            })
        );
    }

    #[test]
    fn rejects_reserved_sentinel_option() {
        let res = FilterDescriptor::new(
            "status",
            "Status",
            vec![FilterOption::new("Everything", ALL)],
            |_: &u8, _| true,
        );
        assert!(matches!(res, Err(TableError::ReservedFilterValue { .. })));
    }

    #[test]
    fn set_value_validates_and_reports_change() {
        let mut f = status_filter();
        assert_eq!(f.set_value("paid"), Ok(true));
        assert_eq!(f.set_value("paid"), Ok(false));
        assert_eq!(f.current_label(), "Paid");
        assert!(f.accepts(&"paid"));
        assert!(!f.accepts(&"overdue"));

        assert!(f.set_value("bogus").is_err());
        assert_eq!(f.current(), &FilterValue::Value("paid".into()));

        assert_eq!(f.set_value(ALL), Ok(true));
        assert!(!f.is_active());
    }

    #[test]
    fn cycle_wraps_through_all() {
        let mut f = status_filter();
        assert_eq!(f.cycle(), &FilterValue::Value("paid".into()));
        assert_eq!(f.cycle(), &FilterValue::Value("overdue".into()));
        assert_eq!(f.cycle(), &FilterValue::All);
    }
}
