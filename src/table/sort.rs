/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Which column the table is sorted by, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortDirective {
    pub field: Option<&'static str>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(field: &'static str, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Header click: same field flips direction, a new field starts ascending.
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }

    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        match self.field {
            Some(f) if f == field => Some(self.direction),
            _ => None,
        }
    }

    /// Header indicator for a sortable column.
    pub fn glyph_for(&self, field: &str) -> &'static str {
        match self.direction_for(field) {
            None => "↕",
            Some(SortDirection::Asc) => "▲",
            Some(SortDirection::Desc) => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unsorted() {
        let sort = SortDirective::unsorted();
        assert_eq!(sort.field, None);
        assert_eq!(sort.glyph_for("name"), "↕");
    }

    #[test]
    fn toggle_cycles_on_same_column() {
        let mut sort = SortDirective::unsorted();
        sort.toggle("name");
        assert_eq!(sort, SortDirective::by("name", SortDirection::Asc));
        sort.toggle("name");
        assert_eq!(sort, SortDirective::by("name", SortDirection::Desc));
        sort.toggle("name");
        assert_eq!(sort, SortDirective::by("name", SortDirection::Asc));
    }

    #[test]
    fn toggle_other_column_resets_to_ascending() {
        let mut sort = SortDirective::by("name", SortDirection::Desc);
        sort.toggle("age");
        assert_eq!(sort, SortDirective::by("age", SortDirection::Asc));
    }

    #[test]
    fn glyphs_follow_state() {
        let sort = SortDirective::by("age", SortDirection::Desc);
        assert_eq!(sort.glyph_for("age"), "▼");
        assert_eq!(sort.glyph_for("name"), "↕");
        let sort = SortDirective::by("age", SortDirection::Asc);
        assert_eq!(sort.glyph_for("age"), "▲");
    }
}
