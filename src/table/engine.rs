use super::column::Column;
use super::filter::FilterDescriptor;
use super::sort::{SortDirection, SortDirective};
use super::Record;

/// Lowercased field strings for each record, built once per data set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    fields: Vec<Vec<String>>,
}

impl SearchIndex {
    pub fn build<T: Record>(records: &[T]) -> Self {
        let fields = records
            .iter()
            .map(|r| {
                r.search_fields()
                    .into_iter()
                    .map(|f| f.to_lowercase())
                    .collect()
            })
            .collect();
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `needle` must already be lowercase.
    pub fn matches(&self, row: usize, needle: &str) -> bool {
        self.fields
            .get(row)
            .is_some_and(|fields| fields.iter().any(|f| f.contains(needle)))
    }
}

/// Search and sort `records` without filters, building a throwaway index.
pub fn process<T: Record>(
    records: &[T],
    columns: &[Column<T>],
    search: &str,
    sort: &SortDirective,
) -> Vec<usize> {
    let index = SearchIndex::build(records);
    process_indexed(records, &index, columns, &[], search, sort)
}

/// Full pipeline: search, then filters, then a stable sort.
///
/// `index` must have been built from the same `records`.
pub fn process_indexed<T: Record>(
    records: &[T],
    index: &SearchIndex,
    columns: &[Column<T>],
    filters: &[FilterDescriptor<T>],
    search: &str,
    sort: &SortDirective,
) -> Vec<usize> {
    let needle = search.to_lowercase();
    let mut rows: Vec<usize> = (0..records.len())
        .filter(|&i| needle.is_empty() || index.matches(i, &needle))
        .filter(|&i| filters.iter().all(|f| f.accepts(&records[i])))
        .collect();

    let sort_column = sort
        .field
        .and_then(|field| columns.iter().find(|c| c.key == field))
        .filter(|c| c.is_sortable());

    if let Some(column) = sort_column {
        // sort_by is stable, and reversing the ordering keeps ties Equal,
        // so equal rows keep their filtered order in both directions.
        rows.sort_by(|&a, &b| {
            let ord = column
                .compare(&records[a], &records[b])
                .unwrap_or(std::cmp::Ordering::Equal);
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::filter::FilterOption;
    use serde::Serialize;

    #[derive(Debug, Clone, Serialize)]
    struct Person {
        id: u32,
        name: String,
        age: u32,
        company: String,
    }

    impl Record for Person {
        fn key(&self) -> String {
            self.id.to_string()
        }
    }

    fn person(id: u32, name: &str, age: u32) -> Person {
        Person {
            id,
            name: name.into(),
            age,
            company: String::new(),
        }
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("id", "ID", |p: &Person| p.id.to_string()).sort_by_key(|p| p.id),
            Column::new("name", "Name", |p: &Person| p.name.clone())
                .sort_by_key(|p| p.name.clone()),
            Column::new("age", "Age", |p: &Person| p.age.to_string()).sort_by_key(|p| p.age),
            Column::new("company", "Company", |p: &Person| p.company.clone()),
        ]
    }

    fn ids(records: &[Person], rows: &[usize]) -> Vec<u32> {
        rows.iter().map(|&i| records[i].id).collect()
    }

    #[test]
    fn empty_search_keeps_original_order() {
        let records = vec![person(3, "C", 1), person(1, "A", 2), person(2, "B", 3)];
        let rows = process(&records, &columns(), "", &SortDirective::unsorted());
        assert_eq!(ids(&records, &rows), vec![3, 1, 2]);
    }

    #[test]
    fn search_is_case_insensitive_substring_over_any_field() {
        let mut records = vec![person(1, "Bob", 30), person(2, "Eve", 22), person(3, "Zed", 41)];
        records[1].company = "Acme Supplies".into();

        for term in ["acme", "ACME", "cMe s"] {
            let rows = process(&records, &columns(), term, &SortDirective::unsorted());
            assert_eq!(ids(&records, &rows), vec![2], "term {term:?}");
        }
    }

    #[test]
    fn search_matches_numeric_fields_by_string_form() {
        let records = vec![person(1, "Bob", 30), person(2, "Eve", 22)];
        let rows = process(&records, &columns(), "22", &SortDirective::unsorted());
        assert_eq!(ids(&records, &rows), vec![2]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let records = vec![
            person(1, "X", 30),
            person(2, "Y", 20),
            person(3, "Z", 30),
            person(4, "W", 20),
        ];
        let asc = process(
            &records,
            &columns(),
            "",
            &SortDirective::by("age", SortDirection::Asc),
        );
        assert_eq!(ids(&records, &asc), vec![2, 4, 1, 3]);

        let desc = process(
            &records,
            &columns(),
            "",
            &SortDirective::by("age", SortDirection::Desc),
        );
        // Ties keep the pre-sort order, not the reversed one.
        assert_eq!(ids(&records, &desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn unsortable_or_unknown_field_leaves_order() {
        let records = vec![person(2, "B", 1), person(1, "A", 2)];
        let by_company = SortDirective::by("company", SortDirection::Asc);
        let by_missing = SortDirective::by("missing", SortDirection::Asc);
        assert_eq!(ids(&records, &process(&records, &columns(), "", &by_company)), vec![2, 1]);
        assert_eq!(ids(&records, &process(&records, &columns(), "", &by_missing)), vec![2, 1]);
    }

    #[test]
    fn pipeline_is_idempotent_and_pure() {
        let records = vec![person(1, "amy", 5), person(2, "Amy", 3), person(3, "Bo", 1)];
        let before: Vec<u32> = records.iter().map(|p| p.id).collect();
        let sort = SortDirective::by("age", SortDirection::Desc);
        let first = process(&records, &columns(), "AM", &sort);
        let second = process(&records, &columns(), "AM", &sort);
        assert_eq!(first, second);
        assert_eq!(records.iter().map(|p| p.id).collect::<Vec<_>>(), before);
    }

    #[test]
    fn filters_apply_after_search() {
        let records = vec![person(1, "Ann", 30), person(2, "Anton", 40), person(3, "Bea", 30)];
        let mut filter = FilterDescriptor::new(
            "age",
            "Age",
            vec![
                FilterOption::new("30", "30"),
                FilterOption::new("40", "40"),
            ],
            |p: &Person, v| p.age.to_string() == v,
        )
        .unwrap();
        filter.set_value("30").unwrap();

        let index = SearchIndex::build(&records);
        let rows = process_indexed(
            &records,
            &index,
            &columns(),
            std::slice::from_ref(&filter),
            "an",
            &SortDirective::unsorted(),
        );
        assert_eq!(ids(&records, &rows), vec![1]);
    }

    #[test]
    fn end_to_end_search_then_sort() {
        let records = vec![person(1, "Bob", 30), person(2, "Amy", 25), person(3, "amy", 40)];
        let found = process(&records, &columns(), "amy", &SortDirective::unsorted());
        assert_eq!(ids(&records, &found), vec![2, 3]);

        let sorted = process(
            &records,
            &columns(),
            "amy",
            &SortDirective::by("age", SortDirection::Asc),
        );
        assert_eq!(ids(&records, &sorted), vec![2, 3]);
    }

    #[test]
    fn index_reports_size() {
        let records = vec![person(1, "A", 1)];
        let index = SearchIndex::build(&records);
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
        assert!(!index.matches(5, "a"));
    }
}
