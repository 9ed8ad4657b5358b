use super::model::{MovieRecord, MovieTable};

// ---------------------------------------------------------------------------
// Filter predicate: genre equality AND rating threshold
// ---------------------------------------------------------------------------

/// The two user-controlled filter parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub genre: String,
    pub min_rating: f64,
}

impl FilterCriteria {
    pub fn new(genre: impl Into<String>, min_rating: f64) -> Self {
        FilterCriteria {
            genre: genre.into(),
            min_rating,
        }
    }

    /// A record passes when its genre matches exactly and its rating is at
    /// least `min_rating`.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        record.genre == self.genre && record.rating >= self.min_rating
    }
}

/// Keep the records passing `criteria`, in input order.
///
/// Takes any iterator of references so a filtered view can be filtered again.
pub fn filter_records<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records
        .into_iter()
        .filter(|rec| criteria.matches(rec))
        .collect()
}

/// Return indices of records that pass `criteria`, ascending.
pub fn filtered_indices(table: &MovieTable, criteria: &FilterCriteria) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::movie;
    use proptest::prelude::*;

    fn drama_table() -> MovieTable {
        MovieTable::from_records(vec![
            movie("Low", "Drama", 4.0),
            movie("Mid", "Drama", 6.0),
            movie("High", "Drama", 8.0),
        ])
    }

    #[test]
    fn keeps_matching_records_in_order() {
        let table = drama_table();
        let kept = filter_records(table.records(), &FilterCriteria::new("Drama", 5.0));
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Mid", "High"]);
    }

    #[test]
    fn indices_point_at_the_same_records() {
        let table = drama_table();
        let criteria = FilterCriteria::new("Drama", 5.0);
        assert_eq!(filtered_indices(&table, &criteria), [1, 2]);
        assert!(filtered_indices(&table, &FilterCriteria::new("Comedy", 1.0)).is_empty());
    }

    #[test]
    fn missing_rating_never_passes() {
        let table = MovieTable::from_records(vec![movie("Unrated", "Drama", f64::NAN)]);
        assert!(filtered_indices(&table, &FilterCriteria::new("Drama", 1.0)).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let table = drama_table();
        let kept = filter_records(table.records(), &FilterCriteria::new("Drama", 6.0));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].rating, 6.0);
    }

    #[test]
    fn unknown_genre_gives_empty_view() {
        let table = drama_table();
        assert!(filter_records(table.records(), &FilterCriteria::new("Comedy", 1.0)).is_empty());
    }

    #[test]
    fn genre_match_is_exact() {
        let table = MovieTable::from_records(vec![movie("a", "drama", 9.0)]);
        assert!(filter_records(table.records(), &FilterCriteria::new("Drama", 1.0)).is_empty());
    }

    fn arb_record() -> impl Strategy<Value = MovieRecord> {
        (
            prop::sample::select(vec!["Drama", "Action", "Comedy"]),
            1.0f64..10.0,
        )
            .prop_map(|(genre, rating)| movie("m", genre, rating))
    }

    proptest! {
        #[test]
        fn filter_equals_comprehension_and_is_idempotent(
            records in prop::collection::vec(arb_record(), 0..40),
            genre in prop::sample::select(vec!["Drama", "Action", "Comedy"]),
            min_rating in 1.0f64..10.0,
        ) {
            let criteria = FilterCriteria::new(genre, min_rating);
            let once = filter_records(&records, &criteria);

            let expected: Vec<&MovieRecord> = records
                .iter()
                .filter(|r| r.genre == genre && r.rating >= min_rating)
                .collect();
            prop_assert_eq!(&once, &expected);

            let twice = filter_records(once.iter().copied(), &criteria);
            prop_assert_eq!(&once, &twice);

            let table = MovieTable::from_records(records.clone());
            let by_index: Vec<&MovieRecord> = filtered_indices(&table, &criteria)
                .into_iter()
                .map(|i| &table.records()[i])
                .collect();
            prop_assert_eq!(once, by_index);
        }
    }
}
