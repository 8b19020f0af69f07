//! The filter/sort engine.
//!
//! Each stage receives the output of the previous one; later stages operate
//! on a strictly smaller set. The stages are independent predicates, so the
//! order is a performance choice, not a correctness requirement.

use std::cmp::Ordering;

use atelier_core::{Creation, CreationStatus, CreationType};

use crate::criteria::{FilterCriteria, SortDirection, SortField, TypeFilter};

/// Apply filter criteria to a snapshot of creations and return the ordered
/// view.
///
/// Pure transformation: the input is never mutated and the output holds
/// freshly cloned records, so a caller can re-filter while still rendering
/// a previous result. Records missing an expected field are treated as not
/// matching, never as an error. The sort is stable, so records with equal
/// sort keys keep their input order.
#[must_use]
pub fn apply(creations: &[Creation], criteria: &FilterCriteria) -> Vec<Creation> {
    let mut view: Vec<Creation> = creations
        .iter()
        .filter(|c| matches_type(c, &criteria.type_filter))
        .filter(|c| matches_search(c, criteria.search_query.as_deref()))
        .filter(|c| matches_creator(c, criteria.creator_filter.as_deref()))
        .filter(|c| matches_tag(c, criteria.tag_filter.as_deref()))
        .cloned()
        .collect();

    sort_view(&mut view, &criteria.sort_field, criteria.sort_direction);
    view
}

/// The agency browse projection: published creations only, input order
/// preserved.
#[must_use]
pub fn published_only(creations: &[Creation]) -> Vec<Creation> {
    creations
        .iter()
        .filter(|c| c.status == CreationStatus::Published)
        .cloned()
        .collect()
}

fn matches_type(creation: &Creation, filter: &TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Kind(wanted) => creation.kind.as_deref().is_some_and(|k| {
            // Canonicalize known labels so aliases of one category match
            // ("Audio" records match a "music" filter and vice versa).
            match (CreationType::parse(k), CreationType::parse(wanted)) {
                (Some(record_kind), Some(wanted_kind)) => record_kind == wanted_kind,
                _ => k.eq_ignore_ascii_case(wanted),
            }
        }),
    }
}

fn matches_search(creation: &Creation, query: Option<&str>) -> bool {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return true;
    };
    let needle = query.to_lowercase();

    let field_matches = |field: Option<&str>| -> bool {
        field.is_some_and(|f| f.to_lowercase().contains(&needle))
    };

    field_matches(creation.title.as_deref())
        || field_matches(creation.notes.as_deref())
        || field_matches(creation.rights.as_deref())
        || creation
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
}

fn matches_creator(creation: &Creation, filter: Option<&str>) -> bool {
    let Some(filter) = filter.filter(|f| !f.is_empty()) else {
        return true;
    };
    let needle = filter.to_lowercase();

    creation
        .created_by
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(&needle))
        || creation
            .metadata_creator()
            .is_some_and(|c| c.to_lowercase().contains(&needle))
}

fn matches_tag(creation: &Creation, filter: Option<&str>) -> bool {
    let Some(filter) = filter.filter(|f| !f.is_empty()) else {
        return true;
    };
    let needle = filter.to_lowercase();

    creation
        .tags
        .iter()
        .any(|t| t.to_lowercase().contains(&needle))
}

fn sort_view(view: &mut [Creation], field: &SortField, direction: SortDirection) {
    // Vec::sort_by is stable; reversing the comparator leaves equal keys
    // in input order either way.
    view.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &Creation, b: &Creation, field: &SortField) -> Ordering {
    match field {
        SortField::DateCreated => a.created_at().cmp(&b.created_at()),
        SortField::Title => string_key(a.title.as_deref()).cmp(string_key(b.title.as_deref())),
        SortField::Creator => creator_key(a).cmp(creator_key(b)),
        SortField::Field(name) => raw_property(a, name).cmp(raw_property(b, name)),
    }
}

fn string_key(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

fn creator_key(creation: &Creation) -> &str {
    creation
        .metadata_creator()
        .or(creation.created_by.as_deref())
        .unwrap_or("")
}

/// Raw string-property lookup for the sort fallback. Unknown or missing
/// properties compare as the empty string.
fn raw_property<'a>(creation: &'a Creation, name: &str) -> &'a str {
    let value = match name {
        "id" => Some(creation.id.as_str()),
        "title" => creation.title.as_deref(),
        "notes" => creation.notes.as_deref(),
        "rights" => creation.rights.as_deref(),
        "type" => creation.kind.as_deref(),
        "createdBy" | "created_by" => creation.created_by.as_deref(),
        "status" => Some(match creation.status {
            CreationStatus::Draft => "draft",
            CreationStatus::Published => "published",
        }),
        _ => None,
    };
    value.unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::CreationMetadata;

    fn creation(id: &str) -> Creation {
        Creation {
            id: id.to_string(),
            title: None,
            notes: None,
            rights: None,
            kind: None,
            status: CreationStatus::Draft,
            tags: Vec::new(),
            created_by: None,
            metadata: None,
            date_created: None,
        }
    }

    fn sample() -> Vec<Creation> {
        let mut sunset = creation("1");
        sunset.title = Some("Sunset over Manhattan".to_string());
        sunset.kind = Some("Image".to_string());
        sunset.status = CreationStatus::Published;
        sunset.tags = vec!["nature".to_string(), "city".to_string()];
        sunset.created_by = Some("ana@example.com".to_string());
        sunset.metadata = Some(CreationMetadata {
            creator: Some("Ana Reyes".to_string()),
        });
        sunset.date_created = Some("2024-03-15".to_string());

        let mut clip = creation("2");
        clip.title = Some("Clip".to_string());
        clip.kind = Some("Video".to_string());
        clip.notes = Some("rough cut".to_string());
        clip.date_created = Some("2024-01-01".to_string());

        let mut score = creation("3");
        score.title = Some("Night Score".to_string());
        score.kind = Some("Music".to_string());
        score.rights = Some("All rights reserved".to_string());
        score.tags = vec!["ambient".to_string()];
        score.created_by = Some("ben@example.com".to_string());
        score.date_created = Some("2024-02-20".to_string());

        vec![sunset, clip, score]
    }

    #[test]
    fn empty_input_yields_empty_view() {
        let view = apply(&[], &FilterCriteria::default());
        assert!(view.is_empty());
    }

    #[test]
    fn type_filter_is_case_insensitive() {
        let criteria = FilterCriteria {
            type_filter: TypeFilter::parse("image"),
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
    }

    #[test]
    fn type_filter_all_keeps_everything() {
        let view = apply(&sample(), &FilterCriteria::default());
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn result_items_all_match_type_filter() {
        let criteria = FilterCriteria {
            type_filter: TypeFilter::parse("VIDEO"),
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        assert!(!view.is_empty());
        for c in &view {
            assert!(c.kind.as_deref().unwrap().eq_ignore_ascii_case("VIDEO"));
        }
    }

    #[test]
    fn audio_and_music_labels_are_one_category() {
        let mut tape = creation("tape");
        tape.kind = Some("Audio".to_string());
        let mut score = creation("score");
        score.kind = Some("Music".to_string());
        let items = vec![tape, score];

        for label in ["audio", "music", "Audio", "MUSIC"] {
            let criteria = FilterCriteria {
                type_filter: TypeFilter::parse(label),
                ..Default::default()
            };
            let view = apply(&items, &criteria);
            assert_eq!(view.len(), 2, "filter '{label}' should match both labels");
        }
    }

    #[test]
    fn unknown_type_labels_still_compare_literally() {
        let mut odd = creation("odd");
        odd.kind = Some("Sculpture".to_string());
        let items = vec![odd];

        let matching = FilterCriteria {
            type_filter: TypeFilter::parse("sculpture"),
            ..Default::default()
        };
        assert_eq!(apply(&items, &matching).len(), 1);

        let other = FilterCriteria {
            type_filter: TypeFilter::parse("pottery"),
            ..Default::default()
        };
        assert!(apply(&items, &other).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            search_query: Some("manhattan".to_string()),
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title.as_deref(), Some("Sunset over Manhattan"));
    }

    #[test]
    fn search_matches_notes_rights_and_tags() {
        let by_notes = apply(
            &sample(),
            &FilterCriteria {
                search_query: Some("ROUGH".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_notes[0].id, "2");

        let by_rights = apply(
            &sample(),
            &FilterCriteria {
                search_query: Some("reserved".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_rights[0].id, "3");

        let by_tag = apply(
            &sample(),
            &FilterCriteria {
                search_query: Some("ambient".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_tag[0].id, "3");
    }

    #[test]
    fn search_on_record_with_no_fields_does_not_panic() {
        let bare = vec![creation("x")];
        let criteria = FilterCriteria {
            search_query: Some("anything".to_string()),
            ..Default::default()
        };
        assert!(apply(&bare, &criteria).is_empty());
    }

    #[test]
    fn empty_search_query_is_pass_through() {
        let bare = vec![creation("x")];
        let criteria = FilterCriteria {
            search_query: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply(&bare, &criteria).len(), 1);
    }

    #[test]
    fn creator_filter_matches_created_by_or_metadata() {
        let by_email = apply(
            &sample(),
            &FilterCriteria {
                creator_filter: Some("ben@".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, "3");

        let by_metadata = apply(
            &sample(),
            &FilterCriteria {
                creator_filter: Some("reyes".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_metadata.len(), 1);
        assert_eq!(by_metadata[0].id, "1");
    }

    #[test]
    fn tag_filter_matches_any_tag() {
        let criteria = FilterCriteria {
            tag_filter: Some("CITY".to_string()),
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
    }

    #[test]
    fn default_sort_is_newest_first() {
        let view = apply(&sample(), &FilterCriteria::default());
        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "2"]);
    }

    #[test]
    fn missing_date_sorts_last_in_descending_order() {
        let mut items = sample();
        items.push(creation("4")); // no dateCreated
        let view = apply(&items, &FilterCriteria::default());
        assert_eq!(view.last().unwrap().id, "4");
    }

    #[test]
    fn title_sort_ascending() {
        let criteria = FilterCriteria {
            sort_field: SortField::Title,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        let titles: Vec<&str> = view.iter().filter_map(|c| c.title.as_deref()).collect();
        assert_eq!(titles, ["Clip", "Night Score", "Sunset over Manhattan"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut a = creation("a");
        a.date_created = Some("2024-05-01".to_string());
        let mut b = creation("b");
        b.date_created = Some("2024-05-01".to_string());
        let mut c = creation("c");
        c.date_created = Some("2024-05-01".to_string());

        let criteria = FilterCriteria {
            sort_field: SortField::DateCreated,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };
        let view = apply(&[a, b, c], &criteria);
        let ids: Vec<&str> = view.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"], "equal keys must keep input order");
    }

    #[test]
    fn unknown_sort_field_falls_back_to_raw_property() {
        let criteria = FilterCriteria {
            sort_field: SortField::Field("rights".to_string()),
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        // Records without rights compare as "" and sort first ascending.
        assert_eq!(view.last().unwrap().id, "3");
    }

    #[test]
    fn creator_sort_prefers_metadata_then_created_by() {
        let criteria = FilterCriteria {
            sort_field: SortField::Creator,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        // "" (clip) < "Ana Reyes" < "ben@example.com"
        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn stages_compose() {
        let criteria = FilterCriteria {
            search_query: Some("n".to_string()),
            type_filter: TypeFilter::parse("Image"),
            creator_filter: Some("ana".to_string()),
            tag_filter: Some("nature".to_string()),
            ..Default::default()
        };
        let view = apply(&sample(), &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
    }

    #[test]
    fn input_snapshot_is_untouched() {
        let items = sample();
        let before: Vec<String> = items.iter().map(|c| c.id.clone()).collect();
        let _ = apply(
            &items,
            &FilterCriteria {
                sort_field: SortField::Title,
                sort_direction: SortDirection::Asc,
                ..Default::default()
            },
        );
        let after: Vec<String> = items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn published_only_drops_drafts_in_order() {
        let mut items = sample();
        items[2].status = CreationStatus::Published;
        let view = published_only(&items);
        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
