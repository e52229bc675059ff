use kindred::model::{FamilyData, Generation, Person};
use kindred::search::{SearchFilters, create_filtered_family_data, search_family_data};

fn person(id: &str, name: &str) -> Person {
    Person {
        id: Some(id.to_string()),
        name: name.to_string(),
        ..Person::default()
    }
}

fn setup() -> FamilyData {
    FamilyData {
        generations: vec![
            Generation {
                title: "First".to_string(),
                people: vec![person("p1", "Anna"), person("p2", "Bertil")],
            },
            Generation {
                title: "Second".to_string(),
                people: vec![person("p3", "Cecilia")],
            },
            Generation {
                title: "Third".to_string(),
                people: vec![person("p4", "Annika")],
            },
        ],
    }
}

#[test]
fn empty_results_reconstruct_as_empty_generations() {
    let data = setup();
    let filtered = create_filtered_family_data(&data, &[]);
    assert!(filtered.generations.is_empty());
}

#[test]
fn only_matched_generations_survive_in_original_order() {
    let data = setup();
    let results = search_family_data(&data, "ann", &SearchFilters::default());
    let filtered = create_filtered_family_data(&data, &results);
    let titles: Vec<&str> = filtered.generations.iter().map(|g| g.title.as_str()).collect();
    // Second has no match for "ann" and is dropped; the rest keep
    // dataset order.
    assert_eq!(titles, vec!["First", "Third"]);
    assert_eq!(filtered.generations[0].people.len(), 1);
    assert_eq!(filtered.generations[0].people[0].name, "Anna");
    assert_eq!(filtered.generations[1].people[0].name, "Annika");
}

#[test]
fn people_within_a_generation_follow_result_order() {
    let data = FamilyData {
        generations: vec![Generation {
            title: "First".to_string(),
            people: vec![person("p1", "Cecilia Ann"), person("p2", "Ann")],
        }],
    };
    let results = search_family_data(&data, "ann", &SearchFilters::default());
    let filtered = create_filtered_family_data(&data, &results);
    let names: Vec<&str> = filtered.generations[0]
        .people
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    // Rank order (name tie-break), not original dataset order.
    assert_eq!(names, vec!["Ann", "Cecilia Ann"]);
}

#[test]
fn everyone_reconstructs_when_no_filter_is_applied() {
    let data = setup();
    let results = search_family_data(&data, "", &SearchFilters::default());
    let filtered = create_filtered_family_data(&data, &results);
    assert_eq!(filtered.generations.len(), 3);
    let total: usize = filtered.generations.iter().map(|g| g.people.len()).sum();
    assert_eq!(total, 4);
}
