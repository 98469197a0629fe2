//! Tests for the sort strategies and the key extractor
//!
//! Every strategy must give the same stable result for the same comparison,
//! whatever the input permutation.

use std::sync::Arc;

use car_catalog::algorithm::sort;
use car_catalog::{Car, KeyExtractor, SortAlgorithm, SortCriterion, SortDirection, SortField};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::utils::{models, sample_catalog, sample_cars};

#[test]
fn test_algorithms_agree_on_shuffled_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut cars = sample_cars();
    let extractor = KeyExtractor::new(SortField::Price);

    for _ in 0..20 {
        cars.shuffle(&mut rng);
        let expected = models(&sort(
            &cars.iter().cloned().map(Arc::new).collect::<Vec<_>>(),
            |a: &Arc<Car>, b: &Arc<Car>| extractor.compare(a, b),
            SortDirection::Ascending,
            SortAlgorithm::MergeSort,
        ));
        let by_price = ["Mokka", "Astra", "Zafira", "Insignia", "Corsa"];
        assert_eq!(expected, by_price);

        for algorithm in SortAlgorithm::ALL {
            let sorted = sort(
                &cars,
                |a: &Car, b: &Car| extractor.compare(a, b),
                SortDirection::Ascending,
                *algorithm,
            );
            let names: Vec<&str> = sorted.iter().map(Car::model).collect();
            assert_eq!(names, expected, "{algorithm}");
        }
    }
}

#[test]
fn test_equal_keys_keep_catalog_order() {
    let catalog = sample_catalog();

    for algorithm in SortAlgorithm::ALL {
        let criterion =
            SortCriterion::new(SortField::Mileage, SortDirection::Ascending, *algorithm);
        // Astra and Insignia share 50000 km
        assert_eq!(
            models(&catalog.sort(&criterion)),
            vec!["Mokka", "Corsa", "Astra", "Insignia", "Zafira"]
        );
    }
}

#[test]
fn test_descending_flips_groups_but_not_ties() {
    let catalog = sample_catalog();

    for algorithm in SortAlgorithm::ALL {
        let criterion =
            SortCriterion::new(SortField::Mileage, SortDirection::Descending, *algorithm);
        assert_eq!(
            models(&catalog.sort(&criterion)),
            vec!["Zafira", "Astra", "Insignia", "Corsa", "Mokka"]
        );
    }
}

#[test]
fn test_category_fields_sort_in_declaration_order() {
    let catalog = sample_catalog();
    let sorted = catalog.sort_by(SortField::TyreType, SortDirection::Ascending);
    assert_eq!(
        models(&sorted),
        vec!["Astra", "Insignia", "Corsa", "Zafira", "Mokka"]
    );

    let sorted = catalog.sort_by(SortField::Name, SortDirection::Descending);
    assert_eq!(
        models(&sorted),
        vec!["Zafira", "Mokka", "Insignia", "Corsa", "Astra"]
    );
}

#[test]
fn test_sort_leaves_catalog_untouched() {
    let catalog = sample_catalog();
    let before = models(catalog.cars());
    let _ = catalog.sort_by(SortField::Price, SortDirection::Descending);
    assert_eq!(models(catalog.cars()), before);
}

#[test]
fn test_empty_input_sorts_to_empty() {
    let empty: Vec<Car> = Vec::new();
    let extractor = KeyExtractor::new(SortField::Name);
    for algorithm in SortAlgorithm::ALL {
        let sorted = sort(
            &empty,
            |a: &Car, b: &Car| extractor.compare(a, b),
            SortDirection::Descending,
            *algorithm,
        );
        assert!(sorted.is_empty());
    }
}

#[test]
fn test_criterion_tags_are_validated() {
    let criterion = SortCriterion::parse("price", "ascending", "insertion");
    assert!(criterion.is_ok());
    assert!(matches!(
        SortCriterion::parse("colour", "ascending", "merge"),
        Err(car_catalog::CatalogError::UnsupportedCriterion(_))
    ));
    assert!(matches!(
        SortCriterion::parse("price", "ascending", "quick"),
        Err(car_catalog::CatalogError::UnknownAlgorithm(_))
    ));
}
