//! Property-based tests for estimate operations.
//!
//! - Nesting depth is rejected exactly when the parent has a parent
//! - Rollup: `budget_all == budget_parent + budget_child` and nothing is lost
//! - Building amounts cover every line whose section is known
//! - Discounts never increase a price and respect the stored scale

use proptest::prelude::*;
use rust_decimal::Decimal;
use smeta_shared::{BuildingId, ExpenditureId, SectionId};

use super::discount::Discount;
use super::hierarchy::{NewSection, SectionTree};
use super::service::EstimateService;
use super::types::{Building, Expenditure, ExpenditureType, Section};

/// Strategy to generate prices (0.00 to 100,000.00).
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate quantities (0.000 to 1,000.000).
fn count() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|v| Decimal::new(v, 3))
}

/// Strategy to generate discount percentages (0.00 to 100.00).
fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

fn kind() -> impl Strategy<Value = ExpenditureType> {
    prop_oneof![Just(ExpenditureType::Work), Just(ExpenditureType::Material)]
}

/// A line description: (section slot, kind, count, price).
fn lines() -> impl Strategy<Value = Vec<(usize, ExpenditureType, Decimal, Decimal)>> {
    prop::collection::vec((0usize..32, kind(), count(), price()), 0..40)
}

/// Builds `roots` root sections with `children` children each for one building.
fn sections(building_id: BuildingId, roots: usize, children: usize) -> Vec<Section> {
    let mut out = Vec::new();
    for _ in 0..roots {
        let root = NewSection::root(building_id).into_section(SectionId::new());
        out.push(root);
        for _ in 0..children {
            let child = NewSection::child(building_id, &root)
                .expect("root parent")
                .into_section(SectionId::new());
            out.push(child);
        }
    }
    out
}

fn materialise(
    sections: &[Section],
    specs: &[(usize, ExpenditureType, Decimal, Decimal)],
) -> Vec<Expenditure> {
    specs
        .iter()
        .map(|(slot, kind, count, price)| Expenditure {
            id: ExpenditureId::new(),
            section_id: sections[slot % sections.len()].id,
            name: "line".into(),
            kind: *kind,
            count: *count,
            price: *price,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A child may be created under a section iff that section is a root.
    #[test]
    fn prop_nesting_depth(has_grandparent in any::<bool>()) {
        let building_id = BuildingId::new();
        let parent = Section {
            id: SectionId::new(),
            building_id,
            parent_id: has_grandparent.then(SectionId::new),
        };

        let result = NewSection::child(building_id, &parent);
        prop_assert_eq!(result.is_err(), has_grandparent);
    }

    /// Every root's `budget_all` is the sum of its parts, and the grand total
    /// equals the sum of all line totals in the tree.
    #[test]
    fn prop_rollup_conserves_totals(
        roots in 1usize..4,
        children in 0usize..4,
        specs in lines(),
    ) {
        let building_id = BuildingId::new();
        let sections = sections(building_id, roots, children);
        let lines = materialise(&sections, &specs);

        let tree = SectionTree::build(building_id, sections.clone());
        let budgets = EstimateService::rollup(&tree, &lines).unwrap();

        prop_assert_eq!(budgets.len(), roots);
        for b in &budgets {
            prop_assert_eq!(b.budget_all, b.budget_parent + b.budget_child);
            prop_assert!(b.budget_parent >= Decimal::ZERO);
            prop_assert!(b.budget_child >= Decimal::ZERO);
        }

        let grand: Decimal = budgets.iter().map(|b| b.budget_all).sum();
        let expected: Decimal = lines.iter().map(|l| l.line_total().unwrap()).sum();
        prop_assert_eq!(grand, expected);
    }

    /// Work plus material across buildings equals the total of all lines.
    #[test]
    fn prop_building_amounts_cover_all_lines(
        roots in 1usize..3,
        children in 0usize..3,
        specs in lines(),
    ) {
        let first = Building { id: BuildingId::new(), name: "first".into() };
        let second = Building { id: BuildingId::new(), name: "second".into() };
        let mut all = sections(first.id, roots, children);
        all.extend(sections(second.id, roots, children));
        let lines = materialise(&all, &specs);

        let amounts = EstimateService::building_amounts(&[first, second], &all, &lines).unwrap();
        prop_assert_eq!(amounts.len(), 2);

        let works: Decimal = amounts.iter().map(|a| a.works_amount).sum();
        let materials: Decimal = amounts.iter().map(|a| a.materials_amount).sum();
        let expected_works: Decimal = lines
            .iter()
            .filter(|l| l.kind == ExpenditureType::Work)
            .map(|l| l.line_total().unwrap())
            .sum();
        let expected_materials: Decimal = lines
            .iter()
            .filter(|l| l.kind == ExpenditureType::Material)
            .map(|l| l.line_total().unwrap())
            .sum();

        prop_assert_eq!(works, expected_works);
        prop_assert_eq!(materials, expected_materials);
    }

    /// A discount never raises the price, never goes below zero, and keeps two
    /// decimal places.
    #[test]
    fn prop_discount_bounds(price in price(), percent in percent()) {
        let discounted = Discount::new(percent).unwrap().apply(price);

        prop_assert!(discounted <= price);
        prop_assert!(discounted >= Decimal::ZERO);
        prop_assert!(discounted.scale() <= 2);
    }

    /// Zero discount is the identity; full discount zeroes the price.
    #[test]
    fn prop_discount_extremes(price in price()) {
        prop_assert_eq!(Discount::new(Decimal::ZERO).unwrap().apply(price), price);
        prop_assert_eq!(Discount::new(Decimal::ONE_HUNDRED).unwrap().apply(price), Decimal::ZERO);
    }

    /// Percentages outside 0..=100 are always rejected.
    #[test]
    fn prop_discount_range(excess in 1i64..1_000_000i64) {
        let step = Decimal::new(excess, 2);
        prop_assert!(Discount::new(Decimal::ONE_HUNDRED + step).is_err());
        prop_assert!(Discount::new(Decimal::ZERO - step).is_err());
    }
}
