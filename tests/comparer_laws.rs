#![cfg(feature = "comparer")]
//! Property-based tests for comparer laws.
//!
//! 1. **Reflexivity**: `compare(a, a) == Equal`
//! 2. **Antisymmetry**: `compare(a, b) == compare(b, a).reverse()`
//! 3. **Reverse Inversion**: `reversed().compare(a, b) == compare(a, b).reverse()`
//! 4. **Chain Precedence**: the first non-`Equal` member decides
//! 5. **Sort Agreement**: sorting with a comparer matches sorting by its key

use std::cmp::Ordering;

use ordkit::comparer::{
    ChainedComparer, Comparer, ComparerExt, NaturalOrder, ReverseComparer, SortDirection,
    key_comparer, non_null_key_comparer, nullable_key_comparer,
};
use ordkit::error::{ComparerError, ConstructionError, NullElementError, Operand};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Employee {
    department: u8,
    salary: u16,
}

fn employee() -> impl Strategy<Value = Employee> {
    (0..4_u8, 0..100_u16).prop_map(|(department, salary)| Employee { department, salary })
}

fn by_department_then_salary() -> ChainedComparer<'static, Employee> {
    ChainedComparer::new(vec![
        key_comparer(|employee: &Employee| employee.department).boxed(),
        key_comparer(|employee: &Employee| employee.salary).boxed(),
    ])
    .expect("two comparers")
}

proptest! {
    #[test]
    fn prop_natural_order_reflexivity(value in any::<i64>()) {
        prop_assert_eq!(NaturalOrder.compare(&value, &value), Ordering::Equal);
    }

    #[test]
    fn prop_key_comparer_antisymmetry(left in employee(), right in employee()) {
        let comparer = key_comparer(|employee: &Employee| employee.salary);
        prop_assert_eq!(
            comparer.compare(&left, &right),
            comparer.compare(&right, &left).reverse()
        );
    }

    #[test]
    fn prop_reverse_inversion(left in any::<i32>(), right in any::<i32>()) {
        let reversed = ReverseComparer::new(NaturalOrder);
        prop_assert_eq!(
            reversed.compare(&left, &right),
            NaturalOrder.compare(&left, &right).reverse()
        );
    }

    #[test]
    fn prop_double_reverse_identity(left in any::<i32>(), right in any::<i32>()) {
        let twice = NaturalOrder.reversed().reversed();
        prop_assert_eq!(twice.compare(&left, &right), left.cmp(&right));
    }

    #[test]
    fn prop_chain_precedence(left in employee(), right in employee()) {
        let expected = left
            .department
            .cmp(&right.department)
            .then(left.salary.cmp(&right.salary));
        prop_assert_eq!(by_department_then_salary().compare(&left, &right), expected);
    }

    #[test]
    fn prop_static_chain_matches_dynamic_chain(left in employee(), right in employee()) {
        let static_chain = key_comparer(|employee: &Employee| employee.department)
            .then_by_key(|employee: &Employee| employee.salary);
        prop_assert_eq!(
            static_chain.compare(&left, &right),
            by_department_then_salary().compare(&left, &right)
        );
    }

    #[test]
    fn prop_sort_agreement(mut employees in proptest::collection::vec(employee(), 0..20)) {
        let mut expected = employees.clone();
        expected.sort_by_key(|employee| (employee.department, employee.salary));

        let chain = by_department_then_salary();
        employees.sort_by(chain.as_fn());
        prop_assert_eq!(employees, expected);
    }

    #[test]
    fn prop_sort_direction_matches_reversed(left in any::<i32>(), right in any::<i32>()) {
        prop_assert_eq!(
            SortDirection::Descending.apply(NaturalOrder.compare(&left, &right)),
            NaturalOrder.reversed().compare(&left, &right)
        );
    }

    #[test]
    fn prop_nulls_first(value in any::<i32>()) {
        let comparer = nullable_key_comparer(|value: &i32| *value);
        prop_assert_eq!(comparer.compare(&None, &Some(value)), Ordering::Less);
        prop_assert_eq!(comparer.compare(&Some(value), &None), Ordering::Greater);
        prop_assert_eq!(comparer.compare(&None, &None), Ordering::Equal);
    }
}

// =============================================================================
// Non-null key comparer
// =============================================================================

#[rstest]
#[case(None, Some(1), Operand::Left)]
#[case(Some(1), None, Operand::Right)]
#[case(None, None, Operand::Both)]
fn test_non_null_key_comparer_rejects_absent(
    #[case] left: Option<i32>,
    #[case] right: Option<i32>,
    #[case] operand: Operand,
) {
    let comparer = non_null_key_comparer(|value: &i32| *value);
    assert_eq!(
        comparer.try_compare(&left, &right),
        Err(NullElementError {
            combinator: "NonNullKeyComparer",
            operand,
        })
    );
}

#[rstest]
fn test_non_null_key_comparer_accepts_present() {
    let comparer = non_null_key_comparer(|value: &i32| value.abs());
    assert_eq!(comparer.try_compare(&Some(-3), &Some(2)), Ok(Ordering::Greater));
    assert_eq!(comparer.compare(&Some(-2), &Some(2)), Ordering::Equal);
}

#[rstest]
#[should_panic(expected = "absent element")]
fn test_non_null_key_comparer_panics_when_sorting_absent() {
    let comparer = non_null_key_comparer(|value: &i32| *value);
    let mut values = vec![Some(2), None, Some(1)];
    values.sort_by(comparer.as_fn());
}

#[rstest]
fn test_try_sort_reports_absent_element() {
    let comparer = non_null_key_comparer(|value: &i32| *value);
    let values = [Some(2), None, Some(1)];
    let first_error = values
        .windows(2)
        .find_map(|pair| comparer.try_compare(&pair[0], &pair[1]).err());
    assert_eq!(first_error.map(|error| error.operand), Some(Operand::Right));
}

// =============================================================================
// Construction errors
// =============================================================================

#[rstest]
fn test_construction_errors_are_eager() {
    let missing_selector =
        ordkit::comparer::KeyComparer::<i32, i32, fn(&i32) -> i32>::from_optional(None);
    assert!(matches!(
        missing_selector,
        Err(ConstructionError::MissingArgument {
            argument: "selector",
            ..
        })
    ));

    let missing_inner = ReverseComparer::<NaturalOrder>::from_optional(None);
    assert!(missing_inner.is_err());

    let too_short = ChainedComparer::<i32>::new(vec![NaturalOrder.boxed()]);
    assert!(matches!(
        too_short,
        Err(ConstructionError::TooFewComparers {
            required: 2,
            actual: 1
        })
    ));
}

#[rstest]
fn test_errors_unify_into_comparer_error() {
    fn build_and_compare(left: Option<i32>, right: Option<i32>) -> Result<Ordering, ComparerError> {
        let chain = ChainedComparer::<Option<i32>>::new(vec![
            non_null_key_comparer(|value: &i32| value / 10).boxed(),
            non_null_key_comparer(|value: &i32| *value).boxed(),
        ])?;
        Ok(chain.try_compare(&left, &right)?)
    }

    assert_eq!(build_and_compare(Some(11), Some(12)), Ok(Ordering::Less));
    assert!(matches!(
        build_and_compare(None, Some(1)),
        Err(ComparerError::NullElement(_))
    ));
}
