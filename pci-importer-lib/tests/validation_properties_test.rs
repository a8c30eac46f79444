//! Property tests for column resolution and row validation

use pci_importer_lib::{
    CellValue, ColumnMap, ExcelValidatorBuilder, Grid, RequiredField, UploadError,
    ValidationPolicy, validate_upload,
};
use proptest::prelude::*;

mod common;

use common::{data_row, road_grid, road_xlsx_bytes};

fn road_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}

fn valid_row_strategy() -> impl Strategy<Value = (String, i64, i64)> {
    (road_name_strategy(), 1i64..=5, 1i64..=5)
}

fn out_of_range_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..1, 6i64..1000]
}

/// Random casing and surrounding whitespace around a header name
fn header_variant(name: &'static str) -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(any::<bool>(), name.len()),
        "[ \t]{0,3}",
        "[ \t]{0,3}",
    )
        .prop_map(move |(upper, prefix, suffix)| {
            let cased: String = name
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{}{}{}", prefix, cased, suffix)
        })
}

proptest! {
    #[test]
    fn prop_valid_rows_are_returned_in_order(rows in proptest::collection::vec(valid_row_strategy(), 0..30)) {
        let grid = road_grid(
            rows.iter()
                .map(|(name, a, b)| data_row(name, *a as f64, *b as f64))
                .collect(),
        );
        let mut validator = ExcelValidatorBuilder::from_grid(grid).build().unwrap();
        let records = validator.validate_excel().unwrap();

        prop_assert_eq!(records.len(), rows.len());
        for (record, (name, a, b)) in records.iter().zip(rows.iter()) {
            prop_assert_eq!(&record.road_name, name.trim());
            prop_assert_eq!(record.pcivalue_2019, *a);
            prop_assert_eq!(record.pcivalue_2021, *b);
        }
    }

    #[test]
    fn prop_header_matching_ignores_case_and_whitespace(
        road in header_variant("road_name"),
        pci_2019 in header_variant("pcivalue_2019"),
        pci_2021 in header_variant("pcivalue_2021"),
    ) {
        let header = vec![
            CellValue::from(road.as_str()),
            CellValue::from(pci_2019.as_str()),
            CellValue::from(pci_2021.as_str()),
        ];
        let columns = ColumnMap::resolve(&header).unwrap();

        prop_assert_eq!(columns.index_of(RequiredField::RoadName), 0);
        prop_assert_eq!(columns.index_of(RequiredField::PciValue2019), 1);
        prop_assert_eq!(columns.index_of(RequiredField::PciValue2021), 2);
    }

    #[test]
    fn prop_missing_columns_are_named_exactly(keep in proptest::collection::vec(any::<bool>(), 3)) {
        prop_assume!(keep.iter().any(|k| !k));

        let header: Vec<CellValue> = RequiredField::ALL
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(field, _)| CellValue::from(field.name()))
            .collect();
        let expected: Vec<RequiredField> = RequiredField::ALL
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| !**k)
            .map(|(field, _)| *field)
            .collect();

        let mut rows = vec![header];
        rows.push(vec![CellValue::from("Main St"), CellValue::Number(3.0), CellValue::Number(3.0)]);
        let result = ExcelValidatorBuilder::from_grid(Grid::new(rows)).build();

        match result {
            Err(UploadError::Schema(err)) => prop_assert_eq!(err.missing, expected),
            Err(other) => prop_assert!(false, "Expected a schema error, got {:?}", other),
            Ok(_) => prop_assert!(false, "Expected a schema error, got a validator"),
        }
    }

    #[test]
    fn prop_one_bad_value_fails_the_whole_upload(
        rows in proptest::collection::vec(valid_row_strategy(), 1..20),
        bad_index in any::<prop::sample::Index>(),
        bad_value in out_of_range_strategy(),
        second_year in any::<bool>(),
    ) {
        let bad_row = bad_index.index(rows.len());
        let data: Vec<Vec<CellValue>> = rows
            .iter()
            .enumerate()
            .map(|(i, (name, a, b))| {
                let (mut a, mut b) = (*a, *b);
                if i == bad_row {
                    if second_year { b = bad_value } else { a = bad_value }
                }
                data_row(name, a as f64, b as f64)
            })
            .collect();

        let mut validator = ExcelValidatorBuilder::from_grid(road_grid(data))
            .policy(ValidationPolicy::Strict)
            .build()
            .unwrap();
        let err = validator.validate_excel().unwrap_err();

        let field = if second_year { "pcivalue_2021" } else { "pcivalue_2019" };
        let expected_line = format!("Row {}: {} must be 1-5, got {}", bad_row + 2, field, bad_value);
        prop_assert!(err.to_string().contains(&expected_line), "Got: {}", err);
    }

    #[test]
    fn prop_blank_road_name_is_tagged_with_its_row(
        rows in proptest::collection::vec(valid_row_strategy(), 1..20),
        blank_index in any::<prop::sample::Index>(),
        padding in "[ \t]{0,4}",
    ) {
        let blank_row = blank_index.index(rows.len());
        let data: Vec<Vec<CellValue>> = rows
            .iter()
            .enumerate()
            .map(|(i, (name, a, b))| {
                let name = if i == blank_row { padding.as_str() } else { name.as_str() };
                data_row(name, *a as f64, *b as f64)
            })
            .collect();

        let mut validator = ExcelValidatorBuilder::from_grid(road_grid(data)).build().unwrap();
        let err = validator.validate_excel().unwrap_err();

        let expected_line = format!("Row {}: road_name cannot be empty", blank_row + 2);
        prop_assert!(err.to_string().contains(&expected_line), "Got: {}", err);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_same_bytes_same_result(
        rows in proptest::collection::vec((road_name_strategy(), 0i64..=7, 0i64..=7), 0..10),
    ) {
        let bytes = road_xlsx_bytes(
            rows.iter()
                .map(|(name, a, b)| data_row(name, *a as f64, *b as f64))
                .collect(),
        );

        let first = validate_upload("roads.xlsx", &bytes, ValidationPolicy::Strict);
        let second = validate_upload("roads.xlsx", &bytes, ValidationPolicy::Strict);
        prop_assert_eq!(first, second);
    }
}
