//! Separate test suite for using `dicom_value!` in an isolated context,
//! without direct access to dependency `smallvec`

// empty module makes `smallvec` dependency unreachable,
// as would be typical in dependents of `dicomkit_core`
// unless they include it themselves
mod smallvec {}

#[test]
fn use_dicom_value() {
    use dicomkit_core::dicom_value;

    // multiple string literals with variant, no trailing comma
    let value = dicom_value!(Strs, ["BASE", "LIGHT", "DARK"]);
    assert_eq!(
        value.to_multi_str(),
        vec!["BASE".to_owned(), "LIGHT".to_owned(), "DARK".to_owned()],
    );

    // single string with variant
    let value = dicom_value!(Str, "PALETTE COLOR ");
    assert_eq!(value.to_string(), "PALETTE COLOR");
    assert_eq!(value.to_raw_str(), "PALETTE COLOR ");

    // numeric values
    let value = dicom_value!(U16, [1, 2, 5]);
    assert_eq!(value.to_multi_int::<u16>().unwrap(), vec![1, 2, 5]);

    // single numeric value
    let value = dicom_value!(F64, 0.5);
    assert_eq!(value.to_float64().unwrap(), 0.5);
}
