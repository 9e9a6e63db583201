#![cfg(feature = "serde")]

use anyhow::Result;
use gridmat::{matrix, ListMatrix, Matrix, MutableListMatrix};

#[test]
fn test_round_trip() -> Result<()> {
    let m = matrix![[1, 2, 3], [4, 5, 6]]?;
    let json = serde_json::to_string(&m)?;
    assert_eq!(json, r#"{"shape":{"cols":3,"rows":2},"list":[1,2,3,4,5,6]}"#);
    let back: ListMatrix<i32> = serde_json::from_str(&json)?;
    assert_eq!(back, m);

    let mm: MutableListMatrix<i32> = serde_json::from_str(&json)?;
    assert_eq!(mm.shape(), m.shape());
    Ok(())
}

#[test]
fn test_rejects_bad_length() {
    let json = r#"{"shape":{"cols":3,"rows":2},"list":[1,2,3]}"#;
    let err = serde_json::from_str::<ListMatrix<i32>>(json).unwrap_err();
    assert!(err.to_string().contains("expected 6 elements, got 3"));
}
