//! Emitters writing to disk

use anyhow::Result;
use dnp3map_mapping::{
    DatatypeLookup, NamingConvention, create_structured_text, create_variable_sheet,
    variable_sheet_from_path,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn structured_text_file_matches_returned_text() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("20240101_0930_ST.txt");
    fs::write(&path, "previous run\nwith more lines\n")?;

    let text = create_structured_text(
        &["@GV.Pump1", "Level"],
        &NamingConvention::default(),
        Some(&path),
    )?;

    assert_eq!(text, "Pump1:=Pump1_fb;\nLevel:=Level_fb;");
    assert_eq!(fs::read_to_string(&path)?, text);
    Ok(())
}

#[test]
fn variable_sheet_loads_lookup_from_tab_separated_file() -> Result<()> {
    let dir = TempDir::new()?;
    let lookup_path = dir.path().join("var_sheet.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &lookup_path,
        "Pump1\tBOOL\nLevel\tREAL\nbroken line\nPump1\tINT\n",
    )?;

    let text = variable_sheet_from_path(
        &["@GV.Pump1", "@GV.Level", "Spare"],
        &lookup_path,
        &NamingConvention::default(),
        Some(&output),
    )?;

    assert_eq!(text, "Pump1_fb,BOOL\nLevel_fb,REAL\nSpare_fb,NOT FOUND");
    assert_eq!(fs::read_to_string(&output)?, text);
    Ok(())
}

#[test]
fn missing_lookup_file_is_an_error() {
    let result = variable_sheet_from_path(
        &["Pump1"],
        "/path/that/does/not/exist/var_sheet.csv",
        &NamingConvention::default(),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn unwritable_destination_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing").join("sheet.csv");
    let result = create_variable_sheet(
        &["Pump1"],
        &DatatypeLookup::default(),
        &NamingConvention::default(),
        Some(&output),
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("sheet.csv"));
}
