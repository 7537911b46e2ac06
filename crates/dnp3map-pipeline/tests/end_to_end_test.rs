//! End-to-end integration tests for dnp3map-pipeline

use std::fs;
use std::path::Path;

use dnp3map_pipeline::{Error, OutputPaths, Pipeline, PipelineConfig};
use tempfile::TempDir;

const MAP: &str = "Type, DNP3 Address, Variable Name, Description\n\
                   BinaryInputs, 1, @GV.Pump1, Pump running\n\
                   BinaryInputs, 3, @GV.Valve1, Valve open\n\
                   BinaryOutputs, 1, @GV.Pump1, Pump start\n\
                   BinaryOutputs, 2, @GV.Pump2, Pump 2 start\n\
                   AnalogInputs, 0, @GV.Level, Tank level\n\
                   AnalogOutputs, 0, @GV.Level, Level setpoint\n";

const VAR_SHEET: &str = "Pump1\tBOOL\nLevel\tREAL\nValve1\tBOOL\n";

/// Helper to lay out `in/` with both input files and return the config
fn workspace(dir: &Path, map: &str) -> PipelineConfig {
    let input_dir = dir.join("in");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("map.csv"), map).unwrap();
    fs::write(input_dir.join("var_sheet.csv"), VAR_SHEET).unwrap();

    PipelineConfig {
        input: input_dir.join("map.csv"),
        var_sheet: input_dir.join("var_sheet.csv"),
        output_dir: dir.join("out"),
        ..PipelineConfig::default()
    }
}

#[test]
fn test_run_writes_three_stamped_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path(), MAP);
    let outputs = OutputPaths::for_stamp(&config.output_dir, "20240315_1442");

    let result = Pipeline::new(config).run(&outputs).unwrap();

    let map_out = fs::read_to_string(&outputs.map).unwrap();
    assert_eq!(
        map_out,
        "Type, DNP3 Address, Variable Name, Description\n\
         BinaryInputs, 1, @GV.Pump1, Pump running\n\
         BinaryInputs, 3, @GV.Valve1, Valve open\n\
         BinaryOutputs, 1, @GV.Pump1_fb, Pump start\n\
         BinaryOutputs, 2, @GV.Pump2, Pump 2 start\n\
         AnalogInputs, 0, @GV.Level, Tank level\n\
         AnalogOutputs, 0, @GV.Level_fb, Level setpoint\n"
    );

    let st = fs::read_to_string(&outputs.structured_text).unwrap();
    assert_eq!(st, "Pump1:=Pump1_fb;\nLevel:=Level_fb;");
    assert_eq!(st, result.structured_text);

    let sheet = fs::read_to_string(&outputs.var_sheet).unwrap();
    assert_eq!(sheet, "Pump1_fb,BOOL\nLevel_fb,REAL");

    assert_eq!(result.report.rows, 6);
    assert_eq!(result.report.matched(), 2);
    assert_eq!(result.report.mismatch_count(), 1);
    assert_eq!(result.report.mismatches().next().unwrap().row, 3);
    assert_eq!(result.report.outputs.as_ref(), Some(&outputs));
}

#[test]
fn test_check_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path(), MAP);
    let output_dir = config.output_dir.clone();

    let result = Pipeline::new(config).check().unwrap();

    assert_eq!(result.report.modified, vec!["@GV.Pump1", "@GV.Level"]);
    assert!(result.report.outputs.is_none());
    assert!(!output_dir.exists());
}

#[test]
fn test_missing_map_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        input: dir.path().join("in").join("map.csv"),
        ..PipelineConfig::default()
    };

    let err = Pipeline::new(config).check().unwrap_err();
    match err {
        Error::Pipeline {
            operation, path, ..
        } => {
            assert_eq!(operation, "read map");
            assert!(path.ends_with("map.csv"));
        }
        other => panic!("expected pipeline error, got {other:?}"),
    }
}

#[test]
fn test_missing_variable_sheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = workspace(dir.path(), MAP);
    config.var_sheet = dir.path().join("in").join("absent.csv");

    let err = Pipeline::new(config).check().unwrap_err();
    assert!(err.to_string().contains("read variable sheet"));
}

#[test]
fn test_unknown_point_type_is_fatal() {
    let dir = TempDir::new().unwrap();
    let map = "Type, DNP3 Address, Variable Name\n\
               BinaryInputs, 1, Pump1\n\
               Counters, 1, Pulse\n";
    let config = workspace(dir.path(), map);

    let err = Pipeline::new(config).check().unwrap_err();
    assert!(err.to_string().contains("Counters"));
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn test_rerun_replaces_artifacts_with_same_stamp() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path(), MAP);
    let outputs = OutputPaths::for_stamp(&config.output_dir, "20240315_1442");
    let pipeline = Pipeline::new(config);

    pipeline.run(&outputs).unwrap();
    pipeline.run(&outputs).unwrap();

    let st = fs::read_to_string(&outputs.structured_text).unwrap();
    assert_eq!(st, "Pump1:=Pump1_fb;\nLevel:=Level_fb;");
}

#[test]
fn test_report_json_is_written() {
    let dir = TempDir::new().unwrap();
    let config = workspace(dir.path(), MAP);
    let outputs = OutputPaths::for_stamp(&config.output_dir, "20240315_1442");
    let result = Pipeline::new(config).run(&outputs).unwrap();

    let report_path = dir.path().join("report.json");
    result.report.write_json(&report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["outputs"]["stamp"], "20240315_1442");
    assert_eq!(json["modified"][0], "@GV.Pump1");
}
