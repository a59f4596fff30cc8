use impact_simulator::config::TrajectoryPolicy;
use impact_simulator::deflection::{linspace, sweep};
use impact_simulator::export::sweep::{HEADER, write_csv};

#[test]
fn sweep_csv_reads_back_in_force_major_order() {
    let forces = linspace(0.0, 2.0, 3);
    let warnings = linspace(5.0, 15.0, 3);
    let points = sweep(&forces, &warnings, &TrajectoryPolicy::default()).unwrap();
    assert_eq!(points.len(), 9);

    let mut buf = Vec::new();
    write_csv(&mut buf, &points).unwrap();

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 9);
    assert_eq!(&rows[0][0], "0.0");
    assert_eq!(&rows[0][1], "5.0");
    assert_eq!(&rows[0][3], "-500.000");
    assert_eq!(&rows[0][4], "true");
    assert_eq!(&rows[3][0], "1.0");
    // 2 cm/s over 15 years clears the 2500 km threshold.
    assert_eq!(&rows[8][4], "false");
}

#[test]
fn sweep_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/sweep.csv");
    let points = sweep(&[1.0], &[10.0], &TrajectoryPolicy::default()).unwrap();
    {
        let mut writer = impact_simulator::export::writer_for_path(&path).unwrap();
        write_csv(&mut *writer, &points).unwrap();
    }
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[2], "3155.760");
    assert_eq!(&row[3], "2655.760");
    assert_eq!(&row[4], "false");
}
