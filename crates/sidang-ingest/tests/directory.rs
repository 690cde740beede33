//! Integration tests for loading faculty spreadsheets from disk.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use sidang_ingest::{IngestError, load_faculty_directory};
use sidang_model::IdKind;
use tempfile::TempDir;

fn write_xlsx(path: &Path, header: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet
                .write_string((row_idx + 1) as u32, col as u16, *value)
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn duplicate_id_rows_yield_one_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.xlsx");
    write_xlsx(
        &path,
        &["nama", "jenis_id", "id"],
        &[&["Dr. A", "NIP", "123"], &["Dr. A", "NIP", "123"]],
    );

    let directory = load_faculty_directory(&path).unwrap();
    assert_eq!(directory.len(), 1);
    let member = directory.get("123").unwrap();
    assert_eq!(member.name, "Dr. A");
    assert_eq!(member.id_kind, IdKind::Nip);
    assert_eq!(directory.display_labels(), vec!["Dr. A — NIP: 123"]);
}

#[test]
fn headers_are_normalised_and_cells_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.xlsx");
    write_xlsx(
        &path,
        &[" Nama ", "JENIS_ID", "Id"],
        &[&["  Dr. B  ", " nup ", " 456 "], &["", "NIP", "789"]],
    );

    let directory = load_faculty_directory(&path).unwrap();
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.skipped_rows(), 1);
    let member = directory.resolve("Dr. B — NUP: 456").unwrap();
    assert_eq!(member.id_number, "456");
}

#[test]
fn numeric_id_cells_read_without_decimal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "nama").unwrap();
    sheet.write_string(0, 1, "jenis_id").unwrap();
    sheet.write_string(0, 2, "id").unwrap();
    sheet.write_string(1, 0, "Dr. C").unwrap();
    sheet.write_string(1, 1, "NIP").unwrap();
    sheet.write_number(1, 2, 19800101.0).unwrap();
    workbook.save(&path).unwrap();

    let directory = load_faculty_directory(&path).unwrap();
    assert!(directory.get("19800101").is_some());
}

#[test]
fn missing_required_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.xlsx");
    write_xlsx(&path, &["nama", "id"], &[&["Dr. A", "1"]]);

    let err = load_faculty_directory(&path).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumns { ref missing } if missing == &["jenis_id"]));
    assert!(err.to_string().starts_with("Kolom Excel harus ada"));
}

#[test]
fn csv_export_loads_the_same_way() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "nama,jenis_id,id").unwrap();
    writeln!(file, "\"Dr. D, M.Kom\",NIP,001").unwrap();
    writeln!(file, "Dr. E,NUP,002").unwrap();
    drop(file);

    let directory = load_faculty_directory(&path).unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(directory.get("001").unwrap().name, "Dr. D, M.Kom");
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.txt");
    std::fs::write(&path, "nama,jenis_id,id\n").unwrap();

    let err = load_faculty_directory(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn repeated_headers_still_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dosen.xlsx");
    write_xlsx(
        &path,
        &["Nama", "jenis_id", "id", "keterangan", "keterangan", "nama"],
        &[&["Dr. Sari", "NIP", "123", "aktif", "cuti", "Sari"]],
    );

    let directory = load_faculty_directory(&path).unwrap();
    assert_eq!(directory.len(), 1);
    let member = directory.get("123").unwrap();
    assert_eq!(member.name, "Dr. Sari");
}
