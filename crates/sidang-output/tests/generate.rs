//! End-to-end rendering against a small hand-built `.docx`.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use sidang_model::{AdvisorCount, DocumentKind, FacultyMember, FormData, IdKind, MemoDetails};
use sidang_output::{
    GenerateRequest, Participants, TemplateSet, generate_document, memo_context, minutes_context,
};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const DOCUMENT: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    r#"<w:p><w:r><w:t xml:space="preserve">Pada hari {{ hari }}, </w:t></w:r>"#,
    r#"<w:r><w:t>{{tanggal_</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>bulan_tahun}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>Ujian {{ urutan }} atas nama {{ nama_mahasiswa }} ({{ npm }})</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>Ketua: {{ penguji_1 }} {{ nipnup_penguji1 }}. {{ nomor_nipnup_penguji1 }}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>{{ id_nd }}</w:t></w:r></w:p>"#,
    r#"</w:body></w:document>"#,
);

const HEADER: &str = r#"<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:p><w:r><w:t>Prodi {{ prodi }}</w:t></w:r></w:p></w:hdr>"#;

const STYLES: &str = r#"<w:styles><w:t>{{ npm }} stays literal here</w:t></w:styles>"#;

fn write_template(path: &Path) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    writer.start_file("[Content_Types].xml", deflated).unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer.start_file("word/document.xml", deflated).unwrap();
    writer.write_all(DOCUMENT.as_bytes()).unwrap();
    writer.start_file("word/header1.xml", deflated).unwrap();
    writer.write_all(HEADER.as_bytes()).unwrap();
    writer.start_file("word/styles.xml", deflated).unwrap();
    writer.write_all(STYLES.as_bytes()).unwrap();
    writer.start_file("word/media/image1.png", stored).unwrap();
    writer.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

    let bytes = writer.finish().unwrap().into_inner();
    std::fs::write(path, bytes).unwrap();
}

fn read_entry(path: &Path, name: &str) -> Vec<u8> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();
    content
}

fn read_text(path: &Path, name: &str) -> String {
    String::from_utf8(read_entry(path, name)).unwrap()
}

fn form() -> FormData {
    FormData {
        student_name: "Budi Santoso".to_string(),
        student_number: "2010511001".to_string(),
        thesis_title: "Sistem <Pakar> & Inferensi".to_string(),
        attempt: 1,
        exam_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        weekday: "Rabu".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:30".to_string(),
        advisor_1: "Dr. A".to_string(),
        advisor_2: String::new(),
        reviewer_1: "Dr. B".to_string(),
        reviewer_2: "Dr. C".to_string(),
    }
}

fn memo() -> MemoDetails {
    MemoDetails {
        memo_id: "ND-07/2025".to_string(),
        exam_location: "Ruang 301".to_string(),
        study_program: "S1 Informatika".to_string(),
    }
}

#[test]
fn generates_both_documents_into_student_folder() {
    let dir = TempDir::new().unwrap();
    let templates = TemplateSet::new(dir.path().join("resources"));
    std::fs::create_dir_all(templates.dir()).unwrap();
    for kind in DocumentKind::ALL {
        write_template(&templates.path_for(kind, AdvisorCount::One));
    }

    let a = FacultyMember::new("Dr. A", IdKind::Nip, "111");
    let b = FacultyMember::new("Dr. B", IdKind::Nup, "222");
    let c = FacultyMember::new("Dr. C", IdKind::Nip, "333");
    let people = Participants {
        advisor_1: Some(&a),
        advisor_2: None,
        reviewer_1: Some(&b),
        reviewer_2: Some(&c),
    };
    let form = form();
    let output_root = dir.path().join("out");

    let mut written = Vec::new();
    for (kind, context) in [
        (DocumentKind::MinutesAndGrades, minutes_context(&form, &people)),
        (DocumentKind::Memo, memo_context(&form, &memo(), &people)),
    ] {
        let request = GenerateRequest {
            kind,
            template: templates
                .resolve(kind, form.advisor_count())
                .unwrap(),
            output_root: output_root.clone(),
            student_name: form.student_name.clone(),
            student_number: form.student_number.clone(),
            context,
            file_name: None,
        };
        written.push(generate_document(&request).unwrap());
    }

    let folder = output_root.join("Budi Santoso_2010511001");
    assert_eq!(
        written[0],
        folder.join("Berita Acara dan Nilai Ujian Skripsi_Budi Santoso_2010511001.docx")
    );
    assert_eq!(
        written[1],
        folder.join("Undangan Nota Dinas Ujian Skripsi_Budi Santoso_2010511001.docx")
    );

    let minutes = read_text(&written[0], "word/document.xml");
    assert!(minutes.contains("Pada hari Rabu, "));
    assert!(minutes.contains("5 Maret 2025"));
    assert!(minutes.contains("<w:rPr><w:b/></w:rPr>"));
    assert!(minutes.contains("Ujian Pertama atas nama Budi Santoso (2010511001)"));
    assert!(minutes.contains("Ketua: Dr. B NUP. 222"));
    assert!(!minutes.contains("{{"));
    assert!(!minutes.contains("ND-07/2025"));

    let memo_doc = read_text(&written[1], "word/document.xml");
    assert!(memo_doc.contains("ND-07/2025"));
    assert!(read_text(&written[1], "word/header1.xml").contains("Prodi S1 Informatika"));

    assert_eq!(read_text(&written[1], "word/styles.xml"), STYLES);
    assert_eq!(
        read_entry(&written[1], "word/media/image1.png"),
        vec![0x89, b'P', b'N', b'G']
    );

    let leftovers: Vec<_> = std::fs::read_dir(&folder)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn custom_file_name_is_sanitized() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.docx");
    write_template(&template);

    let request = GenerateRequest {
        kind: DocumentKind::Memo,
        template,
        output_root: dir.path().to_path_buf(),
        student_name: "Sari".to_string(),
        student_number: "99".to_string(),
        context: [("npm", "99")].into_iter().collect(),
        file_name: Some("Nota: Dinas?  Final".to_string()),
    };
    let path = generate_document(&request).unwrap();
    assert_eq!(path, dir.path().join("Sari_99").join("Nota Dinas Final.docx"));
}

#[test]
fn thesis_title_is_xml_escaped() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.docx");
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(b"<w:body><w:t>{{ judul_skripsi }}</w:t></w:body>")
        .unwrap();
    std::fs::write(&template, writer.finish().unwrap().into_inner()).unwrap();

    let people = Participants::default();
    let request = GenerateRequest {
        kind: DocumentKind::MinutesAndGrades,
        template,
        output_root: dir.path().to_path_buf(),
        student_name: "Budi".to_string(),
        student_number: "1".to_string(),
        context: minutes_context(&form(), &people),
        file_name: None,
    };
    let path = generate_document(&request).unwrap();
    let xml = read_text(&path, "word/document.xml");
    assert!(xml.contains("Sistem &lt;Pakar&gt; &amp; Inferensi"));
}

#[test]
fn corrupt_template_is_reported() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("broken.docx");
    std::fs::write(&template, b"not a zip").unwrap();

    let request = GenerateRequest {
        kind: DocumentKind::Memo,
        template,
        output_root: dir.path().to_path_buf(),
        student_name: "Budi".to_string(),
        student_number: "1".to_string(),
        context: Default::default(),
        file_name: None,
    };
    let err = generate_document(&request).unwrap_err();
    assert!(matches!(err, sidang_output::OutputError::TemplateArchive { .. }));
}
