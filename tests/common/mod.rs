//! Shared fixtures for integration tests

#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a one-page PDF with the given document-info dictionary
pub fn write_pdf(path: &Path, info: Option<Dictionary>) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    if let Some(info) = info {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }
    doc.save(path).unwrap();
}

/// Write a one-page PDF whose only metadata entry is `Title`
pub fn write_titled_pdf(path: &Path, title: &str) {
    write_pdf(
        path,
        Some(dictionary! {
            "Title" => Object::string_literal(title),
        }),
    );
}

/// Write a PDF cut off in the middle of its first object
pub fn write_truncated_pdf(path: &Path) {
    let mut file = fs::File::create(path).unwrap();
    file.write_all(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n1 0 obj\n<<").unwrap();
    file.flush().unwrap();
}

/// Install a stand-in for `qpdf --check`: exits 2 with a diagnostic on stderr
/// for any file whose name contains "broken", 0 otherwise.
#[cfg(unix)]
pub fn fake_checker(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-qpdf");
    {
        let mut file = fs::File::create(&script).unwrap();
        file.write_all(
            b"#!/bin/sh\n\
              [ \"$1\" = \"--check\" ] || { echo \"usage: $0 --check file\" >&2; exit 64; }\n\
              case \"$2\" in\n\
                *broken*) echo \"$2: file is damaged\" >&2; exit 2 ;;\n\
              esac\n\
              echo \"No syntax or stream encoding errors found\"\n\
              exit 0\n",
        )
        .unwrap();
        file.sync_all().unwrap();
    }
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}
