use std::io::{Cursor, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::documents::RenderedDocument;
use super::domain::Locale;

pub const ARCHIVE_PREFIX: &str = "AI-Compliance-DE-EN";

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to write archive entry: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloadable container for one generated package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `AI-Compliance-DE-EN-<timestamp>.zip`, with `:` and `.` in the RFC 3339
/// timestamp replaced so the name is safe on every filesystem.
pub fn archive_file_name(generated_at: DateTime<Utc>) -> String {
    let stamp = generated_at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{ARCHIVE_PREFIX}-{stamp}.zip")
}

/// Write the `DE/` and `EN/` folders and every document into a zip.
pub fn assemble(
    documents: &[RenderedDocument],
    generated_at: DateTime<Utc>,
) -> Result<Archive, ArchiveError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for locale in Locale::ALL {
        writer.add_directory(format!("{}/", locale.folder()), options)?;
        for document in documents.iter().filter(|doc| doc.locale == locale) {
            writer.start_file(document.archive_path(), options)?;
            writer.write_all(&document.bytes)?;
        }
    }

    let bytes = writer.finish()?.into_inner();
    Ok(Archive {
        file_name: archive_file_name(generated_at),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Read;
    use zip::ZipArchive;

    fn document(locale: Locale, name: &str, body: &[u8]) -> RenderedDocument {
        RenderedDocument {
            title: name.to_string(),
            locale,
            file_name: name.to_string(),
            bytes: body.to_vec(),
        }
    }

    #[test]
    fn file_name_is_filesystem_safe() {
        let at = Utc
            .with_ymd_and_hms(2026, 10, 14, 9, 5, 7)
            .single()
            .expect("valid timestamp");
        assert_eq!(
            archive_file_name(at),
            "AI-Compliance-DE-EN-2026-10-14T09-05-07-000Z.zip"
        );
    }

    #[test]
    fn documents_land_in_their_locale_folder() {
        let docs = vec![
            document(Locale::En, "AI-Use-Policy.pdf", b"english"),
            document(Locale::De, "KI-Nutzungsrichtlinie.pdf", b"deutsch"),
        ];
        let archive = assemble(&docs, Utc::now()).expect("archive builds");

        let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).expect("readable zip");
        let mut names: Vec<_> = zip.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "DE/",
                "DE/KI-Nutzungsrichtlinie.pdf",
                "EN/",
                "EN/AI-Use-Policy.pdf",
            ]
        );

        let mut body = String::new();
        zip.by_name("DE/KI-Nutzungsrichtlinie.pdf")
            .expect("entry exists")
            .read_to_string(&mut body)
            .expect("entry readable");
        assert_eq!(body, "deutsch");
    }
}
