//! Spreadsheet export of table rows.
//!
//! Rows are written as `;`-separated CSV with a UTF-8 BOM so Excel opens
//! them with the right encoding and column split, then handed to the
//! browser as a download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written to the spreadsheet.
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

const BOM: &str = "\u{FEFF}";

/// Serialises a header line plus exactly one line per row.
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .map_err(|e| format!("Failed to write header: {}", e))?;
    for item in data {
        writer
            .write_record(item.to_csv_row())
            .map_err(|e| format!("Failed to write row: {}", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV: {}", e))?;
    let body = String::from_utf8(bytes).map_err(|e| format!("Invalid UTF-8 in CSV: {}", e))?;
    Ok(format!("{BOM}{body}"))
}

/// `users` -> `users_2024-05-01.csv`
pub fn export_filename(prefix: &str) -> String {
    format!("{}_{}.csv", prefix, chrono::Local::now().format("%Y-%m-%d"))
}

/// Writes `data` to a CSV file and triggers the browser download. An empty
/// slice still produces the header line.
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let content = build_csv(data)?;
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)?;
    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        note: &'static str,
    }

    impl ExcelExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    fn data_lines(csv: &str) -> Vec<&str> {
        csv.trim_start_matches(BOM)
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .skip(1)
            .collect()
    }

    #[test]
    fn test_one_line_per_row() {
        let rows: Vec<Line> = (0..7).map(|_| Line { name: "Ada", note: "ok" }).collect();
        let csv = build_csv(&rows).unwrap();
        assert!(csv.starts_with(BOM));
        assert!(csv.trim_start_matches(BOM).starts_with("Name;Note\r\n"));
        assert_eq!(data_lines(&csv).len(), 7);
    }

    #[test]
    fn test_no_rows_gives_header_only() {
        let csv = build_csv::<Line>(&[]).unwrap();
        assert_eq!(csv, format!("{BOM}Name;Note\r\n"));
        assert!(data_lines(&csv).is_empty());
    }

    #[test]
    fn test_cells_with_delimiters_are_quoted() {
        let rows = [Line { name: "Eze; Chioma", note: "said \"hi\"" }];
        let csv = build_csv(&rows).unwrap();
        assert_eq!(data_lines(&csv), vec![r#""Eze; Chioma";"said ""hi""""#]);
    }

    #[test]
    fn test_export_filename() {
        let name = export_filename("users");
        assert!(name.starts_with("users_"));
        assert!(name.ends_with(".csv"));
    }
}
