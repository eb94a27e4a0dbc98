#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::io::{Cursor, Read};
    use taskify::libs::export::{ExportFormat, ExportRow, Exporter, StatusColor};
    use taskify::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<Task>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut first = Task::new("2024-06-14").with_times("09:00", "10:30").with_status("Completed");
            first.client_name = Some("Acme".to_string());
            first.project_name = Some("Website".to_string());
            first.description = Some("Landing page, hero section".to_string());
            let second = Task::new("2024-06-15").with_times("13:00", "13:20").with_status("review");
            let third = Task::new("2024-06-15");
            ExportTestContext {
                temp_dir,
                tasks: vec![first, second, third],
            }
        }
    }

    #[test]
    fn test_status_color_is_case_insensitive() {
        assert_eq!(StatusColor::from_status(Some("completed")), Some(StatusColor::Green));
        assert_eq!(StatusColor::from_status(Some("Completed")), Some(StatusColor::Green));
        assert_eq!(StatusColor::from_status(Some("INPROGRESS")), Some(StatusColor::Yellow));
        assert_eq!(StatusColor::from_status(Some("pending")), Some(StatusColor::Blue));
        assert_eq!(StatusColor::from_status(Some("Blocked")), Some(StatusColor::Red));
        assert_eq!(StatusColor::from_status(Some("unknown")), None);
        assert_eq!(StatusColor::from_status(Some("in progress")), None);
        assert_eq!(StatusColor::from_status(None), None);
    }

    #[test]
    fn test_status_color_argb() {
        assert_eq!(StatusColor::Green.argb(), "FF2ECC71");
        assert_eq!(StatusColor::Yellow.argb(), "FFF1C40F");
        assert_eq!(StatusColor::Blue.argb(), "FF3498DB");
        assert_eq!(StatusColor::Red.argb(), "FFE74C3C");
    }

    #[test]
    fn test_file_name_uses_operator_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(Exporter::new("Alice").file_name(ExportFormat::Excel, date), "Alice_05_06_2024.xlsx");
        assert_eq!(Exporter::new("Alice").file_name(ExportFormat::Csv, date), "Alice_05_06_2024.csv");
        assert_eq!(Exporter::new("a/b\"c").file_name(ExportFormat::Excel, date), "a_b_c_05_06_2024.xlsx");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_rows_derive_duration_and_color(ctx: &mut ExportTestContext) {
        let rows = Exporter::new("Alice").rows(&ctx.tasks);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            ExportRow {
                client_name: "Acme".to_string(),
                project_name: "Website".to_string(),
                date: "2024-06-14".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:30".to_string(),
                duration: "1h 30m".to_string(),
                description: "Landing page, hero section".to_string(),
                status: "Completed".to_string(),
                status_color: Some(StatusColor::Green),
            }
        );
        assert_eq!(rows[1].duration, "20m");
        assert_eq!(rows[1].status_color, None);
        assert_eq!(rows[2].duration, "0m");
        assert_eq!(rows[2].status, "");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_does_not_touch_tasks(ctx: &mut ExportTestContext) {
        let before = ctx.tasks.clone();
        Exporter::new("Alice").render(ExportFormat::Excel, &ctx.tasks).unwrap();
        assert_eq!(ctx.tasks, before);
        assert!(ctx.tasks.iter().all(|t| !t.extra.contains_key("duration")));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let bytes = Exporter::new("Alice").render(ExportFormat::Excel, &ctx.tasks).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");

        let empty = Exporter::new("Alice").render(ExportFormat::Excel, &[]).unwrap();
        assert_eq!(&empty[..2], b"PK");
    }

    fn workbook_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut part).unwrap();
        part
    }

    /// Returns the opening `<c ...>` tag of `cell` in the sheet XML.
    fn cell_tag<'a>(sheet: &'a str, cell: &str) -> &'a str {
        let start = sheet.find(&format!("<c r=\"{}\"", cell)).unwrap();
        let end = start + sheet[start..].find('>').unwrap();
        &sheet[start..=end]
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel_fills_status_cell_only(ctx: &mut ExportTestContext) {
        let bytes = Exporter::new("Alice").render(ExportFormat::Excel, &ctx.tasks).unwrap();

        let styles = workbook_part(&bytes, "xl/styles.xml");
        assert!(styles.contains("2ECC71"), "green fill missing from styles");

        let sheet = workbook_part(&bytes, "xl/worksheets/sheet1.xml");
        // row 2 is the "Completed" task
        assert!(cell_tag(&sheet, "H2").contains(" s=\""));
        assert!(!cell_tag(&sheet, "A2").contains(" s=\""));
        assert!(!cell_tag(&sheet, "G2").contains(" s=\""));
        // row 3 has an unrecognised status and gets no fill
        assert!(!cell_tag(&sheet, "H3").contains(" s=\""));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new("Alice").save(ExportFormat::Csv, &ctx.tasks, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Client Name,Project Name,Date,Start Time,End Time,Duration,Description,Status"
        );
        assert_eq!(
            lines[1],
            "Acme,Website,2024-06-14,09:00,10:30,1h 30m,\"Landing page, hero section\",Completed"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let bytes = Exporter::new("Alice").render(ExportFormat::Json, &ctx.tasks).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["duration"], "1h 30m");
        assert_eq!(rows[0]["statusColor"], "green");
        assert!(rows[1].get("statusColor").is_none());
    }
}
