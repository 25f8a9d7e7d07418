use serde::Serialize;

/// Output column order. Every exported record carries exactly these nine
/// fields regardless of which extraction pass produced it.
pub const COLUMNS: [&str; 9] = [
    "Type",
    "URL",
    "Title",
    "Visit Count",
    "Last Visit (UTC)",
    "Visit Time (UTC)",
    "Download Path",
    "Download Size (bytes)",
    "Referrer",
];

#[derive(Debug, Clone)]
pub struct VisitRecord {
    pub url: String,
    pub title: Option<String>,
    pub visit_count: Option<i64>,
    pub last_visit: Option<String>,
    pub visit_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DownloadRecord {
    pub url: Option<String>,
    pub path: Option<String>,
    pub size_bytes: Option<i64>,
    pub start_time: Option<String>,
    pub referrer: Option<String>,
}

/// One extracted record. Each variant carries only the fields meaningful to
/// its kind; the uniform table shape is produced at the export boundary via
/// [`HistoryRecord::to_table_row`].
#[derive(Debug, Clone)]
pub enum HistoryRecord {
    Visit(VisitRecord),
    Download(DownloadRecord),
}

/// Flat nine-column row, field order matching [`COLUMNS`]. Absent values
/// serialize as empty strings so CSV and JSONL output stay shape-identical.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Visit Count")]
    pub visit_count: String,
    #[serde(rename = "Last Visit (UTC)")]
    pub last_visit: String,
    #[serde(rename = "Visit Time (UTC)")]
    pub visit_time: String,
    #[serde(rename = "Download Path")]
    pub download_path: String,
    #[serde(rename = "Download Size (bytes)")]
    pub download_size: String,
    #[serde(rename = "Referrer")]
    pub referrer: String,
}

impl HistoryRecord {
    pub fn kind_label(&self) -> &'static str {
        match self {
            HistoryRecord::Visit(_) => "Visit",
            HistoryRecord::Download(_) => "Download",
        }
    }

    pub fn to_table_row(&self) -> TableRow {
        match self {
            HistoryRecord::Visit(visit) => TableRow {
                kind: self.kind_label().to_string(),
                url: visit.url.clone(),
                title: visit.title.clone().unwrap_or_default(),
                visit_count: visit.visit_count.map(|v| v.to_string()).unwrap_or_default(),
                last_visit: visit.last_visit.clone().unwrap_or_default(),
                visit_time: visit.visit_time.clone().unwrap_or_default(),
                download_path: String::new(),
                download_size: String::new(),
                referrer: String::new(),
            },
            HistoryRecord::Download(download) => TableRow {
                kind: self.kind_label().to_string(),
                url: download.url.clone().unwrap_or_default(),
                title: String::new(),
                visit_count: String::new(),
                last_visit: String::new(),
                // A download's start time occupies the visit-time column.
                visit_time: download.start_time.clone().unwrap_or_default(),
                download_path: download.path.clone().unwrap_or_default(),
                download_size: download
                    .size_bytes
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                referrer: download.referrer.clone().unwrap_or_default(),
            },
        }
    }
}
