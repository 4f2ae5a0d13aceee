//! Shared fixtures: a small reference catalog and detection-record builders.

use shelfcheck_core::{
    BoundaryKey, Catalog, CatalogId, DetectionRecord, Placement, Point, SourceId,
};

/// Ten-entry catalog in the on-disk JSON shape, keyed by decimal id.
pub const SAMPLE_CATALOG_JSON: &str = r#"{
    "0": {"alt_title": "广东百科全書;", "call_number": "DS793.K7 K8446 1995", "lang": "CHN"},
    "1": {"alt_title": "广东历史:乡土教材", "call_number": "DS793 .K7 K847 1978", "lang": "CHN"},
    "2": {"alt_title": "广东省市地县概况", "call_number": "DS793.K7 K8477 1985", "lang": "CHN"},
    "3": {"alt_title": "广东乡土地理:广东省中学试用课本", "call_number": "DS793 .K7 K848 1979", "lang": "CHN"},
    "4": {"alt_title": "嶺南文化新探究論文集", "call_number": "DS793.K7 K85 1996", "lang": "CHN"},
    "5": {"alt_title": "廣東鄉土地理教科書", "call_number": "DS793 .K7 K86, V.1-2   ", "lang": "CHN"},
    "6": {"alt_title": "广东历史人物辞典", "call_number": "DS793.K7 K87 2001", "lang": "CHN"},
    "7": {"alt_title": "（萬曆）粤大記:32卷", "call_number": "DS793.K7 K88 1990", "lang": "CHN"},
    "8": {"alt_title": "廣東省志.文化艺术志", "call_number": "DS793 .K7 K91402 2001 ", "lang": "CHN"},
    "9": {"alt_title": "广东省志.旅游志", "call_number": "DS793 .K7 K91403 1999 ", "lang": "CHN"}
}"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG_JSON).expect("fixture catalog is valid")
}

fn ids(candidates: &[Option<u32>]) -> Vec<Option<CatalogId>> {
    candidates.iter().map(|c| c.map(CatalogId)).collect()
}

/// An unresolved record observed at `(x, y)`.
pub fn unresolved(source: &str, candidates: &[Option<u32>], x: f64, y: f64) -> DetectionRecord {
    DetectionRecord {
        source_id: SourceId::from(source),
        boundary_key: None,
        candidate_ids: ids(candidates),
        placement: Some(Placement::Point(Point::new(x, y))),
    }
}

/// A record skipped between neighbours `left` and `right`, spanning `left_x..right_x`.
pub fn skipped(
    source: &str,
    left: u32,
    right: u32,
    candidates: &[Option<u32>],
    left_x: f64,
    right_x: f64,
) -> DetectionRecord {
    DetectionRecord {
        source_id: SourceId::from(source),
        boundary_key: Some(BoundaryKey::new(left, right)),
        candidate_ids: ids(candidates),
        placement: Some(Placement::Span(Point::new(left_x, 0.0), Point::new(right_x, 0.0))),
    }
}

/// Three sources exercising every traversal path.
///
/// Expected review order: 0, 2, 1, 3, 4 (shelf-a), 5, 6 (shelf-b), 7, 8 (shelf-c).
pub fn sample_shelf() -> Vec<DetectionRecord> {
    vec![
        unresolved("shelf-a", &[Some(1), None, Some(3)], 120.0, 40.0),
        skipped("shelf-a", 0, 1, &[Some(2)], 200.0, 260.0),
        unresolved("shelf-a", &[Some(4)], 320.0, 44.0),
        skipped("shelf-a", 0, 1, &[Some(5)], 200.0, 260.0),
        skipped("shelf-a", 2, 3, &[Some(6)], 400.0, 455.0),
        skipped("shelf-b", 7, 8, &[Some(7)], 10.0, 90.0),
        skipped("shelf-b", 7, 8, &[None, Some(8)], 10.0, 90.0),
        unresolved("shelf-c", &[], 15.0, 15.0),
        unresolved("shelf-c", &[Some(9), Some(99)], 60.0, 15.0),
    ]
}

/// The review order `sample_shelf` must produce.
pub const SAMPLE_SHELF_ORDER: [usize; 9] = [0, 2, 1, 3, 4, 5, 6, 7, 8];

/// Deterministic synthetic records for benches and stress tests.
///
/// Record `k` of source `s` is unresolved when `k % 3 == 0`, otherwise skipped
/// into one of `groups` boundary groups.
pub fn synthetic_records(sources: usize, per_source: usize, groups: u32) -> Vec<DetectionRecord> {
    let groups = groups.max(1);
    let mut out = Vec::with_capacity(sources * per_source);
    for s in 0..sources {
        let source = format!("scan-{s:04}");
        for k in 0..per_source {
            let candidates = [Some((k % 10) as u32), None];
            if k % 3 == 0 {
                out.push(unresolved(&source, &candidates, k as f64, 0.0));
            } else {
                let g = (k as u32) % groups;
                out.push(skipped(&source, g, g + 1, &candidates, g as f64, g as f64 + 1.0));
            }
        }
    }
    out
}

/// Raw JSON for `sample_shelf`, in the pipeline's wire shape.
pub fn sample_shelf_json() -> String {
    let raw: Vec<serde_json::Value> = sample_shelf()
        .iter()
        .map(|r| {
            serde_json::json!({
                "source_id": r.source_id.as_str(),
                "boundary": r.boundary_key.map(|k| vec![k.left, k.right]),
                "candidate_ids": r.candidate_ids.iter().map(|c| c.map(|id| id.0)).collect::<Vec<_>>(),
                "placement": r.placement,
            })
        })
        .collect();
    serde_json::Value::Array(raw).to_string()
}
