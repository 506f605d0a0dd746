//! Memory records: the read-only scrapbook data every game draws from.
//!
//! The JSON shape matches the scrapbook's data file (`name`, `lat`, `lng`,
//! `ggmaps`, `type`, `detail[]`), so an exported memory list can be handed to
//! [`load_records`] unchanged.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{ArcadeError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Romantic,
    Funny,
    Chaos,
    Chill,
    Foodie,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Romantic,
        Mood::Funny,
        Mood::Chaos,
        Mood::Chill,
        Mood::Foodie,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Romantic => "romantic",
            Mood::Funny => "funny",
            Mood::Chaos => "chaos",
            Mood::Chill => "chill",
            Mood::Foodie => "foodie",
        }
    }
}

/// One dated entry at a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryMoment {
    /// Free-form timestamp, usually `"HH:mm dd/MM/yyyy"`.
    pub date: String,
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "desc")]
    pub note: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// 1-5 stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// A place and the moments that happened there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "ggmaps")]
    pub map_link: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "detail")]
    pub moments: Vec<MemoryMoment>,
}

impl MemoryRecord {
    pub fn first_image(&self) -> Option<&str> {
        self.moments.iter().find_map(|m| m.image.as_deref())
    }

    pub fn has_image(&self) -> bool {
        self.first_image().is_some()
    }
}

/// Parse a JSON array of records and check rating bounds.
pub fn load_records(json: &str) -> Result<Vec<MemoryRecord>> {
    let records: Vec<MemoryRecord> = serde_json::from_str(json)?;
    for record in &records {
        if record.name.trim().is_empty() {
            return Err(ArcadeError::InvalidRecord {
                name: record.name.clone(),
                reason: "empty place name".into(),
            });
        }
        for moment in &record.moments {
            if let Some(rating) = moment.rating {
                if !(1..=5).contains(&rating) {
                    return Err(ArcadeError::InvalidRecord {
                        name: record.name.clone(),
                        reason: format!("rating {rating} outside 1-5"),
                    });
                }
            }
        }
    }
    Ok(records)
}

/// Every image referenced by a moment, in record order.
pub fn all_images(records: &[MemoryRecord]) -> Vec<&str> {
    records
        .iter()
        .flat_map(|r| r.moments.iter().filter_map(|m| m.image.as_deref()))
        .collect()
}

// --- Timestamps --------------------------------------------------------------

/// Calendar position of a moment. Field order makes the derived `Ord` chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MomentDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl MomentDate {
    /// Finds the first `dd/MM/yyyy` and the first `HH:mm` in `text`.
    /// A missing time reads as 12:00. Ranges such as `13:12-18:04` use their start.
    pub fn parse(text: &str) -> Option<MomentDate> {
        let mut date = None;
        let mut time = None;
        for piece in text.split(|c: char| c.is_whitespace() || c == '-') {
            let piece = piece.trim_matches(|c: char| !c.is_ascii_digit());
            if date.is_none() {
                date = parse_day(piece);
            }
            if time.is_none() {
                time = parse_clock(piece);
            }
        }
        let (day, month, year) = date?;
        let (hour, minute) = time.unwrap_or((12, 0));
        Some(MomentDate {
            year,
            month,
            day,
            hour,
            minute,
        })
    }
}

fn parse_day(piece: &str) -> Option<(u8, u8, u16)> {
    let mut parts = piece.split('/');
    let day = short_number(parts.next()?)?;
    let month = short_number(parts.next()?)?;
    let year = parts.next()?;
    if parts.next().is_some() || year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    Some((day, month, year.parse().ok()?))
}

fn parse_clock(piece: &str) -> Option<(u8, u8)> {
    let (h, m) = piece.split_once(':')?;
    let hour = short_number(h)?;
    let minute = short_number(m)?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

fn short_number(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// --- Gallery filter ----------------------------------------------------------

/// Gallery filter; every populated criterion must be met by some moment of the record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryFilter {
    pub query: Option<String>,
    pub year: Option<String>,
    /// 0 disables the rating filter.
    pub min_rating: u8,
    pub mood: Option<Mood>,
}

impl MemoryFilter {
    pub fn matches(&self, record: &MemoryRecord) -> bool {
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = record.name.to_lowercase().contains(&query)
                || record.moments.iter().any(|m| {
                    m.note.to_lowercase().contains(&query) || m.date.contains(&query)
                });
            if !hit {
                return false;
            }
        }
        if let Some(year) = self.year.as_deref() {
            if !record.moments.iter().any(|m| m.date.contains(year)) {
                return false;
            }
        }
        if self.min_rating > 0
            && !record
                .moments
                .iter()
                .any(|m| m.rating.unwrap_or(0) >= self.min_rating)
        {
            return false;
        }
        if let Some(mood) = self.mood {
            if !record.moments.iter().any(|m| m.mood == Some(mood)) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, records: &'a [MemoryRecord]) -> Vec<&'a MemoryRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// "Surprise me": a uniformly chosen record among those passing `filter`.
pub fn pick_random<'a, R: Rng + ?Sized>(
    records: &'a [MemoryRecord],
    filter: &MemoryFilter,
    rng: &mut R,
) -> Option<&'a MemoryRecord> {
    filter.apply(records).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn moment(date: &str, note: &str, image: Option<&str>, rating: Option<u8>, mood: Option<Mood>) -> MemoryMoment {
        MemoryMoment {
            date: date.into(),
            image: image.map(Into::into),
            note: note.into(),
            media: Vec::new(),
            mood,
            rating,
        }
    }

    fn record(name: &str, moments: Vec<MemoryMoment>) -> MemoryRecord {
        MemoryRecord {
            name: name.into(),
            lat: 21.0,
            lng: 105.8,
            map_link: "https://maps.example/x".into(),
            kind: None,
            moments,
        }
    }

    #[test]
    fn parses_time_and_day() {
        let d = MomentDate::parse("18:44 04/12/2024").unwrap();
        assert_eq!((d.day, d.month, d.year, d.hour, d.minute), (4, 12, 2024, 18, 44));
    }

    #[test]
    fn parses_time_range_using_start() {
        let d = MomentDate::parse("13:12-18:04 14/12/2024").unwrap();
        assert_eq!((d.hour, d.minute), (13, 12));
        assert_eq!(d.day, 14);
    }

    #[test]
    fn missing_time_defaults_to_noon() {
        let d = MomentDate::parse("01/01/2025").unwrap();
        assert_eq!((d.hour, d.minute), (12, 0));
        assert!(MomentDate::parse("sometime last winter").is_none());
    }

    #[test]
    fn chronological_ordering() {
        let a = MomentDate::parse("22:00 10/12/2024").unwrap();
        let b = MomentDate::parse("11:59 14/12/2024").unwrap();
        assert!(a < b);
    }

    #[test]
    fn load_rejects_bad_rating() {
        let json = r#"[{"name":"Cafe","lat":1.0,"lng":2.0,"ggmaps":"x","detail":[{"date":"d","desc":"n","rating":9}]}]"#;
        assert!(matches!(load_records(json), Err(ArcadeError::InvalidRecord { .. })));
    }

    #[test]
    fn load_reads_scrapbook_shape() {
        let json = r#"[{"name":"Home","lat":1.0,"lng":2.0,"ggmaps":"x","type":"home",
            "detail":[{"date":"19:32 23/02/2025","img":"a.jpg","desc":"plant","mood":"chill","rating":4}]}]"#;
        let records = load_records(json).unwrap();
        assert_eq!(records[0].kind.as_deref(), Some("home"));
        assert_eq!(records[0].first_image(), Some("a.jpg"));
        assert_eq!(records[0].moments[0].mood, Some(Mood::Chill));
    }

    #[test]
    fn filter_combines_criteria() {
        let records = vec![
            record("Cafe", vec![moment("13:00 14/12/2024", "studying", None, Some(4), Some(Mood::Chill))]),
            record("Station", vec![moment("19:42 14/12/2025", "photos", None, Some(5), Some(Mood::Funny))]),
        ];
        let filter = MemoryFilter {
            year: Some("2024".into()),
            min_rating: 4,
            ..Default::default()
        };
        let hits = filter.apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cafe");

        let by_query = MemoryFilter {
            query: Some("PHOTO".into()),
            ..Default::default()
        };
        assert_eq!(by_query.apply(&records)[0].name, "Station");

        let by_mood = MemoryFilter {
            mood: Some(Mood::Romantic),
            ..Default::default()
        };
        assert!(by_mood.apply(&records).is_empty());
    }

    #[test]
    fn pick_random_respects_filter() {
        let records = vec![
            record("A", vec![moment("d", "n", None, Some(1), None)]),
            record("B", vec![moment("d", "n", None, Some(5), None)]),
        ];
        let filter = MemoryFilter {
            min_rating: 5,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(pick_random(&records, &filter, &mut rng).unwrap().name, "B");
        }
        let none = MemoryFilter {
            query: Some("zzz".into()),
            ..Default::default()
        };
        assert!(pick_random(&records, &none, &mut rng).is_none());
    }
}
