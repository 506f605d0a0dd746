// Built-in scrapbook memories.
// Used whenever the host page does not supply its own record list.

use std::sync::OnceLock;

use crate::records::{MemoryMoment, MemoryRecord, Mood};

struct PlaceSeed {
    name: &'static str,
    lat: f64,
    lng: f64,
    link: &'static str,
    kind: Option<&'static str>,
    moments: &'static [MomentSeed],
}

struct MomentSeed {
    date: &'static str,
    img: Option<&'static str>,
    note: &'static str,
    rating: Option<u8>,
    mood: Option<Mood>,
}

static PLACES: &[PlaceSeed] = &[
    PlaceSeed {
        name: "Lotte Center Hanoi 🏬",
        lat: 21.031603,
        lng: 105.812795,
        link: "https://maps.app.goo.gl/UtzSzmh1QsN3xC7f9",
        kind: None,
        moments: &[MomentSeed {
            date: "18:44 04/12/2024",
            img: Some("https://picsum.photos/400/300?random=1"),
            note: "Second day at the new office. The first ride across the city in the December cold, and a tiny gift to keep safe.",
            rating: Some(5),
            mood: Some(Mood::Romantic),
        }],
    },
    PlaceSeed {
        name: "58/3 Trần Bình 🏠",
        lat: 21.033546,
        lng: 105.776736,
        link: "https://maps.app.goo.gl/sH2wy4Bu52gVQxE77",
        kind: Some("home"),
        moments: &[
            MomentSeed {
                date: "19:32 23/02/2025",
                img: Some("https://picsum.photos/400/300?random=2"),
                note: "A little potted plant arrived at the door. Eight hours of light a day and water two or three times a week.",
                rating: Some(4),
                mood: Some(Mood::Chill),
            },
            MomentSeed {
                date: "17:50 22/02/2025",
                img: Some("https://picsum.photos/400/300?random=3"),
                note: "Handed over a box of hair clips to replace the ones that went missing.",
                rating: Some(5),
                mood: Some(Mood::Happy),
            },
            MomentSeed {
                date: "22:00 10/12/2024",
                img: Some("https://picsum.photos/400/300?random=4"),
                note: "Late rehearsal at work, then a warm bowl of rice waiting at home.",
                rating: Some(4),
                mood: Some(Mood::Foodie),
            },
        ],
    },
    PlaceSeed {
        name: "Quán Bún Vịt Quay 🍜",
        lat: 21.034530,
        lng: 105.782795,
        link: "https://maps.app.goo.gl/4K8oWDU6dgKJcLwq7",
        kind: None,
        moments: &[MomentSeed {
            date: "11:59 14/12/2024",
            img: Some("https://picsum.photos/400/300?random=5"),
            note: "Roast duck noodles from the famous shop. First meal together in the city, and far too much loud laughing.",
            rating: Some(5),
            mood: Some(Mood::Foodie),
        }],
    },
    PlaceSeed {
        name: "Chim Xanh Cafe ☕",
        lat: 21.014981,
        lng: 105.812176,
        link: "https://maps.app.goo.gl/rCmpP7TYrNaW1qB99",
        kind: None,
        moments: &[MomentSeed {
            date: "13:12-18:04 14/12/2024",
            img: Some("https://picsum.photos/400/300?random=6"),
            note: "Came to study, ended up taking photos and helping a friend through an English exam instead.",
            rating: Some(4),
            mood: Some(Mood::Chill),
        }],
    },
    PlaceSeed {
        name: "Phố Hàng Mã ☃️",
        lat: 21.036761,
        lng: 105.847701,
        link: "https://maps.app.goo.gl/VfNM6sFhXJAS8Xd6A",
        kind: None,
        moments: &[MomentSeed {
            date: "18:19 14/12/2024",
            img: Some("https://picsum.photos/400/300?random=7"),
            note: "Christmas decorations in gold, green and red along the whole street. Got a little lost on purpose.",
            rating: Some(5),
            mood: Some(Mood::Romantic),
        }],
    },
    PlaceSeed {
        name: "Ga Hà Nội 🚉",
        lat: 21.024392,
        lng: 105.840952,
        link: "https://maps.app.goo.gl/mjNcmgFBPNaFxMsd8",
        kind: None,
        moments: &[MomentSeed {
            date: "19:42 14/12/2024",
            img: Some("https://picsum.photos/400/300?random=10"),
            note: "Hungry and looking for dinner, but the station looked too pretty not to stop for photos.",
            rating: Some(4),
            mood: Some(Mood::Funny),
        }],
    },
    PlaceSeed {
        name: "Hồ Gươm 🌳",
        lat: 21.028720,
        lng: 105.852140,
        link: "https://maps.app.goo.gl/hoanKiemLake",
        kind: None,
        moments: &[MomentSeed {
            date: "07:15 12/07/2025",
            img: Some("https://picsum.photos/400/300?random=11"),
            note: "An early summer walk around the lake before the heat, with iced coffee from a street cart.",
            rating: Some(5),
            mood: Some(Mood::Happy),
        }],
    },
    PlaceSeed {
        name: "Tây Hồ Sunset 🌅",
        lat: 21.058000,
        lng: 105.818000,
        link: "https://maps.app.goo.gl/westLakeSunset",
        kind: None,
        moments: &[MomentSeed {
            date: "17:40 03/06/2025",
            img: Some("https://picsum.photos/400/300?random=12"),
            note: "The scooter broke down halfway there, so the sunset was watched from a curb. Still counts.",
            rating: Some(3),
            mood: Some(Mood::Chaos),
        }],
    },
    PlaceSeed {
        name: "Karaoke Night 🎤",
        lat: 21.020000,
        lng: 105.830000,
        link: "https://maps.app.goo.gl/karaokeNight",
        kind: None,
        moments: &[MomentSeed {
            date: "21:05 31/01/2025",
            img: None,
            note: "Three hours of terrible duets. Nobody is allowed to see the recordings.",
            rating: Some(4),
            mood: Some(Mood::Funny),
        }],
    },
];

/// The built-in record list, built once.
pub fn builtin_records() -> &'static [MemoryRecord] {
    static RECORDS: OnceLock<Vec<MemoryRecord>> = OnceLock::new();
    RECORDS.get_or_init(|| PLACES.iter().map(build_record).collect())
}

fn build_record(seed: &PlaceSeed) -> MemoryRecord {
    MemoryRecord {
        name: seed.name.to_string(),
        lat: seed.lat,
        lng: seed.lng,
        map_link: seed.link.to_string(),
        kind: seed.kind.map(str::to_string),
        moments: seed
            .moments
            .iter()
            .map(|m| MemoryMoment {
                date: m.date.to_string(),
                image: m.img.map(str::to_string),
                note: m.note.to_string(),
                media: Vec::new(),
                mood: m.mood,
                rating: m.rating,
            })
            .collect(),
    }
}
