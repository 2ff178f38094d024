//! Curated listening lists for each therapy condition.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use swarcure_core::models::therapy::Condition;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrackSource {
    Youtube,
    Spotify,
}

/// A streamable recording on an external platform.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub source: TrackSource,
}

impl Track {
    pub fn embed_url(&self) -> String {
        match self.source {
            TrackSource::Youtube => format!("https://www.youtube.com/embed/{}", self.id),
            TrackSource::Spotify => format!("https://open.spotify.com/embed/track/{}", self.id),
        }
    }

    pub fn external_url(&self) -> String {
        match self.source {
            TrackSource::Youtube => format!("https://www.youtube.com/watch?v={}", self.id),
            TrackSource::Spotify => format!("https://open.spotify.com/track/{}", self.id),
        }
    }
}

/// A traditional piece described rather than linked.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TraditionalPiece {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MusicSet {
    pub condition: Condition,
    pub youtube: Vec<Track>,
    pub spotify: Vec<Track>,
    pub traditional: Vec<TraditionalPiece>,
}

pub fn recommendations(condition: Condition) -> &'static MusicSet {
    static CATALOG: LazyLock<[MusicSet; 3]> =
        LazyLock::new(|| [anxiety(), depression(), stress()]);

    let index = match condition {
        Condition::Anxiety => 0,
        Condition::Depression => 1,
        Condition::Stress => 2,
    };
    &CATALOG[index]
}

/// Look up by name. Names that are not a known condition get the anxiety set.
pub fn recommendations_for_name(name: &str) -> &'static MusicSet {
    let condition = name.parse().unwrap_or_else(|_| {
        tracing::debug!(condition = name, "unknown condition, using anxiety music");
        Condition::Anxiety
    });
    recommendations(condition)
}

type TrackRow = (&'static str, &'static str, &'static str, &'static str);
type PieceRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

fn music_set(
    condition: Condition,
    youtube: &[TrackRow],
    spotify: &[TrackRow],
    traditional: &[PieceRow],
) -> MusicSet {
    let tracks = |rows: &[TrackRow], source: TrackSource| -> Vec<Track> {
        rows.iter()
            .map(|(id, title, artist, duration)| Track {
                id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
                duration: duration.to_string(),
                source,
            })
            .collect()
    };

    MusicSet {
        condition,
        youtube: tracks(youtube, TrackSource::Youtube),
        spotify: tracks(spotify, TrackSource::Spotify),
        traditional: traditional
            .iter()
            .map(|(title, description, duration, frequency, time)| TraditionalPiece {
                title: title.to_string(),
                description: description.to_string(),
                duration: duration.to_string(),
                frequency: frequency.to_string(),
                time: time.to_string(),
            })
            .collect(),
    }
}

fn anxiety() -> MusicSet {
    music_set(
        Condition::Anxiety,
        &[
            ("y1dbbrfekAM", "Raag Bhimpalasi - Anxiety Relief", "Pandit Hariprasad Chaurasia", "18:32"),
            ("gMaB-fG4u4g", "Indian Classical Flute Music for Anxiety", "Rakesh Chaurasia", "12:24"),
            ("cFWk0o3yGdY", "OM Chanting @ 432Hz", "Meditative Mind", "10:00"),
        ],
        &[
            ("0KUK3KcL9tAXPxSGYB7WCL", "Raag Bhairavi - Morning Meditation", "Ravi Shankar", "15:20"),
            ("4ueJXHrE1Wo7ODV2tknFU8", "Raag Bageshri", "Shivkumar Sharma", "21:45"),
            ("6rtSYKJ7xvK5Qs8CYXyPQ3", "Healing Mantras", "Deva Premal", "8:42"),
        ],
        &[
            ("Raag Darbari Kanada", "Classical night raga for deep relaxation and anxiety relief", "~30 min", "Low (396 Hz)", "Before sleep"),
            ("Raag Bageshri", "Evening raga with calming effects on nervous system", "~20 min", "Medium (528 Hz)", "Evening"),
            ("Shanti Mantras with Tanpura", "Peace chants with drone background", "~15 min", "Low (432 Hz)", "Anytime"),
        ],
    )
}

fn depression() -> MusicSet {
    music_set(
        Condition::Depression,
        &[
            ("vJPP6_3jzV0", "Raag Jog - Mood Elevation", "Pandit Jasraj", "24:10"),
            ("AjnR1hjeOGs", "Morning Ragas for Positivity", "Shubha Mudgal", "16:53"),
            ("bJLDYw3i-tE", "Healing Raga for Depression Relief", "Deobrat Mishra", "19:28"),
        ],
        &[
            ("6fO7kGXA1YNHyfj1B5zvNS", "Raag Yaman - Evening Bliss", "Zakir Hussain", "14:30"),
            ("3M8Er1VYkYP66lpn1faJcT", "Raag Jog Therapy", "Hariprasad Chaurasia", "22:18"),
            ("1SRwRLXg2ng8hnt6ME5yLx", "Gayatri Mantra for Healing", "Various Artists", "9:15"),
        ],
        &[
            ("Raag Basant", "Spring raga for upliftment and renewal", "~25 min", "Medium (528 Hz)", "Morning"),
            ("Raag Kirwani", "Mood elevating with stimulating patterns", "~20 min", "High (639 Hz)", "Evening"),
            ("Bhajan Collection", "Traditional devotional songs for spiritual connection", "~15 min each", "Various", "Morning/Evening"),
        ],
    )
}

fn stress() -> MusicSet {
    music_set(
        Condition::Stress,
        &[
            ("CRK5jJssFe8", "Raag Malkauns - Deep Relaxation", "Ustad Vilayat Khan", "26:18"),
            ("GLl2wKiufpY", "Stress Relief - Santoor Music", "Rahul Sharma", "15:42"),
            ("H3PoGq9R04U", "Traditional Flute for Calm", "G.S. Sachdev", "14:08"),
        ],
        &[
            ("2AdmUZhhvO4c8Br3xiXKTO", "Raag Bhairavi - Stress Relief", "Pandit Ronu Majumdar", "17:30"),
            ("6pGxWvSE1fY9bx5Qvy1Ton", "Raag Puriya Dhanashree", "Ustad Amjad Ali Khan", "18:56"),
            ("5oDhPA5Iezla23RnKFaXyn", "Sitar & Tabla Duet for Relaxation", "Anoushka Shankar & Zakir Hussain", "12:18"),
        ],
        &[
            ("Raag Malkauns", "Night raga for deep relaxation and unwinding", "~30 min", "Low (396 Hz)", "Night"),
            ("Raag Puriya", "Evening raga with calming effect on nervous system", "~25 min", "Medium (528 Hz)", "Evening"),
            ("OM Dhyana", "Meditative chanting with guided breathing", "~15 min", "Low (432 Hz)", "Anytime"),
        ],
    )
}
