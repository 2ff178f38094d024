use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use swarcure_core::models::therapy::Condition;
use swarcure_instruments::music::{self, TraditionalPiece, Track};

#[derive(Serialize)]
pub struct LinkedTrack {
    #[serde(flatten)]
    track: Track,
    embed_url: String,
    external_url: String,
}

#[derive(Serialize)]
pub struct MusicResponse {
    condition: Condition,
    youtube: Vec<LinkedTrack>,
    spotify: Vec<LinkedTrack>,
    traditional: Vec<TraditionalPiece>,
}

fn linked(tracks: &[Track]) -> Vec<LinkedTrack> {
    tracks
        .iter()
        .map(|t| LinkedTrack {
            track: t.clone(),
            embed_url: t.embed_url(),
            external_url: t.external_url(),
        })
        .collect()
}

pub async fn get_music(Path(condition): Path<String>) -> Json<MusicResponse> {
    let set = music::recommendations_for_name(&condition);
    Json(MusicResponse {
        condition: set.condition,
        youtube: linked(&set.youtube),
        spotify: linked(&set.spotify),
        traditional: set.traditional.clone(),
    })
}
