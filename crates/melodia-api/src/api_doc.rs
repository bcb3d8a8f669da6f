//! OpenAPI document aggregation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::handlers::history::ReportStateRequest;
use crate::handlers::tracks::CreateTrackRequest;
use melodia_core::models::{
    HistoryEntryResponse, MediaKind, MediaUploadResponse, PlayerStateResponse, PlaylistResponse,
    PlaylistTrack, StreamUrlResponse, TrackResponse, UpdateProfile, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::media::upload_media,
        handlers::media::get_stream_url,
        handlers::tracks::create_track,
        handlers::tracks::search_tracks,
        handlers::tracks::get_track,
        handlers::playlists::my_playlists,
        handlers::playlists::featured_playlists,
        handlers::playlists::get_playlist,
        handlers::history::report_state,
        handlers::history::get_last_state,
        handlers::history::get_history,
        handlers::profile::get_profile,
        handlers::profile::update_profile,
    ),
    components(schemas(
        ErrorResponse,
        MediaKind,
        MediaUploadResponse,
        StreamUrlResponse,
        CreateTrackRequest,
        TrackResponse,
        PlaylistResponse,
        PlaylistTrack,
        ReportStateRequest,
        PlayerStateResponse,
        HistoryEntryResponse,
        UpdateProfile,
        UserResponse,
    )),
    tags(
        (name = "media", description = "Media upload and presigned stream URLs"),
        (name = "catalog", description = "Track metadata and search"),
        (name = "library", description = "Playlists"),
        (name = "history", description = "Player state and playback history"),
        (name = "profile", description = "User profile")
    )
)]
pub struct ApiDoc;
