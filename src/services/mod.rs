// HTTP clients for the external collaborators

pub mod archive;
pub mod artist_api;
pub mod roster;
pub mod schedule;

use crate::models::ProfileRecord;

/// Which collaborator supplies profile records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataSource {
    /// Static roster document fetched by relative path (canonical)
    Roster,
    /// Remote artist API with tag filtering (legacy adapter)
    ArtistApi,
}

/// The roster document is the canonical source; the artist API is kept as
/// a legacy adapter for deployments still serving profiles from the CMS.
pub const DATA_SOURCE: DataSource = DataSource::Roster;

/// Resolve the profile for an identifier through the configured source.
/// `Ok(None)` is a clean miss, rendered as the not-found state.
pub async fn load_profile(dj_id: &str) -> Result<Option<ProfileRecord>, String> {
    match DATA_SOURCE {
        DataSource::Roster => roster::load_dj(dj_id).await,
        DataSource::ArtistApi => artist_api::fetch_artist(dj_id).await,
    }
}
