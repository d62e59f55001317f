//! Snapshot derivation
//!
//! One ingestion cycle's complete result. Derivation is pure over the
//! fetched CSV payloads; everything is rebuilt from scratch each cycle
//! and prior state is discarded when the slot is swapped.

use chrono::{DateTime, Utc};

use placar_common::activity::{tally, ActivityCount};
use placar_common::feed::media_urls;
use placar_common::roles::{infer_roles, RoleMap};
use placar_common::sheet::{build_records, tokenize};
use placar_common::standings::{rank, Standing};
use placar_common::{Error, Result};

/// Immutable result of one ingestion cycle
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Ranked teams (empty when degraded)
    pub standings: Vec<Standing>,
    /// Inferred header roles of the ranking sheet
    pub roles: RoleMap,
    /// True when a required role (team key or points) was unresolved
    pub degraded: bool,
    /// Flat media URL list from the feed sheet
    pub feed: Vec<String>,
    /// Frequency counts from the activity sheet
    pub activity: Vec<ActivityCount>,
    /// When the cycle fetched its payloads
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Derive a snapshot from the fetched payloads.
    ///
    /// The ranking payload is required and must yield at least one
    /// record; absent feed/activity payloads degrade to empty results.
    pub fn derive(
        ranking_csv: &str,
        feed_csv: Option<&str>,
        activity_csv: Option<&str>,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self> {
        let grid = tokenize(ranking_csv);
        let (records, headers) = build_records(&grid);
        if records.is_empty() {
            return Err(Error::EmptyDataset(
                "ranking sheet yielded no records".to_string(),
            ));
        }

        let roles = infer_roles(&headers);
        let degraded = roles.group_key.is_none() || roles.points.is_none();
        let standings = rank(&records, &roles);

        let feed = feed_csv
            .map(|text| {
                let (records, _) = build_records(&tokenize(text));
                media_urls(&records)
            })
            .unwrap_or_default();

        let activity = activity_csv
            .map(|text| {
                let (records, headers) = build_records(&tokenize(text));
                tally(&records, &headers)
            })
            .unwrap_or_default();

        Ok(Self {
            standings,
            roles,
            degraded,
            feed,
            activity,
            fetched_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANKING_CSV: &str = "\
Dupla,Atleta,Foto,Pontos\r\n\
1,ana souza,https://img.example/ana.jpg,\"10,5\"\r\n\
1,bruno lima,https://img.example/bruno.jpg,8\r\n\
2,carla dias,,19\r\n\
2,,,0\r\n\
\r\n";

    #[test]
    fn full_pipeline_from_raw_text() {
        let snapshot = Snapshot::derive(RANKING_CSV, None, None, Utc::now()).unwrap();
        assert!(!snapshot.degraded);
        assert_eq!(snapshot.standings.len(), 2);

        let first = &snapshot.standings[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.team.key, "2");
        assert_eq!(first.team.name, "Carla Dias");
        assert_eq!(first.team.total, 19.0);

        let second = &snapshot.standings[1];
        assert_eq!(second.rank, 2);
        assert_eq!(second.team.name, "Ana Souza & Bruno Lima");
        assert_eq!(second.team.total, 18.5);
    }

    #[test]
    fn empty_ranking_sheet_is_fatal() {
        assert!(Snapshot::derive("Dupla,Pontos\n", None, None, Utc::now()).is_err());
        assert!(Snapshot::derive("", None, None, Utc::now()).is_err());
    }

    #[test]
    fn unresolved_roles_degrade_instead_of_failing() {
        let snapshot = Snapshot::derive("coluna_a,coluna_b\nx,y", None, None, Utc::now()).unwrap();
        assert!(snapshot.degraded);
        assert!(snapshot.standings.is_empty());
        assert!(snapshot.roles.title.is_some()); // first-header fallback
    }

    #[test]
    fn feed_and_activity_are_optional() {
        let feed_csv = "url\nhttps://media.example/a.jpg\n-\n";
        let activity_csv = "atividade\ncorrida\ncorrida\nyoga\n";

        let snapshot =
            Snapshot::derive(RANKING_CSV, Some(feed_csv), Some(activity_csv), Utc::now()).unwrap();
        assert_eq!(snapshot.feed, vec!["https://media.example/a.jpg"]);
        assert_eq!(snapshot.activity.len(), 2);
        assert_eq!(snapshot.activity[0].label, "corrida");
        assert_eq!(snapshot.activity[0].count, 2);

        let bare = Snapshot::derive(RANKING_CSV, None, None, Utc::now()).unwrap();
        assert!(bare.feed.is_empty());
        assert!(bare.activity.is_empty());
    }
}
