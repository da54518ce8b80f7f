//! Lash-styling recommendation catalog.
//!
//! Maps each eye shape to a fixed styling recommendation record. Entries are
//! embedded at compile time from `contrib/catalog/*.toml` and parsed once
//! into a process-wide read-only database.

use crate::types::{EyeShape, Recommendation};
use serde::Deserialize;
use std::sync::OnceLock;

const MONOLID_TOML: &str = include_str!("../../../contrib/catalog/monolid.toml");
const ROUND_TOML: &str = include_str!("../../../contrib/catalog/round.toml");
const DOWNTURNED_TOML: &str = include_str!("../../../contrib/catalog/downturned.toml");
const UPTURNED_TOML: &str = include_str!("../../../contrib/catalog/upturned.toml");
const ALMOND_TOML: &str = include_str!("../../../contrib/catalog/almond.toml");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Top-level catalog file structure (one per `contrib/catalog/*.toml`).
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    shape: EyeShape,
    recommendation: Recommendation,
}

/// Read-only recommendation database: one slot per shape plus the fallback
/// returned for foreign shape codes.
#[derive(Debug)]
struct Catalog {
    monolid: Recommendation,
    round: Recommendation,
    downturned: Recommendation,
    upturned: Recommendation,
    almond: Recommendation,
    fallback: Recommendation,
}

impl Catalog {
    fn slot_mut(&mut self, shape: EyeShape) -> &mut Recommendation {
        match shape {
            EyeShape::Monolid => &mut self.monolid,
            EyeShape::Round => &mut self.round,
            EyeShape::Downturned => &mut self.downturned,
            EyeShape::Upturned => &mut self.upturned,
            EyeShape::Almond => &mut self.almond,
        }
    }
}

/// Recommendation returned when no shape-specific entry applies.
fn fallback_recommendation() -> Recommendation {
    Recommendation {
        style: "Natural".into(),
        mapping: "Klassisch".into(),
        curl: "C".into(),
        length: "8–11 mm".into(),
        notes: "Keine spezifische Empfehlung gefunden".into(),
    }
}

fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        // Every slot starts at the fallback record; a bad embedded entry
        // degrades that shape to the fallback instead of failing startup.
        let fallback = fallback_recommendation();
        let mut db = Catalog {
            monolid: fallback.clone(),
            round: fallback.clone(),
            downturned: fallback.clone(),
            upturned: fallback.clone(),
            almond: fallback.clone(),
            fallback,
        };
        for src in [
            MONOLID_TOML,
            ROUND_TOML,
            DOWNTURNED_TOML,
            UPTURNED_TOML,
            ALMOND_TOML,
        ] {
            match toml::from_str::<CatalogFile>(src) {
                Ok(file) => *db.slot_mut(file.shape) = file.recommendation,
                Err(e) => tracing::error!(error = %e, "bad catalog TOML entry"),
            }
        }
        db
    })
}

/// Look up the recommendation for a classified eye shape.
/// Returns a `'static` reference into the embedded database.
pub fn lookup(shape: EyeShape) -> &'static Recommendation {
    let db = catalog();
    match shape {
        EyeShape::Monolid => &db.monolid,
        EyeShape::Round => &db.round,
        EyeShape::Downturned => &db.downturned,
        EyeShape::Upturned => &db.upturned,
        EyeShape::Almond => &db.almond,
    }
}

/// Look up by raw shape code, for callers that carry shapes as plain strings.
/// Unknown codes fall back to the generic recommendation.
pub fn lookup_code(code: &str) -> &'static Recommendation {
    match EyeShape::from_code(code) {
        Some(shape) => lookup(shape),
        None => {
            tracing::warn!(code, "unknown eye-shape code, using fallback recommendation");
            &catalog().fallback
        }
    }
}
