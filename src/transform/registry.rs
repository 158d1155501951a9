//! The curated override registry.
//!
//! Pure data: one entry per recognized environment-variable suffix, built
//! once at first use. Suffixes absent from this table are not errors; the
//! engine skips them for forward compatibility.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::database::DbField;

/// How a registered override mutates the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Coerce to the type of the existing value at the path.
    DirectScalar,
    /// Parse `host:port,host:port` into an address sequence.
    AddressList,
    /// Split on commas into a sequence of strings.
    CommaList,
    /// Rewrite one field of the database connection string.
    DatabaseField(DbField),
}

/// A single curated override: target path plus transform kind.
#[derive(Debug, Clone)]
pub struct OverrideEntry {
    pub path: Vec<&'static str>,
    pub kind: TransformKind,
}

/// The core services and their canonical capitalization.
const CORE_SERVICES: &[(&str, &str)] = &[
    ("ADMIN_WEB_SERVER", "AdminWebServer"),
    ("CHECKER", "Checker"),
    ("CONTEST_WEB_SERVER", "ContestWebServer"),
    ("EVALUATION_SERVICE", "EvaluationService"),
    ("LOG_SERVICE", "LogService"),
    ("PRINTING_SERVICE", "PrintingService"),
    ("PROXY_SERVICE", "ProxyService"),
    ("RESOURCE_SERVICE", "ResourceService"),
    ("SCORING_SERVICE", "ScoringService"),
    ("WORKER", "Worker"),
];

/// Scalar keys overridable at the document root.
const ROOT_SCALARS: &[(&str, &str)] = &[
    ("CACHE_DIR", "cache_dir"),
    ("DATA_DIR", "data_dir"),
    ("KEEP_SANDBOX", "keep_sandbox"),
    ("LOG_DIR", "log_dir"),
    ("MAX_INPUT_LENGTH", "max_input_length"),
    ("MAX_SUBMISSION_LENGTH", "max_submission_length"),
    ("SECRET_KEY", "secret_key"),
    ("TEMP_DIR", "temp_dir"),
    ("TORNADO_DEBUG", "tornado_debug"),
];

const DATABASE_FIELDS: &[(&str, DbField)] = &[
    ("DATABASE_HOST", DbField::Host),
    ("DATABASE_NAME", DbField::Name),
    ("DATABASE_PASSWORD", DbField::Password),
    ("DATABASE_PORT", DbField::Port),
    ("DATABASE_USER", DbField::User),
];

static REGISTRY: Lazy<HashMap<&'static str, OverrideEntry>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for (suffix, service) in CORE_SERVICES {
        table.insert(
            *suffix,
            OverrideEntry {
                path: vec!["core_services", *service],
                kind: TransformKind::AddressList,
            },
        );
    }

    table.insert(
        "DATABASE",
        OverrideEntry {
            path: vec!["database"],
            kind: TransformKind::DirectScalar,
        },
    );
    for (suffix, field) in DATABASE_FIELDS {
        table.insert(
            *suffix,
            OverrideEntry {
                path: vec!["database"],
                kind: TransformKind::DatabaseField(*field),
            },
        );
    }

    for (suffix, key) in ROOT_SCALARS {
        table.insert(
            *suffix,
            OverrideEntry {
                path: vec![*key],
                kind: TransformKind::DirectScalar,
            },
        );
    }

    table.insert(
        "ALLOWED_LOCALIZATIONS",
        OverrideEntry {
            path: vec!["allowed_localizations"],
            kind: TransformKind::CommaList,
        },
    );

    table
});

/// Look up the entry for an environment-variable suffix.
#[must_use]
pub fn lookup(suffix: &str) -> Option<&'static OverrideEntry> {
    REGISTRY.get(suffix)
}
