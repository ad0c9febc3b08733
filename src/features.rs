//! Pages whose actions are not enabled in this deployment.
//!
//! The site renders these pages but every action on them shows the same
//! notice. The table is static; nothing here calls a backend.

use serde::Serialize;

/// Notice shown for every action on a disabled page.
pub const DISABLED_NOTICE: &str =
    "This feature is not enabled. Please contact your reseller to activate it.";

/// A page with stubbed-out actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureStub {
    pub page: &'static str,
    pub enabled: bool,
    pub notice: &'static str,
}

const FEATURE_STUBS: &[FeatureStub] = &[
    FeatureStub {
        page: "activities",
        enabled: false,
        notice: DISABLED_NOTICE,
    },
    FeatureStub {
        page: "datasets",
        enabled: false,
        notice: DISABLED_NOTICE,
    },
    FeatureStub {
        page: "readings",
        enabled: false,
        notice: DISABLED_NOTICE,
    },
];

/// Look up a page's stub entry.
pub fn lookup(page: &str) -> Option<FeatureStub> {
    FEATURE_STUBS.iter().find(|f| f.page == page).copied()
}
