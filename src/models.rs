//! Request and response types for the HATX API.
//!
//! These are transient DTOs: one request body or decoded response per call,
//! never mutated after construction. Optional fields carry
//! `skip_serializing_if` so absent filter values are omitted from POST
//! bodies entirely rather than sent as nulls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// System
// ============================================================================

/// Free-form status map returned by `/system/health`.
pub type SystemHealth = HashMap<String, String>;

/// Service metadata returned by `/system/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Service title
    pub title: Option<String>,
    /// Service description
    pub description: Option<String>,
    /// Service version string
    pub version: Option<String>,
}

// ============================================================================
// Bead
// ============================================================================

/// A reagent bead record associating an allele with a manufacturer kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeadRecord {
    /// Allele identifier (e.g. `A*01:01`)
    pub allele: String,
    /// Kit manufacturer
    pub manufacturer: String,
    /// Kit identifier
    pub kit: String,
}

/// Body for `POST /bead`: look up beads for a set of alleles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeadQuery {
    /// Alleles to look up; must be non-empty at call time
    pub alleles: Vec<String>,
}

impl BeadQuery {
    /// Create a query over the given alleles.
    pub fn new<I, S>(alleles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alleles: alleles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body for `POST /bead/filter`. All fields optional, none validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeadFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antigen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serotype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serotype_from_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl BeadFilter {
    /// Filter by allele identifier.
    pub fn with_allele(mut self, allele: impl Into<String>) -> Self {
        self.allele = Some(allele.into());
        self
    }

    /// Filter by antigen.
    pub fn with_antigen(mut self, antigen: impl Into<String>) -> Self {
        self.antigen = Some(antigen.into());
        self
    }

    /// Filter by serotype.
    pub fn with_serotype(mut self, serotype: impl Into<String>) -> Self {
        self.serotype = Some(serotype.into());
        self
    }

    /// Filter by manufacturer.
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Filter by reference data version.
    pub const fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}

// ============================================================================
// Serological
// ============================================================================

/// A serological classification record for an allele.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerologicalRecord {
    /// Allele identifier
    pub allele: String,
    /// ABHI serological assignment
    pub abhi: String,
    /// IMGT serological assignment
    pub imgt: String,
}

/// Body for `POST /serological`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerologicalQuery {
    /// Alleles to look up; must be non-empty at call time
    pub alleles: Vec<String>,
}

impl SerologicalQuery {
    /// Create a query over the given alleles.
    pub fn new<I, S>(alleles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alleles: alleles.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Serotype
// ============================================================================

/// A serotype classification record for an allele.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerotypeRecord {
    /// Allele identifier
    pub allele: String,
    /// Curator comment
    pub comment: String,
    /// Assigned serotype
    pub serotype: String,
    /// Antigen as originally inputted
    pub inputted_antigen: String,
    /// Broad antigen group
    pub broad: String,
    /// CIWD 3.0 classification
    pub ciwd_3_0: String,
    /// CWD 2.0 classification
    pub cwd_2_0: String,
    /// European CWD classification
    pub eurcwd: String,
    /// Bw4/Bw6 epitope group
    pub bw: String,
    /// Reference data version
    pub version: i64,
}

/// Body for `POST /serotype`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerotypeQuery {
    /// Alleles to look up; must be non-empty at call time
    pub alleles: Vec<String>,
    /// Optional reference data version; omitted from the body when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl SerotypeQuery {
    /// Create a query over the given alleles.
    pub fn new<I, S>(alleles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alleles: alleles.into_iter().map(Into::into).collect(),
            version: None,
        }
    }

    /// Pin the query to a reference data version.
    pub const fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}

/// Body for `POST /serotype/filter`. All fields optional, none validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerotypeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antigen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serotype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serotype_from_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_field: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl SerotypeFilter {
    /// Filter by allele identifier.
    pub fn with_allele(mut self, allele: impl Into<String>) -> Self {
        self.allele = Some(allele.into());
        self
    }

    /// Filter by antigen.
    pub fn with_antigen(mut self, antigen: impl Into<String>) -> Self {
        self.antigen = Some(antigen.into());
        self
    }

    /// Filter by serotype.
    pub fn with_serotype(mut self, serotype: impl Into<String>) -> Self {
        self.serotype = Some(serotype.into());
        self
    }

    /// Filter by field count.
    pub const fn with_n_field(mut self, n_field: i64) -> Self {
        self.n_field = Some(n_field);
        self
    }

    /// Filter by reference data version.
    pub const fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}
