/// Data layer: core types, loading, grouping, and filtering.
///
/// Architecture:
/// ```text
///   stations.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse rows → Vec<Station> (bad rows skipped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ StationRegistry  │  networks in first-seen order, icons
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter  │ ◄─── │ timeline │  date ⇄ slider
///   └──────────┘      └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod registry;
pub mod timeline;
