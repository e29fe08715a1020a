/// Data layer: record types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  acesso_eletricidade_limpo.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, rename country column → AccessDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  load once per process, hand out Arc<AccessDataset>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ──▶ │ aggregate   │  per-entity mean, ascending
///   └──────────┘      └────────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
